use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Run the CLI binary with an isolated config directory.
///
/// `api` is passed through `RENTDESK_API`; `None` leaves it unset so the
/// config file or the default is used.
pub async fn run_cli(args: &[&str], home: &Path, api: Option<&str>) -> Output {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let home: PathBuf = home.to_path_buf();
    let api = api.map(str::to_string);

    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rentdesk"));
        cmd.args(&args);
        cmd.env("HOME", &home);
        cmd.env("XDG_CONFIG_HOME", home.join("config"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        match api {
            Some(api) => cmd.env("RENTDESK_API", api),
            None => cmd.env_remove("RENTDESK_API"),
        };
        cmd.output().expect("Failed to execute CLI")
    })
    .await
    .expect("CLI task panicked")
}

/// Run the CLI and expect success, returning stdout.
pub async fn run_cli_success(args: &[&str], home: &Path, api: Option<&str>) -> String {
    let output = run_cli(args, home, api).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub async fn run_cli_failure(args: &[&str], home: &Path, api: Option<&str>) -> String {
    let output = run_cli(args, home, api).await;
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
