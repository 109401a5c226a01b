//! Config commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use rentdesk_core::ApiUrl;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show the API URL in use and where it comes from
    Show,

    /// Save the API URL used when --api is not given
    SetApi {
        /// Base URL, e.g. http://127.0.0.1:8082/
        url: String,
    },

    /// Forget the saved configuration
    Reset,
}

pub fn handle(cmd: ConfigCommand, argument: Option<&str>) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show => {
            let (api, source) = config::resolve_api(argument)?;
            output::field("API", api.as_str());
            output::field("Source", source.describe());
            output::field("Config file", &config::config_path()?.display().to_string());
            Ok(())
        }
        ConfigSubcommand::SetApi { url } => {
            let api = ApiUrl::new(&url).context("Invalid API URL")?;
            let path = config::save_api_url(&api)?;
            output::success(&format!("API URL saved to {}", path.display()));
            output::field("API", api.as_str());
            Ok(())
        }
        ConfigSubcommand::Reset => {
            if config::clear_config()? {
                output::success("Configuration removed");
            } else {
                output::note("No saved configuration.");
            }
            Ok(())
        }
    }
}
