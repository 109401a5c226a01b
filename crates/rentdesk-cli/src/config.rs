//! Saved configuration and API URL resolution.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use rentdesk_core::ApiUrl;

/// Stored configuration file contents.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

/// Where the API URL in use came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiSource {
    /// `--api` or `RENTDESK_API`.
    Argument,
    ConfigFile,
    Default,
}

impl ApiSource {
    pub fn describe(self) -> &'static str {
        match self {
            ApiSource::Argument => "--api / RENTDESK_API",
            ApiSource::ConfigFile => "config file",
            ApiSource::Default => "built-in default",
        }
    }
}

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "rentdesk").context("Could not determine config directory")?;

    Ok(dirs.config_dir().join("config.json"))
}

/// Load the stored configuration, or an empty one if none was saved.
pub fn load_config() -> Result<StoredConfig> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(StoredConfig::default());
    }

    let json = fs::read_to_string(&path).context("Failed to read config file")?;
    serde_json::from_str(&json).context("Invalid config file")
}

/// Save the API URL to the config file.
pub fn save_api_url(api: &ApiUrl) -> Result<PathBuf> {
    let path = config_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config directory")?;
    }

    let stored = StoredConfig {
        api_url: Some(api.to_string()),
    };
    let json = serde_json::to_string_pretty(&stored)?;
    fs::write(&path, json).context("Failed to write config file")?;

    Ok(path)
}

/// Remove the config file, if any.
pub fn clear_config() -> Result<bool> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path).context("Failed to remove config file")?;
    Ok(true)
}

/// Resolve the API URL: argument, then config file, then the default.
pub fn resolve_api(argument: Option<&str>) -> Result<(ApiUrl, ApiSource)> {
    if let Some(url) = argument {
        let api = ApiUrl::new(url).context("Invalid --api URL")?;
        return Ok((api, ApiSource::Argument));
    }

    if let Some(url) = load_config()?.api_url {
        let api = ApiUrl::new(&url).context("Invalid API URL in config file")?;
        return Ok((api, ApiSource::ConfigFile));
    }

    Ok((ApiUrl::default(), ApiSource::Default))
}
