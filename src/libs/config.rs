//! Configuration management for the taskboard application.
//!
//! Settings are stored as JSON in the platform application-data directory
//! (see [`DataStorage`]). A missing file is not an error: every setting has
//! a default, so the server runs out of the box and `taskboard init` only
//! exists to persist different values through a short interactive wizard.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port the server binds to.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Application configuration root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings; defaults apply when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads configuration from the filesystem, falling back to defaults
    /// when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Prompts for the listener host and port, pre-filling the current
    /// values (or defaults) so pressing Enter keeps them.
    pub fn init() -> Result<Config> {
        let mut config = Config::read().unwrap_or_default();
        let current = config.server.clone().unwrap_or_default();

        let host: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Listen host")
            .default(current.host)
            .interact_text()?;
        let port: u16 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Listen port")
            .default(current.port)
            .interact_text()?;

        config.server = Some(ServerConfig { host, port });
        Ok(config)
    }
}
