//! Application configuration and environment variable handling.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_SCORERS_CSV: &str = "data/lfc_scorers_tl_pos_age.csv";
pub const DEFAULT_DROPDOWN_CSV: &str = "data/lfcgm_app_dropdown.csv";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Application configuration resolved at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the scorer table CSV
    pub scorers_csv: PathBuf,
    /// Path to the dropdown catalog CSV
    pub dropdown_csv: PathBuf,
    /// Server bind host
    pub host: String,
    /// Server bind port
    pub port: u16,
}

/// Optional TOML settings file; environment variables take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
struct FileSettings {
    #[serde(default)]
    data: DataSettings,
    #[serde(default)]
    server: ServerSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DataSettings {
    scorers_csv: Option<String>,
    dropdown_csv: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ServerSettings {
    host: Option<String>,
    port: Option<u16>,
}

impl AppConfig {
    /// Create the application configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `LFCGM_CONFIG` (optional): path to a TOML file supplying defaults
    ///   for any of the settings below
    /// - `LFCGM_SCORERS_CSV` (optional, default `data/lfc_scorers_tl_pos_age.csv`)
    /// - `LFCGM_DROPDOWN_CSV` (optional, default `data/lfcgm_app_dropdown.csv`)
    /// - `HOST` (optional, default `0.0.0.0`)
    /// - `PORT` (optional, default `5000`)
    ///
    /// # Errors
    /// Returns an error if the TOML file is named but unreadable or invalid,
    /// or if `PORT` does not parse as a port number.
    pub fn from_env() -> Result<Self, String> {
        let file = match env::var("LFCGM_CONFIG") {
            Ok(path) => {
                let text = fs::read_to_string(&path)
                    .map_err(|e| format!("failed to read config file {}: {}", path, e))?;
                parse_file_settings(&text)
                    .map_err(|e| format!("invalid config file {}: {}", path, e))?
            }
            Err(_) => FileSettings::default(),
        };

        let scorers_csv = env::var("LFCGM_SCORERS_CSV")
            .ok()
            .or(file.data.scorers_csv)
            .unwrap_or_else(|| DEFAULT_SCORERS_CSV.to_string());
        let dropdown_csv = env::var("LFCGM_DROPDOWN_CSV")
            .ok()
            .or(file.data.dropdown_csv)
            .unwrap_or_else(|| DEFAULT_DROPDOWN_CSV.to_string());
        let host = env::var("HOST")
            .ok()
            .or(file.server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| "PORT must be a valid port number".to_string())?,
            Err(_) => file.server.port.unwrap_or(DEFAULT_PORT),
        };

        Ok(Self {
            scorers_csv: PathBuf::from(scorers_csv),
            dropdown_csv: PathBuf::from(dropdown_csv),
            host,
            port,
        })
    }
}

fn parse_file_settings(text: &str) -> Result<FileSettings, String> {
    toml::from_str(text).map_err(|e| e.to_string())
}
