use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::domain::{DEFAULT_BEAM_SIZE, DEFAULT_LANGUAGE, DecodeOptions, MAX_BEAM_SIZE};

pub const ENV_PREFIX: &str = "WHISPER";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MODEL: &str = "base.en";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Service settings, read once at startup from `WHISPER_*` variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub model: String,
    pub model_path: Option<PathBuf>,
    pub language: String,
    pub beam_size: u32,
    pub use_gpu: bool,
    pub scratch_dir: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            model: DEFAULT_MODEL.to_string(),
            model_path: None,
            language: DEFAULT_LANGUAGE.to_string(),
            beam_size: DEFAULT_BEAM_SIZE,
            use_gpu: false,
            scratch_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Builds settings from an explicit environment source, which tests
    /// can back with a map instead of the process environment.
    pub fn from_environment(source: Environment) -> Result<Self, SettingsError> {
        let settings: Settings = Config::builder()
            .add_source(source.prefix_separator("_").try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.model.trim().is_empty() {
            return Err(SettingsError::Invalid("model must not be empty".to_string()));
        }
        if !(1..=MAX_BEAM_SIZE).contains(&self.beam_size) {
            return Err(SettingsError::Invalid(format!(
                "beam_size must be between 1 and {}, got {}",
                MAX_BEAM_SIZE, self.beam_size
            )));
        }
        if self.max_upload_bytes == 0 {
            return Err(SettingsError::Invalid(
                "max_upload_bytes must be positive".to_string(),
            ));
        }
        self.host
            .parse::<IpAddr>()
            .map_err(|e| SettingsError::Invalid(format!("host {:?}: {}", self.host, e)))?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|e| SettingsError::Invalid(format!("host {:?}: {}", self.host, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.scratch_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::default()
            .with_language(self.language.clone())
            .with_beam_size(self.beam_size)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
