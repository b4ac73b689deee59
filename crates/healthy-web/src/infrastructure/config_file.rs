//! TOML persistence for [`ClientConfig`].
//!
//! The command-line client reads its settings from a TOML file given with
//! `--config`.  A missing file is not an error: the defaults target a
//! development server on `127.0.0.1:5000`.
//!
//! ```toml
//! base_url = "https://healthy.example"
//! request_timeout_secs = 15
//! ```

use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::domain::ClientConfig;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// `base_url` is not an absolute http(s) URL.
    #[error("invalid base_url {0:?}: expected an absolute http or https URL")]
    InvalidBaseUrl(String),
}

/// Loads the config at `path`, returning `ClientConfig::default()` if the file
/// does not exist.
///
/// # Errors
///
/// [`ConfigError::Io`] for file-system errors other than "not found",
/// [`ConfigError::Parse`] for malformed TOML, and
/// [`ConfigError::InvalidBaseUrl`] if the loaded `base_url` is unusable.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let config = match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => ClientConfig::default(),
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    validate(&config)?;
    Ok(config)
}

/// Writes `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &ClientConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks that `base_url` is an absolute http or https URL.
///
/// # Errors
///
/// [`ConfigError::InvalidBaseUrl`] otherwise.
pub fn validate(config: &ClientConfig) -> Result<(), ConfigError> {
    match Url::parse(&config.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ConfigError::InvalidBaseUrl(config.base_url.clone())),
    }
}
