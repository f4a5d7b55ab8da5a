//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use persisted_tictactoe::{CURSOR_KEY, HISTORY_KEY, StoreKeys};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "persisted_games.toml";

/// Environment variable naming an alternative configuration file.
pub const CONFIG_ENV: &str = "PERSISTED_GAMES_CONFIG";

/// Configuration for the store and logging.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the JSON store file.
    store_path: PathBuf,

    /// Key holding the tic-tac-toe history.
    history_key: String,

    /// Key holding the tic-tac-toe cursor.
    cursor_key: String,

    /// Key holding the greeting user.
    user_key: String,

    /// Log filter used when `RUST_LOG` is not set.
    log_filter: String,
}

#[instrument]
fn default_store_path() -> PathBuf {
    PathBuf::from("persisted_games.json")
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            history_key: HISTORY_KEY.to_string(),
            cursor_key: CURSOR_KEY.to_string(),
            user_key: crate::greeting::USER_KEY.to_string(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(store = %config.store_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration to use.
    ///
    /// An explicit path (flag or environment variable) must exist. Without
    /// one, [`DEFAULT_CONFIG_FILE`] is read if present, else defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an explicit file is missing or invalid.
    #[instrument]
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Store keys for the tic-tac-toe controller.
    pub fn store_keys(&self) -> StoreKeys {
        StoreKeys::new(self.history_key.clone(), self.cursor_key.clone())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
