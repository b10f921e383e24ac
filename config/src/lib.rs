//! `~/.tally/config.toml` loading.
//!
//! ```toml
//! [calculator]
//! show_registers = true
//!
//! [contacts]
//! db_path = "~/.tally/contacts.db"
//! seed_sample_data = false
//!
//! [log]
//! filter = "info,tally_contacts=debug"
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that overrides the contacts database location.
pub const CONTACTS_DB_ENV: &str = "TALLY_CONTACTS_DB";

const APP_DIR: &str = ".tally";
const CONFIG_FILE: &str = "config.toml";
const CONTACTS_DB_FILE: &str = "contacts.db";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub contacts: ContactsConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Print the Y and operator registers under the display.
    #[serde(default)]
    pub show_registers: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsConfig {
    /// Database file; a leading `~/` is expanded to the home directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<String>,
    /// Insert the demo records when the database is empty.
    #[serde(default)]
    pub seed_sample_data: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directives used when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl TallyConfig {
    /// Load the user config. A missing file (or no home directory) is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {}: {}", path.display(), err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Where the contacts database lives.
    ///
    /// `flag` wins, then `TALLY_CONTACTS_DB`, then `[contacts] db_path`, then
    /// `~/.tally/contacts.db`. Without a home directory the default is
    /// `./.tally/contacts.db`.
    #[must_use]
    pub fn contacts_db_path(&self, flag: Option<&Path>) -> PathBuf {
        resolve_contacts_db(
            flag,
            std::env::var_os(CONTACTS_DB_ENV),
            self.contacts.db_path.as_deref(),
            dirs::home_dir().as_deref(),
        )
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_DIR).join(CONFIG_FILE))
}

fn resolve_contacts_db(
    flag: Option<&Path>,
    env: Option<OsString>,
    configured: Option<&str>,
    home: Option<&Path>,
) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Some(value) = env.filter(|v| !v.is_empty()) {
        return PathBuf::from(value);
    }
    if let Some(configured) = configured.map(str::trim).filter(|s| !s.is_empty()) {
        return expand_home(configured, home);
    }
    match home {
        Some(home) => home.join(APP_DIR).join(CONTACTS_DB_FILE),
        None => PathBuf::from(".").join(APP_DIR).join(CONTACTS_DB_FILE),
    }
}

/// Expand a leading `~` or `~/` against `home`. Other paths pass through.
fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };
    if raw == "~" {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}
