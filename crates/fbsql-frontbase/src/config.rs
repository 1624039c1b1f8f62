//! Connection configuration.
//!
//! A [`FrontbaseConfig`] carries what a driver needs to open a session:
//!
//! ```rust
//! use fbsql_frontbase::{FrontbaseConfig, Storage};
//!
//! let config = FrontbaseConfig::from_json(
//!     r#"{
//!         "database": "inventory",
//!         "host": "db.local",
//!         "username": "_system",
//!         "password": "",
//!         "time_zone": "+02:00"
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.storage().unwrap(), Storage::Host("db.local"));
//! assert_eq!(config.value_format().unwrap().time_zone().local_minus_utc(), 7200);
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::FixedOffset;
use fbsql_core::ValueFormat;
use serde::{Deserialize, Serialize};

use crate::session::SessionMode;

/// Errors raised while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Neither a host nor a path was given.
    #[error("Configuration for database '{0}' names neither a host nor a path")]
    MissingStorage(String),

    /// The time zone is not a UTC offset.
    #[error("Invalid time zone offset '{0}', expected e.g. '+02:00'")]
    InvalidTimeZone(String),

    /// The configuration is not valid JSON or misses a field.
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the database lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage<'a> {
    /// A database served by a host.
    Host(&'a str),
    /// A database file opened directly.
    Path(&'a Path),
}

/// Connection settings for a Frontbase database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontbaseConfig {
    /// Database name.
    pub database: String,
    /// Host serving the database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Path of the database file, used when no host is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// User name.
    pub username: String,
    /// User password.
    #[serde(default)]
    pub password: String,
    /// Password protecting the database itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_password: Option<String>,
    /// Session name reported to the server. Defaults to the program name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_name: Option<String>,
    /// Transaction mode applied when a session opens.
    #[serde(default)]
    pub session_mode: SessionMode,
    /// UTC offset used to render and parse timestamps, e.g. `+02:00`.
    /// Defaults to UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl FrontbaseConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input,
    /// [`ConfigError::MissingStorage`] when neither `host` nor `path` is
    /// set and [`ConfigError::InvalidTimeZone`] for a bad offset.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.storage()?;
        config.value_format()?;
        tracing::debug!(
            database = %config.database,
            session_mode = %config.session_mode,
            "Loaded Frontbase configuration"
        );
        Ok(config)
    }

    /// Returns where the database lives. A host wins over a path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingStorage`] when neither is set.
    pub fn storage(&self) -> Result<Storage<'_>, ConfigError> {
        match (&self.host, &self.path) {
            (Some(host), _) => Ok(Storage::Host(host)),
            (None, Some(path)) => Ok(Storage::Path(path)),
            (None, None) => Err(ConfigError::MissingStorage(self.database.clone())),
        }
    }

    /// Returns the timestamp format for this connection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeZone`] if the offset cannot be
    /// parsed.
    pub fn value_format(&self) -> Result<ValueFormat, ConfigError> {
        let Some(zone) = self.time_zone.as_deref() else {
            return Ok(ValueFormat::utc());
        };
        let offset = match zone {
            "UTC" | "Z" => FixedOffset::east_opt(0),
            _ => FixedOffset::from_str(zone).ok(),
        };
        offset
            .map(ValueFormat::with_time_zone)
            .ok_or_else(|| ConfigError::InvalidTimeZone(zone.to_string()))
    }

    /// Returns the statement issued right after a session opens.
    #[must_use]
    pub fn session_sql(&self) -> String {
        self.session_mode.to_sql()
    }

    /// Returns the session name, falling back to the program name.
    #[must_use]
    pub fn session_name(&self) -> String {
        self.session_name.clone().unwrap_or_else(|| {
            std::env::args()
                .next()
                .as_deref()
                .map(Path::new)
                .and_then(Path::file_name)
                .map_or_else(
                    || String::from("fbsql"),
                    |name| name.to_string_lossy().into_owned(),
                )
        })
    }

    /// Returns the user name as sent at login. Frontbase user names are
    /// upper case.
    #[must_use]
    pub fn login_name(&self) -> String {
        self.username.to_uppercase()
    }
}
