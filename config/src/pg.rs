//! Postgres connection settings.
//!
//! # Example YAML
//!
//! ```yaml
//! host: db.internal
//! port: 5433
//! dbname: people
//! user: people_rw
//! password: secret
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::fmt;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub const ENV_HOST: &str = "PEOPLE_PG_HOST";
pub const ENV_PORT: &str = "PEOPLE_PG_PORT";
pub const ENV_DBNAME: &str = "PEOPLE_PG_DBNAME";
pub const ENV_USER: &str = "PEOPLE_PG_USER";
pub const ENV_PASSWORD: &str = "PEOPLE_PG_PASSWORD";

/// Connection parameters for the Postgres backend.
///
/// `Debug` output never includes the password.
///
/// # Examples
///
/// ```
/// use people_config::PgSettings;
///
/// let settings = PgSettings::default();
/// assert_eq!(settings.host, "localhost");
/// assert_eq!(settings.port, 5432);
/// assert!(settings.password.is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PgSettings {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: Option<String>,
}

impl Default for PgSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            dbname: "people".to_string(),
            user: "postgres".to_string(),
            password: None,
        }
    }
}

impl fmt::Debug for PgSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl PgSettings {
    /// Loads settings from a YAML file on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](ConfigError::IoError) if the file cannot be
    /// read, or [`YamlError`](ConfigError::YamlError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let settings = serde_yaml::from_reader(reader)?;
        Ok(settings)
    }

    /// Resolves defaults, then the optional file, then the process environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        settings.apply_env_with(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Overrides fields from `PEOPLE_PG_*` variables returned by `lookup`.
    ///
    /// Unset variables leave the current value alone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the port is not a valid
    /// `u16`.
    ///
    /// # Examples
    ///
    /// ```
    /// use people_config::PgSettings;
    ///
    /// let mut settings = PgSettings::default();
    /// settings
    ///     .apply_env_with(|key| (key == "PEOPLE_PG_HOST").then(|| "db.internal".to_string()))
    ///     .unwrap();
    /// assert_eq!(settings.host, "db.internal");
    /// assert_eq!(settings.port, 5432);
    /// ```
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_PORT.to_string(),
                value: port.clone(),
            })?;
        }
        if let Some(dbname) = lookup(ENV_DBNAME) {
            self.dbname = dbname;
        }
        if let Some(user) = lookup(ENV_USER) {
            self.user = user;
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.password = Some(password);
        }
        Ok(())
    }
}
