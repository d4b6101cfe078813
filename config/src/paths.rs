use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// File name of the default database, placed in the home directory.
pub const DEFAULT_DB_FILE: &str = "workers.db";

/// Returns `~/workers.db`.
///
/// # Errors
///
/// Returns [`ConfigError::HomeDirNotFound`] if the platform reports no home
/// directory.
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
    Ok(home.join(DEFAULT_DB_FILE))
}
