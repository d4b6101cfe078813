//! Connection settings for the people backends.
//!
//! The embedded backend only needs a database file path, which defaults
//! to `workers.db` in the user's home directory ([`default_db_path`]).
//!
//! The client-server backend reads [`PgSettings`] from three layers, later
//! layers overriding earlier ones:
//!
//! 1. built-in defaults (`localhost:5432`, database `people`, user `postgres`)
//! 2. an optional YAML file
//! 3. `PEOPLE_PG_*` environment variables
//!
//! # Quick start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use people_config::PgSettings;
//!
//! let settings = PgSettings::resolve(Some(Path::new("people.yml"))).unwrap();
//! println!("connecting to {}:{}", settings.host, settings.port);
//! ```

mod error;
mod paths;
mod pg;

pub use error::{ConfigError, Result};
pub use paths::{DEFAULT_DB_FILE, default_db_path};
pub use pg::{ENV_DBNAME, ENV_HOST, ENV_PASSWORD, ENV_PORT, ENV_USER, PgSettings};
