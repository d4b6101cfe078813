//! Postgres storage backend for people records.
//!
//! Same two tables and the same operations as the SQLite backend, over a
//! blocking [`postgres`] client. Connection parameters come from
//! [`PgSettings`](people_config::PgSettings).
//!
//! ```no_run
//! use people_config::PgSettings;
//! use people_core::PeopleStore;
//! use people_postgres::PostgresStore;
//!
//! let store = PostgresStore::from_settings(&PgSettings::resolve(None).unwrap());
//! store.create_schema().unwrap();
//! println!("{} people", store.select_all().unwrap().len());
//! ```

mod error;
mod query;
mod schema;
mod store;

pub use error::{PostgresError, Result};
pub use schema::SCHEMA_SQL;
pub use store::{PostgresStore, StoreStatus};
