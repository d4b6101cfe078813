//! SQLite storage backend for people records.
//!
//! Stores people in a single database file with two tables, `zodiacs`
//! and `people`, and implements [`PeopleStore`](people_core::PeopleStore)
//! on top of them.
//!
//! # Architecture
//!
//! - **`schema`**: `CREATE TABLE` statements and the idempotent initializer
//! - **`query`**: row-level operations on an open connection
//! - **`store`**: [`SqliteStore`], which opens a fresh connection per call
//!
//! # Quick start
//!
//! ```no_run
//! use people_core::{NewPerson, PeopleStore, render_people};
//! use people_sqlite::SqliteStore;
//!
//! let store = SqliteStore::new("workers.db");
//! store.create_schema().unwrap();
//! store
//!     .add_person(&NewPerson::new("Ivanov", "Ivan", "Aries", "2000-01-01"))
//!     .unwrap();
//!
//! print!("{}", render_people(&store.select_by_surname("Ivanov").unwrap()));
//! ```

mod error;
mod query;
mod schema;
mod store;

pub use error::{Result, SqliteError};
pub use schema::{SCHEMA_SQL, create_schema};
pub use store::{SqliteStore, StoreStatus};
