//! Core types shared by every people storage backend.
//!
//! This crate defines the pieces that do not care which database sits
//! underneath:
//!
//! - [`Person`]: a person row as read back from storage, with the zodiac
//!   label already resolved.
//! - [`NewPerson`]: the input of an `add` operation.
//! - [`AddOutcome`]: identities assigned by an `add` operation.
//! - [`PeopleStore`]: the trait implemented by the SQLite and Postgres
//!   backends.
//! - [`render_people`]: the fixed-width text table printed by the CLI.
//!
//! # Example
//!
//! ```
//! use people_core::{Person, render_people, EMPTY_LIST_MESSAGE};
//!
//! assert_eq!(render_people(&[]), format!("{EMPTY_LIST_MESSAGE}\n"));
//!
//! let people = vec![Person::new("Ivanov", "Ivan", "Aries", "2000-01-01")];
//! let table = render_people(&people);
//! assert!(table.contains("Ivanov"));
//! ```

mod store;
mod table;
mod types;

pub use store::PeopleStore;
pub use table::{COLUMN_WIDTHS, EMPTY_LIST_MESSAGE, render_people};
pub use types::{AddOutcome, NewPerson, Person};
