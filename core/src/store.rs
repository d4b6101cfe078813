//! Backend trait for people storage.

use crate::types::{AddOutcome, NewPerson, Person};

/// Storage operations shared by the embedded and client-server backends.
///
/// Implementations open a fresh connection for every call and release it
/// before returning, on success and on error alike. Writes are committed
/// before the call returns. No connection is shared between calls.
pub trait PeopleStore {
    /// Backend error type. Storage failures are propagated unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates the `zodiacs` and `people` tables if they are missing.
    ///
    /// Calling this on an initialized database is a no-op.
    fn create_schema(&self) -> Result<(), Self::Error>;

    /// Adds a person, creating the zodiac row on first use of its label.
    ///
    /// The zodiac is looked up by exact label. When no row matches, a new
    /// one is inserted and its identity used; otherwise the existing
    /// identity is reused. Duplicate people are allowed.
    fn add_person(&self, person: &NewPerson) -> Result<AddOutcome, Self::Error>;

    /// Returns every person with the zodiac label resolved.
    ///
    /// Rows come back in the storage engine's default order.
    fn select_all(&self) -> Result<Vec<Person>, Self::Error>;

    /// Returns the people whose surname equals `surname` exactly.
    fn select_by_surname(&self, surname: &str) -> Result<Vec<Person>, Self::Error>;
}
