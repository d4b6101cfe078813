//! File-backed [`PeopleStore`] implementation.

use std::path::{Path, PathBuf};

use people_core::{AddOutcome, NewPerson, PeopleStore, Person};
use rusqlite::{Connection, TransactionBehavior};
use tracing::{debug, info};

use crate::error::{Result, SqliteError};
use crate::query;
use crate::schema;

/// People storage in a SQLite database file.
///
/// Holds only the file path. Every operation opens its own connection,
/// enables foreign key enforcement on it, and drops it before returning,
/// so no connection outlives a call even when a statement fails.
///
/// # Examples
///
/// ```no_run
/// use people_core::{NewPerson, PeopleStore};
/// use people_sqlite::SqliteStore;
///
/// let store = SqliteStore::new("/tmp/people.db");
/// store.create_schema().unwrap();
///
/// let first = store.add_person(&NewPerson::new("Ivanov", "Ivan", "Aries", "2000-01-01")).unwrap();
/// let second = store.add_person(&NewPerson::new("Petrov", "Petr", "Aries", "2001-04-02")).unwrap();
/// assert!(first.zodiac_created);
/// assert!(!second.zodiac_created);
/// assert_eq!(first.zodiac_id, second.zodiac_id);
/// ```
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reports whether the tables exist and how many rows they hold.
    pub fn status(&self) -> Result<StoreStatus> {
        let conn = self.connect()?;
        if !schema::tables_exist(&conn)? {
            return Ok(StoreStatus::default());
        }
        Ok(StoreStatus {
            tables_exist: true,
            zodiac_count: query::count_rows(&conn, "zodiacs")?,
            person_count: query::count_rows(&conn, "people")?,
        })
    }

    fn connect(&self) -> Result<Connection> {
        debug!(path = %self.path.display(), "opening sqlite database");
        let conn = Connection::open(&self.path).map_err(|source| SqliteError::OpenError {
            path: self.path.clone(),
            source,
        })?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }
}

impl PeopleStore for SqliteStore {
    type Error = SqliteError;

    fn create_schema(&self) -> Result<()> {
        let mut conn = self.connect()?;
        schema::create_schema(&mut conn)
    }

    fn add_person(&self, person: &NewPerson) -> Result<AddOutcome> {
        let mut conn = self.connect()?;
        // IMMEDIATE takes the write lock up front, so the zodiac lookup and
        // insert cannot interleave with another writer.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let title = person.zodiac.as_deref();
        let (zodiac_id, zodiac_created) = match query::find_zodiac(&tx, title)? {
            Some(id) => (id, false),
            None => {
                let id = query::insert_zodiac(&tx, title)?;
                info!(zodiac_id = id, zodiac = ?title, "created zodiac");
                (id, true)
            }
        };

        let person_id = query::insert_person(&tx, person, zodiac_id)?;
        tx.commit()?;

        info!(person_id, zodiac_id, surname = %person.surname, "added person");
        Ok(AddOutcome {
            person_id,
            zodiac_id,
            zodiac_created,
        })
    }

    fn select_all(&self) -> Result<Vec<Person>> {
        let conn = self.connect()?;
        let people = query::load_people(&conn, None)?;
        debug!(rows = people.len(), "selected all people");
        Ok(people)
    }

    fn select_by_surname(&self, surname: &str) -> Result<Vec<Person>> {
        let conn = self.connect()?;
        let people = query::load_people(&conn, Some(surname))?;
        debug!(rows = people.len(), surname, "selected people by surname");
        Ok(people)
    }
}

/// Snapshot of the tables, returned by [`SqliteStore::status`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStatus {
    /// Whether both tables exist.
    pub tables_exist: bool,
    /// Number of zodiac rows.
    pub zodiac_count: usize,
    /// Number of person rows.
    pub person_count: usize,
}
