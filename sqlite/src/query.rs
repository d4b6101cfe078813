//! Row-level operations on an open SQLite connection.
//!
//! These functions never open, commit or close anything; [`SqliteStore`]
//! owns the connection and transaction around them.
//!
//! [`SqliteStore`]: crate::SqliteStore

use people_core::{NewPerson, Person};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row, params};

use crate::error::Result;

const SELECT_PEOPLE: &str = "SELECT people.surname, people.name, zodiacs.zodiac_title, people.birthday \
     FROM people \
     INNER JOIN zodiacs ON zodiacs.zodiac_id = people.zodiac_id";

/// Looks up a zodiac row by exact title.
///
/// A `None` title binds SQL `NULL`, which never compares equal, so it
/// always yields `None`.
pub(crate) fn find_zodiac(conn: &Connection, title: Option<&str>) -> Result<Option<i64>> {
    let mut stmt = conn.prepare("SELECT zodiac_id FROM zodiacs WHERE zodiac_title = ?1")?;
    let mut rows = stmt.query(params![title])?;
    match rows.next()? {
        Some(row) => Ok(Some(row.get(0)?)),
        None => Ok(None),
    }
}

/// Inserts a zodiac row and returns its identity.
pub(crate) fn insert_zodiac(conn: &Connection, title: Option<&str>) -> Result<i64> {
    conn.execute(
        "INSERT INTO zodiacs (zodiac_title) VALUES (?1)",
        params![title],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Inserts a person row referencing `zodiac_id` and returns its identity.
pub(crate) fn insert_person(conn: &Connection, person: &NewPerson, zodiac_id: i64) -> Result<i64> {
    conn.execute(
        "INSERT INTO people (surname, name, zodiac_id, birthday) VALUES (?1, ?2, ?3, ?4)",
        params![person.surname, person.name, zodiac_id, person.birthday],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Loads joined person rows, optionally restricted to one surname.
pub(crate) fn load_people(conn: &Connection, surname: Option<&str>) -> Result<Vec<Person>> {
    let people = match surname {
        Some(surname) => {
            let mut stmt = conn.prepare(&format!("{SELECT_PEOPLE} WHERE people.surname = ?1"))?;
            let rows = stmt
                .query_map(params![surname], row_to_person)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rows
        }
        None => {
            let mut stmt = conn.prepare(SELECT_PEOPLE)?;
            let rows = stmt
                .query_map([], row_to_person)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rows
        }
    };
    Ok(people)
}

/// Counts rows in one of the two tables.
pub(crate) fn count_rows(conn: &Connection, table: &str) -> Result<usize> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(count as usize)
}

fn row_to_person(row: &Row<'_>) -> rusqlite::Result<Person> {
    Ok(Person {
        surname: text_column(row, 0)?,
        name: text_column(row, 1)?,
        zodiac: text_column(row, 2)?,
        birthday: text_column(row, 3)?,
    })
}

/// Reads a column as text whatever its storage class.
///
/// Columns written by this crate are all `TEXT`, but a database file created
/// by another tool may hold integers or reals in them.
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) | ValueRef::Blob(t) => String::from_utf8_lossy(t).into_owned(),
    })
}
