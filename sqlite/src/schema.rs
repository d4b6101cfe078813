//! Table definitions for the embedded backend.
//!
//! Two tables:
//!
//! - `zodiacs`: zodiac labels, one row per distinct label in practice
//! - `people`: person rows referencing `zodiacs(zodiac_id)`
//!
//! `zodiac_title` carries no `UNIQUE` constraint; labels are deduplicated
//! by lookup before insert. `birthday` is `TEXT` so the value reads back
//! exactly as written, `01012000` included.

use rusqlite::Connection;
use tracing::debug;

use crate::error::Result;

/// `CREATE TABLE IF NOT EXISTS` statements for both tables.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS zodiacs (
    zodiac_id INTEGER PRIMARY KEY AUTOINCREMENT,
    zodiac_title TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS people (
    person_id INTEGER PRIMARY KEY AUTOINCREMENT,
    surname TEXT NOT NULL,
    name TEXT NOT NULL,
    zodiac_id INTEGER NOT NULL,
    birthday TEXT NOT NULL,
    FOREIGN KEY(zodiac_id) REFERENCES zodiacs(zodiac_id)
);
"#;

/// Creates both tables on `conn` if they do not exist yet.
///
/// Safe to call any number of times. Runs in a transaction so either both
/// tables exist afterwards or neither was touched.
pub fn create_schema(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.commit()?;
    debug!("people schema ensured");
    Ok(())
}

/// Returns `true` if both tables exist.
pub(crate) fn tables_exist(conn: &Connection) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('zodiacs', 'people')",
        [],
        |row| row.get(0),
    )?;
    Ok(count == 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(conn: &Connection) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('zodiacs', 'people')",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_schema_sql_contains_tables() {
        assert!(SCHEMA_SQL.contains("CREATE TABLE IF NOT EXISTS zodiacs"));
        assert!(SCHEMA_SQL.contains("CREATE TABLE IF NOT EXISTS people"));
        assert!(SCHEMA_SQL.contains("REFERENCES zodiacs(zodiac_id)"));
        assert!(SCHEMA_SQL.contains("birthday TEXT NOT NULL"));
    }

    #[test]
    fn test_create_schema_on_empty_database() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert!(!tables_exist(&conn).unwrap());

        create_schema(&mut conn).unwrap();
        assert!(tables_exist(&conn).unwrap());
    }

    #[test]
    fn test_create_schema_is_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        create_schema(&mut conn).unwrap();
        create_schema(&mut conn).unwrap();
        assert_eq!(table_count(&conn), 2);
    }

    #[test]
    fn test_foreign_key_enforced_when_pragma_on() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        create_schema(&mut conn).unwrap();

        let result = conn.execute(
            "INSERT INTO people (surname, name, zodiac_id, birthday) VALUES ('a', 'b', 42, '2000-01-01')",
            [],
        );
        assert!(result.is_err());
    }
}
