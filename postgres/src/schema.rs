//! Table definitions for the client-server backend.

use postgres::GenericClient;
use tracing::debug;

use crate::error::Result;

/// `CREATE TABLE IF NOT EXISTS` statements for both tables.
///
/// `birthday` is plain text here; the value is stored as given.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS zodiacs (
    zodiac_id SERIAL PRIMARY KEY,
    zodiac_title TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS people (
    person_id SERIAL PRIMARY KEY,
    surname TEXT NOT NULL,
    name TEXT NOT NULL,
    zodiac_id INTEGER NOT NULL REFERENCES zodiacs(zodiac_id),
    birthday TEXT NOT NULL
);
"#;

pub(crate) fn create_schema<C: GenericClient>(client: &mut C) -> Result<()> {
    client.batch_execute(SCHEMA_SQL)?;
    debug!("people schema ensured");
    Ok(())
}

pub(crate) fn tables_exist<C: GenericClient>(client: &mut C) -> Result<bool> {
    let row = client.query_one(
        "SELECT COUNT(*) FROM information_schema.tables \
         WHERE table_schema = current_schema() AND table_name IN ('zodiacs', 'people')",
        &[],
    )?;
    let count: i64 = row.get(0);
    Ok(count == 2)
}
