//! Integration tests for the people-postgres crate.
//!
//! These need a scratch database. They are skipped unless
//! `PEOPLE_PG_TESTS=1` is set; connection parameters come from the usual
//! `PEOPLE_PG_*` variables. Each test uses its own surnames and zodiac
//! labels so tests can share the tables and run in parallel.

use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use people_config::PgSettings;
use people_core::{NewPerson, PeopleStore, Person, render_people};
use people_postgres::{PostgresError, PostgresStore};

fn setup_store() -> Option<PostgresStore> {
    if std::env::var("PEOPLE_PG_TESTS").as_deref() != Ok("1") {
        eprintln!("skipping: PEOPLE_PG_TESTS is not set");
        return None;
    }
    let settings = PgSettings::resolve(None).unwrap();
    let store = PostgresStore::from_settings(&settings);
    // Concurrent CREATE TABLE IF NOT EXISTS can collide in pg_type on a
    // fresh database, so only the first test creates the tables.
    static SCHEMA: OnceLock<()> = OnceLock::new();
    SCHEMA.get_or_init(|| store.create_schema().unwrap());
    Some(store)
}

/// A value unique to this test run and `tag`.
///
/// Rows persist between runs, so the process id alone is not enough.
fn unique(tag: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{tag}-{}-{nanos}", std::process::id())
}

#[test]
fn test_create_schema_twice_is_a_no_op() {
    let Some(store) = setup_store() else { return };
    store.create_schema().unwrap();
    store.create_schema().unwrap();
    assert!(store.status().unwrap().tables_exist);
}

#[test]
fn test_same_label_resolves_to_one_zodiac() {
    let Some(store) = setup_store() else { return };
    let label = unique("Aries-reuse");
    let surname = unique("Reuse");

    let before = store.status().unwrap().zodiac_count;
    let first = store
        .add_person(&NewPerson::new(surname.as_str(), "Ivan", label.as_str(), "2000-01-01"))
        .unwrap();
    let second = store
        .add_person(&NewPerson::new(surname.as_str(), "Olga", label.as_str(), "2001-01-01"))
        .unwrap();

    assert!(first.zodiac_created);
    assert!(!second.zodiac_created);
    assert_eq!(first.zodiac_id, second.zodiac_id);
    assert!(store.status().unwrap().zodiac_count >= before + 1);
}

#[test]
fn test_distinct_labels_get_distinct_ids() {
    let Some(store) = setup_store() else { return };
    let surname = unique("Distinct");

    let a = store
        .add_person(&NewPerson::new(surname.as_str(), "A", unique("Leo").as_str(), "1990-08-01"))
        .unwrap();
    let b = store
        .add_person(&NewPerson::new(surname.as_str(), "B", unique("Virgo").as_str(), "1990-09-01"))
        .unwrap();
    assert_ne!(a.zodiac_id, b.zodiac_id);
}

#[test]
fn test_round_trip_by_surname() {
    let Some(store) = setup_store() else { return };
    let surname = unique("Ivanov");

    store
        .add_person(&NewPerson::new(surname.as_str(), "Ivan", "Aries", "2000-01-01"))
        .unwrap();

    let people = store.select_by_surname(&surname).unwrap();
    assert_eq!(
        people,
        vec![Person::new(surname.as_str(), "Ivan", "Aries", "2000-01-01")]
    );
    assert!(store.select_all().unwrap().contains(&people[0]));
}

#[test]
fn test_select_without_match_renders_empty_message() {
    let Some(store) = setup_store() else { return };
    let people = store.select_by_surname(&unique("Nobody")).unwrap();
    assert_eq!(render_people(&people), "List is empty\n");
}

#[test]
fn test_missing_zodiac_fails_without_persisting() {
    let Some(store) = setup_store() else { return };
    let surname = unique("NoSign");

    let err = store
        .add_person(&NewPerson::new(surname.as_str(), "N", "unused", "2000-01-01").without_zodiac())
        .unwrap_err();
    assert!(matches!(err, PostgresError::DatabaseError(_)));
    assert!(store.select_by_surname(&surname).unwrap().is_empty());
}
