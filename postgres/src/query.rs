//! Row-level operations over any Postgres client or transaction.

use people_core::{NewPerson, Person};
use postgres::{GenericClient, Row};

use crate::error::Result;

pub(crate) const SELECT_PEOPLE: &str = "SELECT people.surname, people.name, zodiacs.zodiac_title, people.birthday \
     FROM people \
     INNER JOIN zodiacs ON zodiacs.zodiac_id = people.zodiac_id";

pub(crate) fn find_zodiac<C: GenericClient>(client: &mut C, title: Option<&str>) -> Result<Option<i32>> {
    let row = client.query_opt(
        "SELECT zodiac_id FROM zodiacs WHERE zodiac_title = $1 LIMIT 1",
        &[&title],
    )?;
    Ok(row.map(|row| row.get(0)))
}

pub(crate) fn insert_zodiac<C: GenericClient>(client: &mut C, title: Option<&str>) -> Result<i32> {
    let row = client.query_one(
        "INSERT INTO zodiacs (zodiac_title) VALUES ($1) RETURNING zodiac_id",
        &[&title],
    )?;
    Ok(row.get(0))
}

pub(crate) fn insert_person<C: GenericClient>(
    client: &mut C,
    person: &NewPerson,
    zodiac_id: i32,
) -> Result<i32> {
    let row = client.query_one(
        "INSERT INTO people (surname, name, zodiac_id, birthday) VALUES ($1, $2, $3, $4) \
         RETURNING person_id",
        &[&person.surname, &person.name, &zodiac_id, &person.birthday],
    )?;
    Ok(row.get(0))
}

pub(crate) fn load_people<C: GenericClient>(client: &mut C, surname: Option<&str>) -> Result<Vec<Person>> {
    let rows = match surname {
        Some(surname) => {
            let sql = format!("{SELECT_PEOPLE} WHERE people.surname = $1");
            client.query(sql.as_str(), &[&surname])?
        }
        None => client.query(SELECT_PEOPLE, &[])?,
    };
    rows.iter().map(row_to_person).collect()
}

pub(crate) fn count_rows<C: GenericClient>(client: &mut C, table: &str) -> Result<usize> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    let row = client.query_one(sql.as_str(), &[])?;
    let count: i64 = row.get(0);
    Ok(count as usize)
}

fn row_to_person(row: &Row) -> Result<Person> {
    Ok(Person {
        surname: row.try_get(0)?,
        name: row.try_get(1)?,
        zodiac: row.try_get(2)?,
        birthday: row.try_get(3)?,
    })
}
