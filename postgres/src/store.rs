//! Client-server [`PeopleStore`] implementation.

use people_config::PgSettings;
use people_core::{AddOutcome, NewPerson, PeopleStore, Person};
use postgres::{Client, Config, NoTls};
use tracing::{debug, info};

use crate::error::{PostgresError, Result};
use crate::{query, schema};

/// People storage on a Postgres server.
///
/// Each operation opens a new client and lets it drop before returning,
/// which closes the session on both the success and the error path.
///
/// The zodiac lookup and insert run inside the same transaction as the
/// person insert, but two concurrent writers can still both miss the
/// lookup and insert the same label twice: `zodiacs.zodiac_title` has no
/// uniqueness constraint.
pub struct PostgresStore {
    config: Config,
    host: String,
    port: u16,
    dbname: String,
}

impl PostgresStore {
    pub fn from_settings(settings: &PgSettings) -> Self {
        let mut config = Config::new();
        config
            .host(&settings.host)
            .port(settings.port)
            .dbname(&settings.dbname)
            .user(&settings.user)
            .application_name("people");
        if let Some(password) = &settings.password {
            config.password(password);
        }
        Self {
            config,
            host: settings.host.clone(),
            port: settings.port,
            dbname: settings.dbname.clone(),
        }
    }

    /// Reports whether the tables exist and how many rows they hold.
    pub fn status(&self) -> Result<StoreStatus> {
        let mut client = self.connect()?;
        if !schema::tables_exist(&mut client)? {
            return Ok(StoreStatus::default());
        }
        Ok(StoreStatus {
            tables_exist: true,
            zodiac_count: query::count_rows(&mut client, "zodiacs")?,
            person_count: query::count_rows(&mut client, "people")?,
        })
    }

    fn connect(&self) -> Result<Client> {
        debug!(host = %self.host, port = self.port, dbname = %self.dbname, "connecting to postgres");
        self.config
            .connect(NoTls)
            .map_err(|source| PostgresError::ConnectError {
                host: self.host.clone(),
                port: self.port,
                dbname: self.dbname.clone(),
                source,
            })
    }
}

impl PeopleStore for PostgresStore {
    type Error = PostgresError;

    fn create_schema(&self) -> Result<()> {
        let mut client = self.connect()?;
        let mut tx = client.transaction()?;
        schema::create_schema(&mut tx)?;
        tx.commit()?;
        Ok(())
    }

    fn add_person(&self, person: &NewPerson) -> Result<AddOutcome> {
        let mut client = self.connect()?;
        let mut tx = client.transaction()?;

        let title = person.zodiac.as_deref();
        let (zodiac_id, zodiac_created) = match query::find_zodiac(&mut tx, title)? {
            Some(id) => (id, false),
            None => {
                let id = query::insert_zodiac(&mut tx, title)?;
                info!(zodiac_id = id, zodiac = ?title, "created zodiac");
                (id, true)
            }
        };

        let person_id = query::insert_person(&mut tx, person, zodiac_id)?;
        tx.commit()?;

        info!(person_id, zodiac_id, surname = %person.surname, "added person");
        Ok(AddOutcome {
            person_id: i64::from(person_id),
            zodiac_id: i64::from(zodiac_id),
            zodiac_created,
        })
    }

    fn select_all(&self) -> Result<Vec<Person>> {
        let mut client = self.connect()?;
        let people = query::load_people(&mut client, None)?;
        debug!(rows = people.len(), "selected all people");
        Ok(people)
    }

    fn select_by_surname(&self, surname: &str) -> Result<Vec<Person>> {
        let mut client = self.connect()?;
        let people = query::load_people(&mut client, Some(surname))?;
        debug!(rows = people.len(), surname, "selected people by surname");
        Ok(people)
    }
}

/// Snapshot of the tables, returned by [`PostgresStore::status`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStatus {
    pub tables_exist: bool,
    pub zodiac_count: usize,
    pub person_count: usize,
}
