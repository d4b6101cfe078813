//! Shared pieces of the `people` and `people-pg` binaries.
//!
//! Both binaries parse their own command line, build a store, and hand an
//! [`Action`] to [`execute`], which ensures the schema exists and then
//! performs the action against any [`PeopleStore`].

use std::io::Write;

use clap::Args;
use people_core::{NewPerson, PeopleStore, render_people};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Arguments of the `add` subcommand.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// The person's surname.
    #[arg(short, long)]
    pub surname: String,
    /// The person's name.
    #[arg(short, long)]
    pub name: String,
    /// The person's zodiac sign.
    #[arg(short, long)]
    pub zodiac: Option<String>,
    /// The person's birthday.
    #[arg(short, long)]
    pub birthday: String,
}

impl From<AddArgs> for NewPerson {
    fn from(args: AddArgs) -> Self {
        Self {
            surname: args.surname,
            name: args.name,
            zodiac: args.zodiac,
            birthday: args.birthday,
        }
    }
}

/// Arguments of the `select` subcommand.
#[derive(Debug, Clone, Args)]
pub struct SelectArgs {
    /// The required surname.
    #[arg(short, long)]
    pub surname: String,
}

/// What a single invocation does after the schema is in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(NewPerson),
    Select { surname: String },
    Display,
}

/// Ensures the schema, then runs `action` and writes any table to `out`.
///
/// With no action only the schema is ensured.
pub fn execute<S, W>(store: &S, action: Option<Action>, out: &mut W) -> Result<(), String>
where
    S: PeopleStore,
    W: Write,
{
    store
        .create_schema()
        .map_err(|e| format!("Failed to create schema: {e}"))?;

    let people = match action {
        None => return Ok(()),
        Some(Action::Add(person)) => {
            let outcome = store
                .add_person(&person)
                .map_err(|e| format!("Failed to add person: {e}"))?;
            debug!(?outcome, "add complete");
            return Ok(());
        }
        Some(Action::Select { surname }) => store
            .select_by_surname(&surname)
            .map_err(|e| format!("Failed to select people: {e}"))?,
        Some(Action::Display) => store
            .select_all()
            .map_err(|e| format!("Failed to load people: {e}"))?,
    };

    out.write_all(render_people(&people).as_bytes())
        .map_err(|e| format!("Failed to write output: {e}"))
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
