use std::path::PathBuf;

use clap::{Parser, Subcommand};
use people_cli::{Action, AddArgs, SelectArgs, execute, init_logging};
use people_config::PgSettings;
use people_postgres::PostgresStore;

/// Connection settings come from `--config`, then `PEOPLE_PG_HOST`,
/// `PEOPLE_PG_PORT`, `PEOPLE_PG_DBNAME`, `PEOPLE_PG_USER` and
/// `PEOPLE_PG_PASSWORD`.
#[derive(Debug, Parser)]
#[command(name = "people", version)]
#[command(about = "Record and query people in a Postgres database")]
struct Cli {
    /// YAML file with host, port, dbname, user and password keys.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a new person.
    Add(AddArgs),
    /// Display people.
    Display,
    /// Select people by surname.
    Select(SelectArgs),
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let settings = PgSettings::resolve(cli.config.as_deref())
        .map_err(|e| format!("Failed to load connection settings: {e}"))?;
    let store = PostgresStore::from_settings(&settings);

    let action = cli.command.map(|command| match command {
        Command::Add(args) => Action::Add(args.into()),
        Command::Display => Action::Display,
        Command::Select(args) => Action::Select {
            surname: args.surname,
        },
    });
    execute(&store, action, &mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["people", "display", "--config", "people.yml"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Display)));
        assert_eq!(cli.config, Some(PathBuf::from("people.yml")));
    }

    #[test]
    fn test_parse_select() {
        let cli = Cli::try_parse_from(["people", "select", "--surname", "Ivanov"]).unwrap();
        let Some(Command::Select(args)) = cli.command else {
            panic!("expected select");
        };
        assert_eq!(args.surname, "Ivanov");
    }

    #[test]
    fn test_db_flag_is_not_accepted() {
        assert!(Cli::try_parse_from(["people", "display", "--db", "x.db"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
