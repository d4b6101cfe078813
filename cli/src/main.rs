use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use people_cli::{Action, AddArgs, SelectArgs, execute, init_logging};
use people_sqlite::SqliteStore;

#[derive(Debug, Parser)]
#[command(name = "people", version)]
#[command(about = "Record and query people in a SQLite database file")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a new person.
    Add(AddCommand),
    /// Display people.
    Display(DisplayCommand),
    /// Select people by surname.
    Select(SelectCommand),
}

#[derive(Debug, Args)]
struct DbArgs {
    /// The database file name (default: ~/workers.db).
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct AddCommand {
    #[command(flatten)]
    person: AddArgs,
    #[command(flatten)]
    db: DbArgs,
}

#[derive(Debug, Args)]
struct DisplayCommand {
    #[command(flatten)]
    db: DbArgs,
}

#[derive(Debug, Args)]
struct SelectCommand {
    #[command(flatten)]
    filter: SelectArgs,
    #[command(flatten)]
    db: DbArgs,
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
    let (db, action) = match cli.command {
        None => (None, None),
        Some(Command::Add(cmd)) => (cmd.db.db, Some(Action::Add(cmd.person.into()))),
        Some(Command::Display(cmd)) => (cmd.db.db, Some(Action::Display)),
        Some(Command::Select(cmd)) => (
            cmd.db.db,
            Some(Action::Select {
                surname: cmd.filter.surname,
            }),
        ),
    };

    let path = match db {
        Some(path) => path,
        None => people_config::default_db_path().map_err(|e| e.to_string())?,
    };
    let store = SqliteStore::new(path);
    execute(&store, action, &mut std::io::stdout().lock())
}
