use std::{
    error::Error,
    io::{self},
    path::Path,
    process::ExitCode,
};

use clap::Parser;
use rusqlite::Connection;

use expense_tracker::{get_local_offset, initialize_db, run, setup_logging};

/// Track your expenses from the command line.
///
/// Starts an interactive prompt; type `help` to see the available commands.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the SQLite database. Created if it does not exist.
    #[arg(long, default_value = "expenses.db")]
    db_path: String,

    /// The canonical name of the timezone used to display dates, e.g. "Pacific/Auckland".
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// File path to write logs to.
    #[arg(long, default_value = "expense_tracker.log")]
    log_path: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match start(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error(error);
            ExitCode::FAILURE
        }
    }
}

fn start(args: &Args) -> Result<(), Box<dyn Error>> {
    setup_logging(Path::new(&args.log_path))?;

    let local_offset = get_local_offset(&args.timezone)
        .ok_or_else(|| expense_tracker::Error::InvalidTimezoneError(args.timezone.clone()))?;

    tracing::info!("Opening database at {}", args.db_path);
    let conn = Connection::open(&args.db_path)?;
    initialize_db(&conn)?;

    run(&conn, local_offset, io::stdin().lock(), io::stdout().lock())?;

    tracing::info!("Closing database");

    Ok(())
}

fn print_error(error: impl ToString) {
    eprintln!("\x1b[31;1mError: {}\x1b[0m", error.to_string())
}
