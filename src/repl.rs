//! The interactive command loop.

use std::io::{self, BufRead, Write};

use rusqlite::Connection;
use time::UtcOffset;

use crate::{
    Error,
    command::{Command, HELP_TEXT},
    expense::{
        ValidatedExpense, create_expense, delete_expense, expense_exists, get_all_expenses,
        render_expense_table, reset_expenses, sum_expense_amounts, update_expense,
    },
};

const PROMPT: &str = "> ";

/// What the loop should do after a command has been handled.
enum Outcome {
    Print(String),
    Exit,
}

/// Read commands from `input` one line at a time and write the results to
/// `output` until the user enters `exit` or the input ends.
///
/// Dates in listings are shown in `local_offset`.
///
/// Errors from commands are written to `output` and the loop carries on.
///
/// # Errors
/// Returns an error if `input` cannot be read or `output` cannot be written
/// to.
pub fn run(
    connection: &Connection,
    local_offset: UtcOffset,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    writeln!(output, "{HELP_TEXT}")?;

    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(error)) if error.kind() == io::ErrorKind::InvalidData => {
                print_error(&mut output, error)?;
                continue;
            }
            Some(Err(error)) => return Err(error),
            None => {
                writeln!(output)?;
                tracing::info!("Reached end of input");
                return Ok(());
            }
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(error) => {
                print_parse_error(&mut output, error)?;
                continue;
            }
        };

        tracing::debug!("Running command {command:?}");

        match execute(command, connection, local_offset) {
            Ok(Outcome::Print(message)) => writeln!(output, "{}", message.trim_end())?,
            Ok(Outcome::Exit) => {
                tracing::info!("Exiting on user request");
                return Ok(());
            }
            Err(error) => print_error(&mut output, error)?,
        }
    }
}

fn execute(
    command: Command,
    connection: &Connection,
    local_offset: UtcOffset,
) -> Result<Outcome, Error> {
    let message = match command {
        Command::Add {
            description,
            amount,
        } => {
            let expense = ValidatedExpense::new(&description, amount)?;
            let expense = create_expense(&expense, connection)?;

            format!("Expense added successfully (ID: {})", expense.id)
        }
        Command::List => {
            let expenses = get_all_expenses(connection)?;

            render_expense_table(&expenses, local_offset)
        }
        Command::Summary => format!("Total: ${}", sum_expense_amounts(connection)?),
        Command::Help => HELP_TEXT.to_owned(),
        Command::Delete { id } => {
            if !expense_exists(id, connection)? {
                return Err(Error::NotFound(id));
            }

            delete_expense(id, connection)?;

            format!("Expense deleted successfully (ID: {id})")
        }
        Command::Update {
            id,
            description,
            amount,
        } => {
            if !expense_exists(id, connection)? {
                return Err(Error::NotFound(id));
            }

            let expense = ValidatedExpense::new(&description, amount)?;
            update_expense(id, &expense, connection)?;

            format!("Successfully updated ID: {id}")
        }
        Command::Reset => {
            reset_expenses(connection)?;

            "All expenses deleted, IDs restart from 1".to_owned()
        }
        Command::Exit => return Ok(Outcome::Exit),
    };

    Ok(Outcome::Print(message))
}

fn print_parse_error(output: &mut impl Write, error: Error) -> io::Result<()> {
    match error {
        Error::EmptyInput => {
            print_error(output, error)?;
            writeln!(output, "Type \"help\" to see the list of commands")
        }
        Error::UnknownCommand(_) | Error::MissingArgument { .. } => {
            print_error(output, error)?;
            writeln!(output, "{HELP_TEXT}")
        }
        error => print_error(output, error),
    }
}

fn print_error(output: &mut impl Write, error: impl ToString) -> io::Result<()> {
    writeln!(
        output,
        "Error: {}",
        capitalise_first_char(&error.to_string())
    )
}

/// From https://crates.io/crates/capitalize
fn capitalise_first_char(string: &str) -> String {
    let mut chars = string.chars();
    let Some(first) = chars.next() else {
        return String::with_capacity(0);
    };
    first.to_uppercase().chain(chars).collect()
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::UtcOffset;

    use crate::{
        db::initialize,
        expense::{get_all_expenses, get_expense},
    };

    use super::{capitalise_first_char, run};

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn run_script(conn: &Connection, script: &str) -> String {
        let mut output = Vec::new();

        run(conn, UtcOffset::UTC, script.as_bytes(), &mut output).expect("loop should not fail");

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn add_creates_expense() {
        let conn = get_test_connection();

        let output = run_script(&conn, "add lunch 1200\nexit\n");

        assert!(output.contains("Expense added successfully (ID: 1)"));
        let expense = get_expense(1, &conn).unwrap();
        assert_eq!(expense.description, "lunch");
        assert_eq!(expense.amount, 1200);
    }

    #[test]
    fn bad_input_does_not_stop_the_loop() {
        let conn = get_test_connection();

        let output = run_script(&conn, "add \"\n\nfoo\nadd lunch ten\nadd lunch 1200\n");

        assert!(output.contains("Error: Not enough arguments provided for command \"add\""));
        assert!(output.contains("Error: You did not enter anything"));
        assert!(output.contains("Error: No such command: foo"));
        assert!(output.contains("Error: <amount> must be a whole number, got \"ten\""));
        assert!(output.contains("Expense added successfully (ID: 1)"));
        assert_eq!(get_all_expenses(&conn).unwrap().len(), 1);
    }

    #[test]
    fn validation_errors_are_reported() {
        let conn = get_test_connection();

        let output = run_script(
            &conn,
            "add refund -5\nadd yacht 9223372036854775808\nadd aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa 1\n",
        );

        assert!(output.contains("Error: Amount must not be negative, got -5"));
        assert!(output.contains("Error: Amount 9223372036854775808 is too big"));
        assert!(output.contains("Error: Your description is too long"));
        assert_eq!(get_all_expenses(&conn), Ok(vec![]));
    }

    #[test]
    fn list_shows_table() {
        let conn = get_test_connection();

        let output = run_script(&conn, "add lunch 1200\nadd bus 300\nlist\n");

        assert!(output.contains("Description"));
        assert!(output.contains("lunch"));
        assert!(output.contains("$1200"));
        assert!(output.contains("$300"));
    }

    #[test]
    fn summary_shows_total() {
        let conn = get_test_connection();

        let output = run_script(&conn, "summary\nadd a 100\nadd b 250\nadd c 0\nsummary\n");

        assert!(output.contains("Total: $0"));
        assert!(output.contains("Total: $350"));
    }

    #[test]
    fn delete_removes_expense() {
        let conn = get_test_connection();

        let output = run_script(&conn, "add lunch 1200\ndelete 1\n");

        assert!(output.contains("Expense deleted successfully (ID: 1)"));
        assert_eq!(get_all_expenses(&conn), Ok(vec![]));
    }

    #[test]
    fn delete_missing_expense_reports_not_found() {
        let conn = get_test_connection();

        let output = run_script(&conn, "delete 5\n");

        assert!(output.contains("Error: No expense with given id (5)"));
        assert!(!output.contains("SQL"));
    }

    #[test]
    fn update_overwrites_expense() {
        let conn = get_test_connection();

        let output = run_script(&conn, "add tea 250\nupdate 1 coffee 500\n");

        assert!(output.contains("Successfully updated ID: 1"));
        let expense = get_expense(1, &conn).unwrap();
        assert_eq!(expense.description, "coffee");
        assert_eq!(expense.amount, 500);
    }

    #[test]
    fn update_missing_expense_reports_not_found() {
        let conn = get_test_connection();

        let output = run_script(&conn, "update 3 coffee 500\n");

        assert!(output.contains("Error: No expense with given id (3)"));
        assert_eq!(get_all_expenses(&conn), Ok(vec![]));
    }

    #[test]
    fn update_with_invalid_values_keeps_old_expense() {
        let conn = get_test_connection();

        let output = run_script(&conn, "add tea 250\nupdate 1 coffee -500\n");

        assert!(output.contains("Error: Amount must not be negative, got -500"));
        assert_eq!(get_expense(1, &conn).unwrap().description, "tea");
    }

    #[test]
    fn reset_restarts_ids() {
        let conn = get_test_connection();

        let output = run_script(&conn, "add a 1\nadd b 2\nadd c 3\nreset\nadd d 4\n");

        assert!(output.contains("All expenses deleted"));
        let expenses = get_all_expenses(&conn).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].id, 1);
        assert_eq!(expenses[0].description, "d");
    }

    #[test]
    fn exit_stops_reading_input() {
        let conn = get_test_connection();

        run_script(&conn, "exit\nadd lunch 1200\n");

        assert_eq!(get_all_expenses(&conn), Ok(vec![]));
    }

    #[test]
    fn end_of_input_stops_loop() {
        let conn = get_test_connection();

        let output = run_script(&conn, "");

        assert!(output.starts_with("Available commands:"));
        assert!(output.ends_with("> \n"));
    }

    #[test]
    fn help_prints_commands() {
        let conn = get_test_connection();

        let output = run_script(&conn, "help\n");

        assert_eq!(output.matches("Available commands:").count(), 2);
    }

    #[test]
    fn capitalise_first_char_handles_empty_and_unicode() {
        assert_eq!(capitalise_first_char(""), "");
        assert_eq!(capitalise_first_char("no expense"), "No expense");
        assert_eq!(capitalise_first_char("ä"), "Ä");
    }
}
