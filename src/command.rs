//! Parses a line of user input into a [Command].

use crate::{Error, database_id::ExpenseId};

/// The list of commands and their syntax, shown by `help`.
pub const HELP_TEXT: &str = "\
Available commands:
  1. add <description> <amount>         adds an expense
  2. list                               shows the list of your expenses
  3. summary                            shows the total amount you spent
  4. help                               shows this list of commands
  5. delete <id>                        deletes the expense with the given id (other ids stay the same)
  6. update <id> <description> <amount> overwrites the expense with the given id
  7. exit                               ends the program
  8. reset                              deletes all expenses and restarts ids from 1";

/// A command entered by the user, with its arguments parsed.
///
/// Amounts are parsed as `i128` and narrowed when validated, see
/// [crate::ValidatedExpense].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record a new expense.
    Add {
        /// What the money was spent on.
        description: String,
        /// How much was spent.
        amount: i128,
    },
    /// Show every expense.
    List,
    /// Show the total of all expenses.
    Summary,
    /// Show the list of commands.
    Help,
    /// Remove one expense.
    Delete {
        /// The expense to remove.
        id: ExpenseId,
    },
    /// Overwrite one expense.
    Update {
        /// The expense to overwrite.
        id: ExpenseId,
        /// The new description.
        description: String,
        /// The new amount.
        amount: i128,
    },
    /// Remove every expense and restart IDs from 1.
    Reset,
    /// Stop the program.
    Exit,
}

impl Command {
    /// Parse a line of whitespace separated words into a command.
    ///
    /// Words after the last argument a command needs are ignored.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyInput] if `line` has no words,
    /// - [Error::UnknownCommand] if the first word is not a command name,
    /// - [Error::MissingArgument] if there are not enough words for the command,
    /// - or [Error::InvalidInteger] if an ID or amount is not a whole number.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let mut words = line.split_whitespace();

        let Some(name) = words.next() else {
            return Err(Error::EmptyInput);
        };

        let command = match name {
            "add" => {
                let description = next_word(&mut words, "add", "description")?;
                let amount = next_word(&mut words, "add", "amount")?;

                Command::Add {
                    description: description.to_owned(),
                    amount: parse_integer(amount, "amount")?,
                }
            }
            "list" => Command::List,
            "summary" => Command::Summary,
            "help" => Command::Help,
            "delete" => {
                let id = next_word(&mut words, "delete", "id")?;

                Command::Delete {
                    id: parse_integer(id, "id")?,
                }
            }
            "update" => {
                let id = next_word(&mut words, "update", "id")?;
                let description = next_word(&mut words, "update", "description")?;
                let amount = next_word(&mut words, "update", "amount")?;

                Command::Update {
                    id: parse_integer(id, "id")?,
                    description: description.to_owned(),
                    amount: parse_integer(amount, "amount")?,
                }
            }
            "reset" => Command::Reset,
            "exit" => Command::Exit,
            unknown => return Err(Error::UnknownCommand(unknown.to_owned())),
        };

        Ok(command)
    }
}

fn next_word<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, Error> {
    words
        .next()
        .ok_or(Error::MissingArgument { command, argument })
}

fn parse_integer<T: std::str::FromStr>(word: &str, argument: &'static str) -> Result<T, Error> {
    word.parse().map_err(|_| Error::InvalidInteger {
        argument,
        value: word.to_owned(),
    })
}
