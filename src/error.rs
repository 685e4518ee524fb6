//! Defines the app level error type.

use crate::database_id::ExpenseId;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user submitted a line with no words on it.
    #[error("you did not enter anything")]
    EmptyInput,

    /// The first word of the line is not a known command.
    #[error("no such command: {0}")]
    UnknownCommand(String),

    /// A command was given fewer arguments than it needs.
    #[error("not enough arguments provided for command \"{command}\": missing <{argument}>")]
    MissingArgument {
        /// The name of the command, e.g. "add".
        command: &'static str,
        /// The name of the first missing argument, e.g. "amount".
        argument: &'static str,
    },

    /// An argument that must be a whole number could not be parsed as one.
    #[error("<{argument}> must be a whole number, got \"{value}\"")]
    InvalidInteger {
        /// The name of the argument, e.g. "id".
        argument: &'static str,
        /// The text the user entered.
        value: String,
    },

    /// The amount of an expense was negative.
    #[error("amount must not be negative, got {0}")]
    InvalidAmount(i128),

    /// The amount of an expense does not fit in the database's integer type.
    #[error("amount {0} is too big")]
    AmountTooLarge(i128),

    /// The description is longer than [crate::MAX_DESCRIPTION_LENGTH]
    /// characters. Holds the length of the rejected description.
    #[error("your description is too long ({0} characters, the limit is {limit})", limit = crate::MAX_DESCRIPTION_LENGTH)]
    DescriptionTooLong(usize),

    /// No expense exists with the given ID.
    #[error("no expense with given id ({0})")]
    NotFound(ExpenseId),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// The configured timezone is not a canonical timezone name.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", error);
        Error::SqlError(error)
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn description_too_long_message_includes_limit() {
        let message = Error::DescriptionTooLong(31).to_string();

        assert_eq!(
            message,
            "your description is too long (31 characters, the limit is 30)"
        );
    }

    #[test]
    fn sql_errors_are_wrapped() {
        let error: Error = rusqlite::Error::InvalidQuery.into();

        assert_eq!(error, Error::SqlError(rusqlite::Error::InvalidQuery));
    }
}
