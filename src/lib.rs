//! Expense Tracker is a command-line tool for recording personal expenses.
//!
//! Expenses are stored in a single SQLite table and managed through an
//! interactive, line-oriented command loop (see [run]).

#![warn(missing_docs)]

mod command;
mod database_id;
mod db;
mod error;
mod expense;
mod logging;
mod repl;
mod timezone;

pub use command::{Command, HELP_TEXT};
pub use database_id::ExpenseId;
pub use db::initialize as initialize_db;
pub use error::Error;
pub use expense::{
    Expense, MAX_AMOUNT, MAX_DESCRIPTION_LENGTH, ValidatedExpense, create_expense,
    delete_expense, expense_exists, get_all_expenses, get_expense, render_expense_table,
    reset_expenses, sum_expense_amounts, update_expense, validate,
};
pub use logging::setup_logging;
pub use repl::run;
pub use timezone::get_local_offset;
