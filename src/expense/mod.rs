//! Expense management for the expense tracker.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and the validation rules for new expenses
//! - Database functions for storing, querying, and managing expenses
//! - The fixed-width table used to display expenses

mod core;
mod table;
mod validation;

pub use core::{
    Expense, create_expense, create_expense_table, delete_expense, expense_exists,
    get_all_expenses, get_expense, reset_expenses, sum_expense_amounts, update_expense,
};
pub use table::render_expense_table;
pub use validation::{MAX_AMOUNT, MAX_DESCRIPTION_LENGTH, ValidatedExpense, validate};
