//! Defines the core data model and database queries for expenses.

use rusqlite::{Connection, Row, Transaction as SqlTransaction, TransactionBehavior};
use time::OffsetDateTime;

use crate::{Error, database_id::ExpenseId, expense::ValidatedExpense};

// ============================================================================
// MODELS
// ============================================================================

/// Money that was spent on something.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID of the expense, assigned by the database.
    pub id: ExpenseId,
    /// When the expense was created or last updated, in UTC.
    pub date: OffsetDateTime,
    /// A short text description of what the money was spent on.
    pub description: String,
    /// The amount of money spent.
    pub amount: i64,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the expense table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                description TEXT NOT NULL,
                amount INTEGER NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Check whether an expense with `id` exists.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn expense_exists(id: ExpenseId, connection: &Connection) -> Result<bool, Error> {
    connection
        .prepare("SELECT EXISTS(SELECT 1 FROM expense WHERE id = :id)")?
        .query_row(&[(":id", &id)], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create a new expense dated now and return it with its generated ID.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_expense(
    expense: &ValidatedExpense,
    connection: &Connection,
) -> Result<Expense, Error> {
    let expense = connection
        .prepare(
            "INSERT INTO expense (date, description, amount)
             VALUES (?1, ?2, ?3)
             RETURNING id, date, description, amount",
        )?
        .query_row(
            (
                OffsetDateTime::now_utc(),
                expense.description(),
                expense.amount(),
            ),
            map_expense_row,
        )?;

    tracing::info!("Created expense {}", expense.id);

    Ok(expense)
}

/// Retrieve an expense from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    connection
        .prepare("SELECT id, date, description, amount FROM expense WHERE id = :id")?
        .query_row(&[(":id", &id)], map_expense_row)
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound(id),
            error => error.into(),
        })
}

/// Retrieve all expenses ordered by ID.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare("SELECT id, date, description, amount FROM expense ORDER BY id ASC")?
        .query_map([], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
        .collect()
}

/// Overwrite the description and amount of the expense with `id` and set its
/// date to now.
///
/// The caller should check that the expense exists first. If it does not,
/// nothing is changed and no error is returned.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn update_expense(
    id: ExpenseId,
    expense: &ValidatedExpense,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE expense SET date = ?1, description = ?2, amount = ?3 WHERE id = ?4",
        (
            OffsetDateTime::now_utc(),
            expense.description(),
            expense.amount(),
            id,
        ),
    )?;

    if rows_affected == 0 {
        tracing::warn!("Tried to update expense {id} but it is not in the database");
    } else {
        tracing::info!("Updated expense {id}");
    }

    Ok(())
}

/// Delete the expense with `id`.
///
/// The caller should check that the expense exists first. Deleting a missing
/// expense is a no-op.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM expense WHERE id = ?1", [id])?;

    tracing::info!("Deleted {rows_affected} expense(s) with ID {id}");

    Ok(())
}

/// Get the total amount across all expenses, or zero if there are none.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error,
/// which includes the sum overflowing a 64-bit integer.
pub fn sum_expense_amounts(connection: &Connection) -> Result<i64, Error> {
    connection
        .query_row("SELECT COALESCE(SUM(amount), 0) FROM expense", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Delete every expense and restart ID numbering so the next expense gets
/// ID 1.
///
/// Both steps are committed together or not at all.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn reset_expenses(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    let rows_deleted = transaction.execute("DELETE FROM expense", ())?;
    transaction.execute("DELETE FROM sqlite_sequence WHERE name = 'expense'", ())?;

    transaction.commit()?;

    tracing::info!("Reset expense table, deleted {rows_deleted} expense(s)");

    Ok(())
}

/// Map a database row to an Expense.
fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let description = row.get(2)?;
    let amount = row.get(3)?;

    Ok(Expense {
        id,
        date,
        description,
        amount,
    })
}

// ============================================================================
// TESTS
// ============================================================================
