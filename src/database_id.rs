//! Database ID type definition.

/// Alias for the integer type used for expense IDs in the database.
pub type ExpenseId = i64;
