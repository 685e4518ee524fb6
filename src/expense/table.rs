//! Renders expenses as a fixed-width text table.

use std::fmt::Write;

use time::UtcOffset;
use unicode_segmentation::UnicodeSegmentation;

use crate::expense::{Expense, MAX_DESCRIPTION_LENGTH};

const ID_WIDTH: usize = 4;
const DATE_WIDTH: usize = 12;
const DESCRIPTION_WIDTH: usize = MAX_DESCRIPTION_LENGTH + 2;

/// Render `expenses` as a table with the columns ID, date, description and
/// amount.
///
/// Dates are converted to `local_offset` and shown as `YYYY-MM-DD`.
pub fn render_expense_table(expenses: &[Expense], local_offset: UtcOffset) -> String {
    let mut table = String::new();

    let _ = writeln!(
        table,
        "{:<ID_WIDTH$}{:<DATE_WIDTH$}{:<DESCRIPTION_WIDTH$}Amount",
        "#", "Date", "Description"
    );
    let _ = writeln!(
        table,
        "{}",
        "-".repeat(ID_WIDTH + DATE_WIDTH + DESCRIPTION_WIDTH + 10)
    );

    if expenses.is_empty() {
        table.push_str("No expenses recorded\n");
        return table;
    }

    for expense in expenses {
        let date = expense.date.to_offset(local_offset).date().to_string();
        let _ = writeln!(
            table,
            "{:<ID_WIDTH$}{date:<DATE_WIDTH$}{}${}",
            expense.id,
            pad_description(&expense.description),
            expense.amount
        );
    }

    table
}

/// Pad by grapheme count so that combining characters do not shift the
/// amount column.
fn pad_description(description: &str) -> String {
    let length = description.graphemes(true).count();
    let padding = DESCRIPTION_WIDTH.saturating_sub(length).max(1);

    format!("{description}{}", " ".repeat(padding))
}
