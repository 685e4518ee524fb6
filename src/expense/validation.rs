//! Checks that user input can be stored as an expense.

use crate::Error;

/// The maximum number of characters (Unicode code points) in a description.
pub const MAX_DESCRIPTION_LENGTH: usize = 30;

/// The largest amount that can be stored for an expense.
pub const MAX_AMOUNT: i128 = i64::MAX as i128;

/// Check that `description` and `amount` can be stored as an expense.
///
/// Amounts are taken as `i128` so that input larger than the database's
/// integer type is rejected here rather than silently wrapped.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidAmount] if `amount` is negative,
/// - or [Error::AmountTooLarge] if `amount` is larger than [MAX_AMOUNT],
/// - or [Error::DescriptionTooLong] if `description` has more than
///   [MAX_DESCRIPTION_LENGTH] characters.
pub fn validate(description: &str, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount(amount));
    }

    if amount > MAX_AMOUNT {
        return Err(Error::AmountTooLarge(amount));
    }

    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(Error::DescriptionTooLong(length));
    }

    Ok(())
}

/// A description and amount that have passed [validate].
///
/// The database functions that write expenses only accept this type, so every
/// insert and update is validated first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedExpense {
    description: String,
    amount: i64,
}

impl ValidatedExpense {
    /// Validate `description` and `amount`.
    ///
    /// # Errors
    /// Returns the same errors as [validate].
    pub fn new(description: &str, amount: i128) -> Result<Self, Error> {
        validate(description, amount)?;

        let amount = i64::try_from(amount).map_err(|_| Error::AmountTooLarge(amount))?;

        Ok(Self {
            description: description.to_owned(),
            amount,
        })
    }

    /// The validated description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The validated amount.
    pub fn amount(&self) -> i64 {
        self.amount
    }
}


#[cfg(test)]
mod validated_expense_tests {
    use crate::Error;

    use super::ValidatedExpense;

    #[test]
    fn new_keeps_description_and_amount() {
        let expense = ValidatedExpense::new("coffee", 500).unwrap();

        assert_eq!(expense.description(), "coffee");
        assert_eq!(expense.amount(), 500);
    }

    #[test]
    fn new_fails_on_invalid_input() {
        assert_eq!(
            ValidatedExpense::new("coffee", -500),
            Err(Error::InvalidAmount(-500))
        );
    }
}
