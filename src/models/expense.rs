//! Expense model
//!
//! Expense records are immutable once created; the ledger only ever appends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, WalletId};
use super::money::Money;

/// Note stored when the caller supplies none
pub const NO_NOTE: &str = "No note";

/// A posted expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    #[serde(rename = "expenseId")]
    pub id: ExpenseId,

    /// Calendar day the money was spent
    pub date: NaiveDate,

    /// Always positive
    pub amount: Money,

    /// Free-form category name
    pub category: String,

    pub note: String,

    /// Wallet the expense was posted to
    pub wallet_id: WalletId,
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Caller-supplied data for a new expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseInput {
    pub amount: Money,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ExpenseInput {
    pub fn new(amount: Money, category: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            note: None,
            date: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Check amount and category without touching any state
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        Ok(())
    }

    /// Trimmed category name
    pub fn category_name(&self) -> &str {
        self.category.trim()
    }

    /// Trimmed note, or the placeholder when absent or blank
    pub fn note_or_placeholder(&self) -> String {
        match self.note.as_deref().map(str::trim) {
            Some(note) if !note.is_empty() => note.to_string(),
            _ => NO_NOTE.to_string(),
        }
    }
}

/// Validation errors for expense input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive (got {})", amount)
            }
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(ExpenseInput::new(Money::from_major(150), "Food")
            .validate()
            .is_ok());

        assert_eq!(
            ExpenseInput::new(Money::zero(), "Food").validate(),
            Err(ExpenseValidationError::NonPositiveAmount(Money::zero()))
        );
        assert!(matches!(
            ExpenseInput::new(Money::from_major(-3), "Food").validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));
        assert_eq!(
            ExpenseInput::new(Money::from_major(5), "   ").validate(),
            Err(ExpenseValidationError::EmptyCategory)
        );
    }

    #[test]
    fn test_note_placeholder() {
        let input = ExpenseInput::new(Money::from_major(80), "Travel");
        assert_eq!(input.note_or_placeholder(), NO_NOTE);

        let blank = input.clone().with_note("  ");
        assert_eq!(blank.note_or_placeholder(), NO_NOTE);

        let noted = input.with_note(" Auto fare ");
        assert_eq!(noted.note_or_placeholder(), "Auto fare");
    }

    #[test]
    fn test_input_from_json() {
        let input: ExpenseInput =
            serde_json::from_str(r#"{"amount": 150, "category": "Food", "date": "2025-01-17"}"#)
                .unwrap();
        assert_eq!(input.amount, Money::from_major(150));
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2025, 1, 17));
        assert_eq!(input.note, None);
    }

    #[test]
    fn test_display() {
        let record = ExpenseRecord {
            id: ExpenseId::FIRST,
            date: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            amount: Money::from_major(150),
            category: "Food".into(),
            note: "Lunch with friends".into(),
            wallet_id: WalletId::new("WLT5001"),
        };
        assert_eq!(record.to_string(), "EXP101 2025-01-17 Food 150.00");
    }
}
