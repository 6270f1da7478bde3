//! Derived report types
//!
//! These are never stored; the metrics service builds them from the ledger
//! on every read.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Income, spending and savings for the current month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub total_income: Money,
    pub total_spent: Money,
    /// `total_income − total_spent`; negative when the month is overspent
    pub total_saved: Money,
    /// `None` while nothing has been spent
    pub highest_spending_category: Option<String>,
}

impl fmt::Display for MonthlySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Income: {} | Spent: {} | Saved: {}",
            self.total_income, self.total_spent, self.total_saved
        )
    }
}

/// One row of the category breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Rounded share of total spend, 0 when nothing was spent
    pub percent_of_total: i64,
}

impl fmt::Display for CategoryShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}%)",
            self.category, self.amount, self.percent_of_total
        )
    }
}
