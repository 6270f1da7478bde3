//! Expense heatmap
//!
//! Spend per calendar day, the data behind the dashboard's heatmap.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{ExpenseRecord, Money};

/// Total spend on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub total: Money,
    pub count: usize,
}

/// Per-day totals in date order; days without expenses are omitted
pub fn expense_heatmap(expenses: &[ExpenseRecord]) -> Vec<HeatmapCell> {
    let mut days: BTreeMap<NaiveDate, (Money, usize)> = BTreeMap::new();
    for expense in expenses {
        let entry = days.entry(expense.date).or_insert((Money::zero(), 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    days.into_iter()
        .map(|(date, (total, count))| HeatmapCell { date, total, count })
        .collect()
}

/// The day with the highest spend, earliest first on ties
pub fn busiest_day(cells: &[HeatmapCell]) -> Option<&HeatmapCell> {
    cells
        .iter()
        .fold(None, |best: Option<&HeatmapCell>, cell| match best {
            Some(b) if b.total >= cell.total => Some(b),
            _ => Some(cell),
        })
}
