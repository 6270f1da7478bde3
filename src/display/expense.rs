//! Expense display formatting
//!
//! Formats ledger views (recent expenses, category totals and breakdown) as
//! terminal tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{CategoryShare, ExpenseRecord, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Note")]
    note: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Format expenses as a table, in the order given
pub fn format_expense_list(expenses: &[ExpenseRecord], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses added yet.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: e.date.format("%Y-%m-%d").to_string(),
        category: e.category.clone(),
        note: truncate(&e.note, 30),
        amount: e.amount.format_with_symbol(symbol),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// Format category totals without percentages
pub fn format_category_totals(totals: &[(String, Money)], symbol: &str) -> String {
    if totals.is_empty() {
        return "No category data.\n".to_string();
    }

    let mut output = String::new();
    for (category, amount) in totals {
        output.push_str(&format!(
            "{:20} {:>12}\n",
            truncate(category, 20),
            amount.format_with_symbol(symbol)
        ));
    }
    output
}

/// Format the category breakdown table
pub fn format_category_breakdown(rows: &[CategoryShare], symbol: &str) -> String {
    if rows.is_empty() {
        return "No category data.\n".to_string();
    }

    let rows = rows.iter().map(|r| CategoryRow {
        category: r.category.clone(),
        amount: r.amount.format_with_symbol(symbol),
        share: format!("{}% of this month", r.percent_of_total),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// Truncate a string to a maximum display width
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
