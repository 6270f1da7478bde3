//! CSV Export functionality
//!
//! Exports the expense ledger in a spreadsheet-friendly layout.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::ExpenseRecord;

/// Write expenses as CSV, one row per record, in ledger order
pub fn export_expenses_csv<W: Write>(expenses: &[ExpenseRecord], writer: W) -> BudgetResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Category", "Note", "Amount", "Wallet"])
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.category.clone(),
                expense.note.clone(),
                expense.amount.to_string(),
                expense.wallet_id.to_string(),
            ])
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
