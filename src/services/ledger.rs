//! Expense ledger
//!
//! Owns the wallet and the append-only list of expense records. Every posted
//! expense is taken out of the wallet balance in the same call, so
//! `current_balance == initial_balance − Σ amounts` holds after each append.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{ExpenseId, ExpenseInput, ExpenseRecord, Money, Wallet};

/// Append-only expense ledger for one wallet
#[derive(Debug, Clone)]
pub struct Ledger {
    wallet: Wallet,
    records: Vec<ExpenseRecord>,
    next_id: ExpenseId,
}

impl Ledger {
    /// Create an empty ledger for a wallet
    pub fn new(wallet: Wallet) -> Self {
        Self {
            wallet,
            records: Vec::new(),
            next_id: ExpenseId::FIRST,
        }
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// Check an expense without recording it
    pub fn check(&self, input: &ExpenseInput) -> BudgetResult<()> {
        input
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        if !self.wallet.accepts_expenses() {
            return Err(BudgetError::Validation(format!(
                "Wallet {} is {} and cannot take expenses",
                self.wallet.id, self.wallet.status
            )));
        }

        // every later sum over the ledger stays within the running total
        let fits = self.total_spent().checked_add(input.amount).is_some()
            && self.wallet.current_balance.checked_sub(input.amount).is_some();
        if !fits {
            return Err(BudgetError::Validation(format!(
                "Expense of {} is too large to record",
                input.amount
            )));
        }

        Ok(())
    }

    /// Append an expense dated `date` and debit the wallet
    ///
    /// Nothing changes when the input is rejected.
    pub fn record_expense(
        &mut self,
        input: &ExpenseInput,
        date: NaiveDate,
    ) -> BudgetResult<ExpenseRecord> {
        self.check(input)?;

        let record = ExpenseRecord {
            id: self.next_id,
            date,
            amount: input.amount,
            category: input.category_name().to_string(),
            note: input.note_or_placeholder(),
            wallet_id: self.wallet.id.clone(),
        };

        self.next_id = self.next_id.next();
        self.wallet.debit(record.amount);
        self.records.push(record.clone());

        info!(
            expense_id = %record.id,
            amount = %record.amount,
            category = %record.category,
            balance = %self.wallet.current_balance,
            "Recorded expense"
        );

        if self.wallet.is_overdrawn() {
            warn!(
                wallet_id = %self.wallet.id,
                balance = %self.wallet.current_balance,
                "Wallet balance is negative"
            );
        }

        Ok(record)
    }

    /// All records in insertion order
    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by id
    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Up to `n` records, most recently recorded first
    pub fn recent_expenses(&self, n: usize) -> Vec<ExpenseRecord> {
        self.records.iter().rev().take(n).cloned().collect()
    }

    /// Total per category, in order of each category's first use
    pub fn totals_by_category(&self) -> Vec<(String, Money)> {
        category_totals(self.records.iter())
    }

    /// Sum of every recorded amount
    pub fn total_spent(&self) -> Money {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Records dated in the same calendar month as `day`
    pub fn expenses_in_month(&self, day: NaiveDate) -> impl Iterator<Item = &ExpenseRecord> {
        self.records
            .iter()
            .filter(move |r| r.date.year() == day.year() && r.date.month() == day.month())
    }
}

/// Group amounts by category, keeping first-seen order
pub(crate) fn category_totals<'a>(
    records: impl Iterator<Item = &'a ExpenseRecord>,
) -> Vec<(String, Money)> {
    let mut totals: Vec<(String, Money)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.category.as_str()) {
            Some(&i) => totals[i].1 += record.amount,
            None => {
                index.insert(record.category.as_str(), totals.len());
                totals.push((record.category.clone(), record.amount));
            }
        }
    }

    totals
}
