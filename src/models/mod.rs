//! Core data models for daybudget
//!
//! This module contains the data structures of the budgeting domain: the
//! wallet, expense records, the daily budget, the saving goal and the derived
//! report types built from them.

pub mod alert;
pub mod budget;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod money;
pub mod summary;
pub mod wallet;

pub use alert::{Alert, AlertState};
pub use budget::{BudgetValidationError, DailyBudget, DayRecord};
pub use expense::{ExpenseInput, ExpenseRecord, ExpenseValidationError, NO_NOTE};
pub use goal::{GoalValidationError, SavingGoal};
pub use ids::{ExpenseId, WalletId};
pub use money::{Money, MoneyParseError};
pub use summary::{CategoryShare, MonthlySummary};
pub use wallet::{Wallet, WalletStatus};
