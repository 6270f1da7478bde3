//! daybudget - daily allowance budgeting for a single wallet
//!
//! This library turns a monthly income into a per-day spending allowance,
//! records expenses against it, and derives the views a budgeting dashboard
//! needs: remaining allowance, monthly summary, category breakdown, saving
//! goal progress and a threshold alert.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Session settings and config path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, wallet, expenses, budget, goal, alert)
//! - `services`: Ledger, budget allocator, metrics and alert evaluator
//! - `session`: The single owner that ties the services together
//! - `reports`: Derived views (heatmap, badges)
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use daybudget::config::SessionConfig;
//! use daybudget::models::{ExpenseInput, Money};
//! use daybudget::Session;
//!
//! let today = chrono::Local::now().date_naive();
//! let mut session = Session::new(&SessionConfig::sample(), today)?;
//! session.record_expense(ExpenseInput::new(Money::from_major(150), "Food"))?;
//! println!("{}", session.daily_budget().today_remaining);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;

pub use error::{BudgetError, BudgetResult};
pub use session::Session;
