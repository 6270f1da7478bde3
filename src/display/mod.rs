//! Display formatting for terminal output
//!
//! Provides utilities for formatting session snapshots for terminal display,
//! including tables, progress bars and status indicators.

pub mod dashboard;
pub mod expense;
pub mod report;

pub use dashboard::{
    format_alert, format_badges, format_daily_budget, format_heatmap, format_monthly_summary,
    format_saving_goal, format_wallet_card,
};
pub use expense::{format_category_breakdown, format_category_totals, format_expense_list};
