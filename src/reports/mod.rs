//! Reports module
//!
//! Derived views beyond the core metrics:
//! - Expense heatmap: spend per calendar day
//! - Badges: rewards earned from closed days

pub mod badges;
pub mod heatmap;

pub use badges::{earned_badges, longest_under_budget_streak, Badge};
pub use heatmap::{busiest_day, expense_heatmap, HeatmapCell};
