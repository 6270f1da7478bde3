//! JSON Export functionality
//!
//! Exports a full session snapshot to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    Alert, CategoryShare, DailyBudget, DayRecord, ExpenseRecord, MonthlySummary, SavingGoal,
    Wallet,
};
use crate::reports::{earned_badges, expense_heatmap, Badge, HeatmapCell};
use crate::session::Session;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything the dashboard shows, captured at one instant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,

    pub wallet: Wallet,
    pub daily_budget: DailyBudget,
    pub expenses: Vec<ExpenseRecord>,
    pub monthly_summary: MonthlySummary,
    pub category_breakdown: Vec<CategoryShare>,
    pub saving_goal: SavingGoal,
    pub saving_goal_progress: u8,
    pub alert: Alert,
    pub expense_heatmap: Vec<HeatmapCell>,
    pub day_history: Vec<DayRecord>,
    pub badges: Vec<Badge>,
}

impl SessionSnapshot {
    pub fn from_session(session: &Session) -> BudgetResult<Self> {
        let expenses = session.expenses();
        let day_history = session.day_history();
        let saving_goal = session.saving_goal();

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            wallet: session.wallet(),
            daily_budget: session.daily_budget(),
            expense_heatmap: expense_heatmap(&expenses),
            expenses,
            monthly_summary: session.monthly_summary(),
            category_breakdown: session.category_breakdown(),
            saving_goal_progress: session.saving_goal_progress(&saving_goal)?,
            saving_goal,
            alert: session.alert(),
            badges: earned_badges(&day_history),
            day_history,
        })
    }
}

/// Export the session snapshot as pretty-printed JSON
pub fn export_snapshot_json<W: Write>(session: &Session, writer: &mut W) -> BudgetResult<()> {
    let snapshot = SessionSnapshot::from_session(session)?;

    serde_json::to_writer_pretty(&mut *writer, &snapshot)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
