//! Session settings for daybudget
//!
//! Everything a session needs at start-up: the wallet, monthly income, the
//! warning threshold and the saving goal. Settings are validated once, before
//! any session is built from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    DailyBudget, ExpenseInput, Money, SavingGoal, Wallet, WalletId, WalletStatus,
};
use crate::services::DEFAULT_WARNING_AT;

/// Wallet settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSettings {
    pub wallet_id: String,
    pub wallet_name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub initial_balance: Money,
    #[serde(default)]
    pub status: WalletStatus,
}

/// Income and daily-allowance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBudgetSettings {
    pub monthly_income: Money,
    /// Signed so that a negative value is reported as a configuration error
    pub days_in_month: i64,
    #[serde(default)]
    pub carry_forward_enabled: bool,
    #[serde(default = "default_true")]
    pub overspend_adjustment: bool,
}

/// Alert settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettings {
    #[serde(default = "default_warning_at")]
    pub warning_at: i64,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            warning_at: default_warning_at(),
        }
    }
}

/// Saving goal settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingGoalSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub target_amount: Money,
    pub remaining_days: i64,
}

/// Configuration consumed when a session starts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    pub wallet: WalletSettings,

    pub daily_budget: DailyBudgetSettings,

    #[serde(default)]
    pub alerts: AlertSettings,

    pub saving_goal: SavingGoalSettings,

    /// First day of the session; the caller's "today" when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Expenses replayed through the ledger when the session starts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub opening_expenses: Vec<ExpenseInput>,
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_true() -> bool {
    true
}

fn default_warning_at() -> i64 {
    DEFAULT_WARNING_AT as i64
}

impl SessionConfig {
    /// The demo dashboard configuration
    pub fn sample() -> Self {
        Self {
            wallet: WalletSettings {
                wallet_id: "WLT5001".to_string(),
                wallet_name: "Main Monthly Wallet".to_string(),
                currency: default_currency(),
                initial_balance: Money::from_major(20000),
                status: WalletStatus::Active,
            },
            daily_budget: DailyBudgetSettings {
                monthly_income: Money::from_major(20000),
                days_in_month: 30,
                carry_forward_enabled: true,
                overspend_adjustment: true,
            },
            alerts: AlertSettings::default(),
            saving_goal: SavingGoalSettings {
                enabled: true,
                target_amount: Money::from_major(3000),
                remaining_days: 13,
            },
            start_date: None,
            opening_expenses: Vec::new(),
        }
    }

    /// Load settings from a JSON or YAML file, chosen by extension
    pub fn load(path: &Path) -> BudgetResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BudgetError::Io(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: SessionConfig = if is_yaml(path) {
            serde_yaml::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse config file: {}", e))
            })?
        } else {
            serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse config file: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save settings to disk in the format matching the extension
    pub fn save(&self, path: &Path) -> BudgetResult<()> {
        let contents = if is_yaml(path) {
            serde_yaml::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };

        std::fs::write(path, contents).map_err(|e| {
            BudgetError::Io(format!("Failed to write config file {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Check every structural constraint
    pub fn validate(&self) -> BudgetResult<()> {
        if self.wallet.wallet_id.trim().is_empty() {
            return Err(BudgetError::Config("walletId cannot be empty".into()));
        }

        if !(0..=100).contains(&self.alerts.warning_at) {
            return Err(BudgetError::Config(format!(
                "warningAt must be between 0 and 100 (got {})",
                self.alerts.warning_at
            )));
        }

        if self.saving_goal.remaining_days < 0 {
            return Err(BudgetError::Config(format!(
                "savingGoal.remainingDays cannot be negative (got {})",
                self.saving_goal.remaining_days
            )));
        }

        // building the parts runs the remaining checks
        self.daily_budget(NaiveDate::MIN)?;
        self.saving_goal()?;
        Ok(())
    }

    pub fn wallet(&self) -> Wallet {
        let mut wallet = Wallet::new(
            WalletId::new(self.wallet.wallet_id.trim()),
            self.wallet.wallet_name.clone(),
            self.wallet.currency.clone(),
            self.wallet.initial_balance,
        );
        wallet.status = self.wallet.status;
        wallet
    }

    /// Daily budget whose first day is `today`
    pub fn daily_budget(&self, today: NaiveDate) -> BudgetResult<DailyBudget> {
        let settings = &self.daily_budget;
        if settings.days_in_month <= 0 {
            return Err(BudgetError::Config(format!(
                "daysInMonth must be positive (got {})",
                settings.days_in_month
            )));
        }
        let days = u32::try_from(settings.days_in_month).map_err(|_| {
            BudgetError::Config(format!(
                "daysInMonth is too large ({})",
                settings.days_in_month
            ))
        })?;

        DailyBudget::new(
            settings.monthly_income,
            days,
            settings.carry_forward_enabled,
            settings.overspend_adjustment,
            today,
        )
        .map_err(|e| BudgetError::Config(e.to_string()))
    }

    pub fn saving_goal(&self) -> BudgetResult<SavingGoal> {
        let remaining_days = u32::try_from(self.saving_goal.remaining_days).map_err(|_| {
            BudgetError::Config(format!(
                "savingGoal.remainingDays is out of range ({})",
                self.saving_goal.remaining_days
            ))
        })?;

        SavingGoal::new(
            self.saving_goal.enabled,
            self.saving_goal.target_amount,
            remaining_days,
        )
        .map_err(|e| BudgetError::Config(e.to_string()))
    }

    /// Validated warning threshold
    pub fn warning_at(&self) -> BudgetResult<u8> {
        u8::try_from(self.alerts.warning_at)
            .ok()
            .filter(|w| *w <= 100)
            .ok_or_else(|| {
                BudgetError::Config(format!(
                    "warningAt must be between 0 and 100 (got {})",
                    self.alerts.warning_at
                ))
            })
    }

    /// The configured start date, or `today` when none is set
    pub fn start_date_or(&self, today: NaiveDate) -> NaiveDate {
        self.start_date.unwrap_or(today)
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}
