//! Alert evaluator
//!
//! Two-state machine over today's budget usage. Within a day usage only
//! grows, so Normal → Warning is the only transition a mutation can cause;
//! Warning → Normal happens when a new day starts.

use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Alert, AlertState};

/// Default warning threshold, in percent of the daily limit
pub const DEFAULT_WARNING_AT: u8 = 80;

#[derive(Debug, Clone)]
pub struct AlertEvaluator {
    warning_at: u8,
    state: AlertState,
    percent_used: u8,
}

impl AlertEvaluator {
    /// Create an evaluator in the Normal state
    pub fn new(warning_at: u8) -> BudgetResult<Self> {
        if warning_at > 100 {
            return Err(BudgetError::Config(format!(
                "warningAt must be between 0 and 100 (got {})",
                warning_at
            )));
        }

        Ok(Self {
            warning_at,
            state: AlertState::Normal,
            percent_used: 0,
        })
    }

    pub fn warning_at(&self) -> u8 {
        self.warning_at
    }

    pub fn state(&self) -> AlertState {
        self.state
    }

    /// Re-evaluate after an expense
    pub fn observe(&mut self, percent_used: u8) {
        self.percent_used = percent_used;
        if self.state == AlertState::Normal && percent_used >= self.warning_at {
            self.state = AlertState::Warning;
            warn!(
                percent_used,
                warning_at = self.warning_at,
                "Daily budget warning threshold reached"
            );
        }
    }

    /// Re-evaluate at the start of a new day
    pub fn start_day(&mut self, percent_used: u8) {
        let previous = self.state;
        self.percent_used = percent_used;
        self.state = if percent_used >= self.warning_at {
            AlertState::Warning
        } else {
            AlertState::Normal
        };

        if previous != self.state {
            info!(from = %previous, to = %self.state, "Alert state changed on new day");
        }
    }

    /// Current state and its message
    pub fn current(&self) -> Alert {
        let message = match self.state {
            AlertState::Normal => "Within budget".to_string(),
            AlertState::Warning if self.percent_used >= 100 => {
                "You have used all of today's budget".to_string()
            }
            AlertState::Warning => {
                format!("You have reached {}% of today's budget", self.warning_at)
            }
        };

        Alert {
            state: self.state,
            message,
            percent_used: self.percent_used,
        }
    }
}

impl Default for AlertEvaluator {
    fn default() -> Self {
        Self {
            warning_at: DEFAULT_WARNING_AT,
            state: AlertState::Normal,
            percent_used: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_normal() {
        let alert = AlertEvaluator::default().current();
        assert_eq!(alert.state, AlertState::Normal);
        assert_eq!(alert.message, "Within budget");
    }

    #[test]
    fn test_rejects_threshold_above_100() {
        assert!(AlertEvaluator::new(101).unwrap_err().is_config());
        assert!(AlertEvaluator::new(100).is_ok());
    }

    #[test]
    fn test_warning_at_threshold() {
        let mut eval = AlertEvaluator::new(80).unwrap();
        eval.observe(35);
        assert_eq!(eval.state(), AlertState::Normal);

        eval.observe(80);
        let alert = eval.current();
        assert!(alert.is_warning());
        assert_eq!(alert.message, "You have reached 80% of today's budget");
        assert_eq!(alert.percent_used, 80);
    }

    #[test]
    fn test_warning_is_sticky_within_day() {
        let mut eval = AlertEvaluator::new(80).unwrap();
        eval.observe(85);
        eval.observe(10);
        assert_eq!(eval.state(), AlertState::Warning);
    }

    #[test]
    fn test_new_day_clears_warning() {
        let mut eval = AlertEvaluator::new(80).unwrap();
        eval.observe(100);
        assert_eq!(eval.current().message, "You have used all of today's budget");

        eval.start_day(0);
        assert_eq!(eval.state(), AlertState::Normal);
    }

    #[test]
    fn test_zero_threshold_always_warns() {
        let mut eval = AlertEvaluator::new(0).unwrap();
        eval.start_day(0);
        assert!(eval.current().is_warning());
    }
}
