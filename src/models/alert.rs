//! Budget alert model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert state for today's budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    /// Spending is below the warning threshold
    #[default]
    Normal,
    /// Spending reached the warning threshold
    Warning,
}

impl fmt::Display for AlertState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// Current alert with the text the dashboard shows for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub state: AlertState,
    pub message: String,
    pub percent_used: u8,
}

impl Alert {
    pub fn is_warning(&self) -> bool {
        self.state == AlertState::Warning
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.state, self.message)
    }
}
