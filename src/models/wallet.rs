//! Wallet model
//!
//! The wallet holds the session's money: a fixed opening balance and the
//! current balance after every posted expense.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::WalletId;
use super::money::Money;

/// Lifecycle status of a wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum WalletStatus {
    /// Accepts expenses
    #[default]
    Active,
    /// Temporarily blocked from spending
    Frozen,
    /// Permanently closed
    Closed,
}

impl WalletStatus {
    /// Parse wallet status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "frozen" => Some(Self::Frozen),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for WalletStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Frozen => write!(f, "FROZEN"),
            Self::Closed => write!(f, "CLOSED"),
        }
    }
}

/// A spending wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Unique identifier
    #[serde(rename = "walletId")]
    pub id: WalletId,

    /// Display name (e.g., "Main Monthly Wallet")
    #[serde(rename = "walletName")]
    pub name: String,

    /// ISO currency code (e.g., "INR")
    pub currency: String,

    /// Balance when the session started; never changes
    pub initial_balance: Money,

    /// Balance after every posted expense
    pub current_balance: Money,

    pub status: WalletStatus,
}

impl Wallet {
    /// Create a wallet whose current balance equals its opening balance
    pub fn new(
        id: WalletId,
        name: impl Into<String>,
        currency: impl Into<String>,
        initial_balance: Money,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            currency: currency.into(),
            initial_balance,
            current_balance: initial_balance,
            status: WalletStatus::Active,
        }
    }

    /// Whether new expenses may be posted
    pub fn accepts_expenses(&self) -> bool {
        self.status == WalletStatus::Active
    }

    /// Take a posted expense out of the balance
    pub(crate) fn debit(&mut self, amount: Money) {
        self.current_balance -= amount;
    }

    /// Total posted against this wallet since the session started
    pub fn spent(&self) -> Money {
        self.initial_balance - self.current_balance
    }

    /// Negative balance is a warning condition, never a hard failure
    pub fn is_overdrawn(&self) -> bool {
        self.current_balance.is_negative()
    }

    /// Display symbol for the wallet currency
    pub fn currency_symbol(&self) -> &str {
        currency_symbol(&self.currency)
    }

    pub fn format_amount(&self, amount: Money) -> String {
        amount.format_with_symbol(self.currency_symbol())
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Map an ISO currency code to the symbol shown on the dashboard
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "INR" => "₹",
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_wallet() -> Wallet {
        Wallet::new(
            WalletId::new("WLT5001"),
            "Main Monthly Wallet",
            "INR",
            Money::from_major(20000),
        )
    }

    #[test]
    fn test_new_wallet() {
        let wallet = test_wallet();
        assert_eq!(wallet.current_balance, wallet.initial_balance);
        assert_eq!(wallet.status, WalletStatus::Active);
        assert!(wallet.accepts_expenses());
        assert_eq!(wallet.spent(), Money::zero());
    }

    #[test]
    fn test_debit_and_overdraw() {
        let mut wallet = test_wallet();
        wallet.debit(Money::from_major(7500));
        assert_eq!(wallet.current_balance, Money::from_major(12500));
        assert_eq!(wallet.spent(), Money::from_major(7500));
        assert!(!wallet.is_overdrawn());

        wallet.debit(Money::from_major(13000));
        assert!(wallet.is_overdrawn());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(WalletStatus::parse("ACTIVE"), Some(WalletStatus::Active));
        assert_eq!(WalletStatus::parse("frozen"), Some(WalletStatus::Frozen));
        assert_eq!(WalletStatus::parse("gone"), None);
    }

    #[test]
    fn test_frozen_wallet_rejects_expenses() {
        let mut wallet = test_wallet();
        wallet.status = WalletStatus::Frozen;
        assert!(!wallet.accepts_expenses());
    }

    #[test]
    fn test_currency_formatting() {
        let wallet = test_wallet();
        assert_eq!(wallet.format_amount(Money::from_major(12500)), "₹12500");
        assert_eq!(currency_symbol("CHF"), "CHF");
    }

    #[test]
    fn test_serialization_keys() {
        let json = serde_json::to_value(test_wallet()).unwrap();
        assert_eq!(json["walletId"], "WLT5001");
        assert_eq!(json["walletName"], "Main Monthly Wallet");
        assert_eq!(json["initialBalance"], 20000);
        assert_eq!(json["status"], "ACTIVE");
    }
}
