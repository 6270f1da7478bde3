//! Strongly-typed identifiers
//!
//! Expense ids are sequential within a session (`EXP101`, `EXP102`, ...);
//! wallet ids are opaque strings supplied by configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const EXPENSE_PREFIX: &str = "EXP";

/// Identifier of an expense record in the `EXP###` namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(u32);

impl ExpenseId {
    /// First id handed out by a fresh ledger
    pub const FIRST: ExpenseId = ExpenseId(101);

    pub const fn from_sequence(seq: u32) -> Self {
        Self(seq)
    }

    pub const fn sequence(&self) -> u32 {
        self.0
    }

    /// The id following this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", EXPENSE_PREFIX, self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(EXPENSE_PREFIX)
            .ok_or_else(|| IdParseError(s.to_string()))?;
        digits
            .parse()
            .map(Self)
            .map_err(|_| IdParseError(s.to_string()))
    }
}

impl Serialize for ExpenseId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Identifier of a wallet (e.g. `WLT5001`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletId(String);

impl WalletId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error for ids that do not match their namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError(String);

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid expense id: {}", self.0)
    }
}

impl std::error::Error for IdParseError {}
