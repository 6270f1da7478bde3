//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64) to avoid floating-point
//! precision issues. Every currency the dashboard handles uses two decimal
//! places, so one major unit is always 100 minor units.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

const MINOR_PER_MAJOR: i64 = 100;

/// Symbols `parse` accepts in front of an amount
const CURRENCY_SYMBOLS: [&str; 5] = ["₹", "$", "€", "£", "¥"];

/// Represents a monetary amount stored as minor units (hundredths)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use daybudget::models::Money;
    /// let amount = Money::from_minor(15050); // 150.50
    /// assert_eq!(amount.major(), 150);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole major units
    ///
    /// # Examples
    /// ```
    /// use daybudget::models::Money;
    /// let amount = Money::from_major(666);
    /// assert_eq!(amount.minor(), 66600);
    /// ```
    pub const fn from_major(major: i64) -> Self {
        Self(major * MINOR_PER_MAJOR)
    }

    /// Convert a floating-point major amount, rejecting NaN and infinities
    pub fn try_from_f64(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite);
        }
        let minor = (value * MINOR_PER_MAJOR as f64).round();
        if minor.abs() >= i64::MAX as f64 {
            return Err(MoneyParseError::OutOfRange);
        }
        Ok(Self(minor as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole major-unit portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Get the minor-unit portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// `self + other`, or `None` on overflow
    pub fn checked_add(self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// `self - other`, or `None` on overflow
    pub fn checked_sub(self, other: Money) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Money) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Clamp negative amounts to zero
    pub fn floor_zero(self) -> Self {
        Self(self.0.max(0))
    }

    /// Round down to a whole number of major units
    pub fn floor_major(self) -> Self {
        Self(self.0.div_euclid(MINOR_PER_MAJOR) * MINOR_PER_MAJOR)
    }

    /// Divide into `parts` equal shares, rounding down to the minor unit
    ///
    /// Returns `None` when `parts` is zero.
    pub fn split_floor(self, parts: u32) -> Option<Self> {
        if parts == 0 {
            return None;
        }
        Some(Self(self.0.div_euclid(parts as i64)))
    }

    /// Multiply by `numerator / denominator`, rounding down to the minor unit
    pub fn scale_floor(self, numerator: u32, denominator: u32) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let scaled = (self.0 as i128 * numerator as i128).div_euclid(denominator as i128);
        i64::try_from(scaled).ok().map(Self)
    }

    /// `round(self / whole × 100)`, rounding halves up as a dashboard would
    ///
    /// Negative parts count as zero. Returns `None` when `whole` is not
    /// positive.
    pub fn percent_of(self, whole: Money) -> Option<i64> {
        if !whole.is_positive() {
            return None;
        }
        let part = self.0.max(0) as i128;
        let whole = whole.0 as i128;
        Some(((part * 200 + whole) / (whole * 2)) as i64)
    }

    /// Parse a money amount from a string in major units
    ///
    /// Accepts formats: "150", "150.5", "150.50", "-20", "₹150", "$10.50"
    ///
    /// At most two fractional digits are allowed, and the only prefix that
    /// may precede the digits is one of the known currency symbols.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let rest = CURRENCY_SYMBOLS
            .iter()
            .find_map(|symbol| rest.strip_prefix(symbol))
            .unwrap_or(rest);
        let rest = rest.replace(',', "");
        if rest.is_empty() {
            return Err(invalid());
        }

        let (whole, fraction) = match rest.split_once('.') {
            Some((w, f)) => (w, f),
            None => (rest.as_str(), ""),
        };

        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
            || (whole.is_empty() && fraction.is_empty())
        {
            return Err(invalid());
        }

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MoneyParseError::OutOfRange)?
        };

        // finer than one minor unit cannot be stored
        let minor: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            2 => fraction.parse().map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };

        let total = major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .ok_or(MoneyParseError::OutOfRange)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        if self.minor_part() == 0 {
            format!("{}{}{}", sign, symbol, self.major().abs())
        } else {
            format!(
                "{}{}{}.{:02}",
                sign,
                symbol,
                self.major().abs(),
                self.minor_part()
            )
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// Amounts travel through config files and exports in major units, so a
// config author writes `20000` rather than `2000000`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.minor_part() == 0 {
            serializer.serialize_i64(self.major())
        } else {
            serializer.serialize_f64(self.0 as f64 / MINOR_PER_MAJOR as f64)
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Whole(i64),
            Fractional(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Whole(major) => major
                .checked_mul(MINOR_PER_MAJOR)
                .map(Money)
                .ok_or_else(|| serde::de::Error::custom(MoneyParseError::OutOfRange)),
            Repr::Fractional(value) => Money::try_from_f64(value).map_err(serde::de::Error::custom),
            Repr::Text(text) => Money::parse(&text).map_err(serde::de::Error::custom),
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    NotFinite,
    OutOfRange,
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            Self::NotFinite => write!(f, "Amount must be a finite number"),
            Self::OutOfRange => write!(f, "Amount is out of range"),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_and_minor() {
        let m = Money::from_minor(15050);
        assert_eq!(m.major(), 150);
        assert_eq!(m.minor_part(), 50);
        assert_eq!(Money::from_major(666).minor(), 66600);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(15050).to_string(), "150.50");
        assert_eq!(Money::from_minor(0).to_string(), "0.00");
        assert_eq!(Money::from_minor(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_major(20000).format_with_symbol("₹"), "₹20000");
        assert_eq!(Money::from_minor(1050).format_with_symbol("$"), "$10.50");
        assert_eq!(Money::from_minor(-1050).format_with_symbol("$"), "-$10.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("150").unwrap(), Money::from_major(150));
        assert_eq!(Money::parse("10.5").unwrap().minor(), 1050);
        assert_eq!(Money::parse("₹1,500").unwrap(), Money::from_major(1500));
        assert_eq!(Money::parse("$10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("-20").unwrap(), Money::from_major(-20));
        assert_eq!(Money::parse(".75").unwrap().minor(), 75);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("NaN").is_err());
        assert!(Money::parse("inf").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("Food150").is_err());
        assert!(Money::parse("x-5").is_err());
        assert!(Money::parse("₹$5").is_err());
    }

    #[test]
    fn test_parse_known_symbols_only() {
        assert_eq!(Money::parse("€12").unwrap(), Money::from_major(12));
        assert_eq!(Money::parse("£0.99").unwrap().minor(), 99);
        assert_eq!(Money::parse("¥300").unwrap(), Money::from_major(300));
        assert_eq!(Money::parse("-₹20").unwrap(), Money::from_major(-20));
    }

    #[test]
    fn test_parse_rejects_sub_minor_precision() {
        assert!(matches!(
            Money::parse("150.559"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert_eq!(Money::parse("150.55").unwrap().minor(), 15055);
        assert_eq!(Money::parse("150.50").unwrap().minor(), 15050);
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = Money::from_minor(i64::MAX - 10);
        assert_eq!(big.checked_add(Money::from_minor(10)), Some(Money::from_minor(i64::MAX)));
        assert_eq!(big.checked_add(Money::from_minor(11)), None);
        assert_eq!(Money::from_minor(i64::MIN).checked_sub(Money::from_minor(1)), None);
        assert_eq!(big.saturating_add(big), Money::from_minor(i64::MAX));
        assert_eq!(
            Money::from_minor(i64::MIN).saturating_sub(big),
            Money::from_minor(i64::MIN)
        );
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(Money::try_from_f64(150.5).unwrap().minor(), 15050);
        assert_eq!(Money::try_from_f64(f64::NAN), Err(MoneyParseError::NotFinite));
        assert_eq!(
            Money::try_from_f64(f64::INFINITY),
            Err(MoneyParseError::NotFinite)
        );
    }

    #[test]
    fn test_floor_helpers() {
        let income = Money::from_major(20000);
        let per_day = income.split_floor(30).unwrap();
        assert_eq!(per_day.minor(), 66666);
        assert_eq!(per_day.floor_major(), Money::from_major(666));
        assert_eq!(income.split_floor(0), None);
        assert_eq!(Money::from_major(-5).floor_zero(), Money::zero());
        assert_eq!(
            income.scale_floor(13, 30).unwrap().minor(),
            866666
        );
    }

    #[test]
    fn test_percent_of() {
        let limit = Money::from_major(666);
        assert_eq!(Money::from_major(230).percent_of(limit), Some(35));
        assert_eq!(Money::from_major(566).percent_of(limit), Some(85));
        assert_eq!(Money::from_major(1).percent_of(Money::from_major(2)), Some(50));
        assert_eq!(Money::from_major(1).percent_of(Money::from_major(8)), Some(13));
        assert_eq!(Money::from_major(-5).percent_of(limit), Some(0));
        assert_eq!(Money::from_major(5).percent_of(Money::zero()), None);
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_major(10);
        let b = Money::from_major(4);
        assert_eq!((a - b).major(), 6);
        assert_eq!((-a).major(), -10);

        let total: Money = vec![a, b].iter().sum();
        assert_eq!(total, Money::from_major(14));
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Money::from_major(150)).unwrap(), "150");
        assert_eq!(serde_json::to_string(&Money::from_minor(15050)).unwrap(), "150.5");

        let from_int: Money = serde_json::from_str("20000").unwrap();
        assert_eq!(from_int, Money::from_major(20000));
        let from_float: Money = serde_json::from_str("150.25").unwrap();
        assert_eq!(from_float.minor(), 15025);
        let from_text: Money = serde_json::from_str("\"99.90\"").unwrap();
        assert_eq!(from_text.minor(), 9990);
    }
}
