//! Money type for representing rupee amounts
//!
//! Internally stores amounts in paise (i64) to avoid floating-point precision
//! issues in ledger and budget state. Floating point only appears in the
//! projection math, which is inherently fractional.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as paise (hundredths of a rupee)
///
/// `Money` itself may be negative: derived figures such as "remaining budget"
/// go below zero. Non-negativity of stored amounts is enforced where records
/// and budget limits are created, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from paise
    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    /// Create a Money amount from whole rupees
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in paise
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Get the whole rupees portion (truncated toward zero)
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Get the paise portion (0-99)
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as fractional rupees, for projection seeds and percentages
    pub fn as_rupees(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Take a fraction of this amount, rounded to the nearest paisa
    pub fn fraction(&self, frac: f64) -> Self {
        Self((self.0 as f64 * frac).round() as i64)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "250", "250.5", "250.50", "-250.50", "₹250.50"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('₹').unwrap_or(s);

        let paise = if let Some((whole, frac)) = s.split_once('.') {
            let rupees: i64 = whole
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate the fractional part to 2 digits
            let paise: i64 = match frac.len() {
                0 => 0,
                1 => {
                    frac.parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            rupees * 100 + paise
        } else {
            // Integer format - whole rupees
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -paise } else { paise }))
    }

    /// Format as a plain 2-decimal string with no currency symbol,
    /// as used by the CSV ledger format
    pub fn to_plain_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.rupees().abs(), self.paise_part())
        } else {
            format!("{}.{:02}", self.rupees(), self.paise_part())
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
        if self.is_negative() {
            write!(f, "-₹{}.{:02}", self.rupees().abs(), self.paise_part())
        } else {
            write!(f, "₹{}.{:02}", self.rupees(), self.paise_part())
        }
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

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let m = Money::from_paise(25050);
        assert_eq!(m.paise(), 25050);
        assert_eq!(m.rupees(), 250);
        assert_eq!(m.paise_part(), 50);
    }

    #[test]
    fn test_from_rupees() {
        let m = Money::from_rupees(250);
        assert_eq!(m.paise(), 25000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(25050)), "₹250.50");
        assert_eq!(format!("{}", Money::from_paise(0)), "₹0.00");
        assert_eq!(format!("{}", Money::from_paise(-25050)), "-₹250.50");
        assert_eq!(format!("{}", Money::from_paise(5)), "₹0.05");
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Money::from_paise(25050).to_plain_string(), "250.50");
        assert_eq!(Money::from_paise(5).to_plain_string(), "0.05");
        assert_eq!(Money::from_paise(-1050).to_plain_string(), "-10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((-a).paise(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("250.50").unwrap().paise(), 25050);
        assert_eq!(Money::parse("₹250.50").unwrap().paise(), 25050);
        assert_eq!(Money::parse("-250.50").unwrap().paise(), -25050);
        assert_eq!(Money::parse("250").unwrap().paise(), 25000);
        assert_eq!(Money::parse("250.5").unwrap().paise(), 25050);
        assert_eq!(Money::parse("0.05").unwrap().paise(), 5);
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_plain_round_trip() {
        let m = Money::from_paise(123456);
        assert_eq!(Money::parse(&m.to_plain_string()).unwrap(), m);
    }

    #[test]
    fn test_fraction() {
        let pocket = Money::from_rupees(1000);
        assert_eq!(pocket.fraction(0.2).paise(), 20000);
        // 1/7 of 1000.00 rounds to 142.86
        assert_eq!(pocket.fraction(1.0 / 7.0).paise(), 14286);
    }

    #[test]
    fn test_as_rupees() {
        assert_eq!(Money::from_paise(25050).as_rupees(), 250.5);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_paise(100),
            Money::from_paise(200),
            Money::from_paise(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.paise(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_paise(25050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "25050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
