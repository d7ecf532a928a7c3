use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1:?} and {2:?}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}: {1}")]
    Parse(&'static str, String),
}

/// Fixed-point currency amount, stored as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(pub i64);

impl Money {
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    pub const fn from_units(units: i64) -> Self {
        return Self(units * 100);
    }

    /// Parses a decimal string with up to two decimal places.
    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = digits.split('.');

        let units = parts.next().unwrap_or("");
        let cents = parts.next().unwrap_or("");

        if parts.next().is_some() {
            Err(MoneyError::Parse(
                "Too many decimal points",
                string.to_string(),
            ))?
        }

        if cents.len() > 2 {
            Err(MoneyError::Parse(
                "More than two decimal places",
                string.to_string(),
            ))?
        }

        let units: i64 = if units.is_empty() {
            0
        } else {
            units
                .parse()
                .map_err(|_| MoneyError::Parse("Invalid unit digits", string.to_string()))?
        };

        // Right-pad so "5.4" means 40 cents, not 4
        let cents: i64 = if cents.is_empty() {
            0
        } else {
            format!("{:0<2}", cents)
                .parse()
                .map_err(|_| MoneyError::Parse("Invalid cent digits", string.to_string()))?
        };

        let value = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| MoneyError::Parse("Amount out of range", string.to_string()))?;

        if negative {
            return Ok(Money(-value));
        }

        return Ok(Money(value));
    }

    pub fn is_positive(&self) -> bool {
        return self.0 > 0;
    }

    pub fn add(&mut self, other: &Self) -> Result {
        let a = self.0;
        let b = other.0;

        if b > 0 && Money::MAX.0 - b < a {
            Err(MoneyError::Overflow("add", Money(a), *other))?
        }

        if b < 0 && Money::MIN.0 - b > a {
            Err(MoneyError::Underflow("add", Money(a), *other))?
        }

        self.0 += b;

        return Ok(());
    }

    pub fn sub(&mut self, other: &Self) -> Result {
        let other = Self(-1 * other.0);
        return self.add(&other);
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        return write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100);
    }
}
