use std::{fmt, iter::Sum, ops::Add, str::FromStr};

use serde::{Serialize, Serializer};

/// Error returned when a price is not a non-negative amount with at most two
/// decimal places.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price {text:?}: expected a non-negative amount such as 100.00")]
pub struct PriceError {
    text: String,
}

impl PriceError {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }
}

/// An exact amount of money, held in whole cents so that sums compare
/// exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    /// Parse a decimal amount such as `100`, `100.5` or `100.50`.
    ///
    /// Digits past the second decimal place must be zero. A minus sign is
    /// only accepted on zero, which is stored as plain zero.
    pub fn parse(text: &str) -> Result<Self, PriceError> {
        let err = || PriceError::new(text);

        let trimmed = text.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(err());
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let (fraction, rest) = fraction.split_at(fraction.len().min(2));
        if rest.bytes().any(|b| b != b'0') {
            return Err(err());
        }

        let whole = if whole.is_empty() {
            0
        } else {
            whole.parse::<u64>().map_err(|_| err())?
        };
        let fraction = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| err())? * 10,
            _ => fraction.parse::<u64>().map_err(|_| err())?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(err)?;

        if negative && cents > 0 {
            return Err(err());
        }

        Ok(Self { cents })
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
