use std::{fmt, str::FromStr};

use crate::EngineError;

/// Largest accepted integer part, in digits.
const MAX_INTEGER_DIGITS: usize = 15;

/// Expense amount represented as **integer cents**.
///
/// Entries keep their amount as text; this type is what the engine compares
/// and validates so that `50`, `50.0` and `50.00` are the same amount.
///
/// The store writes amounts in their shortest form with at least one
/// fractional digit:
///
/// ```rust
/// use engine::Amount;
///
/// assert_eq!("55".parse::<Amount>().unwrap().to_string(), "55.0");
/// assert_eq!("55.50".parse::<Amount>().unwrap().to_string(), "55.5");
/// assert_eq!("55.25".parse::<Amount>().unwrap().to_string(), "55.25");
/// ```
///
/// `FromStr` accepts an optional leading `+`/`-` and is used for amounts that
/// are already recorded. New costs go through [`Amount::parse_cost`], which is
/// stricter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Validates a new cost entered by the user.
    ///
    /// Only unsigned decimals are accepted (`55`, `55.0`, `0.5`), with at most
    /// two fractional digits, and the value must be strictly positive. Zero,
    /// negative and non-numeric strings all fail with
    /// [`EngineError::InvalidAmount`].
    pub fn parse_cost(s: &str) -> Result<Self, EngineError> {
        let trimmed = s.trim();
        if !trimmed.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(EngineError::InvalidAmount);
        }
        let amount: Amount = trimmed.parse()?;
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount);
        }
        Ok(amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / 100;
        let cents = abs % 100;
        if cents % 10 == 0 {
            write!(f, "{sign}{units}.{}", cents / 10)
        } else {
            write!(f, "{sign}{units}.{cents:02}")
        }
    }
}

impl FromStr for Amount {
    type Err = EngineError;

    /// Parses a decimal string into cents.
    ///
    /// Validation rules:
    /// - `.` is the only decimal separator (`,` separates entry fields)
    /// - max 2 fractional digits (rejects `12.345`)
    /// - max 15 integer digits
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidAmount;

        let trimmed = s.trim();
        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let (units_str, cents_str) = match rest.split_once('.') {
            Some((units, cents)) => (units, Some(cents)),
            None => (rest, None),
        };

        if units_str.is_empty()
            || units_str.len() > MAX_INTEGER_DIGITS
            || !units_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        let units: i64 = units_str.parse().map_err(|_| invalid())?;

        let cents: i64 = match cents_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => return Err(invalid()),
                }
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Amount(if negative { -total } else { total }))
    }
}
