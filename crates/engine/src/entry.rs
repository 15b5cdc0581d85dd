//! A single recorded expense.
//!
//! Entries live in the store as one comma-separated string per expense:
//! `date,category,amount,currency`. The fields are kept as written so an edit
//! only touches the field it targets.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{Amount, EngineError, date};

const SEPARATOR: char = ',';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub date: String,
    pub category: String,
    pub amount: String,
    /// Older records were written without a currency symbol.
    pub currency: Option<String>,
}

impl Entry {
    /// Calendar day of the expense.
    pub fn day(&self) -> Result<NaiveDate, EngineError> {
        date::parse_day(&self.date)
    }

    pub fn amount(&self) -> Result<Amount, EngineError> {
        self.amount.parse()
    }

    /// `true` when the entry was recorded on `day`, under `category`, for
    /// `amount`.
    pub fn matches(&self, day: NaiveDate, category: &str, amount: Amount) -> bool {
        self.day().is_ok_and(|d| d == day)
            && self.amount().is_ok_and(|a| a == amount)
            && category_key(&self.category) == category_key(category)
    }
}

impl FromStr for Entry {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(SEPARATOR).collect();
        let (when, category, amount, currency) = match fields.as_slice() {
            [when, category, amount] => (*when, *category, *amount, None),
            [when, category, amount, currency] => (*when, *category, *amount, Some(*currency)),
            _ => return Err(EngineError::InvalidInput),
        };
        Ok(Entry {
            date: when.to_string(),
            category: category.to_string(),
            amount: amount.to_string(),
            currency: currency.map(str::to_string),
        })
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.date, self.category, self.amount
        )?;
        if let Some(currency) = &self.currency {
            write!(f, "{SEPARATOR}{currency}")?;
        }
        Ok(())
    }
}

/// Validates a category before it is written into an entry.
pub(crate) fn clean_category(input: &str) -> Result<String, EngineError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.contains(SEPARATOR) {
        return Err(EngineError::InvalidCategory);
    }
    Ok(trimmed.to_string())
}

/// Comparison key for categories: accents folded, lowercase, punctuation and
/// whitespace collapsed to single spaces.
pub(crate) fn category_key(input: &str) -> String {
    let mut out = String::new();
    let mut prev_space = false;
    for ch in input.trim().nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
            prev_space = false;
        } else if !out.is_empty() && !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }
    out.trim_end().to_string()
}
