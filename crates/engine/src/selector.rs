use chrono::NaiveDate;

use crate::{Amount, EngineError, ResultEngine, date};

/// Identifies the entry an edit applies to.
///
/// Built from the `Key=Value` strings the clients send, e.g.
/// `["Date=17-May-2023", "Category=Transport", "Amount=50.0"]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    pub day: NaiveDate,
    pub category: String,
    pub amount: Amount,
}

impl Selector {
    /// Keys are case-insensitive and the value is everything after the first
    /// `=`. Unknown keys are skipped; a later duplicate wins.
    pub fn parse<S: AsRef<str>>(items: &[S]) -> ResultEngine<Self> {
        let mut day = None;
        let mut category = None;
        let mut amount = None;

        for item in items {
            let item = item.as_ref();
            let (key, value) = item.split_once('=').ok_or(EngineError::InvalidInput)?;
            let value = value.trim();
            match key.trim().to_ascii_lowercase().as_str() {
                "date" => day = Some(value),
                "category" => category = Some(value),
                "amount" => amount = Some(value),
                other => tracing::debug!("ignoring selector key {other:?}"),
            }
        }

        let (Some(day), Some(category), Some(amount)) = (day, category, amount) else {
            return Err(EngineError::InvalidInput);
        };

        Ok(Selector {
            day: date::parse_day(day).map_err(|_| EngineError::InvalidInput)?,
            category: category.to_string(),
            amount: amount.parse().map_err(|_| EngineError::InvalidInput)?,
        })
    }
}
