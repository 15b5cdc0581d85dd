//! Calendar-day parsing shared by entries and selectors.

use chrono::NaiveDate;

use crate::{EngineError, ResultEngine};

/// Format the bot has always written entry dates with.
pub const DEFAULT_DATE_FORMAT: &str = "%d-%b-%Y";

/// Format used by the web frontend and by the history view.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const ACCEPTED_FORMATS: [&str; 2] = [DEFAULT_DATE_FORMAT, ISO_DATE_FORMAT];

pub(crate) fn is_accepted(format: &str) -> bool {
    ACCEPTED_FORMATS.iter().any(|accepted| *accepted == format)
}

/// Parses the calendar day out of a date field.
///
/// A trailing time (`17-May-2023 14:30`) is ignored.
pub(crate) fn parse_day(value: &str) -> ResultEngine<NaiveDate> {
    let day = value
        .split_whitespace()
        .next()
        .ok_or(EngineError::InvalidDate)?;
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(day, format).ok())
        .ok_or(EngineError::InvalidDate)
}

/// Parses a day supplied by a caller. The whole value must be a date in one
/// of the accepted formats; a time or any other trailing text is rejected.
pub(crate) fn parse_new_day(value: &str) -> ResultEngine<NaiveDate> {
    let value = value.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or(EngineError::InvalidDate)
}

/// Rewrites the day of a date field, keeping whatever time followed it.
pub(crate) fn replace_day(field: &str, day: NaiveDate, format: &str) -> String {
    let rendered = day.format(format).to_string();
    match field.trim().split_once(char::is_whitespace) {
        Some((_, time)) => format!("{rendered} {}", time.trim_start()),
        None => rendered,
    }
}
