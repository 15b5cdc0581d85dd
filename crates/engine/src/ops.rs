//! Edits applied to a user's history.

use chrono::NaiveDate;

use crate::{Amount, Engine, EngineError, Entry, ResultEngine, Selector, date, entry};

/// Field an edit rewrites, with the raw value the caller sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change<'a> {
    Cost(&'a str),
    Category(&'a str),
    Date(&'a str),
}

/// A [`Change`] whose value passed validation.
enum Update {
    Cost(Amount),
    Category(String),
    Date(NaiveDate),
}

impl Change<'_> {
    fn raw(&self) -> &str {
        match self {
            Change::Cost(value) | Change::Category(value) | Change::Date(value) => value,
        }
    }

    fn validate(self) -> ResultEngine<Update> {
        match self {
            Change::Cost(value) => Amount::parse_cost(value).map(Update::Cost),
            Change::Category(value) => entry::clean_category(value).map(Update::Category),
            Change::Date(value) => date::parse_new_day(value).map(Update::Date),
        }
    }
}

impl Update {
    fn apply(self, entry: &mut Entry, date_format: &str) {
        match self {
            Update::Cost(amount) => entry.amount = amount.to_string(),
            Update::Category(category) => entry.category = category,
            Update::Date(day) => entry.date = date::replace_day(&entry.date, day, date_format),
        }
    }
}

impl Engine {
    /// Replaces the amount of the entry picked by `selected_data`.
    pub async fn edit_cost(
        &self,
        user_id: &str,
        selected_data: &[String],
        new_cost: &str,
    ) -> ResultEngine<Entry> {
        self.edit(user_id, selected_data, Change::Cost(new_cost))
            .await
    }

    /// Replaces the category of the entry picked by `selected_data`.
    pub async fn edit_category(
        &self,
        user_id: &str,
        selected_data: &[String],
        new_category: &str,
    ) -> ResultEngine<Entry> {
        self.edit(user_id, selected_data, Change::Category(new_category))
            .await
    }

    /// Replaces the day of the entry picked by `selected_data`.
    pub async fn edit_date(
        &self,
        user_id: &str,
        selected_data: &[String],
        new_date: &str,
    ) -> ResultEngine<Entry> {
        self.edit(user_id, selected_data, Change::Date(new_date))
            .await
    }

    /// Applies `change` to the first entry of `user_id` matching
    /// `selected_data` and persists the store.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// empty inputs, unknown user, invalid new value, bad selector, no
    /// matching entry. Returns the entry as written.
    pub async fn edit(
        &self,
        user_id: &str,
        selected_data: &[String],
        change: Change<'_>,
    ) -> ResultEngine<Entry> {
        if user_id.is_empty() || selected_data.is_empty() || change.raw().is_empty() {
            return Err(EngineError::InvalidInput);
        }

        let mut store = self.store.lock().await;
        let mut users = store.load().await?;
        let record = users.get_mut(user_id).ok_or(EngineError::UserNotFound)?;

        let update = change.validate()?;
        let selector = Selector::parse(selected_data)?;

        let (index, mut entry) = record
            .data
            .iter()
            .enumerate()
            .find_map(|(index, raw)| match raw.parse::<Entry>() {
                Ok(entry) if entry.matches(selector.day, &selector.category, selector.amount) => {
                    Some((index, entry))
                }
                Ok(_) => None,
                Err(_) => {
                    tracing::warn!("skipping malformed entry {raw:?} of user {user_id}");
                    None
                }
            })
            .ok_or(EngineError::EntryNotFound)?;

        update.apply(&mut entry, &self.date_format);
        record.data[index] = entry.to_string();
        store.save(users).await?;

        tracing::info!("user {user_id}: entry {index} now {entry}");
        Ok(entry)
    }

    /// Parseable entries of `user_id`, oldest first.
    pub async fn history(&self, user_id: &str) -> ResultEngine<Vec<Entry>> {
        if user_id.is_empty() {
            return Err(EngineError::InvalidInput);
        }

        let store = self.store.lock().await;
        let users = store.load().await?;
        let record = users.get(user_id).ok_or(EngineError::UserNotFound)?;

        Ok(record
            .data
            .iter()
            .filter_map(|raw| raw.parse::<Entry>().ok())
            .collect())
    }
}
