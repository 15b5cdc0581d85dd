use tokio::sync::Mutex;

pub use amount::Amount;
pub use date::{DEFAULT_DATE_FORMAT, ISO_DATE_FORMAT};
pub use entry::Entry;
pub use error::EngineError;
pub use ops::Change;
pub use selector::Selector;
pub use store::{Storage, UserRecord, Users};

use store::Store;

mod amount;
mod date;
mod entry;
mod error;
mod ops;
mod selector;
mod store;

type ResultEngine<T> = Result<T, EngineError>;

/// Owns the expense store and applies edits to it.
///
/// Every operation loads the whole document, changes it and writes it back
/// while holding the store lock, so edits made through one engine are never
/// lost to each other.
#[derive(Debug)]
pub struct Engine {
    store: Mutex<Store>,
    date_format: String,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    storage: Storage,
    users: Users,
    date_format: Option<String>,
}

impl EngineBuilder {
    /// Where the document lives. Defaults to memory.
    pub fn storage(mut self, storage: Storage) -> EngineBuilder {
        self.storage = storage;
        self
    }

    /// Initial content of a memory store. Ignored for file stores.
    pub fn users(mut self, users: Users) -> EngineBuilder {
        self.users = users;
        self
    }

    /// Must be one of the formats entry dates are parsed with, otherwise
    /// edited dates could never be selected again.
    pub fn date_format(mut self, format: &str) -> EngineBuilder {
        self.date_format = Some(format.to_string());
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        let date_format = self
            .date_format
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());
        if !date::is_accepted(&date_format) {
            return Err(EngineError::UnsupportedDateFormat(date_format));
        }

        let store = Store::new(self.storage, self.users);
        // An unreadable document fails the build.
        let users = store.load().await?;
        tracing::info!("expense store ready with {} users", users.len());

        Ok(Engine {
            store: Mutex::new(store),
            date_format,
        })
    }
}
