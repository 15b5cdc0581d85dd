//! JSON document holding every user's expense history.
//!
//! The document maps user ids to user records:
//!
//! ```json
//! { "864914211": { "data": ["17-May-2023,Transport,50.0,$"], "budget": {...} } }
//! ```
//!
//! Only `data` is interpreted here. Any other key of a user record is carried
//! through reads and writes untouched.

use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ResultEngine;

const TMP_SUFFIX: &str = "tmp";

/// All user records, keyed by user id.
pub type Users = BTreeMap<String, UserRecord>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Expense entries, oldest first.
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: entries.into_iter().map(Into::into).collect(),
            extra: Map::new(),
        }
    }
}

/// Where the engine keeps the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Storage {
    /// Lives for the lifetime of the engine.
    #[default]
    Memory,
    /// JSON file on disk. A missing file reads as an empty store.
    Json(PathBuf),
}

#[derive(Debug)]
pub(crate) enum Store {
    Memory(Users),
    Json(PathBuf),
}

impl Store {
    pub(crate) fn new(storage: Storage, seed: Users) -> Self {
        match storage {
            Storage::Memory => Store::Memory(seed),
            Storage::Json(path) => Store::Json(path),
        }
    }

    pub(crate) async fn load(&self) -> ResultEngine<Users> {
        match self {
            Store::Memory(users) => Ok(users.clone()),
            Store::Json(path) => read_file(path).await,
        }
    }

    pub(crate) async fn save(&mut self, users: Users) -> ResultEngine<()> {
        match self {
            Store::Memory(current) => {
                *current = users;
                Ok(())
            }
            Store::Json(path) => write_file(path, &users).await,
        }
    }
}

async fn read_file(path: &Path) -> ResultEngine<Users> {
    let data = match tokio::fs::read_to_string(path).await {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!("store {} not found, starting empty", path.display());
            return Ok(Users::new());
        }
        Err(err) => return Err(err.into()),
    };
    if data.trim().is_empty() {
        return Ok(Users::new());
    }
    let users: Users = serde_json::from_str(&data)?;
    tracing::debug!("loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

/// Appends the temporary suffix to the existing extension, so the temporary
/// file never coincides with the store itself.
fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes through a sibling temporary file so readers never see a partial
/// document.
async fn write_file(path: &Path, users: &Users) -> ResultEngine<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_string_pretty(users)?;
    let tmp = tmp_path(path);
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, path).await?;
    tracing::debug!("wrote {} users to {}", users.len(), path.display());
    Ok(())
}
