//! Storage collaborator interface
//!
//! The parser only needs somewhere to put a finished paste and a way to read
//! it back by key. Choosing keys is the caller's job.

use crate::errors::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use schema::Team;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// A paste as persisted: metadata, the raw text, and the team as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPaste {
    pub title: String,
    pub author: String,
    pub notes: Option<String>,
    pub raw_paste: String,
    pub team_json: String,
    pub competitive_mode: bool,
    pub created_at: DateTime<Utc>,
}

impl StoredPaste {
    /// Decode the stored team.
    pub fn team(&self) -> StoreResult<Team> {
        serde_json::from_str(&self.team_json).map_err(StoreError::Decode)
    }
}

pub trait PasteStore {
    /// Store a paste under `slug`. Fails if the key is already taken.
    fn insert(&self, slug: &str, paste: StoredPaste) -> StoreResult<()>;

    fn get(&self, slug: &str) -> StoreResult<StoredPaste>;

    fn contains(&self, slug: &str) -> StoreResult<bool>;
}

/// In-process store keyed by slug
#[derive(Debug, Default)]
pub struct MemoryStore {
    pastes: Mutex<HashMap<String, StoredPaste>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.pastes.lock().map_err(|_| StoreError::Poisoned)?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl PasteStore for MemoryStore {
    fn insert(&self, slug: &str, paste: StoredPaste) -> StoreResult<()> {
        let mut pastes = self.pastes.lock().map_err(|_| StoreError::Poisoned)?;
        if pastes.contains_key(slug) {
            return Err(StoreError::SlugTaken(slug.to_string()));
        }
        debug!("Storing paste {} ({})", slug, paste.title);
        pastes.insert(slug.to_string(), paste);
        Ok(())
    }

    fn get(&self, slug: &str) -> StoreResult<StoredPaste> {
        let pastes = self.pastes.lock().map_err(|_| StoreError::Poisoned)?;
        pastes
            .get(slug)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(slug.to_string()))
    }

    fn contains(&self, slug: &str) -> StoreResult<bool> {
        let pastes = self.pastes.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(pastes.contains_key(slug))
    }
}
