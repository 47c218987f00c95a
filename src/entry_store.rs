use crate::models::{EntryId, Mood, MoodEntry};
use crate::storage::{ENTRIES_KEY, PersistenceStore, StoreError};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Please select a mood first!")]
    NoMoodSelected,

    #[error("unknown mood '{0}'")]
    UnknownMood(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns the newest-first entry list and mirrors it into a [`PersistenceStore`].
///
/// Every mutation is built on a copy, written through the store, and only then
/// swapped in, so the in-memory list always equals the last successful write.
#[derive(Debug)]
pub struct EntryStore<S> {
    store: S,
    entries: Vec<MoodEntry>,
    next_id: EntryId,
}

impl<S: PersistenceStore> EntryStore<S> {
    /// Reads the stored list. Missing, unreadable or malformed data yields an
    /// empty list.
    pub async fn load(store: S) -> Self {
        let entries = match store.get(ENTRIES_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<MoodEntry>>(&raw) {
                Ok(entries) => dedupe(entries),
                Err(err) => {
                    error!("failed to parse stored entries: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                error!("failed to read stored entries: {err}");
                Vec::new()
            }
        };

        let next_id = match entries.iter().map(|entry| entry.id).max() {
            Some(max) => next_free_id(&entries, max),
            None => 1,
        };

        info!(count = entries.len(), "loaded mood entries");
        Self {
            store,
            entries,
            next_id,
        }
    }

    pub fn list(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn create(&mut self, selected: Option<&Mood>, note: &str) -> Result<MoodEntry, EntryError> {
        self.create_at(selected, note, Utc::now()).await
    }

    pub async fn create_at(
        &mut self,
        selected: Option<&Mood>,
        note: &str,
        now: DateTime<Utc>,
    ) -> Result<MoodEntry, EntryError> {
        let mood = selected.ok_or(EntryError::NoMoodSelected)?;
        let entry = MoodEntry::new(self.next_id, mood, note, now);

        let mut updated = Vec::with_capacity(self.entries.len() + 1);
        updated.push(entry.clone());
        updated.extend(self.entries.iter().cloned());
        self.commit(updated).await?;
        self.next_id = next_free_id(&self.entries, entry.id);

        info!(id = entry.id, mood = %entry.mood, "created mood entry");
        Ok(entry)
    }

    /// Returns whether an entry was removed. Absent ids leave the stored list
    /// as it is.
    pub async fn remove(&mut self, id: EntryId) -> Result<bool, EntryError> {
        if !self.entries.iter().any(|entry| entry.id == id) {
            return Ok(false);
        }

        let updated: Vec<MoodEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        self.commit(updated).await?;

        info!(id, "removed mood entry");
        Ok(true)
    }

    pub async fn clear(&mut self) -> Result<(), EntryError> {
        let cleared = self.entries.len();
        self.commit(Vec::new()).await?;
        info!(cleared, "cleared mood history");
        Ok(())
    }

    async fn commit(&mut self, updated: Vec<MoodEntry>) -> Result<(), EntryError> {
        let payload = serde_json::to_string(&updated).map_err(StoreError::from)?;
        self.store.set(ENTRIES_KEY, &payload).await?;
        self.entries = updated;
        Ok(())
    }
}

/// The id after `last`, or the lowest id not in use once the counter would
/// overflow or collide.
fn next_free_id(entries: &[MoodEntry], last: EntryId) -> EntryId {
    let taken: HashSet<EntryId> = entries.iter().map(|entry| entry.id).collect();
    last.checked_add(1)
        .filter(|id| !taken.contains(id))
        .or_else(|| (1..=EntryId::MAX).find(|id| !taken.contains(id)))
        .unwrap_or_default()
}

fn dedupe(entries: Vec<MoodEntry>) -> Vec<MoodEntry> {
    let mut seen = HashSet::with_capacity(entries.len());
    let total = entries.len();
    let kept: Vec<MoodEntry> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.id))
        .collect();
    if kept.len() != total {
        warn!(dropped = total - kept.len(), "dropped stored entries with duplicate ids");
    }
    kept
}
