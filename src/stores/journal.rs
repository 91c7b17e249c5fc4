use chrono::Utc;
use uuid::Uuid;

use crate::error::JournalError;
use crate::models::{CreateEntryInput, EntryUpdate, JournalEntry};
use crate::storage::{keys, StorageHandle};

/// Daily reflections keyed by calendar date. The per-date trade stats on
/// an entry are snapshots taken when it was saved; editing trades later
/// does not rewrite history (use `metrics::daily_snapshot` and an update
/// to refresh them deliberately).
pub struct JournalStore {
    storage: StorageHandle,
    entries: Vec<JournalEntry>,
}

impl JournalStore {
    pub fn load(storage: StorageHandle) -> Result<Self, JournalError> {
        let entries: Vec<JournalEntry> = storage.read_collection(keys::JOURNAL_ENTRIES);
        Ok(Self { storage, entries })
    }

    pub fn add_entry(&mut self, input: CreateEntryInput) -> Result<JournalEntry, JournalError> {
        let entry = JournalEntry {
            id: Uuid::new_v4().to_string(),
            date: input.date.unwrap_or_else(|| Utc::now().date_naive()),
            mood: input.mood,
            market_conditions: input.market_conditions,
            observations: input.observations,
            lessons_learned: input.lessons_learned,
            trades_count: input.trades_count,
            pnl: input.pnl,
        };
        self.entries.insert(0, entry.clone());
        self.save()?;
        Ok(entry)
    }

    pub fn update_entry(
        &mut self,
        id: &str,
        patch: EntryUpdate,
    ) -> Result<Option<JournalEntry>, JournalError> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };

        if let Some(date) = patch.date {
            entry.date = date;
        }
        if let Some(mood) = patch.mood {
            entry.mood = mood;
        }
        if let Some(market_conditions) = patch.market_conditions {
            entry.market_conditions = market_conditions;
        }
        if let Some(observations) = patch.observations {
            entry.observations = observations;
        }
        if let Some(lessons_learned) = patch.lessons_learned {
            entry.lessons_learned = lessons_learned;
        }
        if let Some(trades_count) = patch.trades_count {
            entry.trades_count = trades_count;
        }
        if let Some(pnl) = patch.pnl {
            entry.pnl = pnl;
        }

        let updated = entry.clone();
        self.save()?;
        Ok(Some(updated))
    }

    pub fn delete_entry(&mut self, id: &str) -> Result<bool, JournalError> {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return Ok(false);
        };
        self.entries.remove(index);
        self.save()?;
        Ok(true)
    }

    /// Entries newest-first.
    pub fn entries(&self) -> Vec<JournalEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// First entry recorded for a date. Multiple entries per date are
    /// tolerated; the calendar view reads the first.
    pub fn entry_by_date(&self, date: chrono::NaiveDate) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    fn save(&self) -> Result<(), JournalError> {
        self.storage
            .write_collection(keys::JOURNAL_ENTRIES, &self.entries)
    }
}
