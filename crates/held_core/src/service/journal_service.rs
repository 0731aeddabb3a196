//! Journal use-case service.
//!
//! # Responsibility
//! - Provide create/update/delete entry points over the journal collection.
//! - Normalize symptom labels before they enter app state.
//!
//! # Invariants
//! - The collection stays newest-first; updates never change position.
//! - Failed validation or a missing id performs no mutation and no
//!   persistence write.
//! - Symptom labels are whitespace-collapsed and de-duplicated
//!   case-insensitively, first spelling wins.

use crate::model::journal::{EntryId, EntryPatch, EntryValidationError, JournalEntry};
use crate::repo::slot_repo::SlotRepository;
use crate::service::state_service::AppStateStore;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Service error for journal use-cases.
#[derive(Debug)]
pub enum JournalError {
    /// Invalid entry data; the mutation was rejected whole.
    Validation(EntryValidationError),
    /// Target entry does not exist.
    NotFound(EntryId),
}

impl Display for JournalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "journal entry not found: {id}"),
        }
    }
}

impl Error for JournalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<EntryValidationError> for JournalError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

/// CRUD over the journal collection, layered on the state store's
/// mutation/commit API.
pub struct JournalService<'store, R: SlotRepository> {
    store: &'store mut AppStateStore<R>,
}

impl<'store, R: SlotRepository> JournalService<'store, R> {
    /// Creates a service borrowing the single state store.
    pub fn new(store: &'store mut AppStateStore<R>) -> Self {
        Self { store }
    }

    /// Creates a journal entry and prepends it to the collection.
    ///
    /// # Contract
    /// - `mood` must be within the recordable range.
    /// - `date` is accepted as supplied; backdating is allowed.
    /// - Returns the created entry with its generated id.
    pub fn add_entry(
        &mut self,
        date: NaiveDate,
        mood: u8,
        note: impl Into<String>,
        symptoms: Vec<String>,
    ) -> Result<JournalEntry, JournalError> {
        let entry = JournalEntry::new(date, mood, note, normalize_symptoms(&symptoms))?;

        let mut next = self.store.snapshot().clone();
        next.journal_entries.insert(0, entry.clone());
        self.store.commit(next);

        Ok(entry)
    }

    /// Merges partial fields into an existing entry, position unchanged.
    pub fn update_entry(
        &mut self,
        id: EntryId,
        patch: &EntryPatch,
    ) -> Result<JournalEntry, JournalError> {
        let state = self.store.snapshot();
        let position = state.entry_position(id).ok_or(JournalError::NotFound(id))?;

        let mut normalized = patch.clone();
        if let Some(symptoms) = &patch.symptoms {
            normalized.symptoms = Some(normalize_symptoms(symptoms));
        }

        let updated = state.journal_entries[position].merged(&normalized)?;

        let mut next = state.clone();
        next.journal_entries[position] = updated.clone();
        self.store.commit(next);

        Ok(updated)
    }

    /// Removes an entry by id. Absent ids are a no-op, not an error.
    ///
    /// Returns whether an entry was removed. A no-op delete leaves the state
    /// value unchanged, so no persistence write or notification occurs.
    pub fn delete_entry(&mut self, id: EntryId) -> bool {
        let Some(position) = self.store.snapshot().entry_position(id) else {
            return false;
        };

        let mut next = self.store.snapshot().clone();
        next.journal_entries.remove(position);
        self.store.commit(next);

        true
    }
}

/// Normalizes symptom labels: collapses whitespace, drops empties and
/// de-duplicates case-insensitively while keeping the first spelling.
pub fn normalize_symptoms(symptoms: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    let mut normalized = Vec::new();

    for raw in symptoms {
        let label = WHITESPACE_RE.replace_all(raw.trim(), " ").into_owned();
        if label.is_empty() {
            continue;
        }
        let folded = label.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        normalized.push(label);
    }

    normalized
}
