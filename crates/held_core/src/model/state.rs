//! Application state aggregate.
//!
//! # Responsibility
//! - Define the single unit of persistence for the whole app.
//!
//! # Invariants
//! - `journal_entries` keeps insertion order, newest-first.
//! - `assessment_results` holds at most one result per assessment kind.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::assessment::AssessmentResult;
use crate::model::journal::JournalEntry;
use crate::model::profile::UserProfile;

/// Complete persisted application state.
///
/// Every mutation produces a fresh `AppState` value that is serialized and
/// written in full; there is no partial persistence. `Default` is the fixed
/// fallback used when no stored state exists or the stored blob fails to
/// decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// The one-per-installation profile.
    pub user_profile: UserProfile,
    /// Journal collection, most recently created entry first.
    pub journal_entries: Vec<JournalEntry>,
    /// Latest result per assessment kind. Ordered map keeps the encoded
    /// snapshot byte-stable for a given state.
    pub assessment_results: BTreeMap<String, AssessmentResult>,
    /// Display preference persisted alongside the data.
    pub dark_mode_enabled: bool,
}

impl AppState {
    /// Finds a journal entry position by id.
    pub fn entry_position(&self, id: crate::model::journal::EntryId) -> Option<usize> {
        self.journal_entries.iter().position(|entry| entry.id == id)
    }
}
