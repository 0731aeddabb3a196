//! Journal entry model.
//!
//! # Responsibility
//! - Define the mood/symptom journal record and its partial-update shape.
//! - Validate mood bounds before any mutation is applied.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `mood` stays within `MOOD_MIN..=MOOD_MAX`.
//! - The entry `date` is user-chosen and independent of creation time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a journal entry.
///
/// Random 128-bit ids keep creation collision-free without coordinating
/// with prior state.
pub type EntryId = Uuid;

/// Lowest recordable mood (very low).
pub const MOOD_MIN: u8 = 1;
/// Highest recordable mood (very good).
pub const MOOD_MAX: u8 = 5;

/// Symptom vocabulary offered by the journal surface.
///
/// Entries may carry symptoms outside this list; it exists so callers can
/// present a consistent picker.
pub const COMMON_SYMPTOMS: &[&str] = &[
    "Fatigue",
    "Insomnia",
    "Anxious thoughts",
    "Tearfulness",
    "Irritability",
    "Headache",
    "Body aches",
    "Low mood",
    "Overwhelmed",
    "Chest tightness",
    "Racing thoughts",
    "Appetite changes",
    "Disinterest in activities",
    "Brain fog",
    "Loneliness",
    "Guilt",
    "Anger",
    "Hopelessness",
    "Disconnection from baby",
];

/// Validation failure for journal entry data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    /// Mood value outside `MOOD_MIN..=MOOD_MAX`.
    MoodOutOfRange(u8),
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MoodOutOfRange(mood) => {
                write!(f, "mood {mood} is outside {MOOD_MIN}..={MOOD_MAX}")
            }
        }
    }
}

impl Error for EntryValidationError {}

/// One mood/symptom journal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Stable id assigned at creation, immutable thereafter.
    pub id: EntryId,
    /// User-chosen calendar date; backdating and postdating are allowed.
    pub date: NaiveDate,
    /// Mood on the 1 (very low) to 5 (very good) scale.
    pub mood: u8,
    /// Free-text note, may be empty.
    pub note: String,
    /// Symptom labels; duplicates within one entry are not meaningful.
    pub symptoms: Vec<String>,
}

/// Partial entry update. `None` fields retain the prior value.
///
/// There is deliberately no `id` field: the id cannot be changed through a
/// patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub date: Option<NaiveDate>,
    pub mood: Option<u8>,
    pub note: Option<String>,
    pub symptoms: Option<Vec<String>>,
}

impl JournalEntry {
    /// Creates an entry with a freshly generated id.
    ///
    /// The caller is expected to have validated `mood`; this constructor
    /// re-checks to keep invalid entries unrepresentable on every path.
    pub fn new(
        date: NaiveDate,
        mood: u8,
        note: impl Into<String>,
        symptoms: Vec<String>,
    ) -> Result<Self, EntryValidationError> {
        validate_mood(mood)?;
        Ok(Self {
            id: Uuid::new_v4(),
            date,
            mood,
            note: note.into(),
            symptoms,
        })
    }

    /// Returns a copy of this entry with the patch merged in.
    ///
    /// Fails when the patch carries an out-of-range mood; the original entry
    /// is left untouched in that case.
    pub fn merged(&self, patch: &EntryPatch) -> Result<Self, EntryValidationError> {
        if let Some(mood) = patch.mood {
            validate_mood(mood)?;
        }
        Ok(Self {
            id: self.id,
            date: patch.date.unwrap_or(self.date),
            mood: patch.mood.unwrap_or(self.mood),
            note: patch.note.clone().unwrap_or_else(|| self.note.clone()),
            symptoms: patch
                .symptoms
                .clone()
                .unwrap_or_else(|| self.symptoms.clone()),
        })
    }
}

/// Checks a mood value against the recordable range.
pub fn validate_mood(mood: u8) -> Result<(), EntryValidationError> {
    if (MOOD_MIN..=MOOD_MAX).contains(&mood) {
        Ok(())
    } else {
        Err(EntryValidationError::MoodOutOfRange(mood))
    }
}
