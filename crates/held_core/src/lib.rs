//! Core domain logic for Held, a client-resident postpartum health journal.
//! This crate is the single source of truth for business invariants.

pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use codec::{decode_state, encode_state, DecodeError, EncodeError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assessment::{AssessmentResult, RiskTier};
pub use model::journal::{
    EntryId, EntryPatch, EntryValidationError, JournalEntry, COMMON_SYMPTOMS, MOOD_MAX, MOOD_MIN,
};
pub use model::profile::{FeedingMethod, ProfilePatch, UserProfile};
pub use model::state::AppState;
pub use repo::slot_repo::{
    MemorySlotRepository, SlotError, SlotRepository, SlotResult, SqliteSlotRepository,
};
pub use service::assessment_service::{
    classify_risk, score_answers, AssessmentEngine, AssessmentError, AssessmentPhase,
    CHOICE_MAX, EPDS_CHOICES, EPDS_KIND, EPDS_QUESTIONS, QUESTION_COUNT,
};
pub use service::journal_service::{normalize_symptoms, JournalError, JournalService};
pub use service::state_service::{AppStateStore, STATE_SLOT_KEY};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
