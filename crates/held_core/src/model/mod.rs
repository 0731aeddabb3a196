//! Domain model for the Held state engine.
//!
//! # Responsibility
//! - Define the canonical data structures persisted in the app-state snapshot.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every journal entry is identified by a stable `EntryId`.
//! - `AppState` is the single aggregate written to durable storage.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod assessment;
pub mod journal;
pub mod profile;
pub mod state;
