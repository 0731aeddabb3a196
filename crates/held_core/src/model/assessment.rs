//! Stored screening-assessment results.
//!
//! # Responsibility
//! - Define the per-assessment-kind result record kept in app state.
//!
//! # Invariants
//! - One latest result per assessment kind; a new write replaces the old.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk tier derived from a screening score via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

/// Latest stored outcome of one screening questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Total score, `0..=30` for the EPDS.
    pub score: u8,
    /// Tier classification of `score`.
    pub risk: RiskTier,
    /// When the questionnaire was completed.
    pub computed_at: DateTime<Utc>,
}
