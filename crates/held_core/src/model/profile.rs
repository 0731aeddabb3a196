//! User profile model and partial-update semantics.
//!
//! # Responsibility
//! - Define the one-per-installation profile record.
//! - Apply merge-style partial updates (only supplied fields change).
//!
//! # Invariants
//! - The profile is never deleted, only overwritten field by field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the baby is currently being fed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedingMethod {
    Breastfeeding,
    Formula,
    Combo,
    Other,
}

/// One-per-installation user profile.
///
/// `week_postpartum` is a read model for other surfaces; core code only
/// stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name, free text.
    pub name: String,
    /// Weeks since birth, non-negative.
    pub week_postpartum: u32,
    /// Gate flag for the onboarding flow.
    pub has_completed_onboarding: bool,
    /// Optional birth date of the baby.
    pub birth_date: Option<NaiveDate>,
    /// Optional feeding method.
    pub feeding_method: Option<FeedingMethod>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            week_postpartum: 0,
            has_completed_onboarding: false,
            birth_date: None,
            feeding_method: None,
        }
    }
}

/// Partial profile update. `None` fields retain the prior value.
///
/// Optional profile fields cannot be cleared back to unset through a patch;
/// a patch only ever supplies replacement values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub week_postpartum: Option<u32>,
    pub has_completed_onboarding: Option<bool>,
    pub birth_date: Option<NaiveDate>,
    pub feeding_method: Option<FeedingMethod>,
}

impl UserProfile {
    /// Returns a copy of this profile with the patch merged in.
    pub fn merged(&self, patch: &ProfilePatch) -> Self {
        Self {
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            week_postpartum: patch.week_postpartum.unwrap_or(self.week_postpartum),
            has_completed_onboarding: patch
                .has_completed_onboarding
                .unwrap_or(self.has_completed_onboarding),
            birth_date: patch.birth_date.or(self.birth_date),
            feeding_method: patch.feeding_method.or(self.feeding_method),
        }
    }
}
