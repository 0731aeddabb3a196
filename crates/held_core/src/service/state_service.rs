//! Application state store.
//!
//! # Responsibility
//! - Own the canonical `AppState` and its persistence lifecycle.
//! - Apply mutations atomically, persist the full snapshot after each one,
//!   and notify subscribers exactly once per completed mutation.
//!
//! # Invariants
//! - Every mutation swaps in a fresh `AppState` value; a reader never
//!   observes a half-applied mutation.
//! - The stored slot is written in full on every mutation, never partially.
//! - A malformed or absent stored blob falls back to `AppState::default()`
//!   and is never surfaced as an error.

use crate::codec::{decode_state, encode_state};
use crate::model::assessment::AssessmentResult;
use crate::model::profile::ProfilePatch;
use crate::model::state::AppState;
use crate::repo::slot_repo::SlotRepository;
use log::{info, warn};

/// Fixed slot key for the encoded app-state blob.
pub const STATE_SLOT_KEY: &str = "held_app_state";

/// Subscriber callback invoked after each completed mutation.
pub type ChangeListener = Box<dyn FnMut(&AppState)>;

/// Single writer and single source of truth for `AppState`.
///
/// The store is an explicitly constructed value; callers that mutate state
/// borrow it mutably. There is no ambient global instance.
pub struct AppStateStore<R: SlotRepository> {
    repo: R,
    state: AppState,
    listeners: Vec<ChangeListener>,
}

impl<R: SlotRepository> AppStateStore<R> {
    /// Bootstraps the store from the durable slot.
    ///
    /// Missing or unreadable stored state yields the fixed default; this
    /// constructor never fails.
    pub fn initialize(repo: R) -> Self {
        let state = match repo.read(STATE_SLOT_KEY) {
            Ok(Some(payload)) => match decode_state(&payload) {
                Ok(state) => {
                    info!("event=state_init module=store status=ok source=stored");
                    state
                }
                Err(err) => {
                    warn!("event=state_init module=store status=recovered error={err}");
                    AppState::default()
                }
            },
            Ok(None) => {
                info!("event=state_init module=store status=ok source=default");
                AppState::default()
            }
            Err(err) => {
                warn!("event=state_init module=store status=recovered error={err}");
                AppState::default()
            }
        };

        Self {
            repo,
            state,
            listeners: Vec::new(),
        }
    }

    /// Returns the current state. Side-effect free.
    pub fn snapshot(&self) -> &AppState {
        &self.state
    }

    /// Registers a listener invoked once per completed mutation, after the
    /// persistence write has been issued.
    pub fn on_change(&mut self, listener: impl FnMut(&AppState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Merges a partial update into the user profile.
    pub fn update_profile(&mut self, patch: &ProfilePatch) -> &AppState {
        let next = AppState {
            user_profile: self.state.user_profile.merged(patch),
            ..self.state.clone()
        };
        self.commit(next);
        &self.state
    }

    /// Sets the display preference.
    pub fn set_dark_mode(&mut self, enabled: bool) -> &AppState {
        let next = AppState {
            dark_mode_enabled: enabled,
            ..self.state.clone()
        };
        self.commit(next);
        &self.state
    }

    /// Stores the latest result for one assessment kind, replacing any prior
    /// result under that kind.
    pub fn save_assessment_result(&mut self, kind: &str, result: AssessmentResult) -> &AppState {
        let mut next = self.state.clone();
        next.assessment_results.insert(kind.to_string(), result);
        self.commit(next);
        &self.state
    }

    /// Swaps in the mutated state, persists the full snapshot and notifies
    /// listeners.
    ///
    /// The slot write is best-effort: a failed write is logged and the
    /// in-memory mutation stands. The next successful commit rewrites the
    /// complete snapshot, so a transient failure self-heals.
    pub(crate) fn commit(&mut self, next: AppState) {
        self.state = next;

        match encode_state(&self.state) {
            Ok(payload) => {
                if let Err(err) = self.repo.write(STATE_SLOT_KEY, &payload) {
                    warn!("event=slot_write module=store status=error error={err}");
                }
            }
            Err(err) => {
                warn!("event=state_encode module=store status=error error={err}");
            }
        }

        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}
