//! State serializer between `AppState` and the stored text blob.
//!
//! # Responsibility
//! - Encode the full aggregate to the JSON text written to the durable slot.
//! - Decode stored text back, reporting malformed input as a recoverable
//!   error instead of failing the process.
//!
//! # Invariants
//! - `decode_state(encode_state(state)) == state` for every reachable state.
//! - Decode failures carry enough context to log, never panic.

use crate::model::state::AppState;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure to serialize the in-memory state.
///
/// Serde can only fail here on non-string map keys or similar schema bugs,
/// so this surfacing exists for logging rather than recovery.
#[derive(Debug)]
pub struct EncodeError(serde_json::Error);

impl Display for EncodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to encode app state: {}", self.0)
    }
}

impl Error for EncodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

/// Stored text did not decode into a valid `AppState`.
///
/// Callers treat this as "no prior state"; it is never raised past the
/// bootstrap path.
#[derive(Debug)]
pub struct DecodeError(serde_json::Error);

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "stored app state is unreadable: {}", self.0)
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

/// Encodes the full state aggregate to slot text.
pub fn encode_state(state: &AppState) -> Result<String, EncodeError> {
    serde_json::to_string(state).map_err(EncodeError)
}

/// Decodes slot text back into a state aggregate.
pub fn decode_state(payload: &str) -> Result<AppState, DecodeError> {
    serde_json::from_str(payload).map_err(DecodeError)
}
