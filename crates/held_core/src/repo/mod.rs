//! Durable storage adapters.
//!
//! # Responsibility
//! - Define the single-slot persistence contract the state store writes
//!   through.
//! - Isolate SQLite details from service/business orchestration.
//!
//! # Invariants
//! - The app-state slot has exactly one in-process writer (the state store).
//! - Adapters return semantic absence (`None`) for a missing slot, never an
//!   error.

pub mod slot_repo;
