//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate state mutations, persistence and notification into
//!   use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod assessment_service;
pub mod journal_service;
pub mod state_service;
