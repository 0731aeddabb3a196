//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `held_core` linkage and the
//!   state bootstrap path.
//! - Keep output deterministic for quick local sanity checks.

use held_core::{AppStateStore, MemorySlotRepository};

fn main() {
    println!("held_core ping={}", held_core::ping());
    println!("held_core version={}", held_core::core_version());

    let store = AppStateStore::initialize(MemorySlotRepository::new());
    let state = store.snapshot();
    println!(
        "held_core bootstrap entries={} results={} dark_mode={}",
        state.journal_entries.len(),
        state.assessment_results.len(),
        state.dark_mode_enabled
    );
}
