use chrono::{NaiveDate, TimeZone, Utc};
use held_core::{
    decode_state, encode_state, AppState, AppStateStore, AssessmentResult, FeedingMethod,
    JournalEntry, MemorySlotRepository, RiskTier, UserProfile, STATE_SLOT_KEY,
};
use uuid::Uuid;

fn populated_state() -> AppState {
    let mut state = AppState::default();
    state.user_profile = UserProfile {
        name: "Ana".to_string(),
        week_postpartum: 6,
        has_completed_onboarding: true,
        birth_date: Some(NaiveDate::from_ymd_opt(2026, 6, 24).unwrap()),
        feeding_method: Some(FeedingMethod::Combo),
    };
    state.journal_entries = vec![
        JournalEntry {
            id: Uuid::parse_str("00000000-0000-4000-8000-000000000002").unwrap(),
            date: NaiveDate::from_ymd_opt(2026, 8, 2).unwrap(),
            mood: 4,
            note: "slept four hours straight".to_string(),
            symptoms: vec!["Fatigue".to_string(), "Brain fog".to_string()],
        },
        JournalEntry {
            id: Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap(),
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            mood: 2,
            note: String::new(),
            symptoms: vec![],
        },
    ];
    state.assessment_results.insert(
        "epds".to_string(),
        AssessmentResult {
            score: 11,
            risk: RiskTier::Moderate,
            computed_at: Utc.with_ymd_and_hms(2026, 8, 3, 9, 30, 0).unwrap(),
        },
    );
    state.dark_mode_enabled = true;
    state
}

#[test]
fn default_state_round_trips() {
    let state = AppState::default();
    let decoded = decode_state(&encode_state(&state).unwrap()).unwrap();
    assert_eq!(decoded, state);
}

#[test]
fn fully_populated_state_round_trips() {
    let state = populated_state();
    let decoded = decode_state(&encode_state(&state).unwrap()).unwrap();
    assert_eq!(decoded, state);
}

#[test]
fn unpopulated_optional_fields_round_trip() {
    let mut state = AppState::default();
    state.user_profile.name = "no options set".to_string();
    let decoded = decode_state(&encode_state(&state).unwrap()).unwrap();
    assert_eq!(decoded.user_profile.birth_date, None);
    assert_eq!(decoded.user_profile.feeding_method, None);
    assert_eq!(decoded, state);
}

#[test]
fn encoding_is_deterministic_for_a_given_state() {
    let state = populated_state();
    assert_eq!(encode_state(&state).unwrap(), encode_state(&state).unwrap());
}

#[test]
fn decode_rejects_malformed_text() {
    assert!(decode_state("not json at all").is_err());
    assert!(decode_state("").is_err());
    assert!(decode_state("{\"user_profile\":7}").is_err());
}

#[test]
fn decode_rejects_schema_incompatible_payloads() {
    // A mood outside u8 or a missing aggregate field is schema breakage,
    // not partial data to limp along with.
    assert!(decode_state("{\"journal_entries\":[]}").is_err());
}

#[test]
fn startup_with_empty_slot_yields_default_state() {
    let store = AppStateStore::initialize(MemorySlotRepository::new());
    assert_eq!(store.snapshot(), &AppState::default());
}

#[test]
fn startup_with_corrupted_blob_recovers_to_default_state() {
    let repo = MemorySlotRepository::new();
    repo.seed(STATE_SLOT_KEY, "{\"corrupted\": tru");

    let store = AppStateStore::initialize(repo);
    assert_eq!(store.snapshot(), &AppState::default());
}

#[test]
fn startup_reads_back_the_previously_committed_snapshot() {
    let repo = MemorySlotRepository::new();
    let expected = populated_state();
    repo.seed(STATE_SLOT_KEY, &encode_state(&expected).unwrap());

    let store = AppStateStore::initialize(repo);
    assert_eq!(store.snapshot(), &expected);
}
