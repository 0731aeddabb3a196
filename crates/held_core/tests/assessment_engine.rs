use held_core::{
    AppStateStore, AssessmentEngine, AssessmentError, AssessmentPhase, MemorySlotRepository,
    RiskTier, EPDS_KIND, QUESTION_COUNT,
};

fn fresh_store() -> AppStateStore<MemorySlotRepository> {
    AppStateStore::initialize(MemorySlotRepository::new())
}

fn run_to_completion(
    engine: &mut AssessmentEngine,
    store: &mut AppStateStore<MemorySlotRepository>,
    answers: [u8; QUESTION_COUNT],
) -> (u8, RiskTier) {
    for (index, &choice) in answers.iter().enumerate() {
        engine.answer(store, index, choice).unwrap();
    }
    match engine.current_state() {
        AssessmentPhase::Completed { score, risk } => (*score, *risk),
        other => panic!("expected completed phase, got {other:?}"),
    }
}

#[test]
fn engine_starts_not_started_and_walks_questions_in_order() {
    let mut store = fresh_store();
    let mut engine = AssessmentEngine::new();

    assert_eq!(engine.current_state(), &AssessmentPhase::NotStarted);

    engine.answer(&mut store, 0, 1).unwrap();
    match engine.current_state() {
        AssessmentPhase::InProgress {
            next_question,
            answers,
        } => {
            assert_eq!(*next_question, 1);
            assert_eq!(answers, &vec![1]);
        }
        other => panic!("unexpected phase: {other:?}"),
    }
}

#[test]
fn all_least_symptomatic_answers_score_nine_low() {
    let mut store = fresh_store();
    let mut engine = AssessmentEngine::new();

    let (score, risk) = run_to_completion(&mut engine, &mut store, [0; 10]);
    assert_eq!(score, 9);
    assert_eq!(risk, RiskTier::Low);
}

#[test]
fn reverse_scored_items_invert_their_contribution() {
    let mut store = fresh_store();
    let mut engine = AssessmentEngine::new();

    let (score, risk) =
        run_to_completion(&mut engine, &mut store, [3, 3, 2, 3, 3, 3, 3, 3, 3, 3]);
    assert_eq!(score, 20);
    assert_eq!(risk, RiskTier::High);
}

#[test]
fn risk_boundaries_are_exact() {
    // Items 0, 1, 3 answered 3 contribute zero; the remaining answers are
    // chosen to hit the documented boundary totals.
    let mut store = fresh_store();
    let mut engine = AssessmentEngine::new();
    let (score, risk) =
        run_to_completion(&mut engine, &mut store, [3, 3, 3, 3, 3, 1, 1, 1, 0, 0]);
    assert_eq!(score, 9);
    assert_eq!(risk, RiskTier::Low);

    let mut engine = AssessmentEngine::new();
    let (score, risk) =
        run_to_completion(&mut engine, &mut store, [3, 3, 3, 3, 3, 1, 1, 1, 1, 0]);
    assert_eq!(score, 10);
    assert_eq!(risk, RiskTier::Moderate);

    let mut engine = AssessmentEngine::new();
    let (score, risk) =
        run_to_completion(&mut engine, &mut store, [3, 3, 3, 3, 3, 3, 2, 2, 0, 0]);
    assert_eq!(score, 13);
    assert_eq!(risk, RiskTier::High);
}

#[test]
fn completion_stores_the_result_under_epds() {
    let mut store = fresh_store();
    let mut engine = AssessmentEngine::new();

    run_to_completion(&mut engine, &mut store, [2; 10]);

    let result = store.snapshot().assessment_results.get(EPDS_KIND).unwrap();
    // Items 0, 1, 3 contribute 1 each; the other seven contribute 2.
    assert_eq!(result.score, 17);
    assert_eq!(result.risk, RiskTier::High);
}

#[test]
fn completion_replaces_the_prior_result() {
    let mut store = fresh_store();
    let mut engine = AssessmentEngine::new();

    run_to_completion(&mut engine, &mut store, [3, 3, 2, 3, 3, 3, 3, 3, 3, 3]);
    let first = store.snapshot().assessment_results[EPDS_KIND].clone();
    assert_eq!(first.score, 20);

    run_to_completion(&mut engine, &mut store, [0; 10]);
    let second = store.snapshot().assessment_results[EPDS_KIND].clone();
    assert_eq!(second.score, 9);
    assert_eq!(second.risk, RiskTier::Low);
    assert_eq!(store.snapshot().assessment_results.len(), 1);
    assert!(second.computed_at >= first.computed_at);
}

#[test]
fn answering_from_completed_restarts_with_that_answer_first() {
    let mut store = fresh_store();
    let mut engine = AssessmentEngine::new();

    run_to_completion(&mut engine, &mut store, [0; 10]);

    engine.answer(&mut store, 0, 2).unwrap();
    match engine.current_state() {
        AssessmentPhase::InProgress {
            next_question,
            answers,
        } => {
            assert_eq!(*next_question, 1);
            assert_eq!(answers, &vec![2]);
        }
        other => panic!("unexpected phase: {other:?}"),
    }

    // The stored result from the finished run is untouched mid-restart.
    assert_eq!(store.snapshot().assessment_results[EPDS_KIND].score, 9);
}

#[test]
fn reset_discards_collected_answers() {
    let mut store = fresh_store();
    let mut engine = AssessmentEngine::new();

    engine.answer(&mut store, 0, 3).unwrap();
    engine.answer(&mut store, 1, 3).unwrap();
    engine.reset();

    assert_eq!(engine.current_state(), &AssessmentPhase::NotStarted);
    assert!(store.snapshot().assessment_results.is_empty());
}

#[test]
fn out_of_range_choice_is_rejected_without_transition() {
    let mut store = fresh_store();
    let mut engine = AssessmentEngine::new();

    let err = engine.answer(&mut store, 0, 4).unwrap_err();
    assert_eq!(err, AssessmentError::ChoiceOutOfRange(4));
    assert_eq!(engine.current_state(), &AssessmentPhase::NotStarted);
    assert!(store.snapshot().assessment_results.is_empty());
}

#[test]
fn out_of_range_question_index_is_rejected() {
    let mut store = fresh_store();
    let mut engine = AssessmentEngine::new();

    let err = engine.answer(&mut store, QUESTION_COUNT, 0).unwrap_err();
    assert_eq!(err, AssessmentError::QuestionOutOfRange(QUESTION_COUNT));
    assert_eq!(engine.current_state(), &AssessmentPhase::NotStarted);
}

#[test]
fn mismatched_question_index_is_rejected_without_transition() {
    let mut store = fresh_store();
    let mut engine = AssessmentEngine::new();

    engine.answer(&mut store, 0, 1).unwrap();
    let err = engine.answer(&mut store, 2, 1).unwrap_err();
    assert_eq!(
        err,
        AssessmentError::QuestionMismatch {
            expected: 1,
            got: 2
        }
    );
    match engine.current_state() {
        AssessmentPhase::InProgress { next_question, .. } => assert_eq!(*next_question, 1),
        other => panic!("unexpected phase: {other:?}"),
    }
}

#[test]
fn phase_state_is_not_persisted() {
    let repo = MemorySlotRepository::new();
    {
        let mut store = AppStateStore::initialize(&repo);
        let mut engine = AssessmentEngine::new();
        engine.answer(&mut store, 0, 3).unwrap();
        engine.answer(&mut store, 1, 3).unwrap();
    }

    // A fresh process sees no trace of the interrupted run.
    let store = AppStateStore::initialize(&repo);
    assert!(store.snapshot().assessment_results.is_empty());
}
