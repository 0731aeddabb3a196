//! EPDS screening questionnaire engine.
//!
//! # Responsibility
//! - Walk the fixed ten-item questionnaire one answer at a time.
//! - Compute the deterministic score and risk tier on completion and write
//!   the result through the state store.
//!
//! # Invariants
//! - Items 0, 1 and 3 are reverse-scored; all others score as answered.
//! - Risk thresholds are evaluated high-first: 13 then 10.
//! - In-progress phase state is ephemeral; only the completed result is
//!   persisted.

use crate::model::assessment::{AssessmentResult, RiskTier};
use crate::repo::slot_repo::SlotRepository;
use crate::service::state_service::AppStateStore;
use chrono::Utc;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result-map key under which the EPDS outcome is stored.
pub const EPDS_KIND: &str = "epds";

/// Number of questionnaire items.
pub const QUESTION_COUNT: usize = 10;

/// Highest valid answer choice; choices are ordinal `0..=CHOICE_MAX`.
pub const CHOICE_MAX: u8 = 3;

/// Items whose contribution is `CHOICE_MAX - answer`.
pub const REVERSE_SCORED_ITEMS: [usize; 3] = [0, 1, 3];

/// Questionnaire item texts, in answer order.
pub const EPDS_QUESTIONS: [&str; QUESTION_COUNT] = [
    "I have been able to laugh and see the funny side of things",
    "I have looked forward with enjoyment to things",
    "I have blamed myself unnecessarily when things went wrong",
    "I have been anxious or worried for no good reason",
    "I have felt scared or panicky for no good reason",
    "Things have been getting on top of me",
    "I have been so unhappy that I have had difficulty sleeping",
    "I have felt sad or miserable",
    "I have been so unhappy that I have been crying",
    "The thought of harming myself has occurred to me",
];

/// Per-item answer choice texts, displayed least symptomatic first except on
/// reverse-scored items.
pub const EPDS_CHOICES: [[&str; 4]; QUESTION_COUNT] = [
    [
        "As much as I always could",
        "Not quite so much now",
        "Definitely not so much now",
        "Not at all",
    ],
    [
        "As much as I ever did",
        "Rather less than I used to",
        "Definitely less than I used to",
        "Hardly at all",
    ],
    [
        "Yes, most of the time",
        "Yes, some of the time",
        "Not very often",
        "No, never",
    ],
    ["No, not at all", "Hardly ever", "Yes, sometimes", "Yes, very often"],
    [
        "Yes, quite a lot",
        "Yes, sometimes",
        "No, not much",
        "No, not at all",
    ],
    [
        "Yes, most of the time I haven't been able to cope",
        "Yes, sometimes I haven't been coping as well as usual",
        "No, most of the time I have coped quite well",
        "No, I have been coping as well as ever",
    ],
    [
        "Yes, most of the time",
        "Yes, sometimes",
        "Not very often",
        "No, not at all",
    ],
    [
        "Yes, most of the time",
        "Yes, quite often",
        "Not very often",
        "No, not at all",
    ],
    [
        "Yes, most of the time",
        "Yes, quite often",
        "Only occasionally",
        "No, never",
    ],
    ["Yes, quite often", "Sometimes", "Hardly ever", "Never"],
];

/// Validation failure for an `answer` call; no state transition occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentError {
    /// Choice outside `0..=CHOICE_MAX`.
    ChoiceOutOfRange(u8),
    /// Question index outside the questionnaire.
    QuestionOutOfRange(usize),
    /// Question index does not match the question currently awaiting an
    /// answer.
    QuestionMismatch { expected: usize, got: usize },
}

impl Display for AssessmentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChoiceOutOfRange(choice) => {
                write!(f, "answer choice {choice} is outside 0..={CHOICE_MAX}")
            }
            Self::QuestionOutOfRange(index) => write!(
                f,
                "question index {index} is outside 0..={}",
                QUESTION_COUNT - 1
            ),
            Self::QuestionMismatch { expected, got } => write!(
                f,
                "question index {got} does not match the expected question {expected}"
            ),
        }
    }
}

impl Error for AssessmentError {}

/// Questionnaire phase.
///
/// `NotStarted` and `InProgress` live only in memory; a process restart
/// drops them (no resume capability).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentPhase {
    NotStarted,
    InProgress {
        /// Index of the question awaiting an answer.
        next_question: usize,
        /// Choices recorded so far, in question order.
        answers: Vec<u8>,
    },
    Completed {
        score: u8,
        risk: RiskTier,
    },
}

impl Default for AssessmentPhase {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Sequential questionnaire state machine.
#[derive(Debug, Default)]
pub struct AssessmentEngine {
    phase: AssessmentPhase,
}

impl AssessmentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    pub fn current_state(&self) -> &AssessmentPhase {
        &self.phase
    }

    /// Discards any collected answers and returns to `NotStarted`.
    ///
    /// A previously stored result is untouched; it is only replaced once a
    /// new run completes.
    pub fn reset(&mut self) {
        self.phase = AssessmentPhase::NotStarted;
    }

    /// Records the answer for `question_index`.
    ///
    /// The index must match the question currently awaiting an answer. From
    /// `Completed`, index 0 restarts the questionnaire with this answer as
    /// the first. The tenth answer scores the run, writes the result through
    /// the store under [`EPDS_KIND`] and enters `Completed`.
    pub fn answer<R: SlotRepository>(
        &mut self,
        store: &mut AppStateStore<R>,
        question_index: usize,
        choice: u8,
    ) -> Result<&AssessmentPhase, AssessmentError> {
        if choice > CHOICE_MAX {
            return Err(AssessmentError::ChoiceOutOfRange(choice));
        }
        if question_index >= QUESTION_COUNT {
            return Err(AssessmentError::QuestionOutOfRange(question_index));
        }

        let expected = match &self.phase {
            AssessmentPhase::InProgress { next_question, .. } => *next_question,
            AssessmentPhase::NotStarted | AssessmentPhase::Completed { .. } => 0,
        };
        if question_index != expected {
            return Err(AssessmentError::QuestionMismatch {
                expected,
                got: question_index,
            });
        }

        let mut answers = match &self.phase {
            AssessmentPhase::InProgress { answers, .. } => answers.clone(),
            AssessmentPhase::NotStarted | AssessmentPhase::Completed { .. } => Vec::new(),
        };
        answers.push(choice);

        if answers.len() == QUESTION_COUNT {
            let score = score_answers(&answers);
            let risk = classify_risk(score);
            store.save_assessment_result(
                EPDS_KIND,
                AssessmentResult {
                    score,
                    risk,
                    computed_at: Utc::now(),
                },
            );
            info!("event=assessment_completed module=assessment status=ok kind={EPDS_KIND}");
            self.phase = AssessmentPhase::Completed { score, risk };
        } else {
            self.phase = AssessmentPhase::InProgress {
                next_question: answers.len(),
                answers,
            };
        }

        Ok(&self.phase)
    }
}

/// Sums the ten answer contributions.
///
/// Reverse-scored items contribute `CHOICE_MAX - answer`; all others
/// contribute the answer unchanged. Total range is `0..=30`.
pub fn score_answers(answers: &[u8]) -> u8 {
    answers
        .iter()
        .enumerate()
        .map(|(index, &answer)| {
            if REVERSE_SCORED_ITEMS.contains(&index) {
                CHOICE_MAX - answer
            } else {
                answer
            }
        })
        .sum()
}

/// Maps a score to its risk tier, high threshold first.
pub fn classify_risk(score: u8) -> RiskTier {
    if score >= 13 {
        RiskTier::High
    } else if score >= 10 {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}
