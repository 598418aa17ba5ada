//! The five-dimension rubric and its decision tables.
//!
//! Each dimension is scored by its own pure function over the signal set,
//! so every table row is testable in isolation. `score_answer` composes
//! them and applies the degenerate-input floor.

use serde::{Deserialize, Serialize};

use crate::interview::signals::AnswerSignals;

/// The fixed evaluation axes, in canonical order. `Ord` follows variant
/// order, which keeps keyed maps (session averages) in rubric order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum RubricDimension {
    Completeness,
    Accuracy,
    Clarity,
    Depth,
    InterviewReady,
}

impl RubricDimension {
    pub const ALL: [RubricDimension; 5] = [
        RubricDimension::Completeness,
        RubricDimension::Accuracy,
        RubricDimension::Clarity,
        RubricDimension::Depth,
        RubricDimension::InterviewReady,
    ];

    /// Human-readable label used in strengths/improvement strings.
    pub fn label(self) -> &'static str {
        match self {
            RubricDimension::Completeness => "completeness",
            RubricDimension::Accuracy => "accuracy",
            RubricDimension::Clarity => "clarity",
            RubricDimension::Depth => "depth",
            RubricDimension::InterviewReady => "interview ready",
        }
    }
}

/// One score per rubric dimension. Invariant: every value is in 1..=5;
/// the struct itself guarantees all five dimensions are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricScores {
    pub completeness: u8,
    pub accuracy: u8,
    pub clarity: u8,
    pub depth: u8,
    pub interview_ready: u8,
}

impl RubricScores {
    /// The hard floor applied to trivial or gibberish answers.
    pub const FLOOR: RubricScores = RubricScores {
        completeness: 1,
        accuracy: 1,
        clarity: 1,
        depth: 1,
        interview_ready: 1,
    };

    pub fn get(&self, dimension: RubricDimension) -> u8 {
        match dimension {
            RubricDimension::Completeness => self.completeness,
            RubricDimension::Accuracy => self.accuracy,
            RubricDimension::Clarity => self.clarity,
            RubricDimension::Depth => self.depth,
            RubricDimension::InterviewReady => self.interview_ready,
        }
    }

    pub fn values(&self) -> [u8; 5] {
        [
            self.completeness,
            self.accuracy,
            self.clarity,
            self.depth,
            self.interview_ready,
        ]
    }

    /// Arithmetic mean of the five dimensions, unrounded.
    pub fn mean(&self) -> f64 {
        self.values().iter().map(|&v| v as u32).sum::<u32>() as f64 / 5.0
    }
}

/// Did they fully address the question?
pub fn completeness_score(signals: &AnswerSignals) -> u8 {
    if signals.has_length {
        if signals.has_explanation {
            4
        } else {
            3
        }
    } else if signals.word_count > 20 {
        2
    } else {
        1
    }
}

/// Is the content anchored to the actual project?
pub fn accuracy_score(signals: &AnswerSignals) -> u8 {
    if signals.has_project_reference {
        if signals.has_specifics {
            4
        } else {
            3
        }
    } else {
        2
    }
}

/// Is the answer structured and easy to follow?
pub fn clarity_score(signals: &AnswerSignals) -> u8 {
    if signals.has_explanation {
        if signals.has_example {
            5
        } else {
            4
        }
    } else if signals.word_count > 30 {
        3
    } else {
        2
    }
}

/// Surface knowledge or real understanding?
pub fn depth_score(signals: &AnswerSignals) -> u8 {
    if signals.has_specifics && signals.has_numbers {
        4
    } else if signals.has_specifics {
        3
    } else {
        2
    }
}

/// Would this hold up in a real interview? Scored off the overall number
/// of passed checks rather than any single signal.
pub fn interview_ready_score(signals: &AnswerSignals) -> u8 {
    match signals.passed_count() {
        6.. => 4,
        4..=5 => 3,
        _ => 2,
    }
}

/// Composes the per-dimension tables, then applies the degenerate floor:
/// under 15 words, or an answer that fails the randomness guard, scores 1
/// across the board no matter what the tables said.
pub fn score_answer(signals: &AnswerSignals) -> RubricScores {
    if signals.word_count < 15 || !signals.not_random {
        return RubricScores::FLOOR;
    }

    RubricScores {
        completeness: completeness_score(signals),
        accuracy: accuracy_score(signals),
        clarity: clarity_score(signals),
        depth: depth_score(signals),
        interview_ready: interview_ready_score(signals),
    }
}
