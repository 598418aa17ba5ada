//! The heuristic interview engine — question generation, answer scoring,
//! and session aggregation.
//!
//! Everything in this module is pure, synchronous, and total: no I/O, no
//! shared state, no input that can make it fail. The hosted provider leans
//! on that — it calls into here synchronously from its own failure paths.

pub mod evaluate;
pub mod questions;
pub mod rubric;
pub mod signals;
pub mod summary;

pub use evaluate::{evaluate_answer, Evaluation};
pub use questions::{generate_questions, Difficulty, GeneratedQuestion, QuestionCategory};
pub use rubric::{RubricDimension, RubricScores};
pub use summary::{generate_session_summary, ScoredResponse, SessionSummary};

/// Rounds to one decimal place, the precision of every reported score.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
