//! Session aggregation — reduces a session's scored responses into
//! averaged rubric scores and a recommendation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::interview::round1;
use crate::interview::rubric::{RubricDimension, RubricScores};

/// The slice of a stored response the aggregator needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResponse {
    pub scores: RubricScores,
}

impl From<RubricScores> for ScoredResponse {
    fn from(scores: RubricScores) -> Self {
        Self { scores }
    }
}

/// End-of-session rollup across all answered questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub questions_answered: usize,
    /// Per-dimension means, one decimal. Empty for an empty session. Keyed
    /// by dimension so iteration (and the wire) stays in rubric order.
    pub average_scores: BTreeMap<RubricDimension, f64>,
    pub overall_score: f64,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub recommendation: String,
}

const REC_PREPARED: &str = "You're well-prepared! Keep refining with more practice.";
const REC_FOUNDATION: &str =
    "Good foundation. Focus on adding specific examples and explaining trade-offs.";
const REC_NEEDS_WORK: &str =
    "Needs work. Practice explaining your project in depth - pretend you're teaching someone.";
const REC_START_OVER: &str =
    "Start by writing out detailed answers to common questions. Focus on the 'why' behind your decisions.";

/// Aggregates per-question scores into a session summary.
///
/// Only means are taken, so the result is invariant under any permutation
/// of `responses`, and calling twice with the same input is idempotent.
pub fn generate_session_summary(responses: &[ScoredResponse]) -> SessionSummary {
    if responses.is_empty() {
        return SessionSummary {
            questions_answered: 0,
            average_scores: BTreeMap::new(),
            overall_score: 0.0,
            strengths: vec![],
            areas_for_improvement: vec!["Complete the session first".to_string()],
            recommendation: "Answer all questions to get feedback.".to_string(),
        };
    }

    let count = responses.len() as f64;
    let mut average_scores = BTreeMap::new();
    for dimension in RubricDimension::ALL {
        let sum: u32 = responses
            .iter()
            .map(|r| r.scores.get(dimension) as u32)
            .sum();
        average_scores.insert(dimension, round1(sum as f64 / count));
    }

    // The recommendation ladder runs on the unrounded mean of the rounded
    // per-dimension averages; only the reported field is rounded.
    let overall = average_scores.values().sum::<f64>() / RubricDimension::ALL.len() as f64;

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();
    for (dimension, average) in &average_scores {
        if *average >= 4.0 {
            strengths.push(format!("Strong {}", dimension.label()));
        } else if *average < 3.0 {
            improvements.push(format!("Improve {}", dimension.label()));
        }
    }

    let recommendation = if overall >= 4.0 {
        REC_PREPARED
    } else if overall >= 3.0 {
        REC_FOUNDATION
    } else if overall >= 2.0 {
        REC_NEEDS_WORK
    } else {
        REC_START_OVER
    };

    SessionSummary {
        questions_answered: responses.len(),
        average_scores,
        overall_score: round1(overall),
        strengths: if strengths.is_empty() {
            vec!["Completed the session".to_string()]
        } else {
            strengths
        },
        areas_for_improvement: if improvements.is_empty() {
            vec!["Keep practicing".to_string()]
        } else {
            improvements
        },
        recommendation: recommendation.to_string(),
    }
}
