//! Hosted provider — question generation and answer evaluation via the
//! Anthropic API, with the heuristic engine as a synchronous fallback.
//!
//! The fallback is the contract: an HTTP failure, unparseable output, or
//! out-of-range scores never escape this module. Callers always get a
//! complete result.

use async_trait::async_trait;
use tracing::warn;

use crate::interview::{
    Evaluation, GeneratedQuestion, RubricScores, ScoredResponse, SessionSummary,
};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::project::ProjectContext;
use crate::provider::prompts::{evaluation_prompt, questions_prompt};
use crate::provider::{AiProvider, HeuristicProvider};

pub struct AnthropicProvider {
    llm: LlmClient,
    fallback: HeuristicProvider,
}

impl AnthropicProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            llm: LlmClient::new(api_key),
            fallback: HeuristicProvider,
        }
    }
}

#[async_trait]
impl AiProvider for AnthropicProvider {
    async fn generate_questions(
        &self,
        project: &ProjectContext,
        count: usize,
    ) -> Vec<GeneratedQuestion> {
        let prompt = questions_prompt(project, count);
        match self
            .llm
            .call_json::<Vec<GeneratedQuestion>>(&prompt, JSON_ONLY_SYSTEM)
            .await
        {
            Ok(questions) if !questions.is_empty() => questions,
            Ok(_) => {
                warn!("Hosted question generation returned no questions, using heuristic engine");
                self.fallback.generate_questions(project, count).await
            }
            Err(e) => {
                warn!("Hosted question generation failed ({e}), using heuristic engine");
                self.fallback.generate_questions(project, count).await
            }
        }
    }

    async fn evaluate_answer(
        &self,
        project: &ProjectContext,
        question: &str,
        answer: &str,
    ) -> Evaluation {
        let prompt = evaluation_prompt(project, question, answer);
        match self
            .llm
            .call_json::<Evaluation>(&prompt, JSON_ONLY_SYSTEM)
            .await
        {
            Ok(evaluation) if scores_in_range(&evaluation.scores) => evaluation,
            Ok(evaluation) => {
                warn!(
                    "Hosted evaluation returned out-of-range scores {:?}, using heuristic engine",
                    evaluation.scores
                );
                self.fallback.evaluate_answer(project, question, answer).await
            }
            Err(e) => {
                warn!("Hosted evaluation failed ({e}), using heuristic engine");
                self.fallback.evaluate_answer(project, question, answer).await
            }
        }
    }

    /// Summaries are pure aggregation over already-scored responses; the
    /// deterministic engine is authoritative for every provider.
    fn session_summary(&self, responses: &[ScoredResponse]) -> SessionSummary {
        self.fallback.session_summary(responses)
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }
}

fn scores_in_range(scores: &RubricScores) -> bool {
    scores.values().iter().all(|value| (1..=5).contains(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_in_range_accepts_bounds() {
        assert!(scores_in_range(&RubricScores {
            completeness: 1,
            accuracy: 5,
            clarity: 3,
            depth: 2,
            interview_ready: 4,
        }));
    }

    #[test]
    fn test_scores_in_range_rejects_zero_and_six() {
        assert!(!scores_in_range(&RubricScores {
            completeness: 0,
            accuracy: 3,
            clarity: 3,
            depth: 3,
            interview_ready: 3,
        }));
        assert!(!scores_in_range(&RubricScores {
            completeness: 3,
            accuracy: 6,
            clarity: 3,
            depth: 3,
            interview_ready: 3,
        }));
    }

    #[test]
    fn test_session_summary_is_the_deterministic_aggregator() {
        let provider = AnthropicProvider::new("sk-test".to_string());
        let summary = provider.session_summary(&[]);
        assert_eq!(summary.recommendation, "Answer all questions to get feedback.");
    }
}
