//! The pluggable AI provider capability.
//!
//! Three operations — question generation, answer evaluation, session
//! summarization — behind one trait. The heuristic engine is the default
//! and ground-truth implementation; the hosted variant must be able to
//! degrade to it at any time. Every method is total: a provider absorbs
//! its own failures, so handlers never see one.
//!
//! Carried in `AppState` as `Arc<dyn AiProvider>`, resolved exactly once
//! at startup by `select_provider`.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::interview::{
    evaluate_answer, generate_questions, generate_session_summary, Evaluation, GeneratedQuestion,
    ScoredResponse, SessionSummary,
};
use crate::models::project::ProjectContext;

pub mod hosted;
mod prompts;

pub use hosted::AnthropicProvider;

#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Generates interview questions for the project.
    async fn generate_questions(
        &self,
        project: &ProjectContext,
        count: usize,
    ) -> Vec<GeneratedQuestion>;

    /// Scores one free-text answer.
    async fn evaluate_answer(
        &self,
        project: &ProjectContext,
        question: &str,
        answer: &str,
    ) -> Evaluation;

    /// Rolls a session's scored responses into a summary. Deterministic
    /// for every provider; no model call is ever involved.
    fn session_summary(&self, responses: &[ScoredResponse]) -> SessionSummary;

    /// Short label for logs and diagnostics.
    fn name(&self) -> &'static str;
}

/// The deterministic rule-based provider. Stateless; the only
/// non-determinism is template/follow-up selection via the thread RNG.
pub struct HeuristicProvider;

#[async_trait]
impl AiProvider for HeuristicProvider {
    async fn generate_questions(
        &self,
        project: &ProjectContext,
        count: usize,
    ) -> Vec<GeneratedQuestion> {
        generate_questions(project, count, &mut rand::thread_rng())
    }

    async fn evaluate_answer(
        &self,
        project: &ProjectContext,
        question: &str,
        answer: &str,
    ) -> Evaluation {
        evaluate_answer(project, question, answer, &mut rand::thread_rng())
    }

    fn session_summary(&self, responses: &[ScoredResponse]) -> SessionSummary {
        generate_session_summary(responses)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Resolves the configured provider. Called once at startup; the result
/// is shared by reference for the life of the process.
pub fn select_provider(config: &Config) -> Arc<dyn AiProvider> {
    match config.ai_provider.as_str() {
        "auto" => match &config.anthropic_api_key {
            Some(key) => {
                info!(
                    "Using Anthropic provider (auto-detected API key, model: {})",
                    crate::llm_client::MODEL
                );
                Arc::new(AnthropicProvider::new(key.clone()))
            }
            None => {
                info!("Using heuristic provider (set ANTHROPIC_API_KEY for hosted evaluation)");
                Arc::new(HeuristicProvider)
            }
        },
        "anthropic" => match &config.anthropic_api_key {
            Some(key) => {
                info!("Using Anthropic provider (model: {})", crate::llm_client::MODEL);
                Arc::new(AnthropicProvider::new(key.clone()))
            }
            None => {
                warn!("AI_PROVIDER=anthropic but ANTHROPIC_API_KEY is not set, falling back to heuristic");
                Arc::new(HeuristicProvider)
            }
        },
        "heuristic" => {
            info!("Using heuristic provider");
            Arc::new(HeuristicProvider)
        }
        other => {
            warn!("Unknown AI_PROVIDER '{other}', falling back to heuristic");
            Arc::new(HeuristicProvider)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str, key: Option<&str>) -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            ai_provider: provider.to_string(),
            anthropic_api_key: key.map(String::from),
        }
    }

    #[test]
    fn test_auto_without_key_selects_heuristic() {
        assert_eq!(select_provider(&config("auto", None)).name(), "heuristic");
    }

    #[test]
    fn test_auto_with_key_selects_anthropic() {
        let provider = select_provider(&config("auto", Some("sk-test")));
        assert_eq!(provider.name(), "anthropic");
    }

    #[test]
    fn test_explicit_anthropic_without_key_falls_back() {
        assert_eq!(
            select_provider(&config("anthropic", None)).name(),
            "heuristic"
        );
    }

    #[test]
    fn test_explicit_heuristic_ignores_key() {
        assert_eq!(
            select_provider(&config("heuristic", Some("sk-test"))).name(),
            "heuristic"
        );
    }

    #[test]
    fn test_unknown_provider_falls_back() {
        assert_eq!(select_provider(&config("groq", None)).name(), "heuristic");
    }

    #[tokio::test]
    async fn test_heuristic_provider_is_total() {
        let provider = HeuristicProvider;
        let project = ProjectContext::default();

        let questions = provider.generate_questions(&project, 3).await;
        assert_eq!(questions.len(), 3);

        let evaluation = provider.evaluate_answer(&project, "", "").await;
        assert_eq!(evaluation.overall_score, 1.0);

        let summary = provider.session_summary(&[]);
        assert_eq!(summary.questions_answered, 0);
    }
}
