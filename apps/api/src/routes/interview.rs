//! Interview endpoints — the provider operations and the session flow.
//!
//! The provider never fails, so the only errors here are input validation
//! and unknown session ids.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::{Evaluation, GeneratedQuestion, SessionSummary};
use crate::models::project::ProjectContext;
use crate::state::AppState;

/// Questions generated when a session starts, and the default for ad-hoc
/// generation.
const DEFAULT_QUESTION_COUNT: usize = 5;
/// Upper bound enforced at this boundary; the generator itself does not
/// clamp.
const MAX_QUESTION_COUNT: usize = 10;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    pub project: ProjectContext,
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<GeneratedQuestion>,
}

/// POST /api/v1/interview/questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(req): Json<GenerateQuestionsRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let count = req
        .count
        .unwrap_or(DEFAULT_QUESTION_COUNT)
        .min(MAX_QUESTION_COUNT);
    let questions = state.provider.generate_questions(&req.project, count).await;
    Ok(Json(QuestionsResponse { questions }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub project: ProjectContext,
    pub question: String,
    pub answer: String,
}

/// POST /api/v1/interview/evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<Evaluation>, AppError> {
    require_question_and_answer(&req.question, &req.answer)?;
    let evaluation = state
        .provider
        .evaluate_answer(&req.project, &req.question, &req.answer)
        .await;
    Ok(Json(evaluation))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub project: ProjectContext,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionResponse {
    pub session_id: Uuid,
    pub project_name: String,
    pub questions: Vec<GeneratedQuestion>,
}

/// POST /api/v1/interview/sessions
pub async fn handle_start_session(
    State(state): State<AppState>,
    Json(req): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<StartSessionResponse>), AppError> {
    let session = state.sessions.create(req.project).await;
    let questions = state
        .provider
        .generate_questions(&session.project, DEFAULT_QUESTION_COUNT)
        .await;

    Ok((
        StatusCode::CREATED,
        Json(StartSessionResponse {
            session_id: session.id,
            project_name: session.project.name,
            questions,
        }),
    ))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub question: String,
    pub answer: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerResponse {
    pub response_id: Uuid,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

/// POST /api/v1/interview/sessions/:id/answers
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>, AppError> {
    require_question_and_answer(&req.question, &req.answer)?;

    let project = state
        .sessions
        .project_of(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    let evaluation = state
        .provider
        .evaluate_answer(&project, &req.question, &req.answer)
        .await;

    let stored = state
        .sessions
        .append_response(session_id, req.question, req.answer, evaluation)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    Ok(Json(SubmitAnswerResponse {
        response_id: stored.id,
        evaluation: stored.evaluation,
    }))
}

/// GET /api/v1/interview/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<crate::sessions::InterviewSession>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;
    Ok(Json(session))
}

/// POST /api/v1/interview/sessions/:id/end
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSummary>, AppError> {
    let responses = state
        .sessions
        .scored_responses(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    let summary = state.provider.session_summary(&responses);

    // 1–5 overall mapped onto a 0–100 session score.
    let score = (summary.overall_score * 20.0).round() as u32;
    state.sessions.end(session_id, score).await;

    Ok(Json(summary))
}

fn require_question_and_answer(question: &str, answer: &str) -> Result<(), AppError> {
    if question.trim().is_empty() || answer.trim().is_empty() {
        return Err(AppError::Validation(
            "Question and answer are required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_question_or_answer_is_rejected() {
        assert!(require_question_and_answer("", "an answer").is_err());
        assert!(require_question_and_answer("a question", "   ").is_err());
        assert!(require_question_and_answer("a question", "an answer").is_ok());
    }

    #[test]
    fn test_submit_answer_response_flattens_evaluation() {
        use crate::interview::evaluate_answer;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let evaluation = evaluate_answer(
            &ProjectContext::default(),
            "q",
            "a",
            &mut StdRng::seed_from_u64(1),
        );
        let response = SubmitAnswerResponse {
            response_id: Uuid::nil(),
            evaluation,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("responseId").is_some());
        assert!(json.get("overallScore").is_some(), "evaluation fields inline");
        assert!(json.get("evaluation").is_none(), "no nested wrapper");
    }
}
