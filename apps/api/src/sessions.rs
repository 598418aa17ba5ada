//! In-process rehearsal session registry.
//!
//! Stands in for the external relational store: sessions and their
//! recorded responses live in a guarded map for the lifetime of the
//! process. Handlers evaluate first and append after, so the lock is
//! never held across a provider call.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::interview::{Evaluation, ScoredResponse};
use crate::models::project::ProjectContext;

/// One recorded answer within a session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResponse {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub evaluation: Evaluation,
}

/// One rehearsal attempt against a single project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSession {
    pub id: Uuid,
    pub project: ProjectContext,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    /// 0–100, derived from the summary's overall score at session end.
    pub score: Option<u32>,
    pub responses: Vec<StoredResponse>,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, InterviewSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session for the given project and returns a snapshot of it.
    pub async fn create(&self, project: ProjectContext) -> InterviewSession {
        let session = InterviewSession {
            id: Uuid::new_v4(),
            project,
            started_at: Utc::now(),
            ended_at: None,
            score: None,
            responses: Vec::new(),
        };
        self.inner
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    /// Snapshot of a session, if it exists.
    pub async fn get(&self, id: Uuid) -> Option<InterviewSession> {
        self.inner.read().await.get(&id).cloned()
    }

    /// The project a session was started for. Cheaper than a full snapshot
    /// when a handler only needs evaluation context.
    pub async fn project_of(&self, id: Uuid) -> Option<ProjectContext> {
        self.inner.read().await.get(&id).map(|s| s.project.clone())
    }

    /// Records an answered question. Returns the stored response, or None
    /// for an unknown session.
    pub async fn append_response(
        &self,
        id: Uuid,
        question: String,
        answer: String,
        evaluation: Evaluation,
    ) -> Option<StoredResponse> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id)?;
        let stored = StoredResponse {
            id: Uuid::new_v4(),
            question,
            answer,
            evaluation,
        };
        session.responses.push(stored.clone());
        Some(stored)
    }

    /// The rubric scores of every recorded response, in submission order.
    pub async fn scored_responses(&self, id: Uuid) -> Option<Vec<ScoredResponse>> {
        self.inner.read().await.get(&id).map(|session| {
            session
                .responses
                .iter()
                .map(|r| ScoredResponse::from(r.evaluation.scores))
                .collect()
        })
    }

    /// Stamps the session ended with its 0–100 score. Returns false for an
    /// unknown session. Re-ending a session refreshes the stamp.
    pub async fn end(&self, id: Uuid, score: u32) -> bool {
        let mut sessions = self.inner.write().await;
        match sessions.get_mut(&id) {
            Some(session) => {
                session.ended_at = Some(Utc::now());
                session.score = Some(score);
                true
            }
            None => false,
        }
    }
}
