//! Axum route handlers for the Interview API.
//!
//! Each handler locks the session for its whole duration, including the
//! completion call, so user actions never interleave.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::generator::{analyze_answer, generate_questions};
use crate::session::{JobDetails, Session, SessionState};
use crate::state::AppState;

pub const MISSING_JOB_DETAILS: &str = "Please fill in all job details first.";
pub const MISSING_ANSWER: &str = "Please provide an answer.";
pub const NO_CURRENT_QUESTION: &str = "No current question available.";
pub const NO_QUESTIONS: &str = "No questions available. Please generate questions first.";
pub const NO_MORE_QUESTIONS: &str = "No more questions available.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<String>,
    /// Numbered list of every generated question.
    pub summary: String,
    pub current_question: QuestionView,
}

/// The current question, plus the text the page shows for it.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub question_number: Option<usize>,
    pub question: Option<String>,
    pub display: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswerResponse {
    pub feedback: String,
    pub display: String,
}

#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub state: SessionState,
    pub current_index: usize,
    pub total_questions: usize,
    pub answered: usize,
    pub is_complete: bool,
}

impl QuestionView {
    fn from_session(session: &Session, empty_message: &str) -> Self {
        match (session.question_number(), session.current_question()) {
            (Some(number), Some(question)) => Self {
                question_number: Some(number),
                question: Some(question.to_string()),
                display: format!("Question {number}:\n\n{question}"),
            },
            _ => Self {
                question_number: None,
                question: None,
                display: empty_message.to_string(),
            },
        }
    }
}

fn numbered_summary(questions: &[String]) -> String {
    let list = questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {q}", i + 1))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("Generated {} interview questions:\n\n{list}", questions.len())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/questions
///
/// Generates a fresh question set for the role and moves to question 1.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let job = JobDetails {
        company: request.company.trim().to_string(),
        title: request.title.trim().to_string(),
        description: request.description.trim().to_string(),
    };
    if job.company.is_empty() || job.title.is_empty() || job.description.is_empty() {
        return Err(AppError::Validation(MISSING_JOB_DETAILS.to_string()));
    }

    let mut session = state.session.lock().await;
    let questions = generate_questions(state.llm.as_ref(), &mut session, job)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(GenerateQuestionsResponse {
        summary: numbered_summary(&questions),
        current_question: QuestionView::from_session(&session, NO_QUESTIONS),
        questions,
    }))
}

/// GET /api/v1/interview/current
pub async fn handle_current_question(State(state): State<AppState>) -> Json<QuestionView> {
    let session = state.session.lock().await;
    Json(QuestionView::from_session(&session, NO_QUESTIONS))
}

/// POST /api/v1/interview/answer
///
/// Sends the answer to the current question for analysis and records both.
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>, AppError> {
    if request.answer.trim().is_empty() {
        return Err(AppError::Validation(MISSING_ANSWER.to_string()));
    }

    let mut session = state.session.lock().await;
    let question = session
        .current_question()
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(NO_CURRENT_QUESTION.to_string()))?;

    let feedback = analyze_answer(state.llm.as_ref(), &mut session, &question, &request.answer)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(SubmitAnswerResponse {
        display: format!("Feedback on your answer:\n\n{feedback}"),
        feedback,
    }))
}

/// POST /api/v1/interview/next
pub async fn handle_next_question(State(state): State<AppState>) -> Json<QuestionView> {
    let mut session = state.session.lock().await;
    session.advance();
    Json(QuestionView::from_session(&session, NO_MORE_QUESTIONS))
}

/// GET /api/v1/interview/status
pub async fn handle_session_status(State(state): State<AppState>) -> Json<SessionStatusResponse> {
    let session = state.session.lock().await;
    Json(SessionStatusResponse {
        state: session.state(),
        current_index: session.current_index(),
        total_questions: session.questions().len(),
        answered: session.answers().len(),
        is_complete: session.is_complete(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_summary() {
        let summary = numbered_summary(&["Why Acme?".to_string(), "Why now?".to_string()]);
        assert_eq!(
            summary,
            "Generated 2 interview questions:\n\n1. Why Acme?\n\n2. Why now?"
        );
    }

    #[test]
    fn test_question_view_for_current_question() {
        let mut session = Session::new();
        session.replace_questions(
            JobDetails::default(),
            vec!["First?".to_string(), "Second?".to_string()],
        );
        session.advance();

        let view = QuestionView::from_session(&session, NO_QUESTIONS);
        assert_eq!(view.question_number, Some(2));
        assert_eq!(view.display, "Question 2:\n\nSecond?");
    }

    #[test]
    fn test_question_view_without_question_uses_message() {
        let view = QuestionView::from_session(&Session::new(), NO_QUESTIONS);
        assert!(view.question.is_none());
        assert_eq!(view.display, NO_QUESTIONS);
    }

    #[test]
    fn test_generate_request_fields_default_to_empty() {
        let request: GenerateQuestionsRequest =
            serde_json::from_str(r#"{"company": "Acme"}"#).unwrap();
        assert_eq!(request.company, "Acme");
        assert!(request.title.is_empty());
    }
}
