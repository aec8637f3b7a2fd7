//! Interview generator — the two completion-backed operations on a session.
//!
//! Failure policy: a failed call leaves the session exactly as it was and
//! returns a `GenerationError` whose Display is the message the user sees.
//! Synthetic error text is never stored as a question or as feedback.

use thiserror::Error;
use tracing::{info, warn};

use crate::interview::parser::parse_questions;
use crate::interview::prompts::{build_analysis_prompt, build_questions_prompt};
use crate::llm_client::{CompletionClient, LlmError};
use crate::session::{JobDetails, Session};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Error generating questions: {0}")]
    Questions(LlmError),

    #[error("Error generating questions: the response contained no questions")]
    NoQuestions,

    #[error("Error analyzing answer: {0}")]
    Analysis(LlmError),
}

/// Asks the model for interview questions and installs them in the session.
///
/// On success the session holds `job`, the parsed questions, a cursor at 0,
/// and no answers. On failure the session is untouched.
pub async fn generate_questions(
    llm: &dyn CompletionClient,
    session: &mut Session,
    job: JobDetails,
) -> Result<Vec<String>, GenerationError> {
    info!("Generating questions for {} at {}", job.title, job.company);
    let prompt = build_questions_prompt(&job.company, &job.title, &job.description);

    let raw = llm.complete(&prompt).await.map_err(|e| {
        warn!(status = ?e.status(), "Question generation failed: {e}");
        GenerationError::Questions(e)
    })?;

    let questions = parse_questions(&raw);
    if questions.is_empty() {
        warn!(
            "Question generation returned nothing parseable: {:?}",
            raw.chars().take(80).collect::<String>()
        );
        return Err(GenerationError::NoQuestions);
    }

    info!("Generated {} questions", questions.len());
    session.replace_questions(job, questions.clone());
    Ok(questions)
}

/// Asks the model to critique `answer` and records both on success.
pub async fn analyze_answer(
    llm: &dyn CompletionClient,
    session: &mut Session,
    question: &str,
    answer: &str,
) -> Result<String, GenerationError> {
    let prompt = build_analysis_prompt(question, answer);

    let feedback = llm.complete(&prompt).await.map_err(|e| {
        warn!(status = ?e.status(), "Answer analysis failed: {e}");
        GenerationError::Analysis(e)
    })?;

    session.record_answer(answer, feedback.as_str());
    info!("Recorded answer {} of {}", session.answers().len(), session.questions().len());
    Ok(feedback)
}
