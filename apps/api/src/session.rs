//! Session Store — the state of one interview-preparation session.
//!
//! Holds the job details, the generated questions, the answers and feedback
//! collected so far, and a cursor over the questions.
//!
//! # Cursor states
//! - `NoQuestions`: nothing generated yet.
//! - `InProgress`: `0 <= current_index < questions.len()`.
//! - `Exhausted`: `current_index >= questions.len()`. `advance()` keeps it there.
//!
//! Only `replace_questions` moves the session back to the start.

use serde::{Deserialize, Serialize};

/// The role a session prepares for. Replaced wholesale on regeneration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetails {
    pub company: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    NoQuestions,
    InProgress,
    Exhausted,
}

/// One answered question, as it appears in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsweredEntry<'a> {
    pub index: usize,
    pub question: &'a str,
    pub answer: &'a str,
    pub feedback: &'a str,
}

/// Invariant: `answers.len() == feedback.len()` at every observation point.
#[derive(Debug, Clone, Default)]
pub struct Session {
    job: JobDetails,
    questions: Vec<String>,
    answers: Vec<String>,
    feedback: Vec<String>,
    current_index: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn job(&self) -> &JobDetails {
        &self.job
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[cfg(test)]
    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn state(&self) -> SessionState {
        if self.questions.is_empty() {
            SessionState::NoQuestions
        } else if self.current_index < self.questions.len() {
            SessionState::InProgress
        } else {
            SessionState::Exhausted
        }
    }

    /// Installs a fresh question set: new job details, cursor back to 0, and
    /// answers/feedback from the previous set discarded.
    pub fn replace_questions(&mut self, job: JobDetails, questions: Vec<String>) {
        self.job = job;
        self.questions = questions;
        self.answers.clear();
        self.feedback.clear();
        self.current_index = 0;
    }

    /// Appends an answer and its feedback together.
    pub fn record_answer(&mut self, answer: impl Into<String>, feedback: impl Into<String>) {
        self.answers.push(answer.into());
        self.feedback.push(feedback.into());
    }

    pub fn current_question(&self) -> Option<&str> {
        self.questions.get(self.current_index).map(String::as_str)
    }

    /// 1-based display number of the current question.
    pub fn question_number(&self) -> Option<usize> {
        self.current_question().map(|_| self.current_index + 1)
    }

    /// Moves the cursor forward unconditionally. No clamp, no wraparound.
    pub fn advance(&mut self) -> Option<&str> {
        self.current_index = self.current_index.saturating_add(1);
        self.current_question()
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Positions where a question, an answer and feedback all exist.
    /// Unanswered trailing questions are not included.
    pub fn answered_entries(&self) -> impl Iterator<Item = AnsweredEntry<'_>> {
        self.questions
            .iter()
            .zip(&self.answers)
            .zip(&self.feedback)
            .enumerate()
            .map(|(index, ((question, answer), feedback))| AnsweredEntry {
                index,
                question,
                answer,
                feedback,
            })
    }
}
