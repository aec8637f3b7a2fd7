use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where an application stands. Serialized as the label shown in the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    #[serde(rename = "Interview Completed")]
    InterviewCompleted,
    #[serde(rename = "Offer Received")]
    OfferReceived,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::InterviewScheduled => "Interview Scheduled",
            ApplicationStatus::InterviewCompleted => "Interview Completed",
            ApplicationStatus::OfferReceived => "Offer Received",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Withdrawn => "Withdrawn",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: Uuid,
    pub company: String,
    pub title: String,
    pub description: String,
    pub application_date: Option<NaiveDate>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

impl JobApplication {
    /// The plain-text summary shown after the form is submitted.
    pub fn summary(&self) -> String {
        let date = self
            .application_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        format!(
            "Job Application Summary:\n\n\
             Company: {}\n\
             Position: {}\n\
             Application Date: {}\n\
             Status: {}\n\n\
             Job Description: {}",
            self.company,
            self.title,
            date,
            self.status.label(),
            self.description
        )
    }
}
