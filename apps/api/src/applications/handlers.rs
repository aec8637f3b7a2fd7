//! Axum route handlers for the Applications API.

use axum::{extract::State, Json};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::applications::models::{ApplicationStatus, JobApplication};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD`; blank is treated as not given.
    #[serde(default)]
    pub application_date: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
}

#[derive(Debug, Serialize)]
pub struct CreateApplicationResponse {
    pub application: JobApplication,
    pub summary: String,
}

fn parse_application_date(raw: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match raw.map(str::trim).filter(|d| !d.is_empty()) {
        None => Ok(None),
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::Validation("Application date must use YYYY-MM-DD.".to_string())),
    }
}

/// POST /api/v1/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    Json(request): Json<CreateApplicationRequest>,
) -> Result<Json<CreateApplicationResponse>, AppError> {
    let company = request.company.trim();
    let title = request.title.trim();
    if company.is_empty() || title.is_empty() {
        return Err(AppError::Validation(
            "Company name and job title are required.".to_string(),
        ));
    }

    let application = JobApplication {
        id: Uuid::new_v4(),
        company: company.to_string(),
        title: title.to_string(),
        description: request.description.trim().to_string(),
        application_date: parse_application_date(request.application_date.as_deref())?,
        status: request.status,
        created_at: Utc::now(),
    };

    state.applications.lock().await.push(application.clone());
    info!(
        "Recorded application {} ({} at {})",
        application.id, application.title, application.company
    );

    Ok(Json(CreateApplicationResponse {
        summary: application.summary(),
        application,
    }))
}

/// GET /api/v1/applications
pub async fn handle_list_applications(State(state): State<AppState>) -> Json<Vec<JobApplication>> {
    Json(state.applications.lock().await.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_application_date_blank_is_none() {
        assert_eq!(parse_application_date(None).unwrap(), None);
        assert_eq!(parse_application_date(Some("  ")).unwrap(), None);
    }

    #[test]
    fn test_parse_application_date_valid() {
        assert_eq!(
            parse_application_date(Some("2026-10-17")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 17)
        );
    }

    #[test]
    fn test_parse_application_date_rejects_other_formats() {
        assert!(matches!(
            parse_application_date(Some("17/10/2026")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_request_status_defaults_to_applied() {
        let request: CreateApplicationRequest =
            serde_json::from_str(r#"{"company": "Acme", "title": "SRE"}"#).unwrap();
        assert_eq!(request.status, ApplicationStatus::Applied);
        assert!(request.application_date.is_none());
    }
}
