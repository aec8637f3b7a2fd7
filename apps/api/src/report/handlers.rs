//! Axum route handlers for the Report API.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::report::{is_report_filename, render_report};
use crate::state::AppState;

pub const NO_REPORT_DATA: &str = "No interview data available for report generation.";

#[derive(Debug, Serialize)]
pub struct ReportFile {
    pub filename: String,
    pub path: String,
    pub download_url: String,
}

/// `report` is absent when there was nothing to render; `message` is always set.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report: Option<ReportFile>,
    pub message: String,
}

/// POST /api/v1/reports
///
/// Renders the current session to a PDF in the report directory.
pub async fn handle_generate_report(
    State(state): State<AppState>,
) -> Result<Json<ReportResponse>, AppError> {
    let snapshot = state.session.lock().await.clone();
    let dir = state.config.report_dir.clone();

    let rendered = tokio::task::spawn_blocking(move || render_report(&snapshot, &dir))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in report: {e}")))?
        .map_err(|e| AppError::Report(format!("Error generating report: {e}")))?;

    let Some(path) = rendered else {
        return Ok(Json(ReportResponse {
            report: None,
            message: NO_REPORT_DATA.to_string(),
        }));
    };

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Json(ReportResponse {
        message: format!("Report generated successfully: {filename}"),
        report: Some(ReportFile {
            download_url: format!("/api/v1/reports/{filename}"),
            path: path.display().to_string(),
            filename,
        }),
    }))
}

/// GET /api/v1/reports/:filename
///
/// Streams a previously generated report. Only report filenames are served.
pub async fn handle_download_report(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !is_report_filename(&filename) {
        return Err(AppError::NotFound(format!("Report {filename} not found")));
    }

    let path = state.config.report_dir.join(&filename);
    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!("Report {filename} not found")));
        }
        Err(e) => return Err(AppError::Internal(e.into())),
    };

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(data),
    ))
}
