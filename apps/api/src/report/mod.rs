// Report Renderer
// Session snapshot → blocks → pages → PDF file in the report directory.
// Blocking file IO; HTTP callers run it inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod handlers;
pub mod layout;
pub mod pdf;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::info;

use crate::report::layout::{build_blocks, paginate, PageConfig, REPORT_TITLE};
use crate::session::Session;

const FILENAME_PREFIX: &str = "interview_prep_";
const FILENAME_EXTENSION: &str = ".pdf";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),
}

/// Renders the session into `dir`. Returns `None` when there are no questions.
pub fn render_report(session: &Session, dir: &Path) -> Result<Option<PathBuf>, ReportError> {
    render_report_at(session, dir, Local::now())
}

pub fn render_report_at(
    session: &Session,
    dir: &Path,
    generated_at: DateTime<Local>,
) -> Result<Option<PathBuf>, ReportError> {
    if !session.has_questions() {
        return Ok(None);
    }

    let config = PageConfig::default();
    let blocks = build_blocks(session);
    let pages = paginate(&blocks, &config);

    let path = dir.join(report_filename(generated_at));
    pdf::write_pdf(&pages, &config, REPORT_TITLE, &path)?;

    info!(
        "Report written to {} ({} pages, {} answered questions)",
        path.display(),
        pages.len(),
        session.answered_entries().count()
    );
    Ok(Some(path))
}

/// `interview_prep_<YYYYmmdd_HHMMSS>.pdf`
pub fn report_filename(generated_at: DateTime<Local>) -> String {
    format!(
        "{FILENAME_PREFIX}{}{FILENAME_EXTENSION}",
        generated_at.format(TIMESTAMP_FORMAT)
    )
}

/// True only for names `report_filename` can produce. Guards the download route.
pub fn is_report_filename(name: &str) -> bool {
    let Some(stamp) = name
        .strip_prefix(FILENAME_PREFIX)
        .and_then(|rest| rest.strip_suffix(FILENAME_EXTENSION))
    else {
        return false;
    };
    chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok()
        && stamp.len() == "YYYYmmdd_HHMMSS".len()
}
