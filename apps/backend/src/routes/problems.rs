//! Problem import endpoints

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use quiz_core::{ensure_markdown_name, import_bytes, import_str, ImportReport};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/problems/import
pub async fn import(
    State(state): State<AppState>,
    Json(payload): Json<ImportRequest>,
) -> Result<Json<ImportResponse>> {
    let report = import_request(&state, &payload)?;
    Ok(Json(report.into()))
}

/// POST /api/problems/upload?name=<file>.md
/// Raw markdown body, as read from the uploaded file
pub async fn upload(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<Json<ImportResponse>> {
    let file_name = params.name.trim();
    if file_name.is_empty() {
        return Err(ApiError::BadRequest("missing file name".to_string()));
    }
    ensure_markdown_name(file_name)?;

    let report = import_bytes(file_name, &body, state.clock.as_ref())?;
    log_report(&report);
    Ok(Json(report.into()))
}

/// POST /api/problems/table
pub async fn table(
    State(state): State<AppState>,
    Json(payload): Json<ImportRequest>,
) -> Result<Json<TableResponse>> {
    let report = import_request(&state, &payload)?;
    Ok(Json(report.into()))
}

fn import_request(state: &AppState, payload: &ImportRequest) -> Result<ImportReport> {
    let file_name = payload.file_name();
    ensure_markdown_name(file_name)?;

    let report = import_str(file_name, &payload.content, state.clock.as_ref());
    log_report(&report);
    Ok(report)
}

fn log_report(report: &ImportReport) {
    if report.is_empty() {
        tracing::info!(file = %report.file_name, "no problems detected");
    } else {
        tracing::info!(
            file = %report.file_name,
            problems = report.problems.len(),
            "imported problems"
        );
    }
}
