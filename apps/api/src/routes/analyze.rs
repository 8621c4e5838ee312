use std::sync::Arc;

use axum::{extract::State, Json};
use bytes::Bytes;
use serde::Serialize;

use crate::analysis::taxonomy::FieldEntry;
use crate::analysis::ResumeReport;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct FieldsResponse {
    pub fields: Vec<FieldEntry>,
}

/// POST /api/v1/analyze
/// The request body is the raw PDF. Decoding is CPU-bound and touches the
/// filesystem, so it runs on the blocking pool.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ResumeReport>, AppError> {
    if body.is_empty() {
        return Err(AppError::Validation(
            "Request body must contain a PDF file".to_string(),
        ));
    }

    tracing::debug!(bytes = body.len(), "Analyzing uploaded resume");

    let analyzer = Arc::clone(&state.analyzer);
    let report = tokio::task::spawn_blocking(move || analyzer.analyze_pdf(&body))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Analysis task failed: {e}")))??;

    Ok(Json(report))
}

/// GET /api/v1/fields
pub async fn handle_list_fields(State(state): State<AppState>) -> Json<FieldsResponse> {
    Json(FieldsResponse {
        fields: state.analyzer.taxonomy().fields().to_vec(),
    })
}
