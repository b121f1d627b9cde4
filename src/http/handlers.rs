use crate::domain::entities::report::ContentReport;
use crate::http::error::ApiError;
use crate::http::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// Handle POST /api/analyze-content
///
/// A missing or null `content` is treated like an empty string and rejected
/// before the store is touched.
pub async fn analyze_content(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ContentReport>, ApiError> {
    let content = req.content.unwrap_or_default();
    let report = state.lens.analyze(&content).await?;
    Ok(Json(report))
}

/// Handle GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
