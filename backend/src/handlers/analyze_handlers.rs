use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::document_analyzer::{AnalysisError, UNAVAILABLE_MESSAGE};
use crate::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    text: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

pub async fn analyze_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AnalysisError> {
    if req.text.trim().is_empty() {
        return Err(AnalysisError::EmptyDocument);
    }

    let Some(analyzer) = state.analyzer.as_ref() else {
        tracing::warn!("Analysis requested but no OpenAI API key is configured");
        return Ok(Json(AnalyzeResponse {
            analysis: UNAVAILABLE_MESSAGE.to_string(),
        }));
    };

    let analysis = analyzer.analyze(&req.text).await?;
    tracing::info!("Document analyzed ({} chars in, {} chars out)", req.text.len(), analysis.len());

    Ok(Json(AnalyzeResponse { analysis }))
}
