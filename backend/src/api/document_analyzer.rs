use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Json};
use futures::future::BoxFuture;
use openai_api_rs::v1::{api::OpenAIClient, chat_completion};
use serde_json::json;
use thiserror::Error;

pub const SYSTEM_INSTRUCTION: &str = "You are an expert document analyzer. Analyze the provided document text and provide a concise, professional analysis focusing on key information, main points, and any notable patterns or insights.";

pub const UNAVAILABLE_MESSAGE: &str = "Document analysis is currently unavailable. Please configure the OpenAI API key.";

pub const NO_ANALYSIS_MESSAGE: &str = "No analysis available.";

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: i64 = 500;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Please provide document text to analyze.")]
    EmptyDocument,
    #[error("failed to build OpenAI client: {0}")]
    Client(String),
    #[error("OpenAI request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AnalysisError::EmptyDocument => (StatusCode::BAD_REQUEST, self.to_string()),
            AnalysisError::Client(_) | AnalysisError::Upstream(_) => {
                tracing::error!("Document analysis failed: {}", self);
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to analyze document. Please try again.".to_string(),
                )
            }
        };
        (status, Json(json!({"error": message}))).into_response()
    }
}

/// Turns raw document text into a natural-language analysis.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> BoxFuture<'static, Result<String, AnalysisError>>;
}

pub fn user_prompt(text: &str) -> String {
    format!(
        "Please analyze this document text and provide a clear, structured analysis:\n\n{}",
        text
    )
}

/// Falls back to a fixed message when the model returned nothing useful.
pub fn analysis_text(content: Option<String>) -> String {
    match content {
        Some(text) if !text.trim().is_empty() => text,
        _ => NO_ANALYSIS_MESSAGE.to_string(),
    }
}

pub struct OpenAiAnalyzer {
    client: Arc<OpenAIClient>,
    model: String,
}

impl OpenAiAnalyzer {
    pub fn new(api_key: &str, endpoint: &str, model: &str) -> Result<Self, AnalysisError> {
        let client = OpenAIClient::builder()
            .with_endpoint(endpoint)
            .with_api_key(api_key)
            .build()
            .map_err(|e| AnalysisError::Client(e.to_string()))?;

        Ok(Self {
            client: Arc::new(client),
            model: model.to_string(),
        })
    }

    fn build_request(&self, text: &str) -> chat_completion::ChatCompletionRequest {
        let messages = vec![
            chat_completion::ChatCompletionMessage {
                role: chat_completion::MessageRole::system,
                content: chat_completion::Content::Text(SYSTEM_INSTRUCTION.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            chat_completion::ChatCompletionMessage {
                role: chat_completion::MessageRole::user,
                content: chat_completion::Content::Text(user_prompt(text)),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ];

        chat_completion::ChatCompletionRequest::new(self.model.clone(), messages)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
    }
}

impl DocumentAnalyzer for OpenAiAnalyzer {
    fn analyze(&self, text: &str) -> BoxFuture<'static, Result<String, AnalysisError>> {
        let client = self.client.clone();
        let request = self.build_request(text);
        let chars = text.chars().count();

        Box::pin(async move {
            tracing::debug!("Requesting analysis for {} characters", chars);
            let result = client
                .chat_completion(request)
                .await
                .map_err(|e| AnalysisError::Upstream(e.to_string()))?;

            let content = result
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content);
            Ok(analysis_text(content))
        })
    }
}
