use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any, AllowOrigin};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config;
mod handlers {
    pub mod analyze_handlers;
}
mod api {
    pub mod document_analyzer;
}

use config::Config;
use handlers::analyze_handlers;
use api::document_analyzer::{DocumentAnalyzer, OpenAiAnalyzer};


async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    /// `None` when no OpenAI key is configured.
    analyzer: Option<Arc<dyn DocumentAnalyzer>>,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let analyzer = match config.openai_api_key.as_deref() {
            Some(key) => {
                let analyzer = OpenAiAnalyzer::new(key, &config.openai_endpoint, &config.openai_model)?;
                Some(Arc::new(analyzer) as Arc<dyn DocumentAnalyzer>)
            }
            None => {
                tracing::error!("OpenAI API key is missing. Document analysis features will be disabled.");
                None
            }
        };
        Ok(Self { analyzer })
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = match config.frontend_url.as_deref().and_then(|url| url.parse().ok()) {
        Some(origin) => AllowOrigin::exact(origin),
        None => AllowOrigin::from(Any),
    };
    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_origin(origin)
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE])
}

pub fn router(state: Arc<AppState>, config: &Config) -> Router {
    let mut app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/analyze", post(analyze_handlers::analyze_document))
        .with_state(state);

    if let Some(dir) = &config.static_dir {
        // unknown paths fall through to index.html so client-side routes resolve
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).fallback(index));
    }

    app.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(config))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::from_config(&config)?);
    let app = router(state, &config);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::document_analyzer::{AnalysisError, MockDocumentAnalyzer, UNAVAILABLE_MESSAGE};
    use crate::handlers::analyze_handlers::AnalyzeResponse;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config::from_lookup(|_| None).unwrap()
    }

    fn app_with(analyzer: Option<Arc<dyn DocumentAnalyzer>>) -> Router {
        router(Arc::new(AppState { analyzer }), &test_config())
    }

    fn analyze_request(text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "text": text }).to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let response = app_with(None)
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn unavailable_without_api_key() {
        let response = app_with(None).oneshot(analyze_request("Quarterly report")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: AnalyzeResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(body.analysis, UNAVAILABLE_MESSAGE);
    }

    #[tokio::test]
    async fn blank_text_is_rejected_before_the_model() {
        let mut analyzer = MockDocumentAnalyzer::new();
        analyzer.expect_analyze().never();

        let response = app_with(Some(Arc::new(analyzer)))
            .oneshot(analyze_request("  \n "))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Please provide document text to analyze.");
    }

    #[tokio::test]
    async fn returns_model_analysis() {
        let mut analyzer = MockDocumentAnalyzer::new();
        analyzer
            .expect_analyze()
            .withf(|text| text == "Invoice #42")
            .times(1)
            .returning(|_| Box::pin(async { Ok("An invoice.".to_string()) }));

        let response = app_with(Some(Arc::new(analyzer)))
            .oneshot(analyze_request("Invoice #42"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"analysis": "An invoice."}));
    }

    #[tokio::test]
    async fn upstream_failure_is_generic() {
        let mut analyzer = MockDocumentAnalyzer::new();
        analyzer
            .expect_analyze()
            .returning(|_| Box::pin(async { Err(AnalysisError::Upstream("rate limited".into())) }));

        let response = app_with(Some(Arc::new(analyzer)))
            .oneshot(analyze_request("Contract"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Failed to analyze document. Please try again."})
        );
    }

    #[test]
    fn state_without_key_has_no_analyzer() {
        let state = AppState::from_config(&test_config()).unwrap();
        assert!(state.analyzer.is_none());
    }
}
