//! REST API Server for the pet NLP service
//!
//! Exposes text analysis via HTTP endpoints
//! Integrates with the pet frontend and backend

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::analyzer::TextAnalyzer;
use crate::error::NlpError;
use crate::models::AnalyzeResponse;

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// =============================
/// Error Body
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            error: message,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

type ApiResult<T> = std::result::Result<(StatusCode, Json<T>), (StatusCode, Json<ErrorResponse>)>;

fn error_status(err: &NlpError) -> StatusCode {
    match err {
        NlpError::EmptyInput => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub analyzer: Arc<TextAnalyzer>,
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Analyze Endpoint
/// =============================

async fn analyze_text(
    State(state): State<ApiState>,
    Json(req): Json<AnalyzeRequest>,
) -> ApiResult<AnalyzeResponse> {
    let request_id = uuid::Uuid::new_v4();

    let text = match req.text {
        Some(text) if !text.is_empty() => text,
        _ => {
            let err = NlpError::EmptyInput;
            info!(%request_id, "Rejected analyze request without text");
            return Err((error_status(&err), Json(ErrorResponse::new(err.to_string()))));
        }
    };

    info!(%request_id, chars = text.chars().count(), "Received analyze request");

    match state.analyzer.analyze(&text) {
        Ok(analysis) => Ok((StatusCode::OK, Json(AnalyzeResponse::from(analysis)))),
        Err(e) => {
            error!(%request_id, error = %e, "Analysis failed");
            Err((error_status(&e), Json(ErrorResponse::new(e.to_string()))))
        }
    }
}

/// =============================
/// Router
/// =============================

pub fn create_router(analyzer: Arc<TextAnalyzer>) -> Router {
    let state = ApiState { analyzer };

    Router::new()
        .route("/health", get(health))
        .route("/api/nlp/analyze", post(analyze_text))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    analyzer: Arc<TextAnalyzer>,
    addr: &str,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(analyzer);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("NLP Server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
