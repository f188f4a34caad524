// Axum API Server Module
//
// Purpose: HTTP boundary for the etymology matcher
// POST { "streetName": ... } -> { "data": EtymologySuggestion }
// Every failure -> 500 { "error": { "code": "ETYMOLOGY_ERROR", "message": ... } }

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};

use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use moka::future::Cache;

use std::any::Any as PanicPayload;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::etymology::{suggest_from_request, EtymologyError, JsonFormatter, SuggestEtymologyRequest};

/// Pre-flight responses may be cached by browsers for a day
const CORS_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Longer street names are answered but never cached
pub const MAX_CACHED_NAME_LEN: usize = 256;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    /// Successful responses keyed by the verbatim street name, weighed in bytes
    pub cache: Cache<String, serde_json::Value>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        tracing::info!(
            "Initializing Moka cache ({} bytes, TTL {}s)...",
            config.cache_max_bytes,
            config.cache_ttl_secs
        );
        let cache = Cache::builder()
            .weigher(entry_weight)
            .max_capacity(config.cache_max_bytes)
            .time_to_live(config.cache_ttl())
            .build();

        Self { cache }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Etymology suggestion; the second path matches the hosted-function URL
        // the street detail page already calls
        .route("/api/etymology/suggest", post(suggest))
        .route("/functions/v1/suggest-etymology", post(suggest))

        // Middleware (applied in reverse order)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CompressionLayer::new())
        .layer(cors_layer()) // also answers OPTIONS pre-flight with an empty 200
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
        .max_age(CORS_MAX_AGE)
}

/// Approximate bytes held by one cache entry (key plus serialized response)
fn entry_weight(key: &String, value: &serde_json::Value) -> u32 {
    let value_len = serde_json::to_vec(value).map(|v| v.len()).unwrap_or(usize::MAX);
    key.len()
        .saturating_add(value_len)
        .try_into()
        .unwrap_or(u32::MAX)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn suggest(
    State(state): State<AppState>,
    payload: Result<Json<SuggestEtymologyRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Rejected(rejection.body_text()))?;

    let cache_key = request
        .street_name
        .as_ref()
        .filter(|name| name.len() <= MAX_CACHED_NAME_LEN)
        .map(|name| format!("etymology:{}", name));

    if let Some(key) = &cache_key {
        if let Some(cached) = state.cache.get(key).await {
            tracing::debug!("Cache hit: {}", key);
            return Ok(Json(cached));
        }
    }

    let suggestion = suggest_from_request(&request)?;

    tracing::info!(
        "Suggested etymology for {:?}: {} element(s), confidence {}",
        suggestion.street_name,
        suggestion.elements.len(),
        suggestion.confidence.as_str()
    );

    let result = JsonFormatter::envelope(&suggestion);

    if let Some(key) = cache_key {
        state.cache.insert(key, result.clone()).await;
    }

    Ok(Json(result))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    Etymology(EtymologyError),
    /// Body was not a JSON object of the expected shape
    Rejected(String),
}

impl From<EtymologyError> for AppError {
    fn from(err: EtymologyError) -> Self {
        AppError::Etymology(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Validation and internal failures share one status code
        let err = match self {
            AppError::Etymology(err) => err,
            AppError::Rejected(msg) => EtymologyError::Internal(msg),
        };

        tracing::error!("Etymology suggestion error: {}", err);

        (StatusCode::INTERNAL_SERVER_ERROR, Json(err.to_envelope())).into_response()
    }
}

fn handle_panic(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Handler panicked: {}", detail);

    AppError::Etymology(EtymologyError::Internal("Internal server error".to_string())).into_response()
}
