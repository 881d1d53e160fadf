mod round_up;

use std::sync::Arc;

use crate::{config::Config, error::ApiError, main_lib::AppState};
use axum::{
    http::{HeaderValue, Method, Uri},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub async fn healthz() -> &'static str {
    "ok"
}

async fn method_not_supported(method: Method) -> ApiError {
    ApiError::UnsupportedMethod(method.to_string())
}

async fn path_not_supported(uri: Uri) -> ApiError {
    ApiError::UnsupportedPath(uri.path().to_string())
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/healthz", get(healthz))
        .route(
            "/round",
            put(round_up::round_up).fallback(method_not_supported),
        )
        .fallback(path_not_supported)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
}
