use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use roundup_core::Error as CoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Method {0} is not supported.")]
    UnsupportedMethod(String),
    #[error("Path {0} is not supported.")]
    UnsupportedPath(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Core(e) => match e {
                // Upstream rejection is mirrored: same status, same body.
                CoreError::Account { status, body } => {
                    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                    (status, Json(body)).into_response()
                }
                CoreError::Input(_) | CoreError::DateFormat(_) | CoreError::GoalNotFound(_) => {
                    error_response(StatusCode::BAD_REQUEST, e.to_string())
                }
                CoreError::NoPrimaryAccount => error_response(StatusCode::NOT_FOUND, e.to_string()),
                CoreError::Upstream { .. } | CoreError::Transport(_) | CoreError::Decode(_) => {
                    tracing::error!("Banking API failure: {}", e);
                    error_response(StatusCode::BAD_GATEWAY, e.to_string())
                }
            },
            ApiError::UnsupportedMethod(_) => error_response(StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::UnsupportedPath(_) => {
                error_response(StatusCode::METHOD_NOT_ALLOWED, self.to_string())
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
