use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use roundup_connect::{RoundUpOrchestrator, RoundUpRequest, StarlingApiClient};
use roundup_core::Error as CoreError;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct RoundUpQuery {
    #[serde(rename = "Authorization")]
    authorization: Option<String>,
    date: Option<String>,
    #[serde(rename = "savingsGoalUid")]
    savings_goal_uid: Option<String>,
}

/// Round up the week starting at `date` into a savings goal.
///
/// The bearer token comes from the `Authorization` query parameter, or the
/// `Authorization` header when the parameter is absent or blank. Responds
/// with the banking API's transfer response.
pub async fn round_up(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<RoundUpQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query.map_err(|rejection| {
        ApiError::from(CoreError::input(format!(
            "Invalid query string: {}",
            rejection.body_text()
        )))
    })?;
    let query_token = query.authorization.filter(|v| !v.trim().is_empty());
    let header_token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let request = RoundUpRequest::from_parts(
        query_token.or(header_token),
        query.date,
        query.savings_goal_uid,
    )?;

    let client = StarlingApiClient::with_client(
        state.http_client.clone(),
        &state.starling_api_url,
        &request.auth_token,
    )?;
    let outcome = RoundUpOrchestrator::new(Arc::new(client))
        .run(&request)
        .await?;

    let status = StatusCode::from_u16(outcome.transfer.status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, Json(outcome.transfer.body)).into_response())
}
