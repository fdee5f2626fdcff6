// ABOUTME: Health check endpoint
// ABOUTME: Reports whether the storage backend answers a ping

use axum::{extract::State, response::Json as ResponseJson};
use serde::Serialize;

use super::response::ApiResult;
use super::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> ApiResult<ResponseJson<HealthStatus>> {
    state.persons.ping().await?;
    Ok(ResponseJson(HealthStatus { status: "ok" }))
}
