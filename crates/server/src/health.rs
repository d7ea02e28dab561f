use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::routes::AppState;

pub const SERVICE_NAME: &str = "Atlan Health Check";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub signature_verification: &'static str,
    pub data_source: &'static str,
    pub checked_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestResponse {
    pub message: &'static str,
    pub example: &'static str,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse { status: "healthy", service: SERVICE_NAME })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        signature_verification: if state.verifier.is_some() { "enabled" } else { "disabled" },
        data_source: "fixture",
        checked_at: Utc::now().to_rfc3339(),
    })
}

pub async fn test() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Professional health check system ready",
        example: "/atlan-health \"DPR Construction\" https://dpr.atlan.com industry:construction tags:Safety,OSHA",
    })
}
