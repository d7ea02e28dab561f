//! The `/atlan-health` slash-command handler: signature check, command
//! parsing, assessment pipeline, and chunked delivery.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use govpulse_core::errors::ApplicationError;
use govpulse_core::industry::Industry;
use govpulse_core::report::{generate_assessment, AssessmentContext};
use govpulse_core::scoring::{HealthScorer, HealthScoreResult};
use govpulse_core::TenantOverview;
use govpulse_mcp::{analyze_asset_quality, assess_compliance_readiness, SearchFilters};
use govpulse_slack::commands::{parse_health_command, ParsedCommand, SlashCommandPayload};
use govpulse_slack::messages::{self, chunk_text, SlackResponse};

use crate::followup;
use crate::routes::AppState;

/// Room reserved inside the message limit for the heading, code fences, and
/// the score footer wrapped around each report chunk.
const FRAME_OVERHEAD: usize = 160;

pub async fn atlan_setup(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let correlation_id = Uuid::new_v4().to_string();

    if let Some(verifier) = &state.verifier {
        let timestamp = header_str(&headers, "x-slack-request-timestamp");
        let signature = header_str(&headers, "x-slack-signature");

        if let Err(error) = verifier.verify(timestamp, signature, &body, Utc::now().timestamp()) {
            warn!(
                event_name = "slack.signature.rejected",
                correlation_id = %correlation_id,
                error = %error,
                "rejecting unsigned or stale slash command"
            );
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "invalid request signature" })),
            )
                .into_response();
        }
    }

    let payload: SlashCommandPayload = match serde_urlencoded::from_str(&body) {
        Ok(payload) => payload,
        Err(error) => {
            warn!(
                event_name = "slack.payload.undecodable",
                correlation_id = %correlation_id,
                error = %error,
                "slash command body was not valid form encoding"
            );
            return Json(messages::parse_failure_message()).into_response();
        }
    };

    let response = match process_command(&state, &payload, &correlation_id).await {
        Ok(response) => response,
        Err(error) => {
            warn!(
                event_name = "slack.command.failed",
                correlation_id = %correlation_id,
                error = %error,
                "assessment pipeline failed"
            );
            let interface = error.into_interface(correlation_id.clone());
            messages::error_message(interface.user_message(), &correlation_id)
        }
    };

    Json(response).into_response()
}

pub async fn interactive() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers.get(name).and_then(|value| value.to_str().ok()).unwrap_or_default()
}

async fn process_command(
    state: &AppState,
    payload: &SlashCommandPayload,
    correlation_id: &str,
) -> Result<SlackResponse, ApplicationError> {
    let text = payload.text.trim();
    if text.is_empty() {
        return Ok(messages::usage_message());
    }

    let Some(command) = parse_health_command(text) else {
        return Ok(messages::parse_failure_message());
    };

    let industry = Industry::detect(&command.company_name, command.industry_hint());
    let profile = industry.profile();

    info!(
        event_name = "slack.command.received",
        correlation_id = %correlation_id,
        company = %command.company_name,
        industry = %industry,
        user = %payload.user_name,
        "processing health assessment command"
    );

    let filters = SearchFilters::from_command(&command);
    let overview = match state
        .data_source
        .fetch_overview(command.tenant_url.as_deref(), &filters)
        .await
    {
        Ok(overview) => overview,
        Err(error) => {
            warn!(
                event_name = "slack.command.fetch_degraded",
                correlation_id = %correlation_id,
                error = %error,
                "tenant fetch failed, continuing with fallback snapshot"
            );
            TenantOverview::fallback()
        }
    };

    let score = HealthScorer::new().score(&overview.snapshot, profile, &mut rand::thread_rng());
    let quality = analyze_asset_quality(&overview.sample_assets);
    let readiness = assess_compliance_readiness(&overview.sample_assets, profile);

    let report = generate_assessment(&AssessmentContext {
        company_name: &command.company_name,
        tenant_url: command.tenant_url.as_deref(),
        profile,
        overview: &overview,
        score: &score,
        quality: Some(&quality),
        readiness: Some(&readiness),
        prepared_on: Utc::now().date_naive(),
    });

    Ok(deliver(state, payload, &command, &score, &report, correlation_id))
}

/// Fit the report to the Slack message ceiling. A short report goes out in
/// one message; a long one returns its first chunk with a score footer and
/// hands the rest to the follow-up delivery task.
fn deliver(
    state: &AppState,
    payload: &SlashCommandPayload,
    command: &ParsedCommand,
    score: &HealthScoreResult,
    report: &str,
    correlation_id: &str,
) -> SlackResponse {
    let mode = state.config.assessment.response_mode;
    let limit = state.config.assessment.message_limit;
    let chunk_limit = limit.saturating_sub(FRAME_OVERHEAD).max(1);

    let mut chunks = chunk_text(report, chunk_limit);
    if chunks.len() == 1 {
        return SlackResponse::with_mode(
            mode,
            format!("📋 *Professional Assessment Complete*\n\n```\n{}\n```", chunks.remove(0)),
        );
    }

    let first = chunks.remove(0);
    if payload.response_url.is_empty() {
        warn!(
            event_name = "slack.followup.skipped",
            correlation_id = %correlation_id,
            dropped_chunks = chunks.len(),
            "no response_url on payload, remaining report chunks dropped"
        );
    } else {
        // Completion is observable on the returned channel; the handler
        // itself does not wait for delivery.
        let _completion = followup::spawn_followup(
            state.http.clone(),
            payload.response_url.clone(),
            chunks,
            mode,
            correlation_id.to_string(),
        );
    }

    SlackResponse::with_mode(
        mode,
        format!(
            "📋 *{} - Health Assessment*\n\n```\n{first}\n```\n\n*Health Score: {}/100*",
            command.company_name, score.overall_score
        ),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::Utc;
    use govpulse_core::config::{AppConfig, ConfigOverrides, LoadOptions};
    use govpulse_mcp::FixtureDataSource;
    use govpulse_slack::signature::SignatureVerifier;
    use tower::util::ServiceExt;

    use crate::routes::{router, AppState};

    const SECRET: &str = "test-signing-secret";

    fn state_with(overrides: ConfigOverrides) -> AppState {
        let config = AppConfig::load(LoadOptions { overrides, ..LoadOptions::default() })
            .expect("test config loads");
        AppState::new(config, Arc::new(FixtureDataSource::new()), reqwest::Client::new())
    }

    fn open_state() -> AppState {
        state_with(ConfigOverrides {
            verify_signatures: Some(false),
            ..ConfigOverrides::default()
        })
    }

    fn signed_state() -> AppState {
        state_with(ConfigOverrides {
            signing_secret: Some(SECRET.to_string()),
            verify_signatures: Some(true),
            ..ConfigOverrides::default()
        })
    }

    fn form_request(path: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn blank_text_returns_ephemeral_usage() {
        let response = router(open_state())
            .oneshot(form_request("/slack/atlan-setup", "text=&user_name=tester"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["response_type"], "ephemeral");
        assert!(json["text"].as_str().expect("text").contains("Usage"));
    }

    #[tokio::test]
    async fn assessment_runs_for_valid_command() {
        let body = "text=%22MegaBank%20Corp%22%20https%3A%2F%2Fbank.atlan.com%20industry%3Afinance&user_name=tester";
        let response = router(open_state())
            .oneshot(form_request("/slack/atlan-setup", body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["response_type"], "in_channel");
        let text = json["text"].as_str().expect("text");
        assert!(text.contains("GOVERNANCE HEALTH SCORE"));
        assert!(text.contains("MegaBank Corp"));
    }

    #[tokio::test]
    async fn api_prefixed_route_serves_the_same_handler() {
        let response = router(open_state())
            .oneshot(form_request("/api/slack/atlan-setup", "text=TestCorp"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["response_type"], "in_channel");
    }

    #[tokio::test]
    async fn long_report_is_truncated_with_score_footer() {
        let state = state_with(ConfigOverrides {
            verify_signatures: Some(false),
            message_limit: Some(500),
            ..ConfigOverrides::default()
        });

        let response = router(state)
            .oneshot(form_request("/slack/atlan-setup", "text=TestCorp"))
            .await
            .expect("response");

        let json = json_body(response).await;
        let text = json["text"].as_str().expect("text");
        assert!(text.len() <= 500 + 100, "first message must stay near the limit");
        assert!(text.contains("Health Score:"));
        assert!(text.contains("TestCorp - Health Assessment"));
    }

    #[tokio::test]
    async fn missing_signature_is_rejected_with_401() {
        let response = router(signed_state())
            .oneshot(form_request("/slack/atlan-setup", "text=TestCorp"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = json_body(response).await;
        assert_eq!(json["error"], "invalid request signature");
    }

    #[tokio::test]
    async fn valid_signature_is_accepted() {
        let body = "text=TestCorp&user_name=tester";
        let now = Utc::now().timestamp();
        let signature =
            SignatureVerifier::new(SECRET.to_string().into(), 300).sign(now, body);

        let request = Request::builder()
            .method("POST")
            .uri("/slack/atlan-setup")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("x-slack-request-timestamp", now.to_string())
            .header("x-slack-signature", signature)
            .body(Body::from(body))
            .expect("request");

        let response = router(signed_state()).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn stale_timestamp_is_rejected_even_with_correct_signature() {
        let body = "text=TestCorp";
        let stale = Utc::now().timestamp() - 301;
        let signature =
            SignatureVerifier::new(SECRET.to_string().into(), 300).sign(stale, body);

        let request = Request::builder()
            .method("POST")
            .uri("/slack/atlan-setup")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("x-slack-request-timestamp", stale.to_string())
            .header("x-slack-signature", signature)
            .body(Body::from(body))
            .expect("request");

        let response = router(signed_state()).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn interactive_endpoint_acknowledges() {
        let response = router(open_state())
            .oneshot(form_request("/slack/interactive", "payload=%7B%7D"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "ok");
    }
}
