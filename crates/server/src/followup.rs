//! Delayed delivery of report chunks to the slash command's `response_url`.
//!
//! Slack lets a command respond up to five more times within 30 minutes via
//! the `response_url` webhook. The spawned task owns its chunk list and
//! reports completion on a oneshot channel, so callers can observe delivery
//! without blocking the original HTTP response.

use govpulse_core::config::ResponseMode;
use govpulse_slack::messages::SlackResponse;
use tokio::sync::oneshot;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FollowupOutcome {
    pub delivered: usize,
    pub failed: usize,
}

pub fn spawn_followup(
    client: reqwest::Client,
    response_url: String,
    chunks: Vec<String>,
    mode: ResponseMode,
    correlation_id: String,
) -> oneshot::Receiver<FollowupOutcome> {
    let (sender, receiver) = oneshot::channel();

    tokio::spawn(async move {
        let mut outcome = FollowupOutcome::default();

        for chunk in chunks {
            let body = SlackResponse::with_mode(mode, format!("```\n{chunk}\n```"));
            match client.post(&response_url).json(&body).send().await {
                Ok(response) if response.status().is_success() => outcome.delivered += 1,
                Ok(response) => {
                    outcome.failed += 1;
                    warn!(
                        event_name = "slack.followup.rejected",
                        correlation_id = %correlation_id,
                        status = %response.status(),
                        "response_url rejected a report chunk"
                    );
                }
                Err(error) => {
                    outcome.failed += 1;
                    warn!(
                        event_name = "slack.followup.send_failed",
                        correlation_id = %correlation_id,
                        error = %error,
                        "could not deliver report chunk"
                    );
                }
            }
        }

        info!(
            event_name = "slack.followup.completed",
            correlation_id = %correlation_id,
            delivered = outcome.delivered,
            failed = outcome.failed,
            "follow-up delivery finished"
        );

        // The receiver may have been dropped by a caller that does not care.
        let _ = sender.send(outcome);
    });

    receiver
}
