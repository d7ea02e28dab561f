use govpulse_core::config::{AppConfig, LoadOptions};
use serde_json::json;

use super::CommandResult;

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure("config", "load", error.to_string(), 1);
        }
    };

    let rendered = json!({
        "slack": {
            "signing_secret": if config.slack.signing_secret.is_some() { "[redacted]" } else { "[unset]" },
            "verify_signatures": config.slack.verify_signatures,
            "timestamp_tolerance_secs": config.slack.timestamp_tolerance_secs,
        },
        "assessment": {
            "message_limit": config.assessment.message_limit,
            "response_mode": config.assessment.response_mode.as_str(),
        },
        "server": {
            "bind_address": config.server.bind_address,
            "port": config.server.port,
            "graceful_shutdown_secs": config.server.graceful_shutdown_secs,
        },
        "logging": {
            "level": config.logging.level,
            "format": format!("{:?}", config.logging.format).to_lowercase(),
        },
    });

    match serde_json::to_string_pretty(&rendered) {
        Ok(output) => CommandResult::raw(output),
        Err(error) => CommandResult::failure("config", "serialization", error.to_string(), 1),
    }
}
