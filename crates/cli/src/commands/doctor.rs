use govpulse_core::config::{AppConfig, LoadOptions};
use govpulse_mcp::{FixtureDataSource, SearchFilters, TenantDataSource};
use serde::Serialize;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: &'static str,
    detail: String,
}

pub fn run(json: bool) -> CommandResult {
    let mut checks = Vec::new();

    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config",
                status: "ok",
                detail: "configuration loaded and validated".to_string(),
            });
            Some(config)
        }
        Err(error) => {
            checks.push(DoctorCheck { name: "config", status: "fail", detail: error.to_string() });
            None
        }
    };

    if let Some(config) = &config {
        let detail = if config.slack.verify_signatures {
            "signature verification enabled with signing secret present".to_string()
        } else {
            "signature verification disabled; requests will not be authenticated".to_string()
        };
        checks.push(DoctorCheck {
            name: "slack_signatures",
            status: if config.slack.verify_signatures { "ok" } else { "warn" },
            detail,
        });
    }

    checks.push(data_source_check());

    let failed = checks.iter().any(|check| check.status == "fail");
    let output = if json {
        serde_json::to_string_pretty(&checks)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"))
    } else {
        checks
            .iter()
            .map(|check| format!("[{}] {} - {}", check.status, check.name, check.detail))
            .collect::<Vec<_>>()
            .join("\n")
    };

    if failed {
        CommandResult { exit_code: 1, output }
    } else {
        CommandResult::raw(output)
    }
}

fn data_source_check() -> DoctorCheck {
    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return DoctorCheck {
                name: "data_source",
                status: "fail",
                detail: format!("could not start async runtime: {error}"),
            };
        }
    };

    let source = FixtureDataSource::new();
    match runtime.block_on(source.fetch_overview(None, &SearchFilters::default())) {
        Ok(overview) => DoctorCheck {
            name: "data_source",
            status: "ok",
            detail: format!(
                "fixture source served {} assets across {} connections",
                overview.snapshot.total_assets, overview.snapshot.total_connections
            ),
        },
        Err(error) => {
            DoctorCheck { name: "data_source", status: "fail", detail: error.to_string() }
        }
    }
}
