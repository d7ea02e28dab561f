use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use govpulse_core::industry::Industry;
use govpulse_core::report::{generate_assessment, AssessmentContext};
use govpulse_core::scoring::HealthScorer;
use govpulse_core::TenantOverview;
use govpulse_mcp::{
    analyze_asset_quality, assess_compliance_readiness, FixtureDataSource, SearchFilters,
    TenantDataSource,
};
use govpulse_slack::commands::parse_health_command;
use govpulse_slack::messages::{chunk_text, DEFAULT_MESSAGE_LIMIT};

use super::CommandResult;

const DEFAULT_SMOKE_COMMAND: &str =
    r#""DPR Construction" https://dpr.atlan.com industry:construction tags:Safety,OSHA"#;

pub fn run(text: Option<String>, seed: Option<u64>, show_report: bool) -> CommandResult {
    let command_text = text.unwrap_or_else(|| DEFAULT_SMOKE_COMMAND.to_string());

    let Some(command) = parse_health_command(&command_text) else {
        return CommandResult::failure(
            "smoke",
            "parse",
            "could not parse command text: include a company name and tenant URL",
            2,
        );
    };

    let industry = Industry::detect(&command.company_name, command.industry_hint());
    let profile = industry.profile();
    let filters = SearchFilters::from_command(&command);

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "smoke",
                "runtime",
                format!("could not start async runtime: {error}"),
                1,
            );
        }
    };

    let source = FixtureDataSource::new();
    let overview = runtime
        .block_on(source.fetch_overview(command.tenant_url.as_deref(), &filters))
        .unwrap_or_else(|_| TenantOverview::fallback());

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let score = HealthScorer::new().score(&overview.snapshot, profile, &mut rng);
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

    if show_report {
        return CommandResult::raw(report);
    }

    let chunks = chunk_text(&report, DEFAULT_MESSAGE_LIMIT);
    CommandResult::success(
        "smoke",
        format!(
            "assessed {company} as {industry}: score {score}/100 (grade {grade}), report {len} chars in {chunks} chunk(s)",
            company = command.company_name,
            industry = industry,
            score = score.overall_score,
            grade = score.grade.as_str(),
            len = report.len(),
            chunks = chunks.len(),
        ),
    )
}
