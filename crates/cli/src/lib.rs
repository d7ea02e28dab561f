pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use commands::CommandResult;

#[derive(Debug, Parser)]
#[command(
    name = "govpulse",
    about = "Govpulse operator CLI",
    long_about = "Operate the govpulse webhook: inspect configuration, validate readiness, and run fixture assessments locally.",
    after_help = "Examples:\n  govpulse doctor --json\n  govpulse config\n  govpulse smoke --seed 42 --report"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Run the full assessment pipeline in-process against fixture data")]
    Smoke {
        #[arg(long, help = "Slash-command text to assess (defaults to a sample command)")]
        text: Option<String>,
        #[arg(long, help = "Seed for the score jitter, for reproducible output")]
        seed: Option<u64>,
        #[arg(long, help = "Print the generated report instead of the JSON envelope")]
        report: bool,
    },
    #[command(about = "Inspect effective configuration values with secrets redacted")]
    Config,
    #[command(about = "Validate config, signature readiness, and data-source checks")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result: CommandResult = match cli.command {
        Command::Smoke { text, seed, report } => commands::smoke::run(text, seed, report),
        Command::Config => commands::config::run(),
        Command::Doctor { json } => commands::doctor::run(json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
