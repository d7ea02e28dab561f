use std::process::ExitCode;

fn main() -> ExitCode {
    govpulse_cli::run()
}
