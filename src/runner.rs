use crate::config::Config;
use crate::value::format_number;
use std::process::ExitCode;
use tracing::debug;

/// Evaluates a single expression given on the command line and prints the result.
pub fn run(source: &str, config: &Config) -> ExitCode {
    match crate::calculate(source) {
        Ok(value) => {
            println!("{}", format_number(value));
            ExitCode::SUCCESS
        }
        Err(error) => {
            debug!(kind = ?error.kind, "expression failed");
            error.report(source, Some("<expr>"), config.color);
            ExitCode::FAILURE
        }
    }
}
