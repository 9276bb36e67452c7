use simplecalc::config::Config;
use simplecalc::{repl, runner};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let matches = Config::command().get_matches();
    let config = Config::from_matches(&matches);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::default().add_directive(config.log_level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(config.color)
        .init();

    if let Some(expression) = &config.expression {
        return runner::run(expression, &config);
    }

    match repl::start(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "REPL terminated");
            eprintln!("Error reading input: {}", err);
            ExitCode::FAILURE
        }
    }
}
