use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::Level;

pub const DEFAULT_PROMPT: &str = "> ";

/// Settings for one run of the calculator, taken from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub prompt: String,
    pub color: bool,
    pub log_level: Level,
    /// Evaluate this once instead of starting the REPL.
    pub expression: Option<String>,
}

impl Config {
    pub fn command() -> Command {
        Command::new("simplecalc")
            .about("A right-associative, flat-precedence arithmetic calculator")
            .arg(
                Arg::new("expression")
                    .help("Expression to evaluate once; starts the REPL when omitted")
                    .value_name("EXPRESSION")
                    .num_args(1..)
                    .trailing_var_arg(true)
                    .allow_hyphen_values(true)
                    .index(1),
            )
            .arg(
                Arg::new("prompt")
                    .short('p')
                    .long("prompt")
                    .help("Prompt shown before each line in the REPL")
                    .value_name("PROMPT")
                    .default_value(DEFAULT_PROMPT),
            )
            .arg(
                Arg::new("no-color")
                    .long("no-color")
                    .help("Disable colours in diagnostics and logs")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Log more; repeat for debug and trace output")
                    .action(ArgAction::Count),
            )
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        let expression = matches
            .get_many::<String>("expression")
            .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "));

        let log_level = match matches.get_count("verbose") {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };

        Self {
            prompt: matches
                .get_one::<String>("prompt")
                .cloned()
                .unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            color: !matches.get_flag("no-color"),
            log_level,
            expression,
        }
    }

    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }
}
