use ignite::error::MessagesError;
use ignite::logging::{init_tracing, Logger, LoggerOptionsPatch};
use ignite::messages::{ErrorNormalizer, MessageStore, ReportedError};

use color_eyre::Result;
use std::io::{self, BufRead, Write};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    /// `Some(true)` for `--color`, `Some(false)` for `--plain`.
    colorize: Option<bool>,
    /// Raw JSON error values. Empty means read stdin.
    inputs: Vec<String>,
}

fn parse_args<I>(args: I) -> Options
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "--plain" => options.colorize = Some(false),
            "--color" => options.colorize = Some(true),
            _ => options.inputs.push(arg),
        }
    }
    options
}

/// Parse one input line. Unparseable input is itself a reported failure.
fn to_reported(raw: &str) -> ReportedError {
    match ReportedError::from_json_str(raw) {
        Ok(error) => error,
        Err(err) => ReportedError::from(err),
    }
}

fn read_stdin_lines() -> Result<Vec<String>, MessagesError> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("ignite-messages {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;
    init_tracing()?;

    let options = parse_args(std::env::args().skip(1));
    if let Some(colorize) = options.colorize {
        Logger::config(LoggerOptionsPatch::colorize(colorize));
    }

    let inputs = if options.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        options.inputs
    };

    let store = MessageStore::new();
    let normalizer = ErrorNormalizer::new(store.clone(), &Logger::default());
    for raw in &inputs {
        normalizer.report_errors(to_reported(raw));
    }

    let snapshot = store.snapshot();
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &*snapshot)?;
    writeln!(stdout)?;

    Ok(())
}
