mod console;
mod error;

use clap::{Parser, ValueEnum};
use console::Console;
use expresso_compute::OptionsBuilder;
use log::info;
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use std::{fs::File, io::{self, BufRead, BufReader, IsTerminal}, path::PathBuf};

/// Simplify and differentiate polynomial expressions.
///
/// Enter an expression to make it the current expression, then `!simplify` to print its canonical
/// form, or `!d/dx` to differentiate it with respect to `x`.
#[derive(Debug, Parser)]
#[command(name = "expresso", version)]
struct Args {
    /// Script to run, one line at a time. Reads from stdin if omitted.
    script: Option<PathBuf>,

    /// Maximum number of terms an expression may expand to.
    #[arg(long, default_value_t = 100_000)]
    max_terms: usize,

    /// Maximum nesting depth of an expression.
    #[arg(long, default_value_t = 512)]
    max_depth: usize,

    /// Verbosity of the log written to stderr.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Handles one line of input, printing the output or reporting the error.
fn process(console: &mut Console, line: &str) -> io::Result<()> {
    match console.handle_line(line) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => (),
        Err(err) => err.report_to_stderr()?,
    }
    Ok(())
}

/// Handles every line of the given reader in order.
fn run_lines(console: &mut Console, reader: impl BufRead) -> io::Result<()> {
    for line in reader.lines() {
        process(console, &line?)?;
    }
    Ok(())
}

/// Runs the interactive console until the user exits.
fn run_interactive(console: &mut Console) -> Result<(), Box<dyn std::error::Error>> {
    let mut rl = DefaultEditor::new()?;
    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(err) => return Err(err.into()),
        };

        if !line.trim().is_empty() {
            rl.add_history_entry(&line)?;
        }

        process(console, &line)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    CombinedLogger::init(vec![TermLogger::new(
        args.log_level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;

    let options = OptionsBuilder::new()
        .max_terms(Some(args.max_terms))
        .max_depth(Some(args.max_depth))
        .build();
    let mut console = Console::new(options);

    if let Some(path) = args.script {
        // run script file
        info!("running script {}", path.display());
        run_lines(&mut console, BufReader::new(File::open(path)?))?;
    } else if !io::stdin().is_terminal() {
        // read script from stdin
        run_lines(&mut console, io::stdin().lock())?;
    } else {
        run_interactive(&mut console)?;
    }

    Ok(())
}
