mod args;
mod error;
mod render;

use args::Args;
use clap::Parser;
use mathsolver_cas::Symbolic;
use mathsolver_engine::{EngineConfig, Problem};
use mathsolver_error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, BufRead, IsTerminal}, process::ExitCode};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Options that apply to every problem of a session.
struct Session {
    /// The engine options.
    config: EngineConfig,

    /// Whether results are printed as LaTeX.
    latex: bool,

    /// Whether failures are also reported with source spans to stderr.
    diagnostics: bool,
}

impl Session {
    /// Parses and runs the given problem.
    fn solve(&self, input: &str) -> Result<String, Error> {
        let outcome = Problem::parse(input)?.run(&Symbolic, &self.config)?;
        Ok(render::render(&outcome, self.latex))
    }

    /// Runs the given problem, printing the steps and result, or the error.
    fn process(&self, input: &str) {
        debug!(input, "processing problem");
        match self.solve(input) {
            Ok(output) => print!("{}", output),
            Err(err) => {
                println!("Error: {}", err);
                if self.diagnostics {
                    if let Err(io_err) = err.report_to_stderr("input", input) {
                        warn!(%io_err, "failed to write diagnostic report");
                    }
                }
            },
        }
    }
}

/// Reads one problem per non-empty line of the given reader.
fn run_lines(session: &Session, reader: impl BufRead) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        session.process(&line);
    }
    Ok(())
}

/// Runs the interactive session until end of input or interruption.
fn run_repl(session: &Session) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    fn process_line(rl: &mut DefaultEditor, session: &Session) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        session.process(&input);
        Ok(())
    }

    loop {
        match process_line(&mut rl, session) {
            Ok(()) => (),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = match args.engine_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };
    debug!(?config, "loaded engine options");

    let session = Session {
        config,
        latex: args.latex,
        diagnostics: args.diagnostics,
    };

    let result = if let Some(input) = &args.input {
        session.process(input);
        Ok(())
    } else if !io::stdin().is_terminal() {
        // read problems from stdin
        run_lines(&session, io::stdin().lock()).map_err(|err| err.to_string())
    } else {
        run_repl(&session).map_err(|err| err.to_string())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session { config: EngineConfig::default(), latex: false, diagnostics: false }
    }

    #[test]
    fn error_is_single_message() {
        let err = session().solve("2x +").unwrap_err();
        assert_eq!(err.to_string(), "unexpected end of input");
    }

    #[test]
    fn piped_lines() {
        let input = "2x + 3 = 7\n\n(x+1)(x-1)\n";
        assert!(run_lines(&session(), input.as_bytes()).is_ok());
    }
}
