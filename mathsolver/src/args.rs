use crate::error::ConfigError;
use clap::Parser;
use mathsolver_engine::EngineConfig;
use std::{fs, path::PathBuf};

/// Simplifies expressions and solves polynomial equations, step by step.
///
/// With no input, reads one problem per line from standard input if it is piped, or starts an
/// interactive session otherwise.
#[derive(Debug, Parser)]
#[command(name = "mathsolver", version)]
pub struct Args {
    /// An expression to simplify, such as `(x+1)(x-1)`, or an equation to solve, such as
    /// `x^2 - 5x + 6 = 0`.
    pub input: Option<String>,

    /// Prints results as LaTeX.
    #[arg(long)]
    pub latex: bool,

    /// Skips the simplification pass that applies trigonometric identities.
    #[arg(long)]
    pub no_trig: bool,

    /// Keeps `RootOf(p, k)` placeholders in solutions instead of approximating them.
    #[arg(long)]
    pub keep_roots: bool,

    /// The maximum number of simplification passes, at least 1.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_passes: Option<u64>,

    /// The unknown to solve equations for.
    #[arg(long, value_name = "NAME")]
    pub var: Option<String>,

    /// A TOML file with engine options, overridden by the flags above.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Prints a report pointing into the input to stderr when a problem fails.
    #[arg(long)]
    pub diagnostics: bool,
}

/// Parses engine options from the contents of a TOML file. Missing keys keep their defaults.
pub fn parse_config(contents: &str) -> Result<EngineConfig, toml::de::Error> {
    toml::from_str(contents)
}

impl Args {
    /// Builds the engine options: the defaults, then the configuration file, then the flags.
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
                parse_config(&contents)
                    .map_err(|source| ConfigError::Parse { path: path.clone(), source })?
            },
            None => EngineConfig::default(),
        };

        let mut builder = base.into_builder();
        if self.no_trig {
            builder = builder.general_simplification(false);
        }
        if self.keep_roots {
            builder = builder.resolve_implicit_roots(false);
        }
        if let Some(max_passes) = self.max_passes {
            builder = builder.max_passes(usize::try_from(max_passes).unwrap_or(usize::MAX));
        }
        if let Some(var) = &self.var {
            builder = builder.variable(Some(var.clone()));
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags() {
        let args = Args::parse_from(["mathsolver", "--no-trig", "--max-passes", "5", "--var", "t", "t^2 = 1"]);
        assert_eq!(args.input.as_deref(), Some("t^2 = 1"));

        let config = args.engine_config().unwrap();
        assert!(!config.general_simplification);
        assert!(config.resolve_implicit_roots);
        assert_eq!(config.max_passes, 5);
        assert_eq!(config.variable.as_deref(), Some("t"));
    }

    #[test]
    fn zero_max_passes_is_rejected() {
        assert!(Args::try_parse_from(["mathsolver", "--max-passes", "0", "x + 1"]).is_err());
        assert!(Args::try_parse_from(["mathsolver", "--max-passes", "1", "x + 1"]).is_ok());
    }

    #[test]
    fn config_file_contents() {
        let config = parse_config("max_passes = 10\nresolve_implicit_roots = false\n").unwrap();
        assert_eq!(config.max_passes, 10);
        assert!(!config.resolve_implicit_roots);
        assert!(config.general_simplification);
        assert_eq!(config.variable, None);
    }

    #[test]
    fn unknown_config_value() {
        assert!(parse_config("max_passes = \"many\"").is_err());
    }
}
