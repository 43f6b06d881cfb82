use std::{fmt, io, path::PathBuf};

/// Errors that can occur while loading the engine options.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Read {
        /// The path of the file.
        path: PathBuf,

        /// The underlying error.
        source: io::Error,
    },

    /// The configuration file is not valid TOML, or has values of the wrong type.
    Parse {
        /// The path of the file.
        path: PathBuf,

        /// The underlying error.
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read config file `{}`: {}", path.display(), source)
            },
            Self::Parse { path, source } => {
                write!(f, "invalid config file `{}`: {}", path.display(), source)
            },
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
