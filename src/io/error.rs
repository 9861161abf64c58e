use super::lexer::LexError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Never raised by the readers in this crate, which skip lines that do
    /// not lex. Exists so callers driving [`super::lexer`] directly can
    /// propagate its failures with `?`.
    #[error("malformed line: {0}")]
    Lex(#[from] LexError),

    #[error("include cycle detected: '{}' is already being expanded", path.display())]
    CyclicInclude {
        path: PathBuf,
        /// Files being expanded when the cycle closed, outermost first.
        chain: Vec<PathBuf>,
    },

    #[error("include depth limit of {limit} exceeded while opening '{}'", path.display())]
    IncludeDepthExceeded { path: PathBuf, limit: usize },

    #[error("failed to parse [ {directive} ] section: {details} (at line {line})")]
    Parse {
        directive: &'static str,
        line: usize,
        details: String,
    },

    #[error("unexpected token '{token}' in [ molecules ] section (at line {line})")]
    UnexpectedToken { line: usize, token: String },

    #[error("molecule '{name}' is listed more than once (at line {line})")]
    DuplicateMolecule { line: usize, name: String },
}

impl Error {
    pub fn parse(directive: &'static str, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            directive,
            line,
            details: details.into(),
        }
    }

    /// Line number of the offending input, when the error has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::DuplicateMolecule { line, .. } => Some(*line),
            _ => None,
        }
    }
}
