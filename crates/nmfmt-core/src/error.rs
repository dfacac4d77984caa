//! Errors reported while producing formatted output.
//!
//! Placeholder parsing, compilation and argument binding never fail; every
//! error a caller can observe originates in the positional engine (or in the
//! sink it writes to) and is surfaced unchanged.
//!
//! Argument indices in error values are 1-based, matching the `%[n]` syntax
//! of the default engine.

use std::io;

use thiserror::Error;

/// Result alias used by engines and formatters.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors produced by a positional formatting engine.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The template ended in the middle of a directive.
    #[error("missing verb at offset {offset}")]
    NoVerb { offset: usize },

    /// The directive's verb is not known to the engine.
    #[error("unknown verb '%{verb}' at offset {offset}")]
    UnknownVerb { verb: char, offset: usize },

    /// The argument's type cannot be rendered with the verb.
    #[error("bad argument {index} for '%{verb}': {kind}")]
    BadArgument {
        verb: char,
        kind: &'static str,
        index: usize,
    },

    /// A directive refers past the end of the argument list.
    #[error("missing argument {index} for '%{verb}'")]
    MissingArgument { verb: char, index: usize },

    /// Arguments were supplied that no directive consumed.
    #[error("{unused} extra argument(s)")]
    ExtraArguments { unused: usize },

    /// A `%[n]` argument index is malformed or zero.
    #[error("bad argument index at offset {offset}")]
    BadIndex { offset: usize },

    /// A width exceeds the engine's limit.
    #[error("width too large at offset {offset}")]
    BadWidth { offset: usize },

    /// A precision exceeds the engine's limit.
    #[error("precision too large at offset {offset}")]
    BadPrecision { offset: usize },

    /// Writing the formatted output to a stream failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl FormatError {
    /// Whether the error came from the output sink rather than the template.
    pub fn is_io(&self) -> bool {
        matches!(self, FormatError::Io(_))
    }
}
