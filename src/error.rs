// File: src/error.rs
use thiserror::Error;

/// Everything that can abort a single parse call.
/// There is no partial result: any of these fails the whole input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("argument should be a string, got {0}")]
    InvalidArgument(String),

    #[error("unknown part `{0}`")]
    UnrecognizedToken(String),

    #[error("unknown pattern `{pattern}` for string `{input}`")]
    UnknownPattern { pattern: String, input: String },

    #[error("zero denominator in `{0}`")]
    ZeroDenominator(String),

    #[error("`{0}` does not fit in an integer fraction")]
    Overflow(String),
}

/// Failures while building or persisting a locale grammar.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("locale io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("locale snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("locale json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid `{name}` matcher: {source}")]
    Matcher {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("malformed pattern key `{key}`")]
    Pattern { key: String },
}
