// src/lib.rs

pub mod core;
pub mod error;
pub mod locale;
pub mod persistence;

pub use crate::core::engine::FractionParser;
pub use crate::core::types::{Fraction, MAX_EXACT};
pub use crate::error::{LocaleError, ParseError};
pub use crate::locale::{Grammar, LocaleTables};

use serde_json::Value;

/// Parses `text` with the built-in English grammar.
pub fn parse_fraction(text: &str) -> Result<Fraction, ParseError> {
    FractionParser::english().parse(text)
}

/// Parses `text` with a caller-supplied locale grammar.
pub fn parse_fraction_with(text: &str, grammar: &Grammar) -> Result<Fraction, ParseError> {
    FractionParser::new(grammar).parse(text)
}

/// Loosely typed entry point: only JSON strings are parsed, anything else is
/// rejected before scanning. Falls back to English when no grammar is given.
pub fn parse_value(value: &Value, grammar: Option<&Grammar>) -> Result<Fraction, ParseError> {
    let text = value.as_str().ok_or_else(|| ParseError::InvalidArgument(kind_of(value).to_string()))?;
    parse_fraction_with(text, grammar.unwrap_or_else(|| Grammar::english()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
