// File: src/core/patterns.rs
use crate::core::types::{PatternKey, Quotient};
use crate::error::{LocaleError, ParseError};
use std::collections::HashMap;
use tracing::trace;

/// An evaluation routine for one pattern shape. It receives the key it was
/// registered under, so a single routine can serve a whole family of shapes.
pub type Evaluator = fn(&PatternKey, &[f64]) -> Quotient;

/// Exact-match dispatch from a symbolic pattern to its evaluator.
#[derive(Clone, Default)]
pub struct PatternTable {
    entries: HashMap<PatternKey, Evaluator>,
}

impl PatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a key written in the legacy shape (`u m t-u U`).
    pub fn register(&mut self, key: &str, evaluator: Evaluator) -> Result<(), LocaleError> {
        let parsed = key
            .parse::<PatternKey>()
            .map_err(|key| LocaleError::Pattern { key })?;
        self.insert(parsed, evaluator);
        Ok(())
    }

    pub fn insert(&mut self, key: PatternKey, evaluator: Evaluator) {
        self.entries.insert(key, evaluator);
    }

    pub fn contains(&self, key: &PatternKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks the key up and runs it. `input` only feeds the error message.
    pub fn evaluate(&self, key: &PatternKey, args: &[f64], input: &str) -> Result<Quotient, ParseError> {
        let evaluator = self.entries.get(key).ok_or_else(|| ParseError::UnknownPattern {
            pattern: key.to_string(),
            input: input.to_string(),
        })?;
        let result = evaluator(key, args);
        trace!(pattern = %key, ?args, ?result, "evaluated pattern");
        Ok(result)
    }
}

/// Positional argument with the zero default used for absent trailing slots.
pub fn arg(args: &[f64], i: usize) -> f64 {
    args.get(i).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(_: &PatternKey, args: &[f64]) -> Quotient {
        Quotient::new(arg(args, 0), arg(args, 1))
    }

    #[test]
    fn exact_lookup() {
        let mut table = PatternTable::new();
        table.register("u U", first).unwrap();
        let key: PatternKey = "u U".parse().unwrap();
        assert_eq!(table.evaluate(&key, &[3.0, 4.0], "three quarters").unwrap(), Quotient::new(3.0, 4.0));

        let other: PatternKey = "u-U".parse().unwrap();
        match table.evaluate(&other, &[3.0, 4.0], "three-quarters") {
            Err(ParseError::UnknownPattern { pattern, .. }) => assert_eq!(pattern, "u-U"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn malformed_key_is_a_locale_error() {
        let mut table = PatternTable::new();
        assert!(matches!(table.register("u ? U", first), Err(LocaleError::Pattern { .. })));
    }

    #[test]
    fn missing_slots_read_as_zero() {
        assert_eq!(arg(&[1.0], 3), 0.0);
    }
}
