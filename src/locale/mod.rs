// File: src/locale/mod.rs
pub mod english;
pub mod unicode;

use crate::core::patterns::PatternTable;
use crate::error::LocaleError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A fixed-denominator trailing phrase such as "percent".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioSuffix {
    pub name: String,
    /// Regex source, expected to be anchored at the end of the input.
    pub matcher: String,
    pub denominator: i64,
}

/// The data half of a locale: every word list and matcher source.
/// This is what gets written to and read from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleTables {
    pub name: String,
    pub delimiter: String,
    pub junction: String,
    pub over: String,
    pub point: String,
    pub ratios: Vec<RatioSuffix>,
    /// Suffixes that turn a numeric literal into an ordinal (`3rd`).
    pub ordinal_suffixes: Vec<String>,
    pub ordinal_units: HashMap<String, f64>,
    pub ordinal_tens: HashMap<String, f64>,
    pub ordinal_magnitudes: HashMap<String, f64>,
    pub units: HashMap<String, f64>,
    pub tens: HashMap<String, f64>,
    pub magnitudes: HashMap<String, f64>,
    pub constants: HashMap<String, f64>,
}

pub(crate) struct CompiledRatio {
    pub name: String,
    pub matcher: Regex,
    pub denominator: i64,
}

/// A compiled, immutable locale grammar. Shared freely between threads;
/// the parser only ever borrows it.
pub struct Grammar {
    tables: LocaleTables,
    pub(crate) delimiter: Regex,
    pub(crate) junction: Regex,
    pub(crate) over: Regex,
    pub(crate) point: Regex,
    pub(crate) ratios: Vec<CompiledRatio>,
    pub(crate) patterns: PatternTable,
}

lazy_static::lazy_static! {
    static ref ENGLISH: Grammar = Grammar::from_tables(english::tables())
        .unwrap_or_else(|e| panic!("built-in english locale is malformed: {}", e));
}

impl Grammar {
    /// The built-in English grammar, compiled once per process.
    pub fn english() -> &'static Grammar {
        &*ENGLISH
    }

    /// Compiles a table document and attaches the standard pattern registrations.
    pub fn from_tables(tables: LocaleTables) -> Result<Self, LocaleError> {
        let patterns = english::patterns()?;
        Self::with_patterns(tables, patterns)
    }

    pub fn with_patterns(tables: LocaleTables, patterns: PatternTable) -> Result<Self, LocaleError> {
        let ratios = tables
            .ratios
            .iter()
            .map(|r| {
                Ok(CompiledRatio {
                    name: r.name.clone(),
                    matcher: compile(&r.name, &r.matcher)?,
                    denominator: r.denominator,
                })
            })
            .collect::<Result<Vec<_>, LocaleError>>()?;

        Ok(Self {
            delimiter: compile("delimiter", &tables.delimiter)?,
            junction: compile("junction", &tables.junction)?,
            over: compile("over", &tables.over)?,
            point: compile("point", &tables.point)?,
            ratios,
            patterns,
            tables,
        })
    }

    pub fn name(&self) -> &str {
        &self.tables.name
    }

    pub fn tables(&self) -> &LocaleTables {
        &self.tables
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    /// True when the junction matcher covers the whole chunk.
    pub(crate) fn is_junction(&self, chunk: &str) -> bool {
        self.junction
            .find(chunk)
            .map_or(false, |m| m.start() == 0 && m.end() == chunk.len())
    }
}

fn compile(name: &str, source: &str) -> Result<Regex, LocaleError> {
    Regex::new(source).map_err(|source| LocaleError::Matcher {
        name: name.to_string(),
        source,
    })
}
