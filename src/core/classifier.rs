// File: src/core/classifier.rs
use crate::core::types::Category;
use crate::error::ParseError;
use crate::locale::Grammar;
use regex::Regex;

lazy_static::lazy_static! {
    static ref NUMERIC_PREFIX: Regex =
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("static regex");
}

/// Classifies one trimmed chunk into a category and its numeric payload.
///
/// Resolution order, first hit wins: numeric literal (ordinal if it carries an
/// ordinal suffix), ordinal unit, ordinal ten, ordinal magnitude, cardinal ten,
/// cardinal unit, cardinal magnitude, named constant.
pub fn classify(chunk: &str, grammar: &Grammar) -> Result<(Category, f64), ParseError> {
    let word = chunk.replace(',', "").replace('−', "-");
    let tables = grammar.tables();

    // 28.93, 3rd
    if let Some((value, rest)) = numeric_prefix(&word) {
        if rest.is_empty() {
            return Ok((Category::Number, value));
        }
        if tables.ordinal_suffixes.iter().any(|suffix| suffix == rest) {
            return Ok((Category::OrdinalNumber, value));
        }
    }

    let lookups = [
        (Category::OrdinalUnit, &tables.ordinal_units),
        (Category::OrdinalTen, &tables.ordinal_tens),
        (Category::OrdinalMagnitude, &tables.ordinal_magnitudes),
        (Category::Ten, &tables.tens),
        // zero is a legitimate unit value, so this is a presence check
        (Category::Unit, &tables.units),
        (Category::Magnitude, &tables.magnitudes),
        (Category::Constant, &tables.constants),
    ];
    for (category, table) in lookups {
        if let Some(&value) = table.get(word.as_str()) {
            return Ok((category, value));
        }
    }

    Err(ParseError::UnrecognizedToken(chunk.to_string()))
}

/// Splits a leading numeric literal off a word: `"3rd"` -> `(3.0, "rd")`.
pub(crate) fn numeric_prefix(word: &str) -> Option<(f64, &str)> {
    let m = NUMERIC_PREFIX.find(word)?;
    let value = m.as_str().parse::<f64>().ok()?;
    Some((value, &word[m.end()..]))
}

/// Count of leading zero digits in a numeric literal (`"007"` -> 2).
pub(crate) fn leading_zeros(chunk: &str) -> u32 {
    let digits = chunk.trim_start_matches(|c: char| c == '+' || c == '-' || c == '−');
    let zeros = digits.chars().take_while(|&c| c == '0' || c == ',').filter(|&c| c == '0').count();
    // a lone "0" (or "0.5") keeps its integer digit
    let significant = digits.trim_start_matches(|c: char| c == '0' || c == ',');
    if significant.is_empty() || significant.starts_with('.') {
        zeros.saturating_sub(1) as u32
    } else {
        zeros as u32
    }
}
