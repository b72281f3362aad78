// File: src/core/scanner.rs
use crate::core::classifier::{classify, leading_zeros};
use crate::core::types::{Category, PatternKey, Token, Separator};
use crate::error::ParseError;
use crate::locale::Grammar;
use tracing::trace;

const HYPHENS: &[char] = &['-', '‐', '‑', '–', '—', '−', '⁃'];

/// The classified tokens of one phrase plus its leading-zero count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    /// Zeros standing before the first significant digit (`zero zero five`, `007`).
    pub leading_zeros: u32,
}

impl Scan {
    pub fn key(&self) -> PatternKey {
        key_of(&self.tokens)
    }

    pub fn args(&self) -> Vec<f64> {
        self.tokens.iter().map(|t| t.value).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First `u u` boundary joined by a plain space: index of the left unit.
    pub fn unit_pair_boundary(&self) -> Option<usize> {
        self.tokens.windows(2).position(|pair| {
            pair[0].category == Category::Unit
                && pair[0].separator == Separator::Space
                && pair[1].category == Category::Unit
        })
    }
}

/// Builds the symbolic key for a run of tokens.
pub fn key_of(tokens: &[Token]) -> PatternKey {
    let mut key = PatternKey::new();
    let mut separator = Separator::Space;
    for token in tokens {
        key.push(separator, token.category);
        separator = token.separator;
    }
    key
}

/// Splits a phrase on the locale delimiters and classifies every chunk.
/// Chunks that are entirely a junction phrase are passed over.
pub fn scan(phrase: &str, grammar: &Grammar) -> Result<Scan, ParseError> {
    let mut result = Scan::default();
    let mut start = 0;
    let mut search_from = sign_len(phrase);

    loop {
        let (end, next, separator) = match grammar.delimiter.find_at(phrase, search_from) {
            Some(m) if !m.as_str().is_empty() => {
                let separator = if m.as_str().contains(HYPHENS) {
                    Separator::Hyphen
                } else {
                    Separator::Space
                };
                (m.start(), m.end(), separator)
            }
            _ => (phrase.len(), phrase.len(), Separator::Space),
        };

        let raw = &phrase[start..end];
        let chunk = raw.trim();
        // `-five`: a dash before anything but a digit is not a sign, and the
        // phrase does not start with a numeral
        if chunk.is_empty() && result.tokens.is_empty() && separator == Separator::Hyphen {
            trace!(phrase, "dangling leading dash");
            break;
        }
        if !chunk.is_empty() && !grammar.is_junction(chunk) {
            let (category, value) = classify(chunk, grammar)?;

            if value == 0.0 && result.leading_zeros as usize == result.tokens.len() {
                result.leading_zeros += 1;
            } else if category == Category::Number && result.tokens.is_empty() {
                result.leading_zeros += leading_zeros(chunk);
            }

            let offset = start + (raw.len() - raw.trim_start().len());
            trace!(chunk, marker = %category.marker(), value, "classified chunk");
            result.tokens.push(Token {
                category,
                value,
                span: offset..offset + chunk.len(),
                separator,
            });
        }

        if next >= phrase.len() {
            break;
        }
        start = next;
        search_from = next;
    }

    Ok(result)
}

// A hyphen opening the phrase right before a numeral is a sign, not a delimiter.
fn sign_len(phrase: &str) -> usize {
    let mut chars = phrase.chars();
    match (chars.next(), chars.next()) {
        (Some(sign @ ('-' | '−')), Some(next)) if next.is_ascii_digit() || next == '.' => sign.len_utf8(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_en(phrase: &str) -> Scan {
        scan(phrase, Grammar::english()).unwrap()
    }

    #[test]
    fn builds_key_and_args() {
        let s = scan_en("one hundred twenty-three");
        assert_eq!(s.key().to_string(), "u m t-u");
        assert_eq!(s.args(), vec![1.0, 100.0, 20.0, 3.0]);
        assert_eq!(s.leading_zeros, 0);
    }

    #[test]
    fn pattern_has_one_marker_pair_per_token() {
        let s = scan_en("three twenty-fifths");
        let rendered = s.key().to_string();
        assert_eq!(rendered.chars().count(), 2 * s.tokens.len() - 1);
        assert_eq!(rendered, "u t-U");
    }

    #[test]
    fn spans_point_back_into_the_phrase() {
        let phrase = "two  thirds";
        let s = scan_en(phrase);
        assert_eq!(&phrase[s.tokens[1].span.clone()], "thirds");
    }

    #[test]
    fn junction_chunks_are_skipped() {
        let s = scan_en("one and two");
        assert_eq!(s.key().to_string(), "u u");
    }

    #[test]
    fn counts_leading_zero_words_and_digits() {
        assert_eq!(scan_en("zero zero five").leading_zeros, 2);
        assert_eq!(scan_en("007").leading_zeros, 2);
        assert_eq!(scan_en("five zero").leading_zeros, 0);
    }

    #[test]
    fn leading_minus_stays_with_the_number() {
        let s = scan_en("-3");
        assert_eq!(s.key().to_string(), "n");
        assert_eq!(s.args(), vec![-3.0]);
    }

    #[test]
    fn leading_dash_before_a_word_ends_the_scan() {
        assert!(scan_en("-five").is_empty());
        assert!(scan_en("- 3").is_empty());
        assert!(scan_en("-twenty-five").is_empty());
        // inner hyphens are still delimiters
        assert_eq!(scan_en("twenty-five").key().to_string(), "t-u");
    }

    #[test]
    fn unrecognized_chunk_aborts() {
        assert_eq!(
            scan("two blorps", Grammar::english()),
            Err(ParseError::UnrecognizedToken("blorps".into()))
        );
    }

    #[test]
    fn finds_first_unit_pair() {
        assert_eq!(scan_en("one two three").unit_pair_boundary(), Some(0));
        assert_eq!(scan_en("twenty one two").unit_pair_boundary(), Some(1));
        assert_eq!(scan_en("twenty-one").unit_pair_boundary(), None);
    }
}
