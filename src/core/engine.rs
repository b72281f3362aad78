// File: src/core/engine.rs
use crate::core::decimal::{normalize, Scale};
use crate::core::scanner::{key_of, scan};
use crate::core::types::{Category, Fraction, Quotient};
use crate::error::ParseError;
use crate::locale::unicode::vulgar_fraction;
use crate::locale::Grammar;
use regex::Regex;
use tracing::{debug, trace};

/// A structural form found ahead of the generic pattern lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Form<'a> {
    /// `9½`
    Vulgar { glyph: Fraction, prefix: &'a str },
    /// `3 over 4`, `9 1/2`
    Over { left: &'a str, right: &'a str },
    /// `one and a half`
    Junction { left: &'a str, right: &'a str },
    /// `one point two`, `1.2`
    Point { left: &'a str, right: &'a str },
    /// `fifty percent`
    Ratio { left: &'a str, denominator: i64 },
}

type Recognizer = for<'a> fn(&Grammar, &'a str) -> Option<Form<'a>>;

// Tried in this order; the first hit decides the form.
const RECOGNIZERS: &[Recognizer] = &[vulgar, over, junction, point, ratio];

/// Turns numeral text into an exact fraction using one locale grammar.
/// Holds no state of its own; any number of parsers may share a grammar.
pub struct FractionParser<'g> {
    grammar: &'g Grammar,
}

impl FractionParser<'static> {
    pub fn english() -> Self {
        Self::new(Grammar::english())
    }
}

impl<'g> FractionParser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn parse(&self, text: &str) -> Result<Fraction, ParseError> {
        let text = text.trim().to_lowercase();
        let quotient = self.parse_quotient(&text)?;
        Fraction::from_quotient(quotient, &text)
    }

    /// The first structural form that matches, if any.
    pub fn recognize<'a>(&self, text: &'a str) -> Option<Form<'a>> {
        RECOGNIZERS.iter().find_map(|recognize| recognize(self.grammar, text))
    }

    fn parse_quotient(&self, text: &str) -> Result<Quotient, ParseError> {
        let text = text.trim();

        let form = match self.recognize(text) {
            Some(form) => form,
            None => return self.parse_generic(text),
        };
        debug!(?form, text, "structural form");

        match form {
            Form::Vulgar { glyph, prefix } => {
                let (num, denom) = (glyph.numerator() as f64, glyph.denominator() as f64);
                let (sign, unsigned) = split_sign(prefix);
                Ok(match self.glyph_prefix(unsigned) {
                    Some(whole) => Quotient::new(sign * (whole * denom + num), denom),
                    None if unsigned.is_empty() => Quotient::new(sign * num, denom),
                    // not a numeral: the glyph stands alone
                    None => Quotient::new(num, denom),
                })
            }
            Form::Over { left, right } => {
                let denom = self.parse_number(right)?;

                // `9 1/2`: the word right before the slash is the numerator
                let last = left.split_whitespace().last().unwrap_or("");
                if let Ok(last_n) = last.replace(|c: char| c == ',' || c == '.', "").parse::<i64>() {
                    let whole = left[..left.len() - last.len()].trim();
                    let num = if whole.is_empty() { 0.0 } else { self.parse_number(whole)? };
                    return Ok(Quotient::new(num * denom + last_n as f64, denom));
                }

                Ok(Quotient::new(self.parse_number(left)?, denom))
            }
            Form::Junction { left, right } => {
                let int = self.parse_number(left)?;
                let fract = self.parse_quotient(right)?;
                Ok(Quotient::new(int * fract.denominator + fract.numerator, fract.denominator))
            }
            Form::Point { left, right } => self.parse_point(left, right),
            Form::Ratio { left, denominator } => {
                Ok(Quotient::new(self.parse_number(left)?, denominator as f64))
            }
        }
    }

    fn parse_point(&self, left: &str, right: &str) -> Result<Quotient, ParseError> {
        let unit = if left.is_empty() { 0.0 } else { self.parse_number(left)? };

        let mut fraction = scan(right, self.grammar)?;

        // `0.2 hundred` and `1.1 hundredth`: a trailing magnitude scales the result
        let mut scale = Scale::default();
        match fraction.tokens.last().map(|t| t.category) {
            Some(Category::Magnitude) => {
                scale = Scale::Times(fraction.tokens.pop().map_or(1.0, |t| t.value));
            }
            Some(Category::OrdinalMagnitude) => {
                scale = Scale::Per(fraction.tokens.pop().map_or(1.0, |t| t.value));
            }
            _ => {}
        }

        if fraction.is_empty() {
            return Err(ParseError::UnknownPattern {
                pattern: String::new(),
                input: right.to_string(),
            });
        }

        let key = fraction.key().with_terminal();
        let mut args = fraction.args();
        args.push(0.0);
        let fract = self.grammar.patterns.evaluate(&key, &args, right)?.numerator;

        Ok(normalize(unit, fract, fraction.leading_zeros, scale))
    }

    fn parse_generic(&self, text: &str) -> Result<Quotient, ParseError> {
        let scanned = scan(text, self.grammar)?;
        let key = scanned.key();
        let patterns = &self.grammar.patterns;

        if !scanned.is_empty() && patterns.contains(&key) {
            return patterns.evaluate(&key, &scanned.args(), text);
        }

        // too complex for one pattern: numerator and denominator meet at `u u`
        if let Some(i) = scanned.unit_pair_boundary() {
            let (left, right) = scanned.tokens.split_at(i + 1);
            debug!(pattern = %key, split = i, "splitting at unit pair");

            let left_text = &text[left[0].span.start..left[i].span.end];
            let right_text = &text[right[0].span.start..];

            let mut left_args: Vec<f64> = left.iter().map(|t| t.value).collect();
            left_args.push(0.0);
            let mut right_args: Vec<f64> = right.iter().map(|t| t.value).collect();
            right_args.push(0.0);

            let num = patterns.evaluate(&key_of(left).with_terminal(), &left_args, left_text)?;
            let denom = patterns.evaluate(&key_of(right).to_cardinal().with_terminal(), &right_args, right_text)?;
            return Ok(Quotient::new(num.numerator, denom.numerator));
        }

        Err(ParseError::UnknownPattern {
            pattern: key.to_string(),
            input: text.to_string(),
        })
    }

    /// Value of a plain cardinal phrase: `"one hundred twenty"` -> `120`.
    pub fn parse_number(&self, text: &str) -> Result<f64, ParseError> {
        let text = text.trim();
        let scanned = scan(text, self.grammar)?;
        if scanned.is_empty() {
            return Err(ParseError::UnknownPattern {
                pattern: String::new(),
                input: text.to_string(),
            });
        }

        let key = scanned.key().to_cardinal().with_terminal();
        let mut args = scanned.args();
        args.push(0.0);
        Ok(self.grammar.patterns.evaluate(&key, &args, text)?.numerator)
    }

    // Whole part written before a glyph: `9½`, `nine ½`. Anything that is not a
    // numeral reads as no whole part at all.
    fn glyph_prefix(&self, prefix: &str) -> Option<f64> {
        if prefix.is_empty() {
            return None;
        }
        if let Some(n) = leading_integer(prefix) {
            return Some(n as f64);
        }
        match self.parse_number(prefix) {
            Ok(whole) => Some(whole),
            Err(e) => {
                debug!(prefix, error = %e, "ignoring glyph prefix");
                None
            }
        }
    }
}

// `-1½` and `−½` carry their sign outside the whole part.
fn split_sign(prefix: &str) -> (f64, &str) {
    match prefix.strip_prefix('-').or_else(|| prefix.strip_prefix('−')) {
        Some(rest) => (-1.0, rest.trim_start()),
        None => (1.0, prefix),
    }
}

fn leading_integer(s: &str) -> Option<i64> {
    let sign = usize::from(s.starts_with(|c: char| c == '-' || c == '+'));
    let end = s[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + sign);
    if end == sign {
        return None;
    }
    s[..end].parse().ok()
}

fn split_on<'a>(matcher: &Regex, text: &'a str) -> Option<(&'a str, &'a str)> {
    let m = matcher.find(text)?;
    Some((text[..m.start()].trim(), text[m.end()..].trim()))
}

fn vulgar<'a>(_: &Grammar, text: &'a str) -> Option<Form<'a>> {
    let last = text.chars().last()?;
    let glyph = vulgar_fraction(last)?;
    Some(Form::Vulgar {
        glyph,
        prefix: text[..text.len() - last.len_utf8()].trim(),
    })
}

fn over<'a>(grammar: &Grammar, text: &'a str) -> Option<Form<'a>> {
    split_on(&grammar.over, text).map(|(left, right)| Form::Over { left, right })
}

fn junction<'a>(grammar: &Grammar, text: &'a str) -> Option<Form<'a>> {
    split_on(&grammar.junction, text).map(|(left, right)| Form::Junction { left, right })
}

fn point<'a>(grammar: &Grammar, text: &'a str) -> Option<Form<'a>> {
    split_on(&grammar.point, text).map(|(left, right)| Form::Point { left, right })
}

fn ratio<'a>(grammar: &Grammar, text: &'a str) -> Option<Form<'a>> {
    grammar.ratios.iter().find_map(|r| {
        let m = r.matcher.find(text)?;
        trace!(suffix = %r.name, text, "ratio suffix");
        Some(Form::Ratio {
            left: text[..m.start()].trim(),
            denominator: r.denominator,
        })
    })
}
