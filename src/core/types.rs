// src/core/types.rs
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// The closed set of token classes a chunk of text can fall into.
/// Each category renders as a single marker character inside a pattern key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// `28.93`, `1,000`
    Number,
    /// `3rd`, `2nds`
    OrdinalNumber,
    /// `three`, `zero`, `a`
    Unit,
    /// `forty`
    Ten,
    /// `thousand`
    Magnitude,
    /// `third`, `half`
    OrdinalUnit,
    /// `twentieth`
    OrdinalTen,
    /// `thousandth`
    OrdinalMagnitude,
    /// `pi`
    Constant,
}

impl Category {
    pub fn marker(self) -> char {
        match self {
            Category::Number => 'n',
            Category::OrdinalNumber => 'N',
            Category::Unit => 'u',
            Category::Ten => 't',
            Category::Magnitude => 'm',
            Category::OrdinalUnit => 'U',
            Category::OrdinalTen => 'T',
            Category::OrdinalMagnitude => 'M',
            Category::Constant => 'c',
        }
    }

    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            'n' => Some(Category::Number),
            'N' => Some(Category::OrdinalNumber),
            'u' => Some(Category::Unit),
            't' => Some(Category::Ten),
            'm' => Some(Category::Magnitude),
            'U' => Some(Category::OrdinalUnit),
            'T' => Some(Category::OrdinalTen),
            'M' => Some(Category::OrdinalMagnitude),
            'c' => Some(Category::Constant),
            _ => None,
        }
    }

    /// Lower-cases the marker: ordinal classes collapse onto their cardinal twin.
    pub fn to_cardinal(self) -> Self {
        match self {
            Category::OrdinalNumber => Category::Number,
            Category::OrdinalUnit => Category::Unit,
            Category::OrdinalTen => Category::Ten,
            Category::OrdinalMagnitude => Category::Magnitude,
            other => other,
        }
    }

    pub fn is_ordinal(self) -> bool {
        self.to_cardinal() != self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separator {
    Space,
    Hyphen,
}

impl Separator {
    pub fn marker(self) -> char {
        match self {
            Separator::Space => ' ',
            Separator::Hyphen => '-',
        }
    }
}

/// A symbolic pattern: categories with the separator that joined each pair.
/// `separators.len()` is always `categories.len() - 1` (or zero when empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PatternKey {
    categories: Vec<Category>,
    separators: Vec<Separator>,
}

impl PatternKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, separator: Separator, category: Category) {
        if !self.categories.is_empty() {
            self.separators.push(separator);
        }
        self.categories.push(category);
    }

    pub fn pop(&mut self) -> Option<Category> {
        let last = self.categories.pop();
        self.separators.pop();
        last
    }

    pub fn last(&self) -> Option<Category> {
        self.categories.last().copied()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn separators(&self) -> &[Separator] {
        &self.separators
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Appends the ` U` terminal every plain-number lookup is keyed with.
    pub fn with_terminal(mut self) -> Self {
        self.push(Separator::Space, Category::OrdinalUnit);
        self
    }

    pub fn to_cardinal(&self) -> Self {
        Self {
            categories: self.categories.iter().map(|c| c.to_cardinal()).collect(),
            separators: self.separators.clone(),
        }
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, category) in self.categories.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.separators[i - 1].marker())?;
            }
            write!(f, "{}", category.marker())?;
        }
        Ok(())
    }
}

impl FromStr for PatternKey {
    type Err = String;

    /// Reads the legacy key shape, e.g. `u m t-u U`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut key = PatternKey::new();
        let mut pending: Option<Separator> = None;
        for c in s.trim().chars() {
            match c {
                ' ' => {
                    pending.get_or_insert(Separator::Space);
                }
                '-' => pending = Some(Separator::Hyphen),
                _ => {
                    let category = Category::from_marker(c).ok_or_else(|| s.to_string())?;
                    if !key.is_empty() && pending.is_none() {
                        return Err(s.to_string());
                    }
                    key.push(pending.take().unwrap_or(Separator::Space), category);
                }
            }
        }
        Ok(key)
    }
}

/// One classified chunk of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub category: Category,
    pub value: f64,
    /// Byte range of the chunk inside the scanned phrase.
    pub span: Range<usize>,
    /// Delimiter class that followed the chunk.
    pub separator: Separator,
}

/// Intermediate two-slot result of an evaluator or a structural form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quotient {
    pub numerator: f64,
    pub denominator: f64,
}

impl Quotient {
    pub fn new(numerator: f64, denominator: f64) -> Self {
        Self { numerator, denominator }
    }

    pub fn whole(value: f64) -> Self {
        Self::new(value, 1.0)
    }
}

// Promotion stops after this many decimal shifts and rounds the rest away.
pub(crate) const MAX_PROMOTE_STEPS: u32 = 15;

/// Largest magnitude an `f64` holds with every integer below it exact (2^53).
pub const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

// One more decimal shift keeps both slots inside the exact range.
pub(crate) fn can_promote(num: f64, denom: f64) -> bool {
    (num * 10.0).abs() <= MAX_EXACT && (denom * 10.0).abs() <= MAX_EXACT
}

/// An exact fraction. The denominator is always positive; the sign lives on the
/// numerator. Only trailing common factors of ten are ever removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Returns `None` for a zero denominator.
    pub fn new(numerator: i64, denominator: i64) -> Option<Self> {
        match denominator {
            0 => None,
            d if d < 0 => Some(Self { numerator: -numerator, denominator: -d }),
            d => Some(Self { numerator, denominator: d }),
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Converts an intermediate quotient, promoting any fractional remainder
    /// to integers by powers of ten.
    ///
    /// Fails with `Overflow` when either slot ends up beyond [`MAX_EXACT`],
    /// where the float arithmetic has already dropped digits.
    pub fn from_quotient(q: Quotient, input: &str) -> Result<Self, ParseError> {
        let (mut num, mut denom) = (q.numerator, q.denominator);
        if !num.is_finite() || !denom.is_finite() {
            return Err(ParseError::Overflow(input.to_string()));
        }
        let mut steps = 0;
        while (has_fraction(num) || has_fraction(denom))
            && steps < MAX_PROMOTE_STEPS
            && can_promote(num, denom)
        {
            num *= 10.0;
            denom *= 10.0;
            steps += 1;
        }
        if num.abs() > MAX_EXACT || denom.abs() > MAX_EXACT {
            return Err(ParseError::Overflow(input.to_string()));
        }
        let numerator = to_integer(num).ok_or_else(|| ParseError::Overflow(input.to_string()))?;
        let denominator = to_integer(denom).ok_or_else(|| ParseError::Overflow(input.to_string()))?;
        Fraction::new(numerator, denominator).ok_or_else(|| ParseError::ZeroDenominator(input.to_string()))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// Anything within a few ulps of an integer counts as integral.
pub(crate) fn has_fraction(x: f64) -> bool {
    (x - x.round()).abs() > 4.0 * f64::EPSILON * x.abs().max(1.0)
}

fn to_integer(x: f64) -> Option<i64> {
    let r = x.round();
    if r.is_finite() && r.abs() < i64::MAX as f64 {
        Some(r as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_renders_legacy_shape() {
        let key: PatternKey = "u m t-u U".parse().unwrap();
        assert_eq!(key.len(), 4);
        assert_eq!(key.to_string(), "u m t-u U");
        assert_eq!(key.separators(), &[Separator::Space, Separator::Space, Separator::Hyphen]);
    }

    #[test]
    fn key_rejects_unknown_markers_and_adjacent_markers() {
        assert!("u x".parse::<PatternKey>().is_err());
        assert!("uu".parse::<PatternKey>().is_err());
    }

    #[test]
    fn cardinal_and_terminal() {
        let key: PatternKey = "u T".parse().unwrap();
        assert_eq!(key.to_cardinal().to_string(), "u t");
        assert_eq!(key.with_terminal().to_string(), "u T U");
    }

    #[test]
    fn pop_keeps_separators_aligned() {
        let mut key: PatternKey = "u-m".parse().unwrap();
        assert_eq!(key.pop(), Some(Category::Magnitude));
        assert_eq!(key.to_string(), "u");
        assert!(key.separators().is_empty());
    }

    #[test]
    fn fraction_moves_sign_to_numerator() {
        let f = Fraction::new(3, -4).unwrap();
        assert_eq!((f.numerator(), f.denominator()), (-3, 4));
        assert!(Fraction::new(1, 0).is_none());
    }

    #[test]
    fn quotient_promotion() {
        let f = Fraction::from_quotient(Quotient::new(0.25, 1.0), "x").unwrap();
        assert_eq!(f, Fraction::new(25, 100).unwrap());
        assert_eq!(
            Fraction::from_quotient(Quotient::new(1.0, 0.0), "1/0"),
            Err(ParseError::ZeroDenominator("1/0".into()))
        );
    }

    #[test]
    fn values_past_the_exact_range_overflow() {
        assert_eq!(
            Fraction::from_quotient(Quotient::new(1.2e18, 1e18), "big"),
            Err(ParseError::Overflow("big".into()))
        );
        let edge = Fraction::from_quotient(Quotient::whole(MAX_EXACT), "edge").unwrap();
        assert_eq!(edge.numerator(), 9_007_199_254_740_992);
    }

    #[test]
    fn promotion_stops_inside_the_exact_range() {
        let f = Fraction::from_quotient(Quotient::whole(3.0 * std::f64::consts::PI), "3 pi").unwrap();
        assert!((f.numerator() as f64) <= MAX_EXACT);
        assert!((f.to_f64() - 3.0 * std::f64::consts::PI).abs() < 1e-12);
    }
}
