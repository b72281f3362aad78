// File: src/locale/english.rs
//
// Built-in English word tables and the cardinal pattern registrations.

use crate::core::decimal::digit_count;
use crate::core::patterns::{arg, PatternTable};
use crate::core::types::{Category, PatternKey, Quotient};
use crate::error::LocaleError;
use crate::locale::{LocaleTables, RatioSuffix};
use std::collections::HashMap;

// Longest cardinal shape registered, counted in atoms and magnitude words.
// "one hundred twenty-three thousand four hundred fifty-six" needs all seven.
const MAX_CARDINAL_ELEMENTS: usize = 7;
const MAX_DIGIT_RUN: usize = 16;

const CARDINAL_ATOMS: &[&str] = &["u", "t", "t-u", "t u", "n"];

const UNITS: &[(&str, f64)] = &[
    ("zero", 0.0), ("nought", 0.0), ("naught", 0.0),
    ("a", 1.0), ("an", 1.0), ("one", 1.0),
    ("two", 2.0), ("three", 3.0), ("four", 4.0), ("five", 5.0),
    ("six", 6.0), ("seven", 7.0), ("eight", 8.0), ("nine", 9.0),
    ("ten", 10.0), ("eleven", 11.0), ("twelve", 12.0), ("thirteen", 13.0),
    ("fourteen", 14.0), ("fifteen", 15.0), ("sixteen", 16.0),
    ("seventeen", 17.0), ("eighteen", 18.0), ("nineteen", 19.0),
];

const TENS: &[(&str, f64)] = &[
    ("twenty", 20.0), ("thirty", 30.0), ("forty", 40.0), ("fourty", 40.0),
    ("fifty", 50.0), ("sixty", 60.0), ("seventy", 70.0), ("eighty", 80.0),
    ("ninety", 90.0),
];

const MAGNITUDES: &[(&str, f64)] = &[
    ("dozen", 12.0), ("hundred", 100.0), ("thousand", 1e3), ("lakh", 1e5),
    ("million", 1e6), ("crore", 1e7), ("billion", 1e9), ("trillion", 1e12),
];

// Ordinals are listed in the singular; plurals are derived.
const ORDINAL_UNITS: &[(&str, f64)] = &[
    ("first", 1.0), ("second", 2.0), ("half", 2.0), ("halves", 2.0),
    ("third", 3.0), ("quarter", 4.0), ("fourth", 4.0), ("fifth", 5.0),
    ("sixth", 6.0), ("seventh", 7.0), ("eighth", 8.0), ("ninth", 9.0),
    ("tenth", 10.0), ("eleventh", 11.0), ("twelfth", 12.0),
    ("thirteenth", 13.0), ("fourteenth", 14.0), ("fifteenth", 15.0),
    ("sixteenth", 16.0), ("seventeenth", 17.0), ("eighteenth", 18.0),
    ("nineteenth", 19.0),
];

const ORDINAL_TENS: &[(&str, f64)] = &[
    ("twentieth", 20.0), ("thirtieth", 30.0), ("fortieth", 40.0),
    ("fiftieth", 50.0), ("sixtieth", 60.0), ("seventieth", 70.0),
    ("eightieth", 80.0), ("ninetieth", 90.0),
];

const ORDINAL_MAGNITUDES: &[(&str, f64)] = &[
    ("hundredth", 100.0), ("thousandth", 1e3), ("millionth", 1e6),
    ("billionth", 1e9), ("trillionth", 1e12),
];

const CONSTANTS: &[(&str, f64)] = &[
    ("pi", std::f64::consts::PI),
    ("π", std::f64::consts::PI),
    ("tau", std::f64::consts::TAU),
    ("τ", std::f64::consts::TAU),
];

const ORDINAL_SUFFIXES: &[&str] = &["st", "nd", "rd", "th", "sts", "nds", "rds", "ths"];

const RATIOS: &[(&str, &str, i64)] = &[
    ("percent", r"\s*(?:%|\bper\s*cent\b|\bpct\b)\s*$", 100),
    ("perdime", r"\s*\bper\s*(?:ten|dime)\b\s*$", 10),
    ("permille", r"\s*(?:‰|\bper\s*mill?e?\b|\bper\s+thousand\b)\s*$", 1_000),
    ("permyriad", r"\s*(?:‱|\bper\s*myriad\b|\bper\s+ten\s+thousand\b|\bbasis\s+points?\b|\bbps\b)\s*$", 10_000),
    ("perlakh", r"\s*\bper\s*lakh\b\s*$", 100_000),
    ("perion", r"\s*(?:\bppm\b|\bper\s+million\b)\s*$", 1_000_000),
    ("percrore", r"\s*\bper\s*crore\b\s*$", 10_000_000),
    ("perawk", r"\s*\bper\s+hundred\s+million\b\s*$", 100_000_000),
    ("ppb", r"\s*(?:\bppb\b|\bper\s+billion\b)\s*$", 1_000_000_000),
];

/// The English locale document.
pub fn tables() -> LocaleTables {
    LocaleTables {
        name: "en".to_string(),
        delimiter: r"\s*[-‐‑–—−⁃]\s*|\s+".to_string(),
        junction: r"\band(?:\s+an?)?\b".to_string(),
        over: r"\s*(?:\bover\b|\bdivided\s+by\b|\bout\s+of\b|[/⁄÷])\s*".to_string(),
        point: r"\s*(?:\bpoint\b|\bdot\b|\.)\s*".to_string(),
        ratios: RATIOS
            .iter()
            .map(|&(name, matcher, denominator)| RatioSuffix {
                name: name.to_string(),
                matcher: matcher.to_string(),
                denominator,
            })
            .collect(),
        ordinal_suffixes: ORDINAL_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        ordinal_units: with_plurals(ORDINAL_UNITS),
        ordinal_tens: with_plurals(ORDINAL_TENS),
        ordinal_magnitudes: with_plurals(ORDINAL_MAGNITUDES),
        units: words(UNITS),
        tens: words(TENS),
        magnitudes: words(MAGNITUDES),
        constants: words(CONSTANTS),
    }
}

fn words(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs.iter().map(|&(w, v)| (w.to_string(), v)).collect()
}

fn with_plurals(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    let mut map = words(pairs);
    for &(w, v) in pairs {
        if !w.ends_with('s') {
            map.entry(format!("{}s", w)).or_insert(v);
        }
    }
    map
}

/// Registers every pattern shape the English tables can produce.
pub fn patterns() -> Result<PatternTable, LocaleError> {
    let mut table = PatternTable::new();

    // "three", "one hundred twenty-five", "2 million" and the same with a denominator
    for shape in cardinal_shapes() {
        table.register(&shape, cardinal)?;
        for terminal in [" U", "-U", " T", "-T", " M", "-M", " N"] {
            table.register(&format!("{}{}", shape, terminal), cardinal_over_ordinal)?;
        }
    }
    // registered last: "u m t-U" reads as a hundred twenty-thirds
    for shape in cardinal_shapes() {
        table.register(&format!("{} t-U", shape), cardinal_over_compound)?;
    }

    // "half", "3rd", "twenty-fifth"
    for key in ["U", "T", "M", "N", "t-U"] {
        table.register(key, ordinal_alone)?;
    }

    // "two five" after a decimal point
    for len in 2..=MAX_DIGIT_RUN {
        for marker in ["u", "n"] {
            let run = vec![marker; len].join(" ");
            table.register(&format!("{} U", run), digits)?;
        }
    }

    for key in ["c", "u c", "n c", "c U", "u c U", "n c U"] {
        table.register(key, constant)?;
    }

    Ok(table)
}

/// Every cardinal shape: atoms and magnitude words, no two atoms side by side.
fn cardinal_shapes() -> Vec<String> {
    fn extend(prefix: Vec<&'static str>, last_was_atom: bool, out: &mut Vec<String>) {
        if !prefix.is_empty() {
            out.push(prefix.join(" "));
        }
        if prefix.len() == MAX_CARDINAL_ELEMENTS {
            return;
        }
        if !last_was_atom {
            for &atom in CARDINAL_ATOMS {
                let mut next = prefix.clone();
                next.push(atom);
                extend(next, true, out);
            }
        }
        let mut next = prefix;
        next.push("m");
        extend(next, false, out);
    }

    let mut out = Vec::new();
    extend(Vec::new(), false, &mut out);
    out
}

/// Additive-multiplicative value of a run of cardinal categories. Magnitudes
/// under a thousand multiply the running group; larger ones close it.
fn cardinal_value(categories: &[Category], args: &[f64]) -> f64 {
    let mut total = 0.0;
    let mut group: Option<f64> = None;
    for (i, category) in categories.iter().enumerate() {
        let value = arg(args, i);
        match category.to_cardinal() {
            Category::Magnitude if value < 1000.0 => group = Some(group.unwrap_or(1.0) * value),
            Category::Magnitude => {
                total += group.unwrap_or(1.0) * value;
                group = None;
            }
            _ => group = Some(group.map_or(value, |g| g + value)),
        }
    }
    match group {
        // keeps the sign of a lone "-0"
        Some(g) if total == 0.0 => g,
        Some(g) => total + g,
        None => total,
    }
}

fn cardinal(key: &PatternKey, args: &[f64]) -> Quotient {
    Quotient::whole(cardinal_value(key.categories(), args))
}

fn cardinal_over_ordinal(key: &PatternKey, args: &[f64]) -> Quotient {
    let body = key.len() - 1;
    Quotient::new(cardinal_value(&key.categories()[..body], args), arg(args, body))
}

fn cardinal_over_compound(key: &PatternKey, args: &[f64]) -> Quotient {
    let body = key.len() - 2;
    Quotient::new(
        cardinal_value(&key.categories()[..body], args),
        arg(args, body) + arg(args, body + 1),
    )
}

fn ordinal_alone(key: &PatternKey, args: &[f64]) -> Quotient {
    Quotient::new(1.0, args.iter().take(key.len()).sum())
}

fn digits(key: &PatternKey, args: &[f64]) -> Quotient {
    let body = key.len() - 1;
    let value = args.iter().take(body).fold(0.0, |acc, &d| {
        acc * 10f64.powi(digit_count(d).max(1)) + d
    });
    Quotient::new(value, arg(args, body))
}

fn constant(key: &PatternKey, args: &[f64]) -> Quotient {
    let ordinal_tail = key.last().map_or(false, |c| c.is_ordinal());
    let body = if ordinal_tail { key.len() - 1 } else { key.len() };
    let product = args.iter().take(body).product();
    Quotient::new(product, if ordinal_tail { arg(args, body) } else { 1.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(table: &PatternTable, key: &str, args: &[f64]) -> Quotient {
        table.evaluate(&key.parse().unwrap(), args, key).unwrap()
    }

    #[test]
    fn shapes_never_put_atoms_side_by_side() {
        let shapes = cardinal_shapes();
        assert!(shapes.contains(&"u m t-u m u m t-u".to_string()));
        assert!(shapes.contains(&"m m".to_string()));
        assert!(!shapes.iter().any(|s| s == "u u" || s == "t u u"));
    }

    #[test]
    fn cardinal_values() {
        let table = patterns().unwrap();
        assert_eq!(eval(&table, "u m t-u m u m t-u", &[1.0, 100.0, 20.0, 3.0, 1e3, 4.0, 100.0, 50.0, 6.0]).numerator, 123_456.0);
        assert_eq!(eval(&table, "m", &[100.0]), Quotient::whole(100.0));
        assert_eq!(eval(&table, "u m m", &[1.0, 100.0, 1e3]), Quotient::whole(100_000.0));
        assert_eq!(eval(&table, "u m", &[2.0, 12.0]), Quotient::whole(24.0));
    }

    #[test]
    fn terminals_carry_the_denominator() {
        let table = patterns().unwrap();
        assert_eq!(eval(&table, "u U", &[3.0, 4.0]), Quotient::new(3.0, 4.0));
        assert_eq!(eval(&table, "u t-U", &[3.0, 20.0, 5.0]), Quotient::new(3.0, 25.0));
        assert_eq!(eval(&table, "t-U", &[20.0, 3.0]), Quotient::new(1.0, 23.0));
        // plain-number lookups fill the terminal with a zero sentinel
        assert_eq!(eval(&table, "t u U", &[20.0, 5.0, 0.0]).numerator, 25.0);
    }

    #[test]
    fn digit_runs_concatenate() {
        let table = patterns().unwrap();
        assert_eq!(eval(&table, "u u U", &[2.0, 5.0, 0.0]).numerator, 25.0);
        assert_eq!(eval(&table, "u u u U", &[0.0, 0.0, 5.0, 0.0]).numerator, 5.0);
        assert_eq!(eval(&table, "n n U", &[1.0, 12.0, 0.0]).numerator, 112.0);
    }

    #[test]
    fn bare_unit_pairs_stay_unregistered() {
        let table = patterns().unwrap();
        assert!(!table.contains(&"u u".parse().unwrap()));
    }

    #[test]
    fn plurals_are_derived() {
        let t = tables();
        assert_eq!(t.ordinal_units.get("thirds"), Some(&3.0));
        assert_eq!(t.ordinal_units.get("halves"), Some(&2.0));
        assert_eq!(t.ordinal_magnitudes.get("hundredths"), Some(&100.0));
    }
}
