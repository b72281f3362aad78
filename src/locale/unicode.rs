// File: src/locale/unicode.rs
use crate::core::types::Fraction;

/// Every single-glyph vulgar fraction the parser understands.
pub const VULGAR_GLYPHS: &[char] = &[
    '½', '⅓', '⅔', '¼', '¾', '⅕', '⅖', '⅗', '⅘', '⅙', '⅚', '⅐', '⅛', '⅜', '⅝', '⅞', '⅑', '⅒', '↉',
];

/// Looks up a Unicode vulgar-fraction glyph. Each call hands out a fresh value.
pub fn vulgar_fraction(glyph: char) -> Option<Fraction> {
    let (n, d) = match glyph {
        '½' => (1, 2), '⅓' => (1, 3), '⅔' => (2, 3),
        '¼' => (1, 4), '¾' => (3, 4),
        '⅕' => (1, 5), '⅖' => (2, 5), '⅗' => (3, 5), '⅘' => (4, 5),
        '⅙' => (1, 6), '⅚' => (5, 6),
        '⅐' => (1, 7),
        '⅛' => (1, 8), '⅜' => (3, 8), '⅝' => (5, 8), '⅞' => (7, 8),
        '⅑' => (1, 9),
        '⅒' => (1, 10),
        '↉' => (0, 3),
        _ => return None,
    };
    Fraction::new(n, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_glyph_resolves() {
        for &g in VULGAR_GLYPHS {
            assert!(vulgar_fraction(g).is_some(), "missing {}", g);
        }
        assert_eq!(vulgar_fraction('¾'), Fraction::new(3, 4));
        assert_eq!(vulgar_fraction('x'), None);
    }
}
