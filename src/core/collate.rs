//! Locale-style string collation for name ordering.
//!
//! Approximates the default Unicode collation used by browsers. At the
//! primary level whitespace sorts first, then punctuation and symbols, then
//! digits, then letters without accents or case. Accents break ties, then
//! case (lowercase before uppercase).

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Root collation order of ASCII punctuation and symbols.
const SYMBOL_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary weight of one base character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Weight {
    Space(char),
    Symbol(u32),
    Digit(char),
    Letter(char),
}

impl Weight {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            Self::Space(c)
        } else if c.is_alphabetic() {
            Self::Letter(c)
        } else if c.is_numeric() {
            Self::Digit(c)
        } else {
            match SYMBOL_ORDER.find(c) {
                Some(rank) => Self::Symbol(rank as u32),
                None => Self::Symbol(0x100 + u32::from(c)),
            }
        }
    }
}

/// Compare two display names the way a user expects them sorted.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| secondary(a).cmp(secondary(b)))
        .then_with(|| tertiary(a).cmp(tertiary(b)))
}

/// Base characters only, weighted by class.
fn primary(s: &str) -> impl Iterator<Item = Weight> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(Weight::of)
}

/// Base letters with accents.
fn secondary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Case, lowercase first.
fn tertiary(s: &str) -> impl Iterator<Item = (bool, char)> + '_ {
    s.nfd().map(|c| (c.is_uppercase(), c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_case_tie_break() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("Report", "report"), Ordering::Greater);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_accents() {
        assert_eq!(locale_cmp("résumé", "resume"), Ordering::Greater);
        assert_eq!(locale_cmp("résumé", "resumf"), Ordering::Less);
        assert_eq!(locale_cmp("Émile", "Eve"), Ordering::Less);
    }

    #[test]
    fn test_punctuation_before_digits_and_letters() {
        assert_eq!(locale_cmp("file_1", "file1"), Ordering::Less);
        assert_eq!(locale_cmp("Report_2024.pdf", "Report2024.pdf"), Ordering::Less);
        assert_eq!(locale_cmp("a-b", "a_b"), Ordering::Greater);
        assert_eq!(locale_cmp("a b", "a_b"), Ordering::Less);
        assert_eq!(locale_cmp("v2", "va"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_cmp("Invoice", "Invoice Q1"), Ordering::Less);
    }
}
