//! Locale-aware text ordering.
//!
//! Approximates the default Unicode collation used by browsers for
//! `localeCompare` without locale tailoring:
//!
//! 1. primary: base letters, case- and accent-insensitive, with punctuation
//!    and whitespace before digits before letters
//! 2. secondary: accents
//! 3. tertiary: case, lowercase first
//!
//! Canonically equivalent strings compare equal.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Coarse script class used as the leading primary weight.
fn class(c: char) -> u8 {
    if c.is_whitespace() || c.is_ascii_punctuation() || (!c.is_alphanumeric() && !c.is_control())
    {
        0
    } else if c.is_numeric() {
        1
    } else {
        2
    }
}

fn primary(s: &str) -> Vec<(u8, char)> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (class(c), c))
        .collect()
}

fn secondary(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn tertiary(s: &str) -> Vec<bool> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

/// Compare two strings the way a reader expects them ordered.
pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    primary(a)
        .cmp(&primary(b))
        .then_with(|| secondary(a).cmp(&secondary(b)))
        .then_with(|| tertiary(a).cmp(&tertiary(b)))
        .then_with(|| a.nfc().cmp(b.nfc()))
}
