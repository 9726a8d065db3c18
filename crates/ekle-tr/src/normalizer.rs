// Word and suffix normalization for rule lookups.
//
// Rules never look at the surface stem directly. They see a lowercase copy
// (Turkish dotted/dotless I aware), or for numerals, the pronunciation of the
// numeral's last component, since "40'ta" is governed by "kırk".

use ekle_core::case::to_lower;
use ekle_core::character::{is_apostrophe, is_letter, is_whitespace};

use crate::turkish::constants::{HUNDRED, ONES, TENS, THOUSAND, ZERO};

/// A stem prepared for rule lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWord {
    /// Lowercase stem, or the numeral pronunciation followed by the stem's
    /// trailing apostrophes and whitespace.
    pub text: String,
    /// The stem ends in a numeral; its surface must not be rewritten.
    pub numeric: bool,
}

/// Normalize a stem for rule lookups.
///
/// Trailing apostrophes and whitespace are kept so that rules can still see
/// "Erkan'" and the particle form "Erkan'a ".
pub fn normalize_word(stem: &str) -> NormalizedWord {
    let body = stem.trim_end_matches(|c: char| is_apostrophe(c) || is_whitespace(c));
    let tail = &stem[body.len()..];

    let digits_start = body.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let digits = &body[digits_start..];
    let letter_before = body[..digits_start].chars().next_back().is_some_and(is_letter);

    if !digits.is_empty() && !letter_before {
        let mut text = String::with_capacity(digits.len() + tail.len() + 8);
        text.push_str(pronounce_number(digits));
        text.push_str(tail);
        return NormalizedWord {
            text,
            numeric: true,
        };
    }

    NormalizedWord {
        text: to_lower(stem),
        numeric: false,
    }
}

/// Normalize a suffix spelling to its front-vowel lowercase catalog form:
/// `DAN` -> `den`, `ın` -> `in`, `I` -> `i`.
pub fn normalize_suffix(spelling: &str) -> String {
    to_lower(spelling)
        .chars()
        .map(|c| match c {
            'a' => 'e',
            '\u{0131}' => 'i',
            c => c,
        })
        .collect()
}

/// Pronunciation of the last meaningful component of a run of ASCII digits.
///
/// Only the final word of the spoken numeral matters for suffix rules:
/// "2014" ends in "dört", "40" in "kırk", "300" in "yüz", "5000" in "bin".
pub fn pronounce_number(digits: &str) -> &'static str {
    let mut rev = digits.bytes().rev().map(|b| usize::from(b.wrapping_sub(b'0')));

    if let Some(ones) = rev.next().filter(|&d| (1..=9).contains(&d)) {
        return ONES[ones];
    }
    if let Some(tens) = rev.next().filter(|&d| (1..=9).contains(&d)) {
        return TENS[tens];
    }

    let len = digits.len();
    if len > 3 && digits.ends_with("000") {
        THOUSAND
    } else if len > 2 && digits.ends_with("00") {
        HUNDRED
    } else {
        ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_turkish_capitals() {
        assert_eq!(normalize_word("\u{0130}stanbul").text, "istanbul");
        assert_eq!(normalize_word("ISPARTA").text, "\u{0131}sparta");
        assert_eq!(normalize_word("Erkan'").text, "erkan'");
        assert!(!normalize_word("Erkan'").numeric);
    }

    #[test]
    fn keeps_particle_whitespace() {
        assert_eq!(normalize_word("Erkan'a ").text, "erkan'a ");
    }

    #[test]
    fn numerals_use_pronunciation() {
        let word = normalize_word("2014");
        assert_eq!(word.text, "d\u{00F6}rt");
        assert!(word.numeric);

        assert_eq!(normalize_word("40'").text, "k\u{0131}rk'");
        assert_eq!(normalize_word("1.5").text, "be\u{015F}");
    }

    #[test]
    fn digits_after_letters_are_not_numeric() {
        let word = normalize_word("F16");
        assert_eq!(word.text, "f16");
        assert!(!word.numeric);
    }

    #[test]
    fn empty_stem() {
        let word = normalize_word("");
        assert_eq!(word.text, "");
        assert!(!word.numeric);
    }

    #[test]
    fn pronunciation_table() {
        assert_eq!(pronounce_number("1"), "bir");
        assert_eq!(pronounce_number("2014"), "d\u{00F6}rt");
        assert_eq!(pronounce_number("7"), "yedi");
        assert_eq!(pronounce_number("90"), "doksan");
        assert_eq!(pronounce_number("60"), "altm\u{0131}\u{015F}");
        assert_eq!(pronounce_number("10"), "on");
        assert_eq!(pronounce_number("0"), "s\u{0131}f\u{0131}r");
        assert_eq!(pronounce_number("00"), "s\u{0131}f\u{0131}r");
    }

    #[test]
    fn pronunciation_of_round_numbers() {
        assert_eq!(pronounce_number("100"), "y\u{00FC}z");
        assert_eq!(pronounce_number("1900"), "y\u{00FC}z");
        assert_eq!(pronounce_number("1000"), "bin");
        assert_eq!(pronounce_number("25000"), "bin");
        assert_eq!(pronounce_number("250"), "elli");
    }

    #[test]
    fn word_normalization_is_idempotent() {
        for stem in ["K\u{0130}TAP", "Erkan'", "a\u{011F}a\u{00E7}", "2014'", "PTT", ""] {
            let once = normalize_word(stem).text;
            assert_eq!(normalize_word(&once).text, once, "stem {stem:?}");
        }
    }

    #[test]
    fn suffix_normalization() {
        assert_eq!(normalize_suffix("DAN"), "den");
        assert_eq!(normalize_suffix("\u{0131}n"), "in");
        assert_eq!(normalize_suffix("I"), "i");
        assert_eq!(normalize_suffix("\u{0130}"), "i");
        assert_eq!(normalize_suffix("lar"), "ler");
        assert_eq!(normalize_suffix("mi"), "mi");
    }

    #[test]
    fn suffix_normalization_is_idempotent() {
        for spelling in ["DAN", "\u{0131}n", "I", "LER", "m\u{0131}", "a"] {
            let once = normalize_suffix(spelling);
            assert_eq!(normalize_suffix(&once), once);
        }
    }
}
