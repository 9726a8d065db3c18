// Whole-word case conversion using Turkish case mapping

use crate::character::{is_upper, turkish_lower, turkish_upper};

/// Lowercase a string with Turkish case mapping.
pub fn to_lower(s: &str) -> String {
    s.chars().map(turkish_lower).collect()
}

/// Uppercase a string with Turkish case mapping.
pub fn to_upper(s: &str) -> String {
    s.chars().map(turkish_upper).collect()
}

/// Check whether any letter of `s` matching `pred` is uppercase.
///
/// `has_upper_where("dEn", is_vowel)` is `true`, `has_upper_where("Den", is_vowel)` is not.
pub fn has_upper_where(s: &str, pred: impl Fn(char) -> bool) -> bool {
    s.chars().any(|c| pred(c) && is_upper(c))
}

/// Give `c` the letter case of `model`.
///
/// Used when one letter replaces another in place (`K` → `Ğ`, `k` → `ğ`).
pub fn match_case(c: char, model: char) -> char {
    if is_upper(model) {
        turkish_upper(c)
    } else {
        turkish_lower(c)
    }
}
