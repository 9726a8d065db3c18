// Buffer letters: Turkish avoids a vowel-vowel sequence across the stem/suffix
// boundary by inserting a consonant (kapı + ı -> kapıyı, kapı + ın -> kapının).

use ekle_core::character::is_vowel;

use crate::rules::final_letter;
use crate::suffix::Suffix;
use crate::turkish::constants::{BUFFER_N, BUFFER_Y};

/// The buffer letter needed between the normalized stem `word` and `suffix`,
/// if any: `y` for the `i` / `e` suffixes, `n` for the genitive `in`.
pub fn buffer_letter(word: &str, suffix: Suffix) -> Option<char> {
    if !suffix.starts_with_vowel() || !final_letter(word).is_some_and(is_vowel) {
        return None;
    }
    let letter = match suffix {
        Suffix::Accusative | Suffix::Dative => BUFFER_Y,
        _ => BUFFER_N,
    };
    log::trace!("buffer: {word:?} + {suffix} takes {letter}");
    Some(letter)
}

/// Prepend the buffer letter, if one is needed, to an already resolved suffix.
pub fn apply_buffer(word: &str, suffix: Suffix, resolved: String) -> String {
    match buffer_letter(word, suffix) {
        Some(letter) => {
            let mut out = String::with_capacity(resolved.len() + 1);
            out.push(letter);
            out.push_str(&resolved);
            out
        }
        None => resolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_for_accusative_and_dative() {
        assert_eq!(apply_buffer("kap\u{0131}", Suffix::Dative, "a".into()), "ya");
        assert_eq!(apply_buffer("kap\u{0131}", Suffix::Accusative, "\u{0131}".into()), "y\u{0131}");
        assert_eq!(apply_buffer("banka", Suffix::Dative, "a".into()), "ya");
    }

    #[test]
    fn n_for_genitive() {
        assert_eq!(apply_buffer("kap\u{0131}", Suffix::Genitive, "\u{0131}n".into()), "n\u{0131}n");
    }

    #[test]
    fn consonant_final_stems_get_nothing() {
        for suffix in [Suffix::Dative, Suffix::Accusative, Suffix::Genitive] {
            assert_eq!(buffer_letter("kitap", suffix), None);
            assert_eq!(buffer_letter("erkan'", suffix), None);
        }
    }

    #[test]
    fn consonant_initial_suffixes_get_nothing() {
        for suffix in [Suffix::Ablative, Suffix::Locative, Suffix::Plural, Suffix::Question] {
            assert_eq!(buffer_letter("kap\u{0131}", suffix), None);
        }
    }

    #[test]
    fn looks_past_apostrophe() {
        assert_eq!(buffer_letter("ay\u{015F}e'", Suffix::Dative), Some('y'));
        assert_eq!(buffer_letter("iki'", Suffix::Genitive), Some('n'));
    }

    #[test]
    fn exactly_one_letter_is_inserted() {
        let out = apply_buffer("kap\u{0131}", Suffix::Dative, "a".into());
        assert_eq!(out.chars().count(), 2);
    }

    #[test]
    fn whitespace_and_empty_stems_get_nothing() {
        assert_eq!(buffer_letter("kap\u{0131} ", Suffix::Dative), None);
        assert_eq!(buffer_letter("", Suffix::Dative), None);
    }
}
