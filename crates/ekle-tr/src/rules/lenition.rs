// Consonant lenition: a stem-final p/ç/t/k voices before a vowel-initial
// suffix (kitap -> kitabı, ağaç -> ağaca, kanat -> kanadı, bıçak -> bıçağa).
//
// Stems of two or more syllables lenite by default and single-syllable stems
// do not. The exception set inverts the default for the words it lists.

use ekle_core::case::match_case;
use ekle_core::character::is_vowel;

use crate::normalizer::NormalizedWord;
use crate::suffix::Suffix;
use crate::turkish::constants::{LENITION_MAP, POST_CONSONANT_K};
use crate::turkish::exceptions::ExceptionSet;

/// Number of vowels in a normalized stem, used as its syllable count.
pub fn syllable_count(word: &str) -> usize {
    word.chars().filter(|&c| is_vowel(c)).count()
}

/// Whether a stop-final stem lenites, given its syllable count and the
/// exception set. Vowelless stems never lenite.
pub fn should_lenite(word: &str, exceptions: &ExceptionSet) -> bool {
    let exception = exceptions.contains(word);
    match syllable_count(word) {
        0 => false,
        1 => exception,
        _ => !exception,
    }
}

/// The voiced counterpart of a lowercase stem-final stop, or `None` if
/// `last` is not one of p, ç, t, k.
///
/// `k` becomes `g` rather than `ğ` after a consonant (`renk` -> `rengi`).
pub fn voiced_counterpart(last: char, previous: Option<char>) -> Option<char> {
    if last == 'k' && previous.is_some_and(|c| !is_vowel(c)) {
        return Some(POST_CONSONANT_K);
    }
    LENITION_MAP
        .iter()
        .find(|(stop, _)| *stop == last)
        .map(|&(_, voiced)| voiced)
}

/// Apply lenition to the surface form of a stem.
///
/// Only the final letter may change, and it keeps its case (`KİTAP` -> `KİTAB`).
/// Numerals are left alone: lenition of "dört" must not rewrite "2014".
pub fn apply_lenition(
    surface: &str,
    word: &NormalizedWord,
    suffix: Suffix,
    exceptions: &ExceptionSet,
) -> String {
    if word.numeric || !suffix.starts_with_vowel() {
        return surface.to_string();
    }

    let mut rev = word.text.chars().rev();
    let Some(last) = rev.next() else {
        return surface.to_string();
    };
    let Some(voiced) = voiced_counterpart(last, rev.next()) else {
        return surface.to_string();
    };
    if !should_lenite(&word.text, exceptions) {
        log::trace!("lenition: {:?} keeps its final stop", word.text);
        return surface.to_string();
    }
    let Some(surface_last) = surface.chars().next_back() else {
        return surface.to_string();
    };

    log::trace!("lenition: {:?} {last} -> {voiced}", word.text);
    let mut out = String::with_capacity(surface.len() + 1);
    out.push_str(&surface[..surface.len() - surface_last.len_utf8()]);
    out.push(match_case(voiced, surface_last));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize_word;

    fn lenite(stem: &str, suffix: Suffix, exceptions: &ExceptionSet) -> String {
        apply_lenition(stem, &normalize_word(stem), suffix, exceptions)
    }

    #[test]
    fn syllables() {
        assert_eq!(syllable_count("ok"), 1);
        assert_eq!(syllable_count("b\u{0131}\u{00E7}ak"), 2);
        assert_eq!(syllable_count("cumhuriyet"), 4);
        assert_eq!(syllable_count("ptt"), 0);
    }

    #[test]
    fn voiced_counterparts() {
        assert_eq!(voiced_counterpart('p', Some('a')), Some('b'));
        assert_eq!(voiced_counterpart('\u{00E7}', Some('a')), Some('c'));
        assert_eq!(voiced_counterpart('t', Some('a')), Some('d'));
        assert_eq!(voiced_counterpart('k', Some('a')), Some('\u{011F}'));
        assert_eq!(voiced_counterpart('k', Some('n')), Some('g'));
        assert_eq!(voiced_counterpart('t', Some('r')), Some('d'));
        assert_eq!(voiced_counterpart('s', Some('a')), None);
        assert_eq!(voiced_counterpart('\'', Some('t')), None);
    }

    #[test]
    fn policy_without_exceptions() {
        let none = ExceptionSet::empty();
        assert!(!should_lenite("ok", &none));
        assert!(should_lenite("kanat", &none));
        assert!(!should_lenite("ptt", &none));
    }

    #[test]
    fn exceptions_invert_policy() {
        let set = ExceptionSet::builtin();
        // One syllable, listed: lenites.
        assert!(should_lenite("yurt", &set));
        // One syllable, not listed: does not.
        assert!(!should_lenite("ok", &set));
        // Two syllables, listed: does not.
        assert!(!should_lenite("armut", &set));
        // Two syllables, not listed: lenites.
        assert!(should_lenite("bilek", &set));
    }

    #[test]
    fn applies_to_surface() {
        let set = ExceptionSet::builtin();
        assert_eq!(lenite("b\u{0131}\u{00E7}ak", Suffix::Dative, &set), "b\u{0131}\u{00E7}a\u{011F}");
        assert_eq!(lenite("kitap", Suffix::Accusative, &set), "kitab");
        assert_eq!(lenite("a\u{011F}a\u{00E7}", Suffix::Dative, &set), "a\u{011F}ac");
        assert_eq!(lenite("renk", Suffix::Accusative, &set), "reng");
        assert_eq!(lenite("yurt", Suffix::Accusative, &set), "yurd");
        assert_eq!(lenite("armut", Suffix::Accusative, &set), "armut");
        assert_eq!(lenite("ok", Suffix::Accusative, &set), "ok");
    }

    #[test]
    fn keeps_case_of_final_letter() {
        let set = ExceptionSet::builtin();
        assert_eq!(lenite("K\u{0130}TAP", Suffix::Accusative, &set), "K\u{0130}TAB");
        assert_eq!(lenite("BI\u{00C7}AK", Suffix::Dative, &set), "BI\u{00C7}A\u{011E}");
    }

    #[test]
    fn consonant_initial_suffix_never_lenites() {
        let set = ExceptionSet::builtin();
        assert_eq!(lenite("a\u{011F}a\u{00E7}", Suffix::Plural, &set), "a\u{011F}a\u{00E7}");
        assert_eq!(lenite("kitap", Suffix::Locative, &set), "kitap");
    }

    #[test]
    fn apostrophe_blocks_lenition() {
        let set = ExceptionSet::builtin();
        assert_eq!(lenite("Zonguldak'", Suffix::Dative, &set), "Zonguldak'");
        assert_eq!(lenite("Ahmet'", Suffix::Genitive, &set), "Ahmet'");
    }

    #[test]
    fn numerals_are_never_rewritten() {
        let set = ExceptionSet::builtin();
        assert_eq!(lenite("2014", Suffix::Dative, &set), "2014");
        assert_eq!(lenite("40", Suffix::Accusative, &set), "40");
    }

    #[test]
    fn empty_stem() {
        let set = ExceptionSet::builtin();
        assert_eq!(lenite("", Suffix::Dative, &set), "");
    }
}
