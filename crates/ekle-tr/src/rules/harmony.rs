// Vowel harmony: the suffix vowel is chosen by the stem's last vowel.

use ekle_core::character::TURKISH_VOWELS;

use crate::suffix::{HarmonyClass, Suffix};
use crate::turkish::constants::{DEFAULT_VOWEL, E_TYPE_HARMONY, I_TYPE_HARMONY};

/// Find the last vowel of a normalized stem.
///
/// A stem without vowels is read as if each letter were followed by "e"
/// ("PTT" reads "pe-te-te"), so the default is `e`.
pub fn last_vowel(word: &str) -> char {
    word.chars()
        .rev()
        .find(|c| TURKISH_VOWELS.contains(c))
        .unwrap_or(DEFAULT_VOWEL)
}

/// The allomorph vowel of a harmony class after a given last vowel.
pub fn harmonize(last_vowel: char, class: HarmonyClass) -> char {
    let table = match class {
        HarmonyClass::I => I_TYPE_HARMONY,
        HarmonyClass::E => E_TYPE_HARMONY,
    };
    table
        .iter()
        .find(|(vowel, _)| *vowel == last_vowel)
        .map_or(class.marker(), |&(_, allomorph)| allomorph)
}

/// Spell `suffix` with the vowel harmonizing with `word`.
///
/// `word` must already be normalized.
pub fn resolve_harmony(word: &str, suffix: Suffix) -> String {
    let class = suffix.harmony_class();
    let vowel = harmonize(last_vowel(word), class);
    let mut buf = [0u8; 4];
    suffix
        .normalized()
        .replacen(class.marker(), vowel.encode_utf8(&mut buf), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_vowel_scans_from_end() {
        assert_eq!(last_vowel("domates"), 'e');
        assert_eq!(last_vowel("tar\u{00E7}\u{0131}n"), '\u{0131}');
        assert_eq!(last_vowel("erkan'"), 'a');
        assert_eq!(last_vowel("erkan'a "), 'a');
    }

    #[test]
    fn last_vowel_defaults_to_e() {
        assert_eq!(last_vowel("ptt"), 'e');
        assert_eq!(last_vowel(""), 'e');
        assert_eq!(last_vowel("'"), 'e');
    }

    #[test]
    fn i_type_table() {
        let expected = [
            ('a', '\u{0131}'),
            ('e', 'i'),
            ('\u{0131}', '\u{0131}'),
            ('i', 'i'),
            ('o', 'u'),
            ('\u{00F6}', '\u{00FC}'),
            ('u', 'u'),
            ('\u{00FC}', '\u{00FC}'),
        ];
        for (vowel, allomorph) in expected {
            assert_eq!(harmonize(vowel, HarmonyClass::I), allomorph, "after {vowel}");
        }
    }

    #[test]
    fn e_type_table() {
        let expected = [
            ('a', 'a'),
            ('e', 'e'),
            ('\u{0131}', 'a'),
            ('i', 'e'),
            ('o', 'a'),
            ('\u{00F6}', 'e'),
            ('u', 'a'),
            ('\u{00FC}', 'e'),
        ];
        for (vowel, allomorph) in expected {
            assert_eq!(harmonize(vowel, HarmonyClass::E), allomorph, "after {vowel}");
        }
    }

    #[test]
    fn resolves_accusative() {
        let cases = [
            ("domates", "i"),
            ("incir", "i"),
            ("ananas", "\u{0131}"),
            ("tar\u{00E7}\u{0131}n", "\u{0131}"),
            ("maydanoz", "u"),
            ("armut", "u"),
            ("s\u{00F6}z", "\u{00FC}"),
            ("\u{00FC}z\u{00FC}m", "\u{00FC}"),
        ];
        for (word, suffix) in cases {
            assert_eq!(resolve_harmony(word, Suffix::Accusative), suffix, "{word}");
        }
    }

    #[test]
    fn resolves_multi_letter_suffixes() {
        assert_eq!(resolve_harmony("orman", Suffix::Plural), "lar");
        assert_eq!(resolve_harmony("ev", Suffix::Ablative), "den");
        assert_eq!(resolve_harmony("okul", Suffix::Locative), "da");
        assert_eq!(resolve_harmony("g\u{00FC}l", Suffix::Genitive), "\u{00FC}n");
        assert_eq!(resolve_harmony("da ", Suffix::Question), "m\u{0131}");
    }

    #[test]
    fn vowelless_stem_takes_front_unrounded() {
        assert_eq!(resolve_harmony("ptt", Suffix::Locative), "de");
        assert_eq!(resolve_harmony("ptt", Suffix::Accusative), "i");
    }
}
