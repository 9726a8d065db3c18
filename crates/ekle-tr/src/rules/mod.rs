// Phonological rules applied when a suffix attaches to a stem.
//
// Order matters: harmony picks the suffix vowel first, since assimilation,
// buffer insertion and lenition all look at the resolved suffix's first letter.
//
// 1. harmony      -- suffix vowel follows the stem's last vowel
// 2. assimilation -- suffix-initial d devoices after a voiceless consonant
// 3. buffer       -- y / n between a vowel-final stem and a vowel-initial suffix
// 4. lenition     -- stem-final p/ç/t/k voices before a vowel-initial suffix
// 5. casing       -- uppercase markup yields an uppercase suffix

pub mod assimilation;
pub mod buffer;
pub mod casing;
pub mod harmony;
pub mod lenition;

use ekle_core::character::{CharType, get_char_type};

/// The letter a suffix attaches to: the last letter of the normalized stem,
/// looking past trailing apostrophes and punctuation (`Ayşe'`).
///
/// Returns `None` when the stem ends in whitespace (a separately written
/// particle such as "Ahmet de") or contains no letter or digit.
pub(crate) fn final_letter(word: &str) -> Option<char> {
    for c in word.chars().rev() {
        match get_char_type(c) {
            CharType::Letter | CharType::Digit => return Some(c),
            CharType::Whitespace => return None,
            CharType::Apostrophe | CharType::Other => {}
        }
    }
    None
}
