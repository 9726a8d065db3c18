// Fortitive assimilation: a suffix-initial `d` devoices to `t` after a
// voiceless consonant (market + de -> markette, kitap + dan -> kitaptan).
//
// A separately written particle ("Ahmet de") keeps its `d`; that shows up
// here as a stem ending in whitespace.

use crate::rules::final_letter;
use crate::turkish::constants::FORTIS_CONSONANTS;

/// Whether a suffix-initial `d` devoices after the normalized stem `word`.
pub fn devoices_after(word: &str) -> bool {
    final_letter(word).is_some_and(|c| FORTIS_CONSONANTS.contains(&c))
}

/// Replace the leading `d` of a harmony-resolved suffix with `t` when the
/// stem ends in a voiceless consonant.
pub fn apply_assimilation(word: &str, suffix: String) -> String {
    match suffix.strip_prefix('d') {
        Some(rest) if devoices_after(word) => {
            log::trace!("assimilation: {word:?} + d{rest} -> t{rest}");
            format!("t{rest}")
        }
        _ => suffix,
    }
}
