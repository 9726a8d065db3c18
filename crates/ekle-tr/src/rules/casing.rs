// Case restoration: markup written in uppercase (`--DEN`, `--I`) yields an
// uppercase suffix. Every catalog spelling has exactly one vowel, so the case
// of that vowel decides.

use ekle_core::case::{has_upper_where, to_upper};
use ekle_core::character::is_vowel;

/// Whether a markup spelling asks for an uppercase suffix: it contains one
/// of A, E, I, İ.
pub fn is_uppercase_spelling(spelling: &str) -> bool {
    has_upper_where(spelling, is_vowel)
}

/// Uppercase the fully resolved suffix if the markup was uppercase.
pub fn restore_case(suffix: String, uppercase: bool) -> String {
    if uppercase { to_upper(&suffix) } else { suffix }
}
