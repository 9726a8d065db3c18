// Turkish phonology tables shared by the rule resolvers.
//
// Back/front and rounded/unrounded vowel classes are never stored
// separately; they are implied by the two harmony tables below.

/// Vowel substituted for the marker of an i-type suffix (`i`, `in`, `mi`),
/// indexed by the stem's last vowel.
pub(crate) const I_TYPE_HARMONY: &[(char, char)] = &[
    ('a', '\u{0131}'), // a -> ı
    ('e', 'i'),
    ('\u{0131}', '\u{0131}'), // ı -> ı
    ('i', 'i'),
    ('o', 'u'),
    ('\u{00F6}', '\u{00FC}'), // ö -> ü
    ('u', 'u'),
    ('\u{00FC}', '\u{00FC}'), // ü -> ü
];

/// Vowel substituted for the marker of an e-type suffix (`e`, `de`, `den`, `ler`),
/// indexed by the stem's last vowel.
pub(crate) const E_TYPE_HARMONY: &[(char, char)] = &[
    ('a', 'a'),
    ('e', 'e'),
    ('\u{0131}', 'a'), // ı -> a
    ('i', 'e'),
    ('o', 'a'),
    ('\u{00F6}', 'e'), // ö -> e
    ('u', 'a'),
    ('\u{00FC}', 'e'), // ü -> e
];

/// Last vowel assumed for stems without any vowel ("PTT" reads "pe-te-te").
pub(crate) const DEFAULT_VOWEL: char = 'e';

/// Non-continuant fortis stops and their voiced counterparts.
pub(crate) const LENITION_MAP: &[(char, char)] = &[
    ('p', 'b'),
    ('\u{00E7}', 'c'), // ç -> c
    ('t', 'd'),
    ('k', '\u{011F}'), // k -> ğ
];

/// Voiced counterpart of `k` after a consonant (`renk` -> `rengi`).
pub(crate) const POST_CONSONANT_K: char = 'g';

/// Voiceless consonants that devoice a following suffix-initial `d`
/// ("fıstıkçı şahap": f, s, t, k, ç, ş, h, p).
pub(crate) const FORTIS_CONSONANTS: &[char] =
    &['p', '\u{00E7}', 't', 'k', 'f', 'h', 's', '\u{015F}'];

/// Buffer letter between a vowel-final stem and the `i` / `e` suffixes.
pub(crate) const BUFFER_Y: char = 'y';

/// Buffer letter between a vowel-final stem and the genitive `in`.
pub(crate) const BUFFER_N: char = 'n';

// ---------------------------------------------------------------------------
// Numeral pronunciation
// ---------------------------------------------------------------------------

/// Pronunciation of each ones digit.
pub(crate) const ONES: [&str; 10] = [
    "s\u{0131}f\u{0131}r", // sıfır
    "bir",
    "iki",
    "\u{00FC}\u{00E7}", // üç
    "d\u{00F6}rt",      // dört
    "be\u{015F}",       // beş
    "alt\u{0131}",      // altı
    "yedi",
    "sekiz",
    "dokuz",
];

/// Pronunciation of the tens digit (index 0 unused).
pub(crate) const TENS: [&str; 10] = [
    "",
    "on",
    "yirmi",
    "otuz",
    "k\u{0131}rk", // kırk
    "elli",
    "altm\u{0131}\u{015F}", // altmış
    "yetmi\u{015F}",        // yetmiş
    "seksen",
    "doksan",
];

/// Pronunciation of numbers ending in two zeros.
pub(crate) const HUNDRED: &str = "y\u{00FC}z"; // yüz

/// Pronunciation of numbers ending in three zeros.
pub(crate) const THOUSAND: &str = "bin";

/// Pronunciation of zero.
pub(crate) const ZERO: &str = ONES[0];
