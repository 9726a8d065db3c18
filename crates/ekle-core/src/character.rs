// Character classification and Turkish case mapping

// ---------------------------------------------------------------------------
// Turkish phonological constants
// ---------------------------------------------------------------------------

/// Turkish vowels (lowercase): a e ı i o ö u ü
pub const TURKISH_VOWELS: &[char] = &['a', 'e', '\u{0131}', 'i', 'o', '\u{00F6}', 'u', '\u{00FC}'];

/// Turkish consonants (lowercase), plus q w x which appear in loanwords and names.
pub const TURKISH_CONSONANTS: &[char] = &[
    'b', 'c', '\u{00E7}', 'd', 'f', 'g', '\u{011F}', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r',
    's', '\u{015F}', 't', 'v', 'w', 'x', 'y', 'z',
];

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character classes used by the markup scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Letter,
    Digit,
    /// Apostrophe joining a proper noun and its suffix (`Erkan'a`).
    Apostrophe,
    Whitespace,
    Other,
}

/// Returns the character type for a given character.
///
/// Letters are ASCII letters plus the Latin-1 Supplement and Latin Extended-A/B
/// letter ranges, which cover the Turkish alphabet (ç ğ ı İ ö ş ü), circumflexed
/// vowels (â î û) and the accented letters common in foreign names.
pub fn get_char_type(c: char) -> CharType {
    let cp = c as u32;
    if c.is_ascii_alphabetic()
        || (0xC0..=0xD6).contains(&cp)      // À-Ö
        || (0xD8..=0xF6).contains(&cp)      // Ø-ö
        || (0x00F8..=0x024F).contains(&cp)
    // ø-ɏ
    {
        return CharType::Letter;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    if is_apostrophe(c) {
        return CharType::Apostrophe;
    }
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    CharType::Other
}

/// Check whether a character is a letter of the supported alphabets.
pub fn is_letter(c: char) -> bool {
    get_char_type(c) == CharType::Letter
}

/// Check whether a character may appear inside a word: a letter or an ASCII digit.
pub fn is_word_char(c: char) -> bool {
    matches!(get_char_type(c), CharType::Letter | CharType::Digit)
}

/// ASCII apostrophe or U+2019 RIGHT SINGLE QUOTATION MARK, which Turkish
/// typography uses interchangeably before suffixes of proper nouns.
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

// ---------------------------------------------------------------------------
// Turkish phonological classification
// ---------------------------------------------------------------------------

/// Check whether a character is a Turkish vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    TURKISH_VOWELS.contains(&turkish_lower(c))
}

/// Check whether a character is a Turkish consonant (case-insensitive).
pub fn is_consonant(c: char) -> bool {
    TURKISH_CONSONANTS.contains(&turkish_lower(c))
}

// ---------------------------------------------------------------------------
// Case conversion
//
// Turkish has two distinct i letters: dotted (i / İ) and dotless (ı / I).
// Unicode's default mappings fold `I` to `i` and `İ` to the two-character
// sequence "i\u{0307}", so both need to be special-cased.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only the
/// first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Lowercase a character using the Turkish alphabet: `I` → `ı`, `İ` → `i`.
pub fn turkish_lower(c: char) -> char {
    match c {
        'I' => '\u{0131}',
        '\u{0130}' => 'i',
        _ => simple_lower(c),
    }
}

/// Uppercase a character using the Turkish alphabet: `i` → `İ`, `ı` → `I`.
pub fn turkish_upper(c: char) -> char {
    match c {
        'i' => '\u{0130}',
        '\u{0131}' => 'I',
        _ => simple_upper(c),
    }
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != turkish_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != turkish_upper(c)
}

/// Check whether a character is a whitespace character.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}
