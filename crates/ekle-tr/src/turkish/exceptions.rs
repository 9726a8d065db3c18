// Lenition exception words.
//
// By default, a stem ending in p/ç/t/k voices before a vowel-initial suffix
// when it has two or more syllables and keeps its stop when it has one. Words
// in the exception set invert that policy for their syllable-count class:
// "armut" + i -> "armutu" (no lenition), "yurt" + i -> "yurdu" (lenition).

use ekle_core::case::to_lower;
use hashbrown::HashSet;

/// Built-in exception words, all lowercase.
pub const BUILTIN_EXCEPTIONS: &[&str] = &[
    "an\u{0131}t",          // anıt
    "armut",
    "bulut",
    "kan\u{0131}t",         // kanıt
    "\u{00F6}l\u{00E7}\u{00FC}t", // ölçüt
    "ahlak",
    "cumhuriyet",
    "devlet",
    "millet",
    "evrak",
    "hukuk",
    "ittifak",
    "paket",
    "sepet",
    "\u{015F}efkat",        // şefkat
    "tank",
    "ta\u{015F}\u{0131}t",  // taşıt
    "anlat",
    "yan\u{0131}t",         // yanıt
    "but",
    "dip",
    "g\u{00F6}k",           // gök
    "kap",
    "kurt",
    "u\u{00E7}",            // uç
    "yurt",
    "renk",
];

/// Append-only set of stems that invert the default lenition policy.
///
/// Words are stored lowercased with Turkish case mapping. There is no removal
/// operation; an inflector only ever learns new exceptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionSet {
    words: HashSet<String>,
}

impl ExceptionSet {
    /// Create an empty exception set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a set holding the [`BUILTIN_EXCEPTIONS`].
    pub fn builtin() -> Self {
        let mut set = Self::empty();
        set.extend(BUILTIN_EXCEPTIONS.iter().copied());
        set
    }

    /// Parse a word list: one word per line, blank lines and lines starting
    /// with `#` are skipped, surrounding whitespace is trimmed.
    pub fn from_word_list(text: &str) -> Self {
        let mut set = Self::empty();
        set.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        set
    }

    /// Add a single word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(to_lower(word))
    }

    /// Add every word of `words`.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Check whether a normalized (lowercase) stem is an exception.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stored words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
