// Suffix catalog and markup spelling recognition

use std::fmt;

use ekle_core::character::is_vowel;

use crate::normalizer::normalize_suffix;
use crate::rules::casing::is_uppercase_spelling;

/// Harmony class of a suffix, named after the marker letter of its
/// normalized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyClass {
    /// Four-way harmony (ı, i, u, ü): `i`, `in`, `mi`.
    I,
    /// Two-way harmony (a, e): `e`, `de`, `den`, `ler`.
    E,
}

impl HarmonyClass {
    /// The letter of the normalized suffix that harmony replaces.
    pub fn marker(self) -> char {
        match self {
            HarmonyClass::I => 'i',
            HarmonyClass::E => 'e',
        }
    }
}

/// The supported noun suffixes and particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    /// `-e` / `-a`: dative case.
    Dative,
    /// `-in` / `-ın`: genitive case.
    Genitive,
    /// `-i` / `-ı`: accusative case.
    Accusative,
    /// `-den` / `-dan`: ablative case.
    Ablative,
    /// `-de` / `-da`: locative case, and the separately written particle "de/da".
    Locative,
    /// `-ler` / `-lar`: plural.
    Plural,
    /// `mi` / `mı`: question particle.
    Question,
}

impl Suffix {
    /// Every catalog entry.
    pub const ALL: [Suffix; 7] = [
        Suffix::Dative,
        Suffix::Genitive,
        Suffix::Accusative,
        Suffix::Ablative,
        Suffix::Locative,
        Suffix::Plural,
        Suffix::Question,
    ];

    /// Longest normalized spelling in the catalog, in characters.
    pub const MAX_LEN: usize = 3;

    /// Front-vowel lowercase form used for all rule lookups.
    pub fn normalized(self) -> &'static str {
        match self {
            Suffix::Dative => "e",
            Suffix::Genitive => "in",
            Suffix::Accusative => "i",
            Suffix::Ablative => "den",
            Suffix::Locative => "de",
            Suffix::Plural => "ler",
            Suffix::Question => "mi",
        }
    }

    /// Look up a suffix by its normalized form.
    pub fn from_normalized(normalized: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.normalized() == normalized)
    }

    pub fn harmony_class(self) -> HarmonyClass {
        if self.normalized().contains('i') {
            HarmonyClass::I
        } else {
            HarmonyClass::E
        }
    }

    /// Whether the suffix begins with a vowel, making lenition and buffer
    /// letters possible.
    pub fn starts_with_vowel(self) -> bool {
        self.normalized().chars().next().is_some_and(is_vowel)
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.normalized())
    }
}

/// A suffix as spelled in markup: which catalog entry it names, and whether
/// it was written in uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixToken {
    pub suffix: Suffix,
    /// The markup asked for an uppercase result (`--DEN`, `--I`).
    pub uppercase: bool,
    /// The spelling exactly as written, without the leading `--`.
    pub spelling: String,
}

impl SuffixToken {
    /// Parse a catalog spelling: front or back vowel variant, any case.
    ///
    /// Returns `None` for anything that is not a catalog entry.
    pub fn parse(spelling: &str) -> Option<Self> {
        let suffix = Suffix::from_normalized(&normalize_suffix(spelling))?;
        Some(Self {
            suffix,
            uppercase: is_uppercase_spelling(spelling),
            spelling: spelling.to_string(),
        })
    }

    /// Match the longest catalog spelling at the start of `text`.
    ///
    /// Returns the token and its length in characters.
    pub fn match_prefix(text: &[char]) -> Option<(Self, usize)> {
        (1..=Suffix::MAX_LEN.min(text.len())).rev().find_map(|len| {
            let spelling: String = text[..len].iter().collect();
            Self::parse(&spelling).map(|token| (token, len))
        })
    }
}
