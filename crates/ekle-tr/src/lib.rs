//! Turkish noun-suffix inflection.
//!
//! Attaches case suffixes and particles to Turkish words, resolving vowel
//! harmony, consonant lenition, fortitive assimilation and buffer letters,
//! and applies `--suffix` markup inside running text:
//!
//! ```
//! assert_eq!(ekle_tr::inflect_word("kitap", "i"), "kitab\u{0131}");
//! assert_eq!(ekle_tr::inflect_text("market--de"), "markette");
//! ```
//!
//! Modules:
//! - `inflector`: the [`Inflector`] handle, its options and errors
//! - `normalizer`: stem and suffix normalization, numeral pronunciation
//! - `rules`: harmony, lenition, assimilation, buffer letters, casing
//! - `scanner`: markup lexer and word-boundary scan
//! - `suffix`: the suffix catalog and markup spellings
//! - `template`: `{{key}}` placeholder substitution
//! - `turkish`: phonology tables and the lenition exception set

pub mod inflector;
pub mod normalizer;
pub mod rules;
pub mod scanner;
pub mod suffix;
pub mod template;
pub mod turkish;

use std::sync::LazyLock;

pub use inflector::{InflectError, Inflector, InflectorOptions};
pub use suffix::{HarmonyClass, Suffix, SuffixToken};
pub use turkish::exceptions::{BUILTIN_EXCEPTIONS, ExceptionSet};

static DEFAULT: LazyLock<Inflector> = LazyLock::new(Inflector::new);

/// Inflect a single stem with the default inflector.
pub fn inflect_word(stem: &str, suffix: &str) -> String {
    DEFAULT.inflect_word(stem, suffix)
}

/// Apply `--suffix` markup in `text` with the default inflector.
pub fn inflect_text(text: &str) -> String {
    DEFAULT.inflect_text(text)
}

/// With a suffix, inflect `text` as one stem; without, apply its markup.
pub fn inflect(text: &str, suffix: Option<&str>) -> String {
    DEFAULT.inflect(text, suffix)
}
