// Inflector: top-level integration point for suffix inflection.
//
// Owns the lenition exception set and runs the rule pipeline for single
// words and for marked-up text.
//
// Design notes:
// - Rules are free functions over the normalized stem; the inflector only
//   sequences them and carries the exception set.
// - Text is processed in one left-to-right pass. Each markup token pops the
//   last word off the output built so far, so chained markup sees the
//   already-inflected word.
// - The lenient entry points never fail. `try_inflect_text` runs the same
//   pass and reports the first markup it could not apply.

use crate::normalizer::normalize_word;
use crate::rules::assimilation::apply_assimilation;
use crate::rules::buffer::apply_buffer;
use crate::rules::casing::restore_case;
use crate::rules::harmony::resolve_harmony;
use crate::rules::lenition::apply_lenition;
use crate::scanner::{MARKUP_PREFIX, Piece, scan, word_start};
use crate::suffix::SuffixToken;
use crate::template::substitute;
use crate::turkish::exceptions::ExceptionSet;

/// Error type for strict text inflection.
///
/// Positions are character offsets of the leading `--` in the input text
/// (after placeholder substitution).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InflectError {
    /// `--` followed by letters that do not form a known suffix.
    #[error("unknown suffix \"--{spelling}\" at position {position}")]
    UnknownSuffix { position: usize, spelling: String },

    /// Markup with no word before it to attach to.
    #[error("suffix \"--{spelling}\" at position {position} has no preceding word")]
    MissingWord { position: usize, spelling: String },
}

/// Configuration for building an [`Inflector`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct InflectorOptions {
    /// Start from the built-in lenition exception list.
    pub builtin_exceptions: bool,

    /// Additional exception stems, matched after Turkish lowercasing.
    pub extra_exceptions: Vec<String>,
}

impl Default for InflectorOptions {
    fn default() -> Self {
        Self {
            builtin_exceptions: true,
            extra_exceptions: Vec::new(),
        }
    }
}

/// Turkish noun-suffix inflector.
///
/// Reads take `&self`, so one inflector can be shared between threads.
/// Adding exceptions takes `&mut self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inflector {
    exceptions: ExceptionSet,
}

impl Default for Inflector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflector {
    /// Create an inflector with the built-in exception list.
    pub fn new() -> Self {
        Self::with_options(InflectorOptions::default())
    }

    pub fn with_options(options: InflectorOptions) -> Self {
        let mut exceptions = if options.builtin_exceptions {
            ExceptionSet::builtin()
        } else {
            ExceptionSet::empty()
        };
        exceptions.extend(&options.extra_exceptions);
        Self::with_exceptions(exceptions)
    }

    /// Create an inflector that uses exactly `exceptions`.
    pub fn with_exceptions(exceptions: ExceptionSet) -> Self {
        Self { exceptions }
    }

    pub fn exceptions(&self) -> &ExceptionSet {
        &self.exceptions
    }

    /// Add lenition exception stems. Existing entries are kept; duplicates
    /// are ignored.
    pub fn add_exceptions<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exceptions.extend(words);
    }

    /// Attach the suffix spelled `suffix` (`"e"`, `"dan"`, `"LAR"`, ...) to
    /// `stem`.
    ///
    /// A spelling that is not a known suffix is appended unchanged.
    pub fn inflect_word(&self, stem: &str, suffix: &str) -> String {
        match SuffixToken::parse(suffix) {
            Some(token) => self.inflect_token(stem, &token),
            None => {
                log::debug!("unknown suffix {suffix:?}, appending verbatim");
                format!("{stem}{suffix}")
            }
        }
    }

    /// Attach an already parsed suffix token to `stem`.
    pub fn inflect_token(&self, stem: &str, token: &SuffixToken) -> String {
        let word = normalize_word(stem);
        let suffix = token.suffix;

        let resolved = resolve_harmony(&word.text, suffix);
        let resolved = apply_assimilation(&word.text, resolved);
        let resolved = apply_buffer(&word.text, suffix, resolved);
        let resolved = restore_case(resolved, token.uppercase);
        let mut out = apply_lenition(stem, &word, suffix, &self.exceptions);
        out.push_str(&resolved);
        out
    }

    /// Inflect `text` as a single stem when `suffix` is given, otherwise
    /// process it as marked-up text.
    pub fn inflect(&self, text: &str, suffix: Option<&str>) -> String {
        match suffix {
            Some(suffix) => self.inflect_word(text, suffix),
            None => self.inflect_text(text),
        }
    }

    /// Apply every `--suffix` markup in `text`.
    ///
    /// Markup that cannot be applied is left as written: an unknown suffix,
    /// or a suffix at the very start of the text.
    pub fn inflect_text(&self, text: &str) -> String {
        self.resolve(text).0
    }

    /// Substitute `{{key}}` placeholders, then apply markup.
    pub fn inflect_template<I, K, V>(&self, text: &str, substitutions: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.inflect_text(&substitute(text, substitutions))
    }

    /// Like [`inflect_text`](Self::inflect_text), but fails on the first
    /// markup that names an unknown suffix or has no word to attach to.
    pub fn try_inflect_text(&self, text: &str) -> Result<String, InflectError> {
        match self.resolve(text) {
            (out, None) => Ok(out),
            (_, Some(err)) => Err(err),
        }
    }

    /// Single pass over `text`. Returns the output and the first markup
    /// problem encountered, if any.
    fn resolve(&self, text: &str) -> (String, Option<InflectError>) {
        let mut out = String::with_capacity(text.len());
        let mut issue = None;

        for piece in scan(text) {
            match piece {
                Piece::Text(literal) => out.push_str(&literal),
                Piece::UnknownMarkup { position, spelling } => {
                    log::debug!("position {position}: unknown suffix --{spelling}");
                    out.push_str(MARKUP_PREFIX);
                    out.push_str(&spelling);
                    issue.get_or_insert(InflectError::UnknownSuffix { position, spelling });
                }
                Piece::Markup { position, token } if out.is_empty() => {
                    log::debug!("position {position}: --{} starts the text", token.spelling);
                    out.push_str(MARKUP_PREFIX);
                    out.push_str(&token.spelling);
                    issue.get_or_insert(InflectError::MissingWord {
                        position,
                        spelling: token.spelling,
                    });
                }
                Piece::Markup { position, token } => {
                    let start = word_start(&out);
                    if start == out.len() {
                        issue.get_or_insert(InflectError::MissingWord {
                            position,
                            spelling: token.spelling.clone(),
                        });
                    }
                    let inflected = self.inflect_token(&out[start..], &token);
                    log::debug!(
                        "position {position}: {:?} --{} -> {inflected:?}",
                        &out[start..],
                        token.spelling
                    );
                    out.truncate(start);
                    out.push_str(&inflected);
                }
            }
        }

        (out, issue)
    }
}
