// Markup scanner.
//
// Splits text into literal runs and `--suffix` markup tokens, and finds the
// word a markup token attaches to. Both are plain scans over classified
// characters; no regular expressions are involved.

use ekle_core::character::{is_apostrophe, is_letter, is_whitespace, is_word_char};

use crate::suffix::SuffixToken;

/// Marker that introduces a suffix in text: `kapı--e`.
pub const MARKUP_PREFIX: &str = "--";

/// A piece of scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Literal text, copied to the output unchanged.
    Text(String),
    /// A recognized `--suffix` token. `position` is the character offset of
    /// the leading `--`.
    Markup { position: usize, token: SuffixToken },
    /// `--` directly followed by letters that do not start with a catalog
    /// suffix (`--xyz`).
    UnknownMarkup { position: usize, spelling: String },
}

/// Split `text` into literal text and markup pieces.
///
/// At every `--` the longest catalog spelling that follows is matched
/// (`--deki` is `--de` followed by the literal "ki"). A `--` followed by
/// anything other than a letter is ordinary text.
pub fn scan(text: &str) -> Vec<Piece> {
    let chars: Vec<char> = text.chars().collect();
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '-' && chars.get(i + 1) == Some(&'-') {
            let rest = &chars[i + 2..];
            if let Some((token, len)) = SuffixToken::match_prefix(rest) {
                flush(&mut pieces, &mut literal);
                pieces.push(Piece::Markup { position: i, token });
                i += 2 + len;
                continue;
            }
            let len = rest.iter().take_while(|&&c| is_letter(c)).count();
            if len > 0 {
                flush(&mut pieces, &mut literal);
                pieces.push(Piece::UnknownMarkup {
                    position: i,
                    spelling: rest[..len].iter().collect(),
                });
                i += 2 + len;
                continue;
            }
        }
        literal.push(chars[i]);
        i += 1;
    }
    flush(&mut pieces, &mut literal);
    pieces
}

fn flush(pieces: &mut Vec<Piece>, literal: &mut String) {
    if !literal.is_empty() {
        pieces.push(Piece::Text(std::mem::take(literal)));
    }
}

/// Byte offset where the last word of `text` begins.
///
/// The word is a run of letters and digits, possibly joined by apostrophes
/// (`Erkan'a`) or ending in one (`Erkan'`), followed by any trailing
/// whitespace, which marks a separately written particle (`Erkan'a --de`).
/// When no word precedes the end of the text, returns `text.len()`.
pub fn word_start(text: &str) -> usize {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut i = chars.len();
    while i > 0 && is_whitespace(chars[i - 1].1) {
        i -= 1;
    }
    let word_end = i;

    loop {
        if i > 0 && is_word_char(chars[i - 1].1) {
            i -= 1;
        } else if i > 1 && is_apostrophe(chars[i - 1].1) && is_word_char(chars[i - 2].1) {
            i -= 1;
        } else {
            break;
        }
    }

    if i == word_end {
        return text.len();
    }
    chars[i].0
}

/// Split `text` into everything before its last word, and the word.
pub fn split_last_word(text: &str) -> (&str, &str) {
    text.split_at(word_start(text))
}
