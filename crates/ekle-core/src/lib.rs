//! Shared character utilities for Turkish text processing.
//!
//! - [`character`] -- Character classes, vowel/consonant tests, dotted and dotless I mapping
//! - [`case`] -- Whole-word Turkish case conversion

pub mod case;
pub mod character;
