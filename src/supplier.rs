//! The word/clue supplier seam.
//!
//! Theme-driven word generation (an AI model, a dictionary service) lives
//! behind [`WordSupplier`]; the engine only ever sees the resolved word
//! list. A supplier failure is fatal to the build that requested it, so the
//! trait returns a hard error rather than a partial list.
//!
//! The crate ships one implementation, [`BuiltinWordSupplier`], which serves
//! the fixed fallback word set used when no theme or explicit words are
//! given.

use crate::errors::SupplierError;

/// One supplied word with its optional clue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppliedWord {
    pub word: String,
    pub clue: Option<String>,
}

/// Source of words (and clues) for a build.
pub trait WordSupplier {
    /// Produce up to `count` words for `theme`.
    ///
    /// # Errors
    ///
    /// Returns a [`SupplierError`] on any failure; callers must not start a
    /// build from a failed supply.
    fn supply(&self, theme: &str, count: usize) -> Result<Vec<SuppliedWord>, SupplierError>;
}

/// The built-in default word set, used when the caller provides neither a
/// theme nor an explicit word list.
pub const DEFAULT_WORDS: [&str; 6] = ["python", "api", "crossword", "puzzle", "ai", "grid"];

/// Supplier backed by [`DEFAULT_WORDS`]. Ignores the theme.
#[derive(Debug, Default)]
pub struct BuiltinWordSupplier;

impl WordSupplier for BuiltinWordSupplier {
    fn supply(&self, _theme: &str, count: usize) -> Result<Vec<SuppliedWord>, SupplierError> {
        Ok(DEFAULT_WORDS
            .iter()
            .take(count)
            .map(|&word| SuppliedWord {
                word: word.to_string(),
                clue: None,
            })
            .collect())
    }
}
