//! `word_list` — load and preprocess the words (and clues) for one build.
//!
//! Input words arrive in any case, possibly with surrounding whitespace,
//! possibly duplicated, and optionally with a clue attached. The placement
//! engine wants none of that variability, so this module normalizes
//! everything up front:
//!
//! - Each word is trimmed and uppercased.
//! - Entries that are empty or contain non-letter characters are skipped
//!   (with a warning); the engine only places plain letter runs.
//! - Duplicates (by normalized form) are dropped, keeping the first
//!   occurrence; the first occurrence's clue wins, so the clue association
//!   stays unambiguous even for repeated input words.
//!
//! Clues are an opaque payload. They ride along with their word and are
//! never read by placement logic; callers fetch them back out with
//! [`WordList::clue_for`] when presenting results.
//!
//! The text format accepted by [`WordList::parse_from_str`] is one entry per
//! line, `word;clue`, with the clue optional (a line without a semicolon is
//! a bare word). This is the same shape the CLI's `--word-file` reads.

use log::warn;

use crate::errors::CrosswordError;

/// One normalized input word with its optional clue payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleWord {
    /// Uppercase letters only.
    pub answer: String,
    /// Opaque clue payload; never consulted during placement.
    pub clue: Option<String>,
}

/// A processed, ready-to-place word set.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    pub words: Vec<PuzzleWord>,
}

impl WordList {
    /// Normalize raw `(word, clue)` pairs into a `WordList`.
    ///
    /// Invalid entries are skipped with a warning rather than failing the
    /// build; an empty result is a valid word list.
    pub fn from_entries<I, S>(entries: I) -> WordList
    where
        I: IntoIterator<Item = (S, Option<String>)>,
        S: AsRef<str>,
    {
        let mut words: Vec<PuzzleWord> = Vec::new();

        for (raw, clue) in entries {
            let trimmed = raw.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                warn!("skipping word with non-letter characters: {trimmed:?}");
                continue;
            }
            let answer = trimmed.to_ascii_uppercase();
            if words.iter().any(|w| w.answer == answer) {
                warn!("skipping duplicate word: {answer}");
                continue;
            }
            words.push(PuzzleWord { answer, clue });
        }

        WordList { words }
    }

    /// Normalize a plain list of words with no clues attached.
    pub fn from_words<I, S>(words: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_entries(words.into_iter().map(|w| (w, None)))
    }

    /// Parse a `word;clue`-per-line text block (clue optional).
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        Self::from_entries(contents.lines().map(|raw_line| {
            let line = raw_line.trim();
            match line.split_once(';') {
                Some((word, clue)) => {
                    let clue = clue.trim();
                    (
                        word.to_string(),
                        (!clue.is_empty()).then(|| clue.to_string()),
                    )
                }
                None => (line.to_string(), None),
            }
        }))
    }

    /// Read a word file from disk. Native convenience wrapper around
    /// [`WordList::parse_from_str`].
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::WordFile`] if the file cannot be read.
    pub fn load_from_path(path: &str) -> Result<WordList, CrosswordError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| CrosswordError::WordFile {
                path: path.to_string(),
                source,
            })?;
        Ok(Self::parse_from_str(&contents))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The clue attached to a normalized answer, if any.
    #[must_use]
    pub fn clue_for(&self, answer: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|w| w.answer == answer)
            .and_then(|w| w.clue.as_deref())
    }

    /// Word indices sorted longest first, ties kept in input order.
    ///
    /// Longer words are harder to place late, so the engine seats them
    /// first; the stable tiebreak keeps builds deterministic.
    #[must_use]
    pub fn ordered_longest_first(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.words.len()).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(self.words[i].answer.len()));
        order
    }
}
