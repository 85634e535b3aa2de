//! Presentation adapters for a finished build.
//!
//! Nothing here affects placement; these are the trivial transforms between
//! the engine's grid and what callers ship: display rows with blanks as
//! empty strings, an ASCII rendering for terminals, and the serializable
//! puzzle payload with per-word clues augmented by their placed positions.

use serde::Serialize;

use crate::grid::{Grid, Orientation, Placement};
use crate::solver::BuildResult;
use crate::word_list::WordList;

/// Grid rows for display: each cell a one-letter string, blanks as `""`.
#[must_use]
pub fn display_rows(grid: &Grid) -> Vec<Vec<String>> {
    (0..grid.size())
        .map(|row| {
            (0..grid.size())
                .map(|col| {
                    grid.letter_at(row, col)
                        .map_or_else(String::new, |ch| ch.to_string())
                })
                .collect()
        })
        .collect()
}

/// Plain-text rendering for terminals: letters separated by spaces, blanks
/// drawn as dots.
#[must_use]
pub fn ascii(grid: &Grid) -> String {
    (0..grid.size())
        .map(|row| {
            (0..grid.size())
                .map(|col| grid.letter_at(row, col).unwrap_or('.').to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A placed word's clue record, augmented with its resulting position.
#[derive(Debug, Clone, Serialize)]
pub struct ClueEntry {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl ClueEntry {
    fn new(placement: &Placement, words: &WordList) -> ClueEntry {
        ClueEntry {
            word: placement.word.clone(),
            clue: words.clue_for(&placement.word).map(str::to_string),
            row: placement.row,
            col: placement.col,
            orientation: placement.orientation,
        }
    }
}

/// The full serializable result of one build.
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleOutput {
    pub grid: Vec<Vec<String>>,
    pub words: Vec<ClueEntry>,
    pub omitted: Vec<String>,
    pub score: usize,
}

impl PuzzleOutput {
    /// Assemble the output payload, joining each placement back to its clue.
    #[must_use]
    pub fn new(result: &BuildResult, words: &WordList) -> PuzzleOutput {
        PuzzleOutput {
            grid: display_rows(&result.grid),
            words: result
                .placements
                .iter()
                .map(|p| ClueEntry::new(p, words))
                .collect(),
            omitted: result.omitted.clone(),
            score: result.score,
        }
    }
}
