//! Intersection discovery: where can two words share a letter?
//!
//! Two lookup structures feed the placement engine, trading build cost for
//! query cost in different ways:
//!
//! - [`IntersectionIndex`] precomputes, for every ordered pair of distinct
//!   words, all `(i, j)` offset pairs where word A's letter `i` equals word
//!   B's letter `j`. Built once before any placement; O(1) lookup per pair
//!   afterwards. The backtracking strategy uses this against the live
//!   placement set.
//! - [`SlotIndex`] tracks the letters already written to the grid, mapping
//!   each letter to the cells bearing it (together with the orientation of
//!   the run that wrote it). Candidate generation then costs O(word length ×
//!   bucket size) instead of O(placed pairs), which is what the greedy
//!   single-pass strategy wants.
//!
//! Either way, a shared letter only becomes a placement candidate in the
//! orientation perpendicular to the run already on the grid. That rule is
//! load-bearing: two words meeting at a cell must cross, not overlap.

use std::collections::HashMap;

use crate::grid::{Orientation, Placement};
use crate::word_list::PuzzleWord;

/// All letter-position pairs at which ordered pairs of words can overlap.
///
/// Read-only once built. Information is stored for both orderings of each
/// pair so lookups never need to swap and remap offsets.
#[derive(Debug, Default)]
pub struct IntersectionIndex {
    pairs: HashMap<(usize, usize), Vec<(usize, usize)>>,
}

impl IntersectionIndex {
    /// Precompute letter matches for every ordered pair of distinct words.
    ///
    /// Cost is the sum of |A|·|B| over pairs, fine for puzzle-sized inputs
    /// (dozens of words at most).
    #[must_use]
    pub fn build(words: &[PuzzleWord]) -> IntersectionIndex {
        let mut pairs: HashMap<(usize, usize), Vec<(usize, usize)>> = HashMap::new();

        for (a, word_a) in words.iter().enumerate() {
            for (b, word_b) in words.iter().enumerate() {
                if a == b {
                    continue;
                }
                let mut matches = Vec::new();
                for (i, ch_a) in word_a.answer.chars().enumerate() {
                    for (j, ch_b) in word_b.answer.chars().enumerate() {
                        if ch_a == ch_b {
                            matches.push((i, j));
                        }
                    }
                }
                if !matches.is_empty() {
                    pairs.insert((a, b), matches);
                }
            }
        }

        IntersectionIndex { pairs }
    }

    /// Offset pairs `(i, j)` where word `a`'s letter `i` equals word `b`'s
    /// letter `j`. Empty when the words share no letter.
    #[must_use]
    pub fn matches(&self, a: usize, b: usize) -> &[(usize, usize)] {
        self.pairs.get(&(a, b)).map_or(&[], Vec::as_slice)
    }
}

/// A grid cell already bearing a letter, remembered for fast candidate
/// lookup, along with the orientation of the run that wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

/// Letter -> occupied cells, grown after every committed placement.
///
/// Additive only: the greedy strategy never removes placements, so entries
/// are never pruned. A crossing cell appears once per run covering it, each
/// entry with its own orientation.
#[derive(Debug, Default)]
pub struct SlotIndex {
    slots: HashMap<char, Vec<Slot>>,
}

impl SlotIndex {
    /// Record every cell of a freshly committed placement.
    pub fn record(&mut self, placement: &Placement) {
        for (row, col, ch) in placement.cells() {
            self.slots.entry(ch).or_default().push(Slot {
                row,
                col,
                orientation: placement.orientation,
            });
        }
    }

    /// Occupied cells holding `letter`, in commit order.
    #[must_use]
    pub fn slots_for(&self, letter: char) -> &[Slot] {
        self.slots.get(&letter).map_or(&[], Vec::as_slice)
    }
}

/// Candidate origin for crossing an already-placed word.
///
/// `placed` holds letter `j` of its word at some cell; the new word wants
/// its own letter `i` on that cell, running perpendicular. For a Horizontal
/// run the new word drops Vertical through column `col + j`, starting `i`
/// rows up; for a Vertical run it cuts Horizontal through row `row + j`,
/// starting `i` columns left. Origins can be negative; validity is the
/// grid's call.
#[must_use]
pub fn crossing_candidate(
    placed: &Placement,
    i: usize,
    j: usize,
) -> (isize, isize, Orientation) {
    let (i, j) = (i as isize, j as isize);
    match placed.orientation {
        Orientation::Horizontal => (
            placed.row as isize - i,
            placed.col as isize + j,
            Orientation::Vertical,
        ),
        Orientation::Vertical => (
            placed.row as isize + j,
            placed.col as isize - i,
            Orientation::Horizontal,
        ),
    }
}

/// Candidate origin for crossing at an indexed slot: the new word's letter
/// `i` lands on the slot cell, perpendicular to the run that wrote it.
#[must_use]
pub fn slot_candidate(slot: Slot, i: usize) -> (isize, isize, Orientation) {
    let i = i as isize;
    match slot.orientation {
        Orientation::Horizontal => (slot.row as isize - i, slot.col as isize, Orientation::Vertical),
        Orientation::Vertical => (slot.row as isize, slot.col as isize - i, Orientation::Horizontal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word_list::WordList;

    fn words(list: &[&str]) -> Vec<PuzzleWord> {
        WordList::from_words(list).words
    }

    #[test]
    fn test_index_finds_all_letter_pairs() {
        let ws = words(&["CAT", "ATTACK"]);
        let index = IntersectionIndex::build(&ws);

        // CAT vs ATTACK: C@4, A@{0,3}, T@{1,2}
        let m = index.matches(0, 1);
        assert_eq!(
            m,
            &[(0, 4), (1, 0), (1, 3), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_index_is_symmetric_with_swapped_offsets() {
        let ws = words(&["CAT", "ATTACK"]);
        let index = IntersectionIndex::build(&ws);

        let forward = index.matches(0, 1);
        let mut reversed: Vec<(usize, usize)> =
            index.matches(1, 0).iter().map(|&(i, j)| (j, i)).collect();
        reversed.sort_unstable();
        let mut forward_sorted = forward.to_vec();
        forward_sorted.sort_unstable();
        assert_eq!(forward_sorted, reversed);
    }

    #[test]
    fn test_index_empty_for_disjoint_words() {
        let ws = words(&["CAT", "BED"]);
        let index = IntersectionIndex::build(&ws);
        assert!(index.matches(0, 1).is_empty());
        assert!(index.matches(1, 0).is_empty());
    }

    #[test]
    fn test_crossing_candidate_horizontal_host() {
        // ATTACK horizontal at (4, 1); CAT's A (i=1) meets ATTACK's first A (j=0)
        let placed = Placement {
            word: "ATTACK".to_string(),
            row: 4,
            col: 1,
            orientation: Orientation::Horizontal,
        };
        let (row, col, orientation) = crossing_candidate(&placed, 1, 0);
        assert_eq!((row, col), (3, 1));
        assert_eq!(orientation, Orientation::Vertical);
    }

    #[test]
    fn test_crossing_candidate_vertical_host() {
        let placed = Placement {
            word: "ATTACK".to_string(),
            row: 2,
            col: 6,
            orientation: Orientation::Vertical,
        };
        // crossing at ATTACK's K (j=5) with the new word's letter 2
        let (row, col, orientation) = crossing_candidate(&placed, 2, 5);
        assert_eq!((row, col), (7, 4));
        assert_eq!(orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_crossing_candidate_can_go_negative() {
        let placed = Placement {
            word: "CAT".to_string(),
            row: 0,
            col: 0,
            orientation: Orientation::Horizontal,
        };
        let (row, _, _) = crossing_candidate(&placed, 2, 0);
        assert_eq!(row, -2);
    }

    #[test]
    fn test_slot_index_records_cells_with_orientation() {
        let mut index = SlotIndex::default();
        index.record(&Placement {
            word: "CAT".to_string(),
            row: 4,
            col: 1,
            orientation: Orientation::Horizontal,
        });

        assert_eq!(
            index.slots_for('A'),
            &[Slot { row: 4, col: 2, orientation: Orientation::Horizontal }]
        );
        assert!(index.slots_for('Z').is_empty());
    }

    #[test]
    fn test_slot_candidate_is_perpendicular() {
        let slot = Slot { row: 4, col: 2, orientation: Orientation::Horizontal };
        let (row, col, orientation) = slot_candidate(slot, 1);
        assert_eq!((row, col), (3, 2));
        assert_eq!(orientation, Orientation::Vertical);

        let slot = Slot { row: 4, col: 2, orientation: Orientation::Vertical };
        let (row, col, orientation) = slot_candidate(slot, 1);
        assert_eq!((row, col), (4, 1));
        assert_eq!(orientation, Orientation::Horizontal);
    }
}
