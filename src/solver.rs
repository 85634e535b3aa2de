//! The placement engine: seats every word on the grid, maximizing
//! intersections, and always terminates.
//!
//! One build runs as a small state machine:
//!
//! 1. **Order** words longest first (stable on input order); long words are
//!    hard to place late and should claim central real estate early.
//! 2. **Seed** the first placeable word Horizontal and centered. This is the
//!    sole unconditional placement; it cannot fail for a word that fits the
//!    grid at all.
//! 3. For each remaining word, generate crossing candidates, filter them
//!    through `Grid::can_place`, rank by [`scorer::overlap_count`], and
//!    commit according to the configured [`Strategy`]:
//!    - [`Strategy::Greedy`] commits the single best candidate immediately
//!      and never undoes, using the [`SlotIndex`] for candidate generation
//!      proportional to word length.
//!    - [`Strategy::Exhaustive`] tries candidates in descending score order,
//!      recursing and undoing each commit, and retains the best complete
//!      layout seen (ranked by [`scorer::score`]) within a configured
//!      attempt budget.
//! 4. A word with no viable crossing falls back to bounded random
//!    placement; if the cap runs out the word is recorded as an omission and
//!    the build carries on. A single unplaceable word never fails a build.
//!
//! Every build owns its grid, indices and RNG outright; nothing is shared
//! across builds, so concurrent builds need no locking. The RNG is seeded
//! from the config to keep builds reproducible.

use std::cmp::Reverse;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Grid, Orientation, Placement};
use crate::intersections::{crossing_candidate, slot_candidate, IntersectionIndex, SlotIndex};
use crate::scorer;
use crate::word_list::{PuzzleWord, WordList};

/// Default grid size when the caller does not pick one.
pub const DEFAULT_GRID_SIZE: usize = 15;
/// Default cap on random fallback tries per word.
pub const DEFAULT_RANDOM_ATTEMPT_CAP: usize = 200;
/// Default cap on committed placements across one exhaustive search.
pub const DEFAULT_ATTEMPT_BUDGET: usize = 10_000;

/// Search strategy for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Single pass, commit the locally best candidate, never undo.
    #[default]
    Greedy,
    /// Backtracking over candidate placements with full undo, keeping the
    /// best complete layout found within the attempt budget.
    Exhaustive,
}

/// Configuration for one build. All fields have sane defaults.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Grid edge length. The engine takes this as given; callers dealing in
    /// untrusted input should run it through `clamp_grid_size` first.
    pub size: usize,
    pub strategy: Strategy,
    /// Strict adjacency mode (see `Grid::can_place`). Off by default:
    /// touching parallel runs are tolerated.
    pub forbid_touching: bool,
    /// Seed for the fallback RNG. Identical inputs and seed give identical
    /// builds.
    pub seed: u64,
    /// Random placement tries per word before giving up on it.
    pub random_attempt_cap: usize,
    /// Commit budget for the exhaustive strategy.
    pub attempt_budget: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            size: DEFAULT_GRID_SIZE,
            strategy: Strategy::default(),
            forbid_touching: false,
            seed: 0,
            random_attempt_cap: DEFAULT_RANDOM_ATTEMPT_CAP,
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
        }
    }
}

/// How a build finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    /// The search ran to completion.
    Complete,
    /// The exhaustive search spent its whole attempt budget; the best
    /// complete layout found up to that point was returned.
    BudgetExhausted { attempts: usize },
}

/// A finished build: the grid snapshot, the commit-ordered placements, the
/// words that could not be seated, and the interlock score.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub grid: Grid,
    pub placements: Vec<Placement>,
    /// Words reported as non-fatal omissions, in processing order.
    pub omitted: Vec<String>,
    pub score: usize,
    pub status: BuildStatus,
}

/// Build a crossword layout from a prepared word list.
///
/// This never fails: an empty word list yields an empty grid, and words
/// that cannot be placed are reported in [`BuildResult::omitted`].
#[must_use]
pub fn build_puzzle(word_list: &WordList, config: &BuildConfig) -> BuildResult {
    let order = word_list.ordered_longest_first();
    debug!(
        "building {size}x{size} grid from {count} words ({strategy:?})",
        size = config.size,
        count = order.len(),
        strategy = config.strategy,
    );

    let result = match config.strategy {
        Strategy::Greedy => greedy_build(&word_list.words, &order, config),
        Strategy::Exhaustive => exhaustive_build(&word_list.words, &order, config),
    };

    info!(
        "placed {placed}/{total} words, score {score}",
        placed = result.placements.len(),
        total = order.len(),
        score = result.score,
    );
    for word in &result.omitted {
        warn!("could not place {word}");
    }

    result
}

/// A validated candidate placement with its ranking overlap count.
struct Candidate {
    row: usize,
    col: usize,
    orientation: Orientation,
    overlap: usize,
}

/// Simple helper to cap the number of commits an exhaustive search makes.
///
/// Without the cap, a dense word set can keep the backtracker exploring
/// near-identical layouts essentially forever.
struct AttemptBudget {
    limit: usize,
    spent: usize,
}

impl AttemptBudget {
    fn new(limit: usize) -> Self {
        Self { limit, spent: 0 }
    }

    fn spend(&mut self) {
        self.spent += 1;
    }

    fn exhausted(&self) -> bool {
        self.spent >= self.limit
    }
}

/// Best complete layout seen so far during an exhaustive search.
struct BestLayout {
    grid: Grid,
    placements: Vec<Placement>,
    omitted: Vec<String>,
    score: usize,
}

/// Per-build mutable state shared by both strategies.
///
/// The grid and the placement list are owned here exclusively; the
/// placement list is the source of truth when undoing (see `Grid::remove`).
struct Engine<'a> {
    words: &'a [PuzzleWord],
    config: &'a BuildConfig,
    grid: Grid,
    placed: Vec<Placement>,
    placed_word_ids: Vec<usize>,
    omitted: Vec<String>,
    rng: StdRng,
}

impl<'a> Engine<'a> {
    fn new(words: &'a [PuzzleWord], config: &'a BuildConfig) -> Engine<'a> {
        Engine {
            words,
            config,
            grid: Grid::new(config.size, config.forbid_touching),
            placed: Vec::new(),
            placed_word_ids: Vec::new(),
            omitted: Vec::new(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    fn centered_seed(&self, word: &str) -> Placement {
        let size = self.grid.size();
        Placement {
            word: word.to_string(),
            row: size / 2,
            col: (size - word.len()) / 2,
            orientation: Orientation::Horizontal,
        }
    }

    fn commit(&mut self, id: usize, placement: Placement) {
        self.grid.place(&placement);
        self.placed.push(placement);
        self.placed_word_ids.push(id);
    }

    /// Undo the most recent commit. The cleared cells are recomputed from
    /// the surviving placements, not blindly blanked.
    fn undo(&mut self) {
        if let Some(placement) = self.placed.pop() {
            self.placed_word_ids.pop();
            self.grid.remove(&placement, &self.placed);
        }
    }

    fn make_candidate(
        &self,
        word: &str,
        row: isize,
        col: isize,
        orientation: Orientation,
    ) -> Option<Candidate> {
        if !self.grid.can_place(word, row, col, orientation) {
            return None;
        }
        Some(Candidate {
            row: row as usize,
            col: col as usize,
            orientation,
            overlap: scorer::overlap_count(&self.grid, word, row, col, orientation),
        })
    }

    /// Candidates for `word` against every committed placement, from the
    /// precomputed pair index. Highest overlap first; duplicate origins
    /// (a word crossing several hosts at once) collapse to one entry.
    fn intersection_candidates(
        &self,
        id: usize,
        word: &str,
        index: &IntersectionIndex,
    ) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = Vec::new();
        for (host, &host_id) in self.placed.iter().zip(&self.placed_word_ids) {
            for &(i, j) in index.matches(id, host_id) {
                let (row, col, orientation) = crossing_candidate(host, i, j);
                candidates.extend(self.make_candidate(word, row, col, orientation));
            }
        }

        candidates.sort_by_key(|c| (c.row, c.col, c.orientation == Orientation::Vertical));
        candidates.dedup_by_key(|c| (c.row, c.col, c.orientation));
        candidates.sort_by_key(|c| Reverse(c.overlap));
        candidates
    }

    /// Candidates for `word` from the letter slot index: cost proportional
    /// to word length times bucket size, not to the number of placements.
    fn slot_candidates(&self, word: &str, slot_index: &SlotIndex) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = Vec::new();
        for (i, ch) in word.chars().enumerate() {
            for &slot in slot_index.slots_for(ch) {
                let (row, col, orientation) = slot_candidate(slot, i);
                candidates.extend(self.make_candidate(word, row, col, orientation));
            }
        }

        candidates.sort_by_key(|c| Reverse(c.overlap));
        candidates
    }

    /// Bounded random fallback for a word that cannot cross anything.
    ///
    /// Samples an orientation and an in-bounds origin up to the configured
    /// cap. The cap is the safety valve that keeps dense word sets from
    /// spinning forever.
    fn random_placement(&mut self, word: &str) -> Option<Placement> {
        let size = self.grid.size();
        let len = word.len();
        if len > size {
            return None;
        }

        for _ in 0..self.config.random_attempt_cap {
            let orientation = if self.rng.gen_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (size - 1, size - len),
                Orientation::Vertical => (size - len, size - 1),
            };
            let row = self.rng.gen_range(0..=max_row);
            let col = self.rng.gen_range(0..=max_col);
            if self
                .grid
                .can_place(word, row as isize, col as isize, orientation)
            {
                return Some(Placement {
                    word: word.to_string(),
                    row,
                    col,
                    orientation,
                });
            }
        }

        None
    }

    fn into_result(self, status: BuildStatus) -> BuildResult {
        let score = scorer::score(&self.grid);
        BuildResult {
            grid: self.grid,
            placements: self.placed,
            omitted: self.omitted,
            score,
            status,
        }
    }
}

/// Single forward pass: commit the locally best candidate per word, never
/// undo. Linear in the word count, at the cost of completeness.
fn greedy_build(words: &[PuzzleWord], order: &[usize], config: &BuildConfig) -> BuildResult {
    let mut engine = Engine::new(words, config);
    let mut slot_index = SlotIndex::default();

    for &id in order {
        let word = words[id].answer.as_str();
        if word.len() > engine.grid.size() {
            engine.omitted.push(word.to_string());
            continue;
        }

        if engine.placed.is_empty() {
            let seed = engine.centered_seed(word);
            slot_index.record(&seed);
            engine.commit(id, seed);
            continue;
        }

        let candidates = engine.slot_candidates(word, &slot_index);
        debug!("{word}: {} viable crossing candidates", candidates.len());

        let chosen = match candidates.into_iter().next() {
            Some(best) => Some(Placement {
                word: word.to_string(),
                row: best.row,
                col: best.col,
                orientation: best.orientation,
            }),
            None => engine.random_placement(word),
        };

        match chosen {
            Some(placement) => {
                slot_index.record(&placement);
                engine.commit(id, placement);
            }
            None => engine.omitted.push(word.to_string()),
        }
    }

    engine.into_result(BuildStatus::Complete)
}

/// Backtracking search with full undo, keeping the best complete layout.
///
/// If the budget runs out before even one complete layout exists (a very
/// small budget), the greedy strategy is run instead so the caller still
/// gets a usable grid.
fn exhaustive_build(words: &[PuzzleWord], order: &[usize], config: &BuildConfig) -> BuildResult {
    let index = IntersectionIndex::build(words);
    let mut engine = Engine::new(words, config);
    let mut budget = AttemptBudget::new(config.attempt_budget);
    let mut best: Option<BestLayout> = None;

    search(&mut engine, order, 0, &index, &mut budget, &mut best);

    match best {
        Some(layout) => {
            let status = if budget.exhausted() {
                BuildStatus::BudgetExhausted { attempts: budget.spent }
            } else {
                BuildStatus::Complete
            };
            BuildResult {
                grid: layout.grid,
                placements: layout.placements,
                omitted: layout.omitted,
                score: layout.score,
                status,
            }
        }
        None => {
            warn!(
                "attempt budget {} spent before any complete layout; falling back to greedy",
                config.attempt_budget
            );
            greedy_build(words, order, config)
        }
    }
}

/// One node of the exhaustive search: seat `order[pos]`, recurse over the
/// rest, undo. The base case snapshots the layout if it beats the best so
/// far, ranked by interlock score and then by number of placed words.
fn search(
    engine: &mut Engine<'_>,
    order: &[usize],
    pos: usize,
    index: &IntersectionIndex,
    budget: &mut AttemptBudget,
    best: &mut Option<BestLayout>,
) {
    if budget.exhausted() {
        return;
    }

    if pos == order.len() {
        let score = scorer::score(&engine.grid);
        let better = best
            .as_ref()
            .map_or(true, |b| (score, engine.placed.len()) > (b.score, b.placements.len()));
        if better {
            debug!(
                "new best layout: score {score}, {placed} placed",
                placed = engine.placed.len()
            );
            *best = Some(BestLayout {
                grid: engine.grid.clone(),
                placements: engine.placed.clone(),
                omitted: engine.omitted.clone(),
                score,
            });
        }
        return;
    }

    let words = engine.words;
    let id = order[pos];
    let word = words[id].answer.as_str();

    if word.len() > engine.grid.size() {
        engine.omitted.push(word.to_string());
        search(engine, order, pos + 1, index, budget, best);
        engine.omitted.pop();
        return;
    }

    if engine.placed.is_empty() {
        let seed = engine.centered_seed(word);
        budget.spend();
        engine.commit(id, seed);
        search(engine, order, pos + 1, index, budget, best);
        engine.undo();
        return;
    }

    let candidates = engine.intersection_candidates(id, word, index);

    if candidates.is_empty() {
        match engine.random_placement(word) {
            Some(placement) => {
                budget.spend();
                engine.commit(id, placement);
                search(engine, order, pos + 1, index, budget, best);
                engine.undo();
            }
            None => {
                debug!("{word}: no crossing and random fallback failed; trying as omission");
                engine.omitted.push(word.to_string());
                search(engine, order, pos + 1, index, budget, best);
                engine.omitted.pop();
            }
        }
        return;
    }

    for candidate in candidates {
        if budget.exhausted() {
            return;
        }
        budget.spend();
        let placement = Placement {
            word: word.to_string(),
            row: candidate.row,
            col: candidate.col,
            orientation: candidate.orientation,
        };
        engine.commit(id, placement);
        search(engine, order, pos + 1, index, budget, best);
        engine.undo();
    }
}
