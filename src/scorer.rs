//! Ranking heuristics for grids and candidate placements.

use crate::grid::{Grid, Orientation};

/// How interlocked a grid is: the number of occupied cells with at least
/// two occupied orthogonal neighbors.
///
/// Used to rank complete layouts against each other. Per-candidate ordering
/// during the search uses the cheaper [`overlap_count`] instead.
#[must_use]
pub fn score(grid: &Grid) -> usize {
    grid.occupied_cells()
        .filter(|&(row, col, _)| grid.occupied_neighbors(row, col) >= 2)
        .count()
}

/// Letters of `word` that would land on an already-occupied cell holding the
/// same letter, i.e. the intersections this candidate would re-affirm.
///
/// The candidate must already have passed `Grid::can_place`; covered cells
/// are assumed in bounds.
#[must_use]
pub fn overlap_count(
    grid: &Grid,
    word: &str,
    row: isize,
    col: isize,
    orientation: Orientation,
) -> usize {
    let (dr, dc) = orientation.step();
    word.chars()
        .enumerate()
        .filter(|&(i, ch)| {
            let r = (row + (i * dr) as isize) as usize;
            let c = (col + (i * dc) as isize) as usize;
            grid.letter_at(r, c) == Some(ch)
        })
        .count()
}
