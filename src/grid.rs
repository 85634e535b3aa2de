//! The letter surface and placement legality rules.
//!
//! A [`Grid`] is a square matrix of cells, each either empty or holding a
//! single letter. All placement legality lives here: bounds checks, conflict
//! checks against already-written letters, and the optional strict adjacency
//! rule that forbids unintended touching between parallel runs.
//!
//! Candidate origins are proposed as `(isize, isize)` because intersection
//! arithmetic can land above or left of the grid; [`Grid::can_place`] treats
//! any negative coordinate as out of bounds. A [`Placement`] is only
//! constructed once a candidate has passed `can_place`, so its coordinates
//! are plain `usize`.

use serde::Serialize;

/// Lower bound of the sane grid-size range enforced at the caller boundary.
pub const MIN_GRID_SIZE: usize = 9;
/// Upper bound of the sane grid-size range enforced at the caller boundary.
pub const MAX_GRID_SIZE: usize = 25;

/// Clamp a requested grid size into the supported range.
///
/// The engine itself accepts any positive size (small grids are useful in
/// tests); this helper is for callers taking sizes from untrusted input,
/// which clamp rather than fail.
#[must_use]
pub fn clamp_grid_size(requested: usize) -> usize {
    requested.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

/// One cell of the grid: empty, or bearing exactly one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Letter(char),
}

impl Cell {
    /// The letter in this cell, if any.
    #[must_use]
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Letter(ch) => Some(ch),
        }
    }

    #[must_use]
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Letter(_))
    }
}

/// Direction a placed word runs in.
///
/// Horizontal advances the column; Vertical advances the row. Two words can
/// only intersect when they run perpendicular to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Per-letter step as `(row delta, col delta)`.
    #[must_use]
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    #[must_use]
    pub fn perpendicular(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A committed assignment of a word to a grid origin and orientation.
///
/// Invariant: every covered cell is in bounds and holds exactly the word's
/// letter at that offset. The engine guarantees this by only constructing
/// placements from candidates that passed [`Grid::can_place`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// The placed word, already normalized to uppercase.
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    /// Iterate the covered cells as `(row, col, letter)` in word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let (dr, dc) = self.orientation.step();
        self.word
            .chars()
            .enumerate()
            .map(move |(i, ch)| (self.row + i * dr, self.col + i * dc, ch))
    }

    /// The letter this placement writes at `(row, col)`, or `None` if the
    /// placement does not cover that cell.
    #[must_use]
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        let offset = match self.orientation {
            Orientation::Horizontal => {
                if row != self.row || col < self.col {
                    return None;
                }
                col - self.col
            }
            Orientation::Vertical => {
                if col != self.col || row < self.row {
                    return None;
                }
                row - self.row
            }
        };
        self.word.chars().nth(offset)
    }
}

/// The size×size cell surface, fixed for the lifetime of one build.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    forbid_touching: bool,
}

impl Grid {
    /// Create an all-empty grid. `forbid_touching` enables the strict
    /// adjacency mode (see [`Grid::can_place`]).
    #[must_use]
    pub fn new(size: usize, forbid_touching: bool) -> Grid {
        Grid {
            size,
            cells: vec![Cell::Empty; size * size],
            forbid_touching,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// The letter at `(row, col)`, or `None` for an empty cell.
    #[must_use]
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.get(row, col).letter()
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let i = self.index(row, col);
        self.cells[i] = cell;
    }

    /// Whether `word` fits at the candidate origin without conflicts.
    ///
    /// Fails if any covered cell falls outside `[0, size)` on either axis, or
    /// if an occupied covered cell holds a letter other than the one the word
    /// needs there. A cell already holding the matching letter is fine: that
    /// is what an intersection looks like.
    ///
    /// With `forbid_touching` enabled, additionally fails if any orthogonal
    /// neighbor of a covered cell is occupied by a letter different from the
    /// one the covered cell would hold, unless the covered cell is itself an
    /// existing matching letter (the crossing point of a perpendicular run).
    #[must_use]
    pub fn can_place(
        &self,
        word: &str,
        row: isize,
        col: isize,
        orientation: Orientation,
    ) -> bool {
        let (dr, dc) = orientation.step();
        let size = self.size as isize;

        for (i, ch) in word.chars().enumerate() {
            let r = row + (i * dr) as isize;
            let c = col + (i * dc) as isize;
            if r < 0 || r >= size || c < 0 || c >= size {
                return false;
            }
            let (r, c) = (r as usize, c as usize);
            let current = self.get(r, c);
            if let Some(existing) = current.letter() {
                if existing != ch {
                    return false;
                }
            }

            if self.forbid_touching && !self.neighbors_allow(r, c, ch, current) {
                return false;
            }
        }

        true
    }

    /// Strict adjacency rule for one covered cell: an occupied neighbor
    /// bearing a different letter is only tolerated when the covered cell is
    /// already the matching crossing letter.
    fn neighbors_allow(&self, row: usize, col: usize, ch: char, current: Cell) -> bool {
        const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        for (dr, dc) in ORTHOGONAL {
            let nr = row as isize + dr;
            let nc = col as isize + dc;
            if nr < 0 || nr >= self.size as isize || nc < 0 || nc >= self.size as isize {
                continue;
            }
            if let Some(neighbor) = self.letter_at(nr as usize, nc as usize) {
                if neighbor != ch && current.letter() != Some(ch) {
                    return false;
                }
            }
        }
        true
    }

    /// Write every letter of the placement into its covered cell.
    ///
    /// Cells transition `Empty -> Letter`; a cell already holding the same
    /// letter stays put (an intersection being re-affirmed).
    pub fn place(&mut self, placement: &Placement) {
        for (row, col, ch) in placement.cells() {
            debug_assert!(
                self.letter_at(row, col).is_none() || self.letter_at(row, col) == Some(ch),
                "place() on a conflicting cell at ({row}, {col})"
            );
            self.set(row, col, Cell::Letter(ch));
        }
    }

    /// Undo a placement, recomputing shared cells from the survivors.
    ///
    /// A cell covered by `placement` is cleared only if no placement in
    /// `survivors` also covers it; otherwise it is rewritten from the
    /// surviving placement. Blindly clearing would corrupt intersections, so
    /// the surviving placement set is the source of truth here.
    pub fn remove(&mut self, placement: &Placement, survivors: &[Placement]) {
        for (row, col, _) in placement.cells() {
            let kept = survivors
                .iter()
                .find_map(|other| other.letter_at(row, col));
            self.set(row, col, kept.map_or(Cell::Empty, Cell::Letter));
        }
    }

    /// Iterate all occupied cells as `(row, col, letter)` in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.letter()
                .map(|ch| (i / self.size, i % self.size, ch))
        })
    }

    /// Number of occupied orthogonal neighbors of `(row, col)`.
    #[must_use]
    pub fn occupied_neighbors(&self, row: usize, col: usize) -> usize {
        const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        ORTHOGONAL
            .iter()
            .filter(|(dr, dc)| {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                nr >= 0
                    && nr < self.size as isize
                    && nc >= 0
                    && nc < self.size as isize
                    && self.get(nr as usize, nc as usize).is_occupied()
            })
            .count()
    }
}
