//! Square Game of Life grid and its generational step

use super::error::GridError;
use super::rules::GameOfLifeRules;
use itertools::iproduct;
use std::fmt;

/// Offsets of the Moore neighborhood, excluding the cell itself
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Owns the current generation of an `N x N` Game of Life grid.
///
/// Edges are hard boundaries: cells outside the grid never count as alive.
/// The matrix is only changed through [`toggle`](Self::toggle) and
/// [`step`](Self::step), and `step` swaps in a fully computed generation.
#[derive(Debug, Clone)]
pub struct GridEngine {
    size: usize,
    cells: Vec<bool>,
    /// Buffer reused by `step` to hold the next generation
    scratch: Vec<bool>,
    generation: u64,
}

impl GridEngine {
    /// Create a `size x size` grid with every cell dead
    pub fn new(size: usize) -> Result<Self, GridError> {
        let cell_count = match size.checked_mul(size) {
            Some(count) if count > 0 => count,
            _ => return Err(GridError::InvalidSize { size }),
        };

        Ok(Self {
            size,
            cells: vec![false; cell_count],
            scratch: Vec::with_capacity(cell_count),
            generation: 0,
        })
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of generations advanced since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.size || col >= self.size {
            return Err(GridError::OutOfBounds { row, col, size: self.size });
        }
        Ok(self.index(row, col))
    }

    /// Current state of a cell
    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let idx = self.check_bounds(row, col)?;
        Ok(self.cells[idx])
    }

    /// Flip a cell between alive and dead
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(())
    }

    /// Neighbor lookup: anything off the grid is dead
    fn neighbor_alive(&self, row: usize, col: usize, dr: isize, dc: isize) -> bool {
        match (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
            (Some(r), Some(c)) if r < self.size && c < self.size => self.cells[self.index(r, c)],
            _ => false,
        }
    }

    /// Count living cells among the eight surrounding `(row, col)`
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let count = NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.neighbor_alive(row, col, dr, dc))
            .count() as u8;
        debug_assert!(GameOfLifeRules::is_valid_neighbor_count(count));
        count
    }

    /// State the cell will have in the next generation
    pub fn next_cell_state(&self, row: usize, col: usize) -> bool {
        let current = self.neighbor_alive(row, col, 0, 0);
        GameOfLifeRules::should_be_alive(current, self.count_live_neighbors(row, col))
    }

    /// Advance the whole grid by one generation
    pub fn step(&mut self) {
        let mut next = std::mem::take(&mut self.scratch);
        next.clear();
        next.extend(
            iproduct!(0..self.size, 0..self.size).map(|(row, col)| self.next_cell_state(row, col)),
        );

        self.scratch = std::mem::replace(&mut self.cells, next);
        self.generation += 1;
    }

    /// Number of living cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// True when no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Coordinates of every living cell, row-major
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.size, 0..self.size)
            .filter(|&(row, col)| self.cells[self.index(row, col)])
            .collect()
    }

    /// Rows of the current generation, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.size)
    }
}

/// Engines are equal when they hold the same matrix, whatever their generation
impl PartialEq for GridEngine {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for GridEngine {}

impl fmt::Display for GridEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", if cell { '█' } else { '·' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
