use super::{Cell, EngineError};
use rand::Rng;
use rayon::prelude::*;

/// Board holds the 2D grid of cells in row-major order.
/// Coordinates are `(x, y)`: `x` is the column, `y` the row.
/// Anything outside the board reads as dead; there is no wraparound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new board with all cells dead.
    /// Fails if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::EmptyBoard { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// An all-dead board with the same dimensions
    pub fn blank(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: vec![Cell::Dead; self.cells.len()],
        }
    }

    /// Board dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Get cell at position, `None` when out of range
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position. Returns false if the position is off the board.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let idx = self.get_index(x, y);
        self.cells[idx] = cell;
        true
    }

    /// Flip cell at position. Returns false if the position is off the board.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let idx = self.get_index(x, y);
        self.cells[idx] = self.cells[idx].toggle();
        true
    }

    /// Count live cells among the 8 neighbors; off-board neighbors are dead
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dy| (-1isize..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?)))
            .filter_map(|(nx, ny)| self.get(nx, ny))
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_state(&self, x: usize, y: usize) -> Cell {
        self.cells[self.get_index(x, y)].evolve(self.count_live_neighbors(x, y))
    }

    /// Write the next generation into `next`, reading only from `self`
    pub fn evolve_into(&self, next: &mut Board) {
        debug_assert_eq!(self.dimensions(), next.dimensions());

        next.cells
            .chunks_mut(self.cols)
            .enumerate()
            .for_each(|(y, row)| {
                row.iter_mut()
                    .enumerate()
                    .for_each(|(x, cell)| *cell = self.next_state(x, y));
            });
    }

    /// Parallel variant of `evolve_into`, one rayon task per row.
    /// Produces exactly the same board.
    pub fn evolve_into_parallel(&self, next: &mut Board) {
        debug_assert_eq!(self.dimensions(), next.dimensions());

        next.cells
            .par_chunks_mut(self.cols)
            .enumerate()
            .for_each(|(y, row)| {
                row.iter_mut()
                    .enumerate()
                    .for_each(|(x, cell)| *cell = self.next_state(x, y));
            });
    }

    /// Set every cell alive with probability 0.5
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(0.5)));
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx % cols, idx / cols, cell))
    }

    /// Positions of live cells, row by row
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}
