use super::{Board, Cell, Strategy};
use rand::Rng;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },
}

/// LifeEngine owns the board and applies the step rule.
///
/// It knows nothing about time or display: a host calls `step()` when it
/// wants a new generation and reads `live_cells()` to redraw.
pub struct LifeEngine {
    board: Board,
    /// Back buffer the next generation is written into before the swap
    scratch: Board,
    strategy: Strategy,
}

impl LifeEngine {
    /// Create an engine with an all-dead `rows x cols` board
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        let board = Board::new(rows, cols)?;
        debug!(rows, cols, "created life engine");

        Ok(Self {
            scratch: board.blank(),
            board,
            strategy: Strategy::default(),
        })
    }

    /// Board dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.board.dimensions()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        debug!(strategy = strategy.name(), "step strategy changed");
        self.strategy = strategy;
    }

    /// Flip the cell at `(x, y)`.
    /// Returns false and leaves the board untouched when the position is off the board.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let applied = self.board.toggle(x, y);
        if !applied {
            trace!(x, y, "ignored toggle outside the board");
        }
        applied
    }

    /// Paint the cell at `(x, y)`; same bounds behavior as `toggle`
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        self.board.set(x, y, cell)
    }

    /// Randomize the board from the thread-local RNG
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Randomize the board from the given source; a seeded RNG reproduces the board
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board.randomize_with(rng);
        debug!(population = self.board.population(), "randomized board");
    }

    /// Replace the board with an empty one
    pub fn clear(&mut self) {
        self.board = self.board.blank();
        debug!("cleared board");
    }

    /// Advance one generation.
    /// The next board is computed into the back buffer from the current one,
    /// then the two are swapped.
    pub fn step(&mut self) {
        match self.strategy {
            Strategy::Serial => self.board.evolve_into(&mut self.scratch),
            Strategy::Parallel => self.board.evolve_into_parallel(&mut self.scratch),
        }
        std::mem::swap(&mut self.board, &mut self.scratch);
        trace!(population = self.board.population(), "stepped");
    }

    /// Positions of live cells, row by row
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.board.live_cells()
    }

    /// Every cell tagged with its state
    pub fn cells(&self) -> Vec<(usize, usize, Cell)> {
        self.board.iter_cells().collect()
    }

    pub fn population(&self) -> usize {
        self.board.population()
    }
}
