use super::{Cell, LifeEngine};

/// Represents a pattern that can be placed on the board
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Stamp the pattern with its top-left corner at `(x, y)`.
    /// Cells that land off the board are skipped; returns how many were placed.
    pub fn place_on(&self, engine: &mut LifeEngine, x: usize, y: usize) -> usize {
        self.cells
            .iter()
            .filter(|&&(dx, dy)| {
                x.checked_add(dx)
                    .zip(y.checked_add(dy))
                    .is_some_and(|(px, py)| engine.set(px, py, Cell::Alive))
            })
            .count()
    }

    /// Absolute positions of the pattern when placed at `(x, y)`.
    /// Positions that would overflow `usize` are left out, as in `place_on`.
    pub fn cells_at(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter_map(|&(dx, dy)| x.checked_add(dx).zip(y.checked_add(dy)))
            .collect()
    }
}

/// Small classic patterns
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn live_set(engine: &LifeEngine) -> HashSet<(usize, usize)> {
        engine.live_cells().into_iter().collect()
    }

    #[test]
    fn test_pattern_bounds() {
        let beacon = presets::beacon();
        assert_eq!((beacon.width, beacon.height), (4, 4));
        assert_eq!((presets::blinker().width, presets::blinker().height), (3, 2));
    }

    #[test]
    fn test_period_two_oscillators() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let mut engine = LifeEngine::new(10, 10).unwrap();
            assert_eq!(pattern.place_on(&mut engine, 3, 3), pattern.cells.len());
            let start = live_set(&engine);

            engine.step();
            assert_ne!(live_set(&engine), start, "{} did not change", pattern.name);
            engine.step();
            assert_eq!(live_set(&engine), start, "{} is not period 2", pattern.name);
        }
    }

    #[test]
    fn test_block_is_still() {
        let mut engine = LifeEngine::new(6, 6).unwrap();
        presets::block().place_on(&mut engine, 2, 2);
        let start = live_set(&engine);
        engine.step();
        assert_eq!(live_set(&engine), start);
    }

    #[test]
    fn test_glider_translates() {
        let glider = presets::glider();
        let mut engine = LifeEngine::new(12, 12).unwrap();
        glider.place_on(&mut engine, 2, 2);

        for _ in 0..4 {
            engine.step();
        }
        let expected: HashSet<_> = glider.cells_at(3, 3).into_iter().collect();
        assert_eq!(live_set(&engine), expected);
    }

    #[test]
    fn test_place_clips_at_edge() {
        let mut engine = LifeEngine::new(3, 3).unwrap();
        // Only the leftmost cell of the blinker row lands on the board
        assert_eq!(presets::blinker().place_on(&mut engine, 2, 0), 1);
        assert_eq!(engine.live_cells(), vec![(2, 1)]);
    }

    #[test]
    fn test_cells_at_skips_overflow() {
        let blinker = presets::blinker();
        assert_eq!(blinker.cells_at(1, 1), vec![(1, 2), (2, 2), (3, 2)]);
        // Only dx == 0 fits when x is already at the limit
        assert_eq!(blinker.cells_at(usize::MAX, 0), vec![(usize::MAX, 1)]);
        assert!(blinker.cells_at(0, usize::MAX).is_empty());
    }

    #[test]
    fn test_all_patterns_have_unique_names() {
        let names: HashSet<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        assert_eq!(names.len(), presets::all_patterns().len());
    }
}
