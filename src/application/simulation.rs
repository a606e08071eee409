use std::time::Duration;

use tracing::debug;

use super::{ConfigError, HostConfig};
use crate::domain::LifeEngine;

/// What a renderer needs after each step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub generation: u64,
    pub live_cells: Vec<(usize, usize)>,
}

/// Simulation wraps the engine with host state: whether it is running,
/// how often it steps and how many generations have passed.
/// The engine itself only ever sees explicit calls.
pub struct Simulation {
    engine: LifeEngine,
    is_running: bool,
    generation: u64,
    interval: Duration,
    elapsed: Duration,
    pub last_step_time_ms: f32,
}

impl Simulation {
    pub fn new(engine: LifeEngine, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(Self {
            engine,
            is_running: false,
            generation: 0,
            interval,
            elapsed: Duration::ZERO,
            last_step_time_ms: 0.0,
        })
    }

    pub fn from_config(config: &HostConfig) -> Result<Self, ConfigError> {
        Self::new(config.build_engine()?, config.interval())
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut LifeEngine {
        &mut self.engine
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start stepping on `tick`. Calling it while running changes nothing.
    pub fn run(&mut self) {
        if !self.is_running {
            debug!(interval_ms = self.interval.as_millis() as u64, "simulation started");
            self.is_running = true;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Stop stepping on `tick`. Calling it while stopped changes nothing.
    pub fn stop(&mut self) {
        if self.is_running {
            debug!(generation = self.generation, "simulation stopped");
            self.is_running = false;
        }
    }

    pub fn toggle_running(&mut self) {
        if self.is_running { self.stop() } else { self.run() }
    }

    pub fn set_interval(&mut self, interval: Duration) -> Result<(), ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        debug!(interval_ms = interval.as_millis() as u64, "tick interval changed");
        self.interval = interval;
        Ok(())
    }

    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        self.engine.toggle(x, y)
    }

    /// Randomize the board and reset the generation counter
    pub fn randomize(&mut self) {
        self.engine.randomize();
        self.generation = 0;
    }

    /// Clear the board and reset the generation counter
    pub fn clear(&mut self) {
        self.engine.clear();
        self.generation = 0;
    }

    /// Advance one generation whether or not the simulation is running
    pub fn step(&mut self) -> Frame {
        let start = std::time::Instant::now();
        self.engine.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        self.frame()
    }

    /// Feed elapsed wall time. Steps once the interval has accumulated,
    /// then starts counting again from zero so steps never bunch up.
    pub fn tick(&mut self, delta: Duration) -> Option<Frame> {
        if !self.is_running {
            return None;
        }

        self.elapsed += delta;
        if self.elapsed < self.interval {
            return None;
        }

        let frame = self.step();
        self.elapsed = Duration::ZERO;
        Some(frame)
    }

    pub fn frame(&self) -> Frame {
        Frame {
            generation: self.generation,
            live_cells: self.engine.live_cells(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Strategy, presets};

    fn blinker_simulation() -> Simulation {
        let mut engine = LifeEngine::new(5, 5).unwrap();
        presets::blinker().place_on(&mut engine, 1, 1);
        Simulation::new(engine, Duration::from_millis(100)).unwrap()
    }

    #[test]
    fn test_zero_interval_rejected() {
        let engine = LifeEngine::new(5, 5).unwrap();
        assert!(matches!(
            Simulation::new(engine, Duration::ZERO),
            Err(ConfigError::ZeroInterval)
        ));
        let mut sim = blinker_simulation();
        assert_eq!(sim.set_interval(Duration::ZERO), Err(ConfigError::ZeroInterval));
        assert_eq!(sim.interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_tick_does_nothing_when_stopped() {
        let mut sim = blinker_simulation();
        assert_eq!(sim.tick(Duration::from_secs(10)), None);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut sim = blinker_simulation();
        sim.run();
        assert_eq!(sim.tick(Duration::from_millis(60)), None);
        let frame = sim.tick(Duration::from_millis(60)).unwrap();
        assert_eq!(frame.generation, 1);
        assert_eq!(frame.live_cells, vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_tick_does_not_catch_up() {
        let mut sim = blinker_simulation();
        sim.run();
        assert!(sim.tick(Duration::from_secs(5)).is_some());
        // The long delta was consumed by a single step
        assert_eq!(sim.tick(Duration::from_millis(1)), None);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_run_and_stop_are_idempotent() {
        let mut sim = blinker_simulation();
        sim.run();
        sim.tick(Duration::from_millis(50));
        sim.run();
        assert!(sim.is_running());
        // Second run must not reset the accumulated time
        assert!(sim.tick(Duration::from_millis(50)).is_some());

        sim.stop();
        sim.stop();
        assert!(!sim.is_running());
        sim.toggle_running();
        assert!(sim.is_running());
    }

    #[test]
    fn test_clear_and_randomize_reset_generation() {
        let mut sim = blinker_simulation();
        sim.step();
        sim.step();
        assert_eq!(sim.generation(), 2);

        sim.randomize();
        assert_eq!(sim.generation(), 0);
        sim.step();
        sim.clear();
        assert_eq!(sim.generation(), 0);
        assert!(sim.frame().live_cells.is_empty());
    }

    #[test]
    fn test_from_config() {
        let sim = Simulation::from_config(&HostConfig::default()).unwrap();
        assert_eq!(sim.engine().dimensions(), (37, 50));
        assert_eq!(sim.interval(), Duration::from_millis(100));
        assert!(!sim.is_running());
    }

    #[test]
    fn test_engine_mut_reaches_engine() {
        let mut sim = blinker_simulation();
        sim.engine_mut().set_strategy(Strategy::Parallel);
        assert_eq!(sim.engine().strategy(), Strategy::Parallel);
        assert_eq!(sim.step().live_cells, vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_toggle_passes_through() {
        let mut sim = blinker_simulation();
        assert!(sim.toggle(0, 0));
        assert!(!sim.toggle(5, 5));
        assert!(sim.frame().live_cells.contains(&(0, 0)));
    }
}
