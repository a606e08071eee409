// Domain layer - board, step rule, engine
pub mod domain;

// Application layer - host configuration and scheduling
pub mod application;

// Re-exports for convenience
pub use application::{ConfigError, Frame, HostConfig, Runner, RunnerError, Simulation};
pub use domain::{Board, Cell, EngineError, LifeEngine, Pattern, Strategy, presets};
