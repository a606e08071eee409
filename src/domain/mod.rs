mod board;
mod cell;
mod engine;
mod patterns;
mod strategy;

pub use board::Board;
pub use cell::Cell;
pub use engine::{EngineError, LifeEngine};
pub use patterns::{Pattern, presets};
pub use strategy::Strategy;
