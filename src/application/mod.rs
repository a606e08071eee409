mod config;
mod runner;
mod simulation;

pub use config::{ConfigError, HostConfig};
pub use runner::{Runner, RunnerError};
pub use simulation::{Frame, Simulation};
