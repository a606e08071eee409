use std::time::Duration;

use crate::domain::{EngineError, LifeEngine};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("tick interval must be at least one millisecond")]
    ZeroInterval,
    #[error("a {width_px}x{height_px} px area cannot hold a {cell_size_px} px cell")]
    BoardTooSmall {
        width_px: u32,
        height_px: u32,
        cell_size_px: u32,
    },
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Host-side sizing and cadence.
/// The board is as many whole cells as fit in the pixel area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub board_width_px: u32,
    pub board_height_px: u32,
    pub cell_size_px: u32,
    pub interval_ms: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            board_width_px: 800,
            board_height_px: 600,
            cell_size_px: 16,
            interval_ms: 100,
        }
    }
}

impl HostConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size_px == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        let (rows, cols) = self.board_dimensions();
        if rows == 0 || cols == 0 {
            return Err(ConfigError::BoardTooSmall {
                width_px: self.board_width_px,
                height_px: self.board_height_px,
                cell_size_px: self.cell_size_px,
            });
        }
        Ok(())
    }

    /// Board size as `(rows, cols)`; partial cells at the edges are dropped
    pub fn board_dimensions(&self) -> (usize, usize) {
        if self.cell_size_px == 0 {
            return (0, 0);
        }
        (
            (self.board_height_px / self.cell_size_px) as usize,
            (self.board_width_px / self.cell_size_px) as usize,
        )
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Validate and build an empty engine of the configured size
    pub fn build_engine(&self) -> Result<LifeEngine, ConfigError> {
        self.validate()?;
        let (rows, cols) = self.board_dimensions();
        Ok(LifeEngine::new(rows, cols)?)
    }
}
