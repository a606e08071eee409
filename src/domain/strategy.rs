//! Strategy enum for selecting how a generation is computed.
//!
//! Both strategies produce identical boards; they only differ in
//! how the work is scheduled.

/// Available step strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Row by row on the calling thread
    #[default]
    Serial,
    /// Rows spread across the rayon thread pool
    Parallel,
}

impl Strategy {
    /// Get all available strategies
    pub fn all() -> Vec<Strategy> {
        vec![Strategy::Serial, Strategy::Parallel]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Serial => "Serial",
            Strategy::Parallel => "Parallel",
        }
    }

    /// Short description
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Serial => "Single thread, best for small boards",
            Strategy::Parallel => "One rayon task per row, pays off on large boards",
        }
    }
}
