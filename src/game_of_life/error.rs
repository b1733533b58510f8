//! Errors raised by the grid engine

use thiserror::Error;

/// Caller errors reported by [`GridEngine`](super::GridEngine)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid size {size}: must be at least 1 and size*size must fit in usize")]
    InvalidSize { size: usize },

    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}
