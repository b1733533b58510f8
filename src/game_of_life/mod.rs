//! Game of Life core functionality

pub mod error;
pub mod grid;
pub mod rules;
pub mod io;
pub mod patterns;

pub use error::GridError;
pub use grid::GridEngine;
pub use rules::GameOfLifeRules;
pub use io::{load_pattern_from_file, parse_pattern, Pattern};
