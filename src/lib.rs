//! Conway's Game of Life on a fixed-size square grid
//!
//! The grid has hard edges: cells beyond the border are always dead. A
//! [`GridEngine`] owns the current generation; [`simulation`] drives it
//! through a setup phase (toggles) and a paced run phase (steps).

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{GridEngine, GridError};
pub use simulation::Simulation;
