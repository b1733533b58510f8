//! Setup and run phases that drive the grid engine

pub mod runner;
pub mod setup;

pub use runner::{FrameTimer, GenerationSnapshot, RunSummary, Simulation, StopReason};
pub use setup::{apply_command, pixel_to_cell, run_setup, SetupCommand, SetupOutcome};
