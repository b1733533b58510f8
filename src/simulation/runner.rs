//! Run phase: paced stepping and per-generation snapshots

use crate::config::Settings;
use crate::game_of_life::{GridEngine, Pattern};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// State of the grid after a generation, for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSnapshot {
    pub generation: u64,
    pub population: usize,
    pub live_cells: Vec<(usize, usize)>,
}

impl GenerationSnapshot {
    pub fn capture(engine: &GridEngine) -> Self {
        Self {
            generation: engine.generation(),
            population: engine.population(),
            live_cells: engine.live_cells(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    GenerationLimit,
    Extinct,
}

/// Outcome of [`Simulation::run`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub generations: u64,
    pub final_population: usize,
    pub stop_reason: StopReason,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.stop_reason {
            StopReason::GenerationLimit => "generation limit reached",
            StopReason::Extinct => "every cell died",
        };
        write!(
            f,
            "Stopped after {} generation(s), {} live cell(s): {}",
            self.generations, self.final_population, reason
        )
    }
}

/// Keeps a loop at a fixed number of frames per second
#[derive(Debug)]
pub struct FrameTimer {
    frame: Option<Duration>,
    last: Option<Instant>,
}

impl FrameTimer {
    /// `fps == 0` disables pacing
    pub fn new(fps: u32) -> Self {
        let frame = (fps > 0).then(|| Duration::from_nanos(1_000_000_000 / u64::from(fps)));
        Self { frame, last: None }
    }

    pub fn frame_duration(&self) -> Option<Duration> {
        self.frame
    }

    /// Sleep out the rest of the current frame
    pub fn wait(&mut self) {
        if let (Some(frame), Some(last)) = (self.frame, self.last) {
            let elapsed = last.elapsed();
            if frame > elapsed {
                spin_sleep::sleep(frame - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Drives a [`GridEngine`] through its run phase
pub struct Simulation {
    engine: GridEngine,
    settings: Settings,
}

impl Simulation {
    /// Create a simulation with an empty grid sized from the settings
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate().context("Invalid simulation settings")?;
        let engine = GridEngine::new(settings.grid.size)?;
        Ok(Self { engine, settings })
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    /// Mutable access for the setup phase
    pub fn engine_mut(&mut self) -> &mut GridEngine {
        &mut self.engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Seed the grid with a pattern placed in the middle
    pub fn seed(&mut self, pattern: &Pattern) -> Result<usize> {
        pattern
            .place_centered(&mut self.engine)
            .context("Pattern does not fit on the grid")
    }

    pub fn snapshot(&self) -> GenerationSnapshot {
        GenerationSnapshot::capture(&self.engine)
    }

    /// Advance one generation
    pub fn tick(&mut self) -> GenerationSnapshot {
        self.engine.step();
        self.snapshot()
    }

    fn stop_reason(&self) -> Option<StopReason> {
        if self.settings.run.stop_when_empty && self.engine.is_empty() {
            return Some(StopReason::Extinct);
        }
        match self.settings.run.max_generations {
            Some(limit) if self.engine.generation() >= limit => Some(StopReason::GenerationLimit),
            _ => None,
        }
    }

    /// Step until a stop condition holds, calling `observer` after every
    /// generation. With no generation limit and `stop_when_empty` off this
    /// only returns when the observer fails.
    pub fn run<F>(&mut self, mut observer: F) -> Result<RunSummary>
    where
        F: FnMut(&GenerationSnapshot, &GridEngine) -> Result<()>,
    {
        let mut timer = FrameTimer::new(self.settings.timing.run_fps);

        let stop_reason = loop {
            if let Some(reason) = self.stop_reason() {
                break reason;
            }
            timer.wait();
            let snapshot = self.tick();
            observer(&snapshot, &self.engine)?;
        };

        Ok(RunSummary {
            generations: self.engine.generation(),
            final_population: self.engine.population(),
            stop_reason,
        })
    }
}
