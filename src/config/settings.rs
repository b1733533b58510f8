//! Configuration settings for the Game of Life simulation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub timing: TimingConfig,
    pub run: RunConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side length of the square grid
    pub size: usize,
    /// Width and height of one cell on screen, used to map clicks to cells
    pub cell_pixel_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Refreshes per second while the grid is being configured
    pub setup_fps: u32,
    /// Generations per second while the simulation runs; 0 runs unpaced
    pub run_fps: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Stop after this many generations; `None` runs until interrupted
    pub max_generations: Option<u64>,
    /// Stop early once every cell is dead
    pub stop_when_empty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Redraw the grid in the terminal every generation
    Text,
    /// One JSON snapshot per generation
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                size: 20,
                cell_pixel_size: 10,
            },
            timing: TimingConfig {
                setup_fps: 10,
                run_fps: 5,
            },
            run: RunConfig {
                max_generations: Some(100),
                stop_when_empty: true,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.size == 0 {
            anyhow::bail!("Grid size must be positive");
        }

        if self.grid.cell_pixel_size == 0 {
            anyhow::bail!("Cell pixel size must be positive");
        }

        if self.run.max_generations == Some(0) {
            anyhow::bail!("Maximum generations must be positive when set");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(size) = cli_overrides.size {
            self.grid.size = size;
        }
        if let Some(generations) = cli_overrides.generations {
            self.run.max_generations = Some(generations);
        }
        if let Some(fps) = cli_overrides.run_fps {
            self.timing.run_fps = fps;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub size: Option<usize>,
    pub generations: Option<u64>,
    pub run_fps: Option<u32>,
    pub format: Option<OutputFormat>,
}
