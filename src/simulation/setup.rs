//! Setup phase: turning pointer positions and typed commands into toggles

use crate::game_of_life::patterns;
use crate::game_of_life::GridEngine;
use anyhow::{bail, Context, Result};
use std::io::BufRead;

/// Map a pointer position in pixels to the `(row, col)` of the cell under it.
///
/// `row = floor(pixel_y / cell_pixel_size)`, `col = floor(pixel_x / cell_pixel_size)`.
pub fn pixel_to_cell(pixel_x: f64, pixel_y: f64, cell_pixel_size: u32) -> Result<(usize, usize)> {
    if cell_pixel_size == 0 {
        bail!("Cell pixel size must be positive");
    }
    if !pixel_x.is_finite() || !pixel_y.is_finite() || pixel_x < 0.0 || pixel_y < 0.0 {
        bail!("Pointer position ({}, {}) is not on the grid", pixel_x, pixel_y);
    }

    let cell = f64::from(cell_pixel_size);
    Ok(((pixel_y / cell).floor() as usize, (pixel_x / cell).floor() as usize))
}

/// A single setup-phase command
#[derive(Debug, Clone, PartialEq)]
pub enum SetupCommand {
    Toggle { row: usize, col: usize },
    Click { x: f64, y: f64 },
    Pattern { name: String, at: Option<(usize, usize)> },
    Show,
    Start,
    Quit,
}

impl SetupCommand {
    /// Parse one line such as `toggle 3 4`, `click 35 12`, `pattern glider 1 1` or `start`.
    /// Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut args = line.split_whitespace();
        let Some(cmd) = args.next() else {
            return Ok(None);
        };

        let command = match cmd {
            "toggle" | "t" => {
                let row = args.next().context("missing row")?.parse()?;
                let col = args.next().context("missing col")?.parse()?;
                SetupCommand::Toggle { row, col }
            }
            "click" | "c" => {
                let x = args.next().context("missing x")?.parse()?;
                let y = args.next().context("missing y")?.parse()?;
                SetupCommand::Click { x, y }
            }
            "pattern" | "p" => {
                let name = args.next().context("missing pattern name")?.to_string();
                let at = match (args.next(), args.next()) {
                    (Some(row), Some(col)) => Some((row.parse()?, col.parse()?)),
                    (None, None) => None,
                    _ => bail!("pattern offset needs both row and col"),
                };
                SetupCommand::Pattern { name, at }
            }
            "show" => SetupCommand::Show,
            "start" | "run" => SetupCommand::Start,
            "quit" | "q" => SetupCommand::Quit,
            other => bail!("Unknown command '{}'", other),
        };

        if let Some(extra) = args.next() {
            bail!("Unexpected argument '{}'", extra);
        }

        Ok(Some(command))
    }
}

/// How the setup phase ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    Start,
    Quit,
}

/// Apply one command to the engine. Returns `Some` when the command ends setup.
pub fn apply_command(
    engine: &mut GridEngine,
    command: &SetupCommand,
    cell_pixel_size: u32,
) -> Result<Option<SetupOutcome>> {
    match command {
        SetupCommand::Toggle { row, col } => engine.toggle(*row, *col)?,
        SetupCommand::Click { x, y } => {
            let (row, col) = pixel_to_cell(*x, *y, cell_pixel_size)?;
            engine.toggle(row, col)?;
        }
        SetupCommand::Pattern { name, at } => {
            let pattern = patterns::named(name)?;
            match at {
                Some((row, col)) => pattern.place(engine, *row, *col)?,
                None => pattern.place_centered(engine)?,
            };
        }
        SetupCommand::Show => {}
        SetupCommand::Start => return Ok(Some(SetupOutcome::Start)),
        SetupCommand::Quit => return Ok(Some(SetupOutcome::Quit)),
    }
    Ok(None)
}

/// Read setup commands line by line until `start`, `quit` or end of input.
///
/// Bad commands are reported through `on_error` and skipped. `on_update` is
/// called after every command that was applied, so the caller can redraw.
/// End of input counts as `start`.
pub fn run_setup<R, U, E>(
    engine: &mut GridEngine,
    input: R,
    cell_pixel_size: u32,
    mut on_update: U,
    mut on_error: E,
) -> Result<SetupOutcome>
where
    R: BufRead,
    U: FnMut(&GridEngine),
    E: FnMut(&anyhow::Error),
{
    for line in input.lines() {
        let line = line.context("Failed to read setup input")?;

        let outcome = SetupCommand::parse(&line)
            .and_then(|command| match command {
                Some(command) => apply_command(engine, &command, cell_pixel_size),
                None => Ok(None),
            });

        match outcome {
            Ok(Some(done)) => return Ok(done),
            Ok(None) => on_update(engine),
            Err(e) => on_error(&e),
        }
    }

    Ok(SetupOutcome::Start)
}
