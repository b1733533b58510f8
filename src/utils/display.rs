//! Display and output formatting utilities

use crate::game_of_life::GridEngine;
use crate::simulation::GenerationSnapshot;

/// Moves the cursor home and clears the terminal
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Format grids for the terminal
pub struct GridFormatter;

impl GridFormatter {
    /// One character per cell: alive is lit, dead is dark
    pub fn format_grid_compact(grid: &GridEngine) -> String {
        grid.to_string()
    }

    /// Format a grid with row and column numbers
    pub fn format_grid_with_coords(grid: &GridEngine) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..grid.size() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for (row, cells) in grid.rows().enumerate() {
            output.push_str(&format!("{:2} ", row));
            for &cell in cells {
                output.push_str(if cell { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// A full frame for the run loop: status line plus the grid
    pub fn format_frame(grid: &GridEngine, snapshot: &GenerationSnapshot, clear: bool) -> String {
        let mut output = String::new();
        if clear && ColorOutput::supports_color() {
            output.push_str(CLEAR_SCREEN);
        }
        output.push_str(&format!(
            "Generation {} | Living: {}\n",
            snapshot.generation, snapshot.population
        ));
        output.push_str(&Self::format_grid_compact(grid));
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    pub fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
