//! Plain-text seed patterns and their placement on a grid

use super::{GridEngine, GridError};
use anyhow::{Context, Result};
use itertools::iproduct;
use std::path::Path;

/// A rectangular block of cells used to seed a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
}

impl Pattern {
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Cell value at pattern-local coordinates
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[self.index(row, col)]
    }

    /// Pattern-local coordinates of every live cell
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        iproduct!(0..self.height, 0..self.width).filter(|&(row, col)| self.get(row, col))
    }

    /// Capture the current generation of an engine
    pub fn from_engine(engine: &GridEngine) -> Self {
        Self {
            width: engine.size(),
            height: engine.size(),
            cells: engine.rows().flatten().copied().collect(),
        }
    }

    /// Make every live pattern cell alive on the engine, offset by
    /// `(row_offset, col_offset)`. Cells already alive are left alone.
    /// Returns the number of cells toggled.
    pub fn place(
        &self,
        engine: &mut GridEngine,
        row_offset: usize,
        col_offset: usize,
    ) -> Result<usize, GridError> {
        let size = engine.size();
        let overflows = |offset: usize, extent: usize| {
            offset.checked_add(extent).map_or(true, |end| end > size)
        };
        if overflows(row_offset, self.height) || overflows(col_offset, self.width) {
            return Err(GridError::OutOfBounds {
                row: row_offset.saturating_add(self.height.saturating_sub(1)),
                col: col_offset.saturating_add(self.width.saturating_sub(1)),
                size,
            });
        }

        let mut toggled = 0;
        for (row, col) in self.live_cells() {
            let (r, c) = (row + row_offset, col + col_offset);
            if !engine.is_alive(r, c)? {
                engine.toggle(r, c)?;
                toggled += 1;
            }
        }
        Ok(toggled)
    }

    /// Place the pattern in the middle of the engine's grid
    pub fn place_centered(&self, engine: &mut GridEngine) -> Result<usize, GridError> {
        let size = engine.size();
        let row_offset = size.saturating_sub(self.height) / 2;
        let col_offset = size.saturating_sub(self.width) / 2;
        self.place(engine, row_offset, col_offset)
    }

    /// Render in the `0`/`1` text format
    pub fn to_text(&self) -> String {
        let mut result = String::with_capacity(self.height * (self.width + 1));
        for row in 0..self.height {
            for col in 0..self.width {
                result.push(if self.get(row, col) { '1' } else { '0' });
            }
            result.push('\n');
        }
        result
    }
}

/// Parse a pattern from its text form.
/// Each non-blank line is a row, with '1' for alive cells and '0' for dead cells.
pub fn parse_pattern(content: &str) -> Result<Pattern> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let height = lines.len();
    let width = lines[0].chars().count();
    let mut cells = Vec::with_capacity(height * width);

    for (row_idx, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                row_idx, len, width
            );
        }

        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => cells.push(false),
                '1' => cells.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch, row_idx, col_idx
                ),
            }
        }
    }

    Ok(Pattern { width, height, cells })
}

/// Load a pattern from a text file
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Pattern> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_pattern() {
        let pattern = parse_pattern("010\n101\n010\n").unwrap();

        assert_eq!(pattern.width, 3);
        assert_eq!(pattern.height, 3);
        assert_eq!(pattern.live_cells().collect::<Vec<_>>(), vec![(0, 1), (1, 0), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_parse_ignores_blank_lines_and_padding() {
        let pattern = parse_pattern("\n  011 \n\n  110\n").unwrap();
        assert_eq!(pattern.height, 2);
        assert_eq!(pattern.to_text(), "011\n110\n");
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_pattern("010\n1X1\n010\n").is_err());
        assert!(parse_pattern("010\n11\n010\n").is_err());
        assert!(parse_pattern("").is_err());
        assert!(parse_pattern("  \n\n").is_err());
    }

    #[test]
    fn test_place_only_toggles_dead_cells() {
        let pattern = parse_pattern("11\n11\n").unwrap();
        let mut engine = GridEngine::new(4).unwrap();
        engine.toggle(1, 1).unwrap();

        assert_eq!(pattern.place(&mut engine, 1, 1).unwrap(), 3);
        assert_eq!(engine.live_cells(), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_place_rejects_overflow_without_changes() {
        let pattern = parse_pattern("111\n").unwrap();
        let mut engine = GridEngine::new(3).unwrap();

        assert!(matches!(
            pattern.place(&mut engine, 0, 1),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(engine.is_empty());

        let too_big = parse_pattern("1111\n").unwrap();
        assert!(too_big.place_centered(&mut engine).is_err());
    }

    #[test]
    fn test_place_rejects_huge_offsets() {
        let pattern = parse_pattern("11\n11\n").unwrap();
        let mut engine = GridEngine::new(4).unwrap();

        assert_eq!(
            pattern.place(&mut engine, usize::MAX, 0),
            Err(GridError::OutOfBounds { row: usize::MAX, col: 1, size: 4 })
        );
        assert!(pattern.place(&mut engine, 0, usize::MAX).is_err());
        assert!(pattern.place(&mut engine, usize::MAX - 1, usize::MAX - 1).is_err());
        assert!(engine.is_empty());
    }

    #[test]
    fn test_place_centered() {
        let pattern = parse_pattern("1\n").unwrap();
        let mut engine = GridEngine::new(5).unwrap();
        pattern.place_centered(&mut engine).unwrap();
        assert_eq!(engine.live_cells(), vec![(2, 2)]);
    }

    #[test]
    fn test_from_engine() {
        let mut engine = GridEngine::new(3).unwrap();
        engine.toggle(0, 2).unwrap();
        let captured = Pattern::from_engine(&engine);
        assert_eq!(captured.to_text(), "001\n000\n000\n");
    }

    #[test]
    fn test_load_pattern_from_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("seed.txt");
        std::fs::write(&file_path, "101\n010\n").unwrap();

        let pattern = load_pattern_from_file(&file_path).unwrap();
        assert_eq!(pattern.width, 3);
        assert_eq!(pattern.height, 2);
        assert_eq!(pattern.live_cells().count(), 3);

        let missing = load_pattern_from_file(temp_dir.path().join("missing.txt"));
        assert!(missing.unwrap_err().to_string().contains("missing.txt"));
    }
}
