//! Built-in seed patterns

use super::io::{parse_pattern, Pattern};
use anyhow::{Context, Result};
use std::path::Path;

/// Named patterns shipped with the crate, in `0`/`1` text form
pub const NAMED_PATTERNS: [(&str, &str); 5] = [
    ("glider", "010\n001\n111\n"),
    ("blinker", "111\n"),
    ("block", "11\n11\n"),
    ("beacon", "1100\n1100\n0011\n0011\n"),
    ("toad", "0111\n1110\n"),
];

/// Look up a built-in pattern by name (case-insensitive)
pub fn named(name: &str) -> Result<Pattern> {
    let (_, text) = NAMED_PATTERNS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .with_context(|| {
            let known: Vec<&str> = NAMED_PATTERNS.iter().map(|(n, _)| *n).collect();
            format!("Unknown pattern '{}'. Known patterns: {}", name, known.join(", "))
        })?;

    parse_pattern(text)
}

/// Write every built-in pattern into `output_dir` as `<name>.txt`
pub fn write_named_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for (name, text) in NAMED_PATTERNS {
        let path = dir.join(format!("{}.txt", name));
        std::fs::write(&path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::load_pattern_from_file;
    use tempfile::tempdir;

    #[test]
    fn test_all_named_patterns_parse() {
        for (name, _) in NAMED_PATTERNS {
            assert!(named(name).is_ok(), "{} should parse", name);
        }
        assert_eq!(named("glider").unwrap().live_cells().count(), 5);
        assert_eq!(named("BLOCK").unwrap().live_cells().count(), 4);
    }

    #[test]
    fn test_unknown_pattern_lists_names() {
        let err = named("spaceship").unwrap_err().to_string();
        assert!(err.contains("spaceship"));
        assert!(err.contains("glider"));
    }

    #[test]
    fn test_write_named_patterns() {
        let temp_dir = tempdir().unwrap();
        write_named_patterns(temp_dir.path()).unwrap();

        for (name, _) in NAMED_PATTERNS {
            assert!(temp_dir.path().join(format!("{}.txt", name)).exists());
        }

        let beacon = load_pattern_from_file(temp_dir.path().join("beacon.txt")).unwrap();
        assert_eq!(beacon.width, 4);
        assert_eq!(beacon.height, 4);
        assert_eq!(beacon.live_cells().count(), 8);
    }
}
