//! Command line front end for the Game of Life simulation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use conway_grid::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{load_pattern_from_file, patterns, Pattern},
    simulation::{run_setup, FrameTimer, SetupOutcome, Simulation},
    utils::{ColorOutput, GridFormatter},
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "conway_grid")]
#[command(about = "Conway's Game of Life on a bounded square grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure a grid and run the simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid size (overrides config; prompted for when there is no config)
        #[arg(short, long)]
        size: Option<usize>,

        /// Built-in pattern to seed the grid with
        #[arg(short, long, conflicts_with = "pattern_file")]
        pattern: Option<String>,

        /// Pattern file to seed the grid with
        #[arg(long)]
        pattern_file: Option<PathBuf>,

        /// Number of generations to run (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Generations per second, 0 for as fast as possible (overrides config)
        #[arg(long)]
        fps: Option<u32>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Read setup commands from stdin before running
        #[arg(short, long)]
        interactive: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create a default configuration and sample pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Print a pattern
    Show {
        /// Built-in pattern name
        #[arg(short, long, required_unless_present = "pattern_file")]
        pattern: Option<String>,

        /// Pattern file
        #[arg(long, conflicts_with = "pattern")]
        pattern_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config, size, pattern, pattern_file, generations, fps, format,
            interactive, verbose
        } => {
            let overrides = CliOverrides {
                size,
                generations,
                run_fps: fps,
                format,
            };
            run_command(config, overrides, pattern, pattern_file, interactive, verbose)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
        Commands::Show { pattern, pattern_file } => {
            show_command(pattern, pattern_file)
        }
    }
}

fn resolve_pattern(name: Option<String>, file: Option<PathBuf>) -> Result<Option<Pattern>> {
    match (name, file) {
        (Some(name), _) => patterns::named(&name).map(Some),
        (None, Some(path)) => load_pattern_from_file(&path).map(Some),
        (None, None) => Ok(None),
    }
}

/// Ask for the grid size until a positive integer is entered
fn prompt_grid_size<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<usize> {
    loop {
        write!(output, "What size grid would you like? [Ans]x[Ans]: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read grid size")? == 0 {
            anyhow::bail!("No grid size given");
        }

        match line.trim().parse::<usize>() {
            Ok(size) if size > 0 => return Ok(size),
            _ => writeln!(output, "Please enter a positive whole number.")?,
        }
    }
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    pattern: Option<String>,
    pattern_file: Option<PathBuf>,
    interactive: bool,
    verbose: bool,
) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        let mut settings = Settings::default();
        if overrides.size.is_none() {
            settings.grid.size = prompt_grid_size(io::stdin().lock(), io::stdout())?;
        }
        settings
    };
    settings.merge_with_cli(&overrides);

    if verbose {
        println!("Configuration:");
        println!("  Grid size: {}", settings.grid.size);
        println!("  Cell pixel size: {}", settings.grid.cell_pixel_size);
        println!("  Run fps: {}", settings.timing.run_fps);
        match settings.run.max_generations {
            Some(limit) => println!("  Max generations: {}", limit),
            None => println!("  Max generations: unlimited"),
        }
        println!("  Stop when empty: {}", settings.run.stop_when_empty);
        println!();
    }

    let mut simulation = Simulation::new(settings)
        .context("Failed to create simulation")?;

    if let Some(pattern) = resolve_pattern(pattern, pattern_file)? {
        let placed = simulation.seed(&pattern)?;
        if verbose {
            println!("{}", ColorOutput::info(&format!("Seeded {} live cell(s)", placed)));
        }
    }

    if interactive {
        println!("{}", ColorOutput::info("Enter commands to set up living cells:"));
        println!("  toggle ROW COL | click X Y | pattern NAME [ROW COL] | show | start | quit");

        let cell_pixel_size = simulation.settings().grid.cell_pixel_size;
        let mut redraw = FrameTimer::new(simulation.settings().timing.setup_fps);
        let outcome = run_setup(
            simulation.engine_mut(),
            io::stdin().lock(),
            cell_pixel_size,
            |engine| {
                redraw.wait();
                print!("{}", GridFormatter::format_grid_with_coords(engine));
            },
            |e| eprintln!("{}", ColorOutput::error(&format!("! {:#}", e))),
        )?;

        if outcome == SetupOutcome::Quit {
            println!("{}", ColorOutput::warning("Setup cancelled"));
            return Ok(());
        }
    }

    let format = simulation.settings().output.format;
    if format == OutputFormat::Text {
        println!("{}", ColorOutput::info("Running simulation. Press Ctrl-C to exit."));
        print!("{}", GridFormatter::format_frame(simulation.engine(), &simulation.snapshot(), false));
    }

    let summary = simulation.run(|snapshot, engine| {
        let mut stdout = io::stdout().lock();
        match format {
            OutputFormat::Text => write!(stdout, "{}", GridFormatter::format_frame(engine, snapshot, true))?,
            OutputFormat::Json => writeln!(stdout, "{}", snapshot.to_json()?)?,
        }
        stdout.flush()?;
        Ok(())
    })?;

    if format == OutputFormat::Text {
        println!("{}", ColorOutput::success(&summary.to_string()));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    patterns::write_named_patterns(&patterns_dir)
        .context("Failed to create sample patterns")?;
    println!("Created sample patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --pattern-file {}", patterns_dir.join("glider.txt").display());

    Ok(())
}

fn show_command(pattern: Option<String>, pattern_file: Option<PathBuf>) -> Result<()> {
    let pattern = resolve_pattern(pattern, pattern_file)?
        .context("No pattern given")?;

    println!("Pattern ({}x{}):", pattern.width, pattern.height);
    print!("{}", pattern.to_text());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "conway_grid",
            "run",
            "--size", "10",
            "--pattern", "glider",
            "--generations", "5",
            "--format", "json",
        ]);
        assert!(cli.is_ok());

        let conflicting = Cli::try_parse_from([
            "conway_grid", "run", "--pattern", "glider", "--pattern-file", "x.txt",
        ]);
        assert!(conflicting.is_err());

        assert!(Cli::try_parse_from(["conway_grid", "show"]).is_err());
    }

    #[test]
    fn test_prompt_grid_size_retries() {
        let mut output = Vec::new();
        let size = prompt_grid_size(Cursor::new("abc\n0\n 12 \n"), &mut output).unwrap();
        assert_eq!(size, 12);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("What size grid").count(), 3);

        assert!(prompt_grid_size(Cursor::new(""), Vec::new()).is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());

        let loaded = Settings::from_file(&temp_dir.path().join("config/default.yaml")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_resolve_pattern() {
        assert!(resolve_pattern(None, None).unwrap().is_none());
        assert!(resolve_pattern(Some("toad".into()), None).unwrap().is_some());
        assert!(resolve_pattern(Some("nope".into()), None).is_err());
    }
}
