//! # CAVERN Cave Demo
//!
//! Generates one cave, prints it as ASCII, then times repeated generation.
//!
//! ## Usage
//!
//! ```bash
//! cave_demo --width 100 --height 450 --chance 45 --iterations 6 --seed 1 --runs 120
//! ```

use std::process;
use std::str::FromStr;
use std::time::{Duration, Instant};

use cavern::procedural::{CaveConfig, CaveGenerator, CaveSeed};
use cavern::render::render_default;

/// Command-line options. `None` means "not given on the command line".
#[derive(Debug, Default)]
struct Options {
    width: Option<usize>,
    height: Option<usize>,
    chance: Option<u32>,
    iterations: Option<usize>,
    seed: Option<u64>,
    random_seed: bool,
    config_path: Option<String>,
    runs: u32,
    render: bool,
}

fn print_help() {
    println!("Usage: cave_demo [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -w, --width <CELLS>        Cells per row (default: 100)");
    println!("  -H, --height <ROWS>        Number of rows (default: 450)");
    println!("  -c, --chance <PERCENT>     Initial wall chance, max 100 (default: 45)");
    println!("  -i, --iterations <NUM>     Smoothing iterations (default: 6)");
    println!("  -s, --seed <SEED>          Random seed (default: 1)");
    println!("      --random-seed          Seed from the system clock");
    println!("      --config <FILE>        Load parameters from a TOML file");
    println!("  -r, --runs <NUM>           Timed runs to average (default: 120)");
    println!("      --no-render            Skip the ASCII map");
    println!("  -h, --help                 Show this help");
}

/// Parses the value following `flag`, exiting with a message if it is
/// missing or malformed.
fn parse_value<T: FromStr>(flag: &str, value: Option<&String>) -> T {
    let Some(raw) = value else {
        eprintln!("Missing value for {flag}");
        process::exit(2);
    };
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid value for {flag}: {raw}");
        process::exit(2);
    })
}

fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options {
        runs: 120,
        render: true,
        ..Options::default()
    };

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--width" | "-w" => {
                options.width = Some(parse_value(&args[i], value));
                i += 1;
            }
            "--height" | "-H" => {
                options.height = Some(parse_value(&args[i], value));
                i += 1;
            }
            "--chance" | "-c" => {
                options.chance = Some(parse_value(&args[i], value));
                i += 1;
            }
            "--iterations" | "-i" => {
                options.iterations = Some(parse_value(&args[i], value));
                i += 1;
            }
            "--seed" | "-s" => {
                options.seed = Some(parse_value(&args[i], value));
                i += 1;
            }
            "--random-seed" => options.random_seed = true,
            "--config" => {
                options.config_path = Some(parse_value(&args[i], value));
                i += 1;
            }
            "--runs" | "-r" => {
                options.runs = parse_value(&args[i], value);
                i += 1;
            }
            "--no-render" => options.render = false,
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            other => {
                eprintln!("Ignoring unknown argument: {other}");
            }
        }
        i += 1;
    }

    options
}

/// Builds the configuration: file first (if any), then explicit flags on top.
fn build_config(options: &Options) -> Result<CaveConfig, String> {
    let mut config = match &options.config_path {
        Some(path) => CaveConfig::from_toml_file(path).map_err(|e| e.to_string())?,
        None => CaveConfig::new(100, 450)
            .with_alive_chance(45)
            .with_smoothing_iterations(6)
            .with_seed(CaveSeed::new(1)),
    };

    if let Some(width) = options.width {
        config.width = width;
    }
    if let Some(height) = options.height {
        config.height = height;
    }
    if let Some(chance) = options.chance {
        config.alive_chance_percent = chance;
    }
    if let Some(iterations) = options.iterations {
        config.smoothing_iterations = iterations;
    }
    if let Some(seed) = options.seed {
        config.seed = CaveSeed::new(seed);
    }
    if options.random_seed {
        config.seed = CaveSeed::from_clock();
    }

    Ok(config)
}

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         CAVERN CAVE DEMO                                         ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let options = parse_args();
    let config = match build_config(&options) {
        Ok(config) => config,
        Err(reason) => {
            eprintln!("Failed to load configuration: {reason}");
            process::exit(1);
        }
    };

    let generator = match CaveGenerator::new(config) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            process::exit(1);
        }
    };

    let config = generator.config();
    println!("┌─ CONFIGURATION ─────────────────────────────────────────────────┐");
    println!("│ Size:               {} x {}", config.width, config.height);
    println!("│ Alive Chance:       {}%", config.alive_chance_percent.min(100));
    println!("│ Smoothing:          {} iterations ({} passes)", config.smoothing_iterations, config.smoothing_passes());
    println!("│ Seed:               {}", config.seed.value());
    println!("│ Thresholds:         walls {} / floors {}", config.wall_threshold, config.floor_threshold);
    println!("│ Edge Policy:        {:?}", config.edge_policy);
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();

    let start = Instant::now();
    let cave = match generator.generate() {
        Ok(cave) => cave,
        Err(e) => {
            eprintln!("Generation failed: {e}");
            process::exit(1);
        }
    };
    let single = start.elapsed();

    if options.render {
        print!("{}", render_default(cave.grid()));
        println!();
    }

    let grid = cave.grid();
    println!("┌─ CAVE ──────────────────────────────────────────────────────────");
    println!("│ Walls:              {} of {}", grid.wall_count(), grid.size());
    println!("│ Wall Regions:       {}", cave.wall_regions().len());
    println!("│ Smoothing Changes:  {:?}", cave.stats().smoothing.changed_per_pass);
    println!("│ Single Run:         {} μs", single.as_micros());
    println!("└──────────────────────────────────────────────────────────────────");
    println!();

    if options.runs == 0 {
        return;
    }

    let mut total = Duration::ZERO;
    let mut min = Duration::MAX;
    let mut max = Duration::ZERO;
    for _ in 0..options.runs {
        let start = Instant::now();
        if let Err(e) = generator.generate() {
            eprintln!("Generation failed: {e}");
            process::exit(1);
        }
        let elapsed = start.elapsed();
        total += elapsed;
        min = min.min(elapsed);
        max = max.max(elapsed);
    }
    let average = total / options.runs;

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                    BENCHMARK                                     ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║ Runs:               {:>10}                                 ║", options.runs);
    println!("║ Average:            {:>10} μs                             ║", average.as_micros());
    println!("║ Min:                {:>10} μs                             ║", min.as_micros());
    println!("║ Max:                {:>10} μs                             ║", max.as_micros());
    println!("╚══════════════════════════════════════════════════════════════════╝");
}
