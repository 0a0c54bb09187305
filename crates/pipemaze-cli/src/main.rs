//! pipemaze - CLI for pipe-grid loop analysis
//!
//! Usage:
//!   pipemaze <maze_file>          Analyze a maze file
//!   pipemaze -                    Read the maze from stdin
//!   pipemaze <maze_file> --json   Emit the result as JSON

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use serde::Serialize;

use pipemaze::{Solution, solve};

/// Output format for the analysis result.
#[derive(Clone, Copy, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON shape of the analysis result. Owned by the CLI so the core crate
/// stays serde-free.
#[derive(Serialize)]
struct Report {
    furthest_distance: u32,
    enclosed_area: u64,
    loop_length: usize,
    loop_tiles: Vec<[usize; 2]>,
}

impl Report {
    fn from_solution(solution: &Solution) -> Self {
        Report {
            furthest_distance: solution.furthest_distance,
            enclosed_area: solution.enclosed_area,
            loop_length: solution.loop_len(),
            loop_tiles: solution
                .tile_loop
                .vertices()
                .iter()
                .map(|coord| [coord.x, coord.y])
                .collect(),
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <maze_file | -> [--json]", program);
    eprintln!();
    eprintln!("Reads a pipe maze (symbols . | - L J F 7 S, one row per line),");
    eprintln!("finds the loop through S, and prints the furthest-tile distance");
    eprintln!("and the number of tiles the loop encloses.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json    Emit the result as JSON (includes loop tiles)");
}

fn read_rows(source: &str) -> io::Result<Vec<String>> {
    let text = if source == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(source)?
    };

    // Ignore a trailing newline; blank lines elsewhere are real (and will
    // fail grid construction as ragged rows).
    Ok(text.lines().map(str::to_string).collect())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut source: Option<String> = None;
    let mut format = OutputFormat::Text;

    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => format = OutputFormat::Json,
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            other => {
                if source.is_some() {
                    eprintln!("Unexpected argument: {}", other);
                    print_usage(&args[0]);
                    process::exit(2);
                }
                source = Some(other.to_string());
            }
        }
    }

    let Some(source) = source else {
        print_usage(&args[0]);
        process::exit(2);
    };

    let rows = match read_rows(&source) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Error reading {}: {}", source, e);
            process::exit(1);
        }
    };
    log::debug!("read {} rows from {}", rows.len(), source);

    let solution = match solve(&rows) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    log::debug!(
        "loop closed with {} tiles, furthest {}",
        solution.loop_len(),
        solution.furthest_distance
    );

    match format {
        OutputFormat::Text => {
            println!("Furthest tile distance: {}", solution.furthest_distance);
            println!("Area enclosed by loop: {}", solution.enclosed_area);
        }
        OutputFormat::Json => {
            let report = Report::from_solution(&solution);
            // Serialization of a plain struct cannot fail.
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error encoding JSON: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
