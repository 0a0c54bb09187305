//! Integration tests for the pipemaze CLI.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::path::PathBuf;
use std::process::Command;

/// Get the path to the pipemaze binary from the workspace root.
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // Go up from pipemaze-cli to crates
    path.pop(); // Go up from crates to repo root

    // Try release first, then debug
    let release = path.join("target/release/pipemaze");
    if release.exists() {
        return release;
    }
    path.join("target/debug/pipemaze")
}

/// Get the path to a maze file under test_assets/.
fn asset_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // Go up from pipemaze-cli to crates
    path.pop(); // Go up from crates to repo root
    path.push("test_assets");
    path.push(name);
    path
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(binary_path())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn simple_maze_text_output() {
    let path = asset_path("simple.txt");
    let output = run(&[path.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Furthest tile distance: 4"), "got: {}", stdout);
    assert!(stdout.contains("Area enclosed by loop: 1"), "got: {}", stdout);
}

#[test]
fn junk_pipes_maze_text_output() {
    let path = asset_path("junk_pipes.txt");
    let output = run(&[path.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Furthest tile distance: 8"), "got: {}", stdout);
    assert!(stdout.contains("Area enclosed by loop: 1"), "got: {}", stdout);
}

#[test]
fn large_maze_text_output() {
    let path = asset_path("large.txt");
    let output = run(&[path.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Furthest tile distance: 23"), "got: {}", stdout);
    assert!(stdout.contains("Area enclosed by loop: 4"), "got: {}", stdout);
}

#[test]
fn json_output_parses() {
    let path = asset_path("large.txt");
    let output = run(&[path.to_str().unwrap(), "--json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");

    assert_eq!(report["furthest_distance"], 23);
    assert_eq!(report["enclosed_area"], 4);
    assert_eq!(report["loop_length"], 46);
    assert_eq!(report["loop_tiles"].as_array().unwrap().len(), 46);
    // First loop tile is Start.
    assert_eq!(report["loop_tiles"][0], serde_json::json!([1, 1]));
}

#[test]
fn two_starts_fails_with_error() {
    let path = asset_path("two_starts.txt");
    let output = run(&[path.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("start"), "got: {}", stderr);
}

#[test]
fn missing_file_fails_with_error() {
    let output = run(&["no_such_maze.txt"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no_such_maze.txt"), "got: {}", stderr);
}

#[test]
fn no_arguments_prints_usage() {
    let output = run(&[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "got: {}", stderr);
}
