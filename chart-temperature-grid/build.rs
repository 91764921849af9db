//! Build script for chart-temperature-grid.
//!
//! Copies the daily temperature CSV to OUT_DIR so it can be embedded via
//! `include_str!` at compile time. When the fixture is missing, an empty
//! placeholder is written and the app fetches `temperatures.csv.gz` at runtime.

use std::env;
use std::fs;
use std::path::Path;

const FIXTURE: &str = "../fixtures/temperatures.csv";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let dest = Path::new(&out_dir).join("temperatures.csv");

    let src = Path::new(FIXTURE);
    if src.exists() {
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", FIXTURE, dest.display(), e);
        });
    } else {
        fs::write(&dest, "").unwrap_or_else(|e| {
            panic!("Failed to write placeholder {}: {}", dest.display(), e);
        });
        println!(
            "cargo:warning=Fixture file {} not found, using empty placeholder",
            FIXTURE
        );
    }

    println!("cargo:rerun-if-changed={}", FIXTURE);
    println!("cargo:rerun-if-changed=build.rs");
}
