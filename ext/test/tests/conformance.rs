//! Conformance tests that run YAML fixtures against the selection engine
//!
//! Run with: cargo test -p finer-test --test conformance --features finer-test/fixtures
//!
//! Note: This test file requires the `fixtures` feature to be enabled.

#![cfg(feature = "fixtures")]

use finer_test::fixture::Fixture;
use std::fs;
use std::path::{Path, PathBuf};

/// The fixtures directory shipped with this crate.
fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and run all fixtures in a directory.
fn run_fixtures_in_dir(dir: &Path) {
    if !dir.exists() {
        panic!("Fixtures directory does not exist: {}", dir.display());
    }

    for entry in fs::read_dir(dir).expect("read dir") {
        let entry = entry.expect("dir entry");
        let path = entry.path();

        if path
            .extension()
            .is_some_and(|e| e == "yaml" || e == "yml")
        {
            println!("Running fixture: {}", path.display());

            let yaml = fs::read_to_string(&path).expect("read yaml");

            // Parse potentially multiple fixtures (separated by ---)
            let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
                panic!("Failed to parse {}: {}", path.display(), e);
            });

            for fixture in fixtures {
                println!("  Running: {}", fixture.name);
                fixture.run_and_assert();
            }
        }
    }
}

#[test]
fn test_selection_scenarios() {
    run_fixtures_in_dir(&fixtures_dir().join("01_scenarios"));
}

#[test]
fn test_tie_breaks() {
    run_fixtures_in_dir(&fixtures_dir().join("02_tie_breaks"));
}

#[test]
fn test_outcomes() {
    run_fixtures_in_dir(&fixtures_dir().join("03_outcomes"));
}

#[test]
fn test_fixture_runs_are_deterministic() {
    let yaml = fs::read_to_string(fixtures_dir().join("01_scenarios/diagnostics.yaml"))
        .expect("read yaml");
    let fixtures = Fixture::from_yaml_multi(&yaml).expect("parse yaml");

    // Same fixture, repeated runs, identical verdicts throughout.
    for fixture in &fixtures {
        let first: Vec<String> = fixture.run().iter().map(|r| r.actual.clone()).collect();
        for _ in 0..5 {
            let again: Vec<String> = fixture.run().iter().map(|r| r.actual.clone()).collect();
            assert_eq!(first, again, "fixture '{}' diverged", fixture.name);
        }
    }
}
