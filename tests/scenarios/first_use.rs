//! Scenario: First Use
//!
//! Journey: Someone starts tracking their belongings in an empty directory.
//!
//! Steps:
//! 1. No data files exist yet - listing shows nothing, no error
//! 2. Adding an asset before registering lists fails validation
//! 3. Registers a category and a location
//! 4. Adds an asset and sees it listed
//!
//! Success Criteria:
//! - Missing files behave as empty lists
//! - Nothing is written for a rejected asset

use crate::common::*;

#[test]
fn scenario_first_use_complete_journey() {
    let env = TestEnv::new();

    // Step 1: empty directory
    let result = env.run(&["list"]);
    assert!(result.success, "list failed: {}", result.stderr);
    assert!(result.stdout.contains("No assets."));

    // Step 2: unknown category
    let result = env.run(&["add", "Drill", "-c", "Tools", "-l", "Garage"]);
    assert!(!result.success);
    assert!(
        result.stderr.contains("unknown category"),
        "stderr: {}",
        result.stderr
    );
    assert!(!env.path("assets.csv").exists());

    // Step 3: register reference entries
    assert!(env.run(&["category", "add", "Tools"]).success);
    let result = env.run(&["location", "add", "Garage", "-d", "detached"]);
    assert!(result.success, "location add failed: {}", result.stderr);
    assert_eq!(env.read_file("categories.csv").trim_end(), "Tools");
    assert_eq!(env.read_file("locations.csv").trim_end(), "Garage, detached");

    // Step 4: add and list
    let result = env.run(&[
        "add",
        "Drill",
        "-c",
        "Tools",
        "-l",
        "Garage",
        "--value",
        "120",
    ]);
    assert!(result.success, "add failed: {}", result.stderr);
    assert!(result.stdout.contains("Added asset #0: Drill"));

    assert_eq!(
        env.asset_lines(),
        vec![
            "Drill, Tools, Garage, No date provided, No description provided, 120, No date provided"
        ]
    );

    let result = env.run(&["list"]);
    assert!(result.stdout.contains("Drill"));
    assert!(result.stdout.contains("Tools @ Garage"));
}
