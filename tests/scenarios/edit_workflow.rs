//! Scenario: Edit Workflow
//!
//! Journey: A user moves an asset, renews a warranty and removes another.
//!
//! Steps:
//! 1. Starts from an inventory of three assets
//! 2. Moves the laptop to the garage
//! 3. Clears the drill's warranty
//! 4. Removes the desk
//!
//! Success Criteria:
//! - Untouched fields keep their values
//! - The file holds exactly the remaining records, in order

use crate::common::*;

#[test]
fn scenario_edit_workflow() {
    let env = TestEnv::with_reference_lists();
    env.write_file("assets.csv", THREE_ASSETS);

    // Step 2: move the laptop
    let result = env.run(&["edit", "1", "--location", "Garage"]);
    assert!(result.success, "edit failed: {}", result.stderr);
    assert_eq!(
        env.asset_lines()[1],
        "Laptop, Electronics, Garage, 2023-01-10, No description provided, 1500, 2026-01-10"
    );

    // Step 3: clear a warranty
    let result = env.run(&["edit", "0", "--clear-warranty"]);
    assert!(result.success, "edit failed: {}", result.stderr);
    assert_eq!(
        env.asset_lines()[0],
        "Drill, Tools, Garage, 2022-05-31, cordless, 120, No date provided"
    );

    // Step 4: remove the desk
    let result = env.run(&["remove", "2"]);
    assert!(result.success, "remove failed: {}", result.stderr);
    assert!(result.stdout.contains("Removed asset #2: Desk"));

    let lines = env.asset_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Drill, "));
    assert!(lines[1].starts_with("Laptop, "));
}

#[test]
fn scenario_edit_rejects_unregistered_location() {
    let env = TestEnv::with_reference_lists();
    env.write_file("assets.csv", THREE_ASSETS);
    let before = env.read_file("assets.csv");

    let result = env.run(&["edit", "0", "--location", "Attic"]);

    assert!(!result.success);
    assert!(result.stderr.contains("unknown location"), "stderr: {}", result.stderr);
    assert_eq!(env.read_file("assets.csv"), before);
}
