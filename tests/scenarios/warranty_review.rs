//! Scenario: Warranty Review
//!
//! Journey: A user checks which warranties have run out.
//!
//! Steps:
//! 1. Runs `check` on the day the drill's warranty ends - nothing expired
//! 2. Runs `check` the day after - one expired, non-zero exit
//! 3. Lists expired assets as JSON
//!
//! Success Criteria:
//! - The expiration date itself still counts as covered
//! - `expired` and `check` agree

use crate::common::*;

#[test]
fn scenario_warranty_review() {
    let env = TestEnv::with_reference_lists();
    env.write_file("assets.csv", THREE_ASSETS);

    // Step 1: last covered day
    let result = env.run(&["check", "--as-of", "2024-05-31"]);
    assert!(result.success, "check failed: {}", result.combined_output());
    assert_eq!(result.stdout.trim(), "No expired warranties.");

    // Step 2: the day after
    let result = env.run(&["check", "--as-of", "2024-06-01"]);
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.stdout.trim(), "1 asset has an expired warranty.");

    // Step 3: the same answer from `expired`
    let result = env.run(&["--json", "expired", "--as-of", "2024-06-01"]);
    assert!(result.success, "expired failed: {}", result.stderr);
    let json = result.json();
    assert_eq!(json["as_of"], "2024-06-01");
    let assets = json["assets"].as_array().unwrap();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0]["index"], 0);
    assert_eq!(assets[0]["name"], "Drill");
}
