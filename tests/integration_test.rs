// file: tests/integration_test.rs
// version: 2.1.0
// guid: 7c9e1a3b-5d6f-4b8a-9c0e-2a4c6e8a0b2d

//! Integration tests for the hammer-dispatch binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the user's config files and environment overrides
fn hammer_dispatch(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hammer-dispatch").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("HAMMER_DISPATCH_CONFIG")
        .env_remove("HAMMER_DISPATCH_SERVER_HOSTNAME")
        .env_remove("HAMMER_DISPATCH_HAMMER_BINARY")
        .env_remove("HAMMER_DISPATCH_EXECUTION_MODE")
        .env_remove("HAMMER_DISPATCH_EXECUTION_DRY_RUN");
    cmd
}

#[test]
fn test_groups_lists_environment_subcommands() {
    let home = TempDir::new().unwrap();

    hammer_dispatch(&home)
        .args(["groups", "environment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("environment"))
        .stdout(predicate::str::contains("sc_params"))
        .stdout(predicate::str::contains("List all environments."));
}

#[test]
fn test_groups_json() {
    let home = TempDir::new().unwrap();

    let output = hammer_dispatch(&home)
        .args(["groups", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = listing.as_array().unwrap();
    assert!(groups.iter().any(|g| g["base"] == "environment"));
    assert!(groups.iter().any(|g| g["base"] == "organization"));
}

#[test]
fn test_dry_run_prints_composed_command() {
    let home = TempDir::new().unwrap();

    hammer_dispatch(&home)
        .args(["--dry-run", "run", "environment", "create", "--name=dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "hammer -v -u admin -p ******** --output=csv environment create --name=dev",
        ))
        .stdout(predicate::str::contains("changeme").not());
}

#[test]
fn test_run_forwards_flag_like_arguments() {
    let home = TempDir::new().unwrap();

    hammer_dispatch(&home)
        .args(["--dry-run", "run", "host", "list", "-v", "--search=x"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("--output=csv host list -v --search=x\n"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_project_file_merges_over_user_config() {
    // Arrange
    let home = TempDir::new().unwrap();
    let user_dir = home.path().join(".config").join("hammer-dispatch");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        "[server]\nadmin_username = \"operator\"\n",
    )
    .unwrap();
    std::fs::write(
        home.path().join(".hammer-dispatch.toml"),
        "[hammer]\noutput = \"json\"\n",
    )
    .unwrap();

    // Act
    let assert = hammer_dispatch(&home)
        .args(["--dry-run", "run", "environment", "list"])
        .assert();

    // Assert
    assert.success().stdout(predicate::str::contains(
        "hammer -v -u operator -p ******** --output=json environment list",
    ));
}

#[test]
fn test_project_config_file_is_used() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join(".hammer-dispatch.toml"),
        "[hammer]\nverbose = false\noutput = \"json\"\n\n[execution]\ndry_run = true\n",
    )
    .unwrap();

    hammer_dispatch(&home)
        .args(["run", "environment", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "hammer -u admin -p ******** --output=json environment list",
        ));
}

#[test]
fn test_unknown_group_fails() {
    let home = TempDir::new().unwrap();

    hammer_dispatch(&home)
        .args(["--dry-run", "run", "spaceship", "launch"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Unknown command group: spaceship"));
}

#[test]
fn test_config_check_reports_missing_hostname() {
    let home = TempDir::new().unwrap();

    hammer_dispatch(&home)
        .args(["--ssh", "config", "check"])
        .assert()
        .code(78)
        .stderr(predicate::str::contains("hostname must be provided"));
}

#[test]
fn test_config_show_masks_password() {
    let home = TempDir::new().unwrap();

    hammer_dispatch(&home)
        .env("HAMMER_DISPATCH_SERVER_ADMIN_PASSWORD", "s3cret")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[server]"))
        .stdout(predicate::str::contains("s3cret").not());
}

#[cfg(unix)]
#[test]
fn test_run_mirrors_output_and_exit_status() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join(".hammer-dispatch.toml"),
        "[server]\nadmin_username = \"\"\n\n[hammer]\nbinary = \"echo\"\nverbose = false\n",
    )
    .unwrap();

    hammer_dispatch(&home)
        .args(["--output", "json", "run", "environment", "list"])
        .assert()
        .success()
        .stdout("--output=json environment list\n");
}

#[cfg(unix)]
#[test]
fn test_run_surfaces_non_zero_exit() {
    let home = TempDir::new().unwrap();

    hammer_dispatch(&home)
        .env("HAMMER_DISPATCH_HAMMER_BINARY", "false")
        .args(["run", "environment", "delete", "--id=1"])
        .assert()
        .code(1);
}
