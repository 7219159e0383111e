//! End-to-end tests driving the aimax binary
//!
//! Every invocation redirects both roots through the environment so nothing
//! touches the real home directory.

use assert_cmd::Command;
use predicates::prelude::*;

use aimax_test_utils::TestEnv;

fn aimax(env: &TestEnv) -> Command {
    let mut cmd = Command::cargo_bin("aimax").unwrap();
    cmd.env("AIMAX_SOURCE_DIR", env.source_root())
        .env("AIMAX_CLAUDE_DIR", env.claude_dir())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn list_prints_all_components() {
    let env = TestEnv::new();
    aimax(&env)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("agents"))
        .stdout(predicate::str::contains("rules"))
        .stdout(predicate::str::contains("commands"))
        .stdout(predicate::str::contains("skills"));
}

#[test]
fn status_on_clean_system_reports_not_installed() {
    let env = TestEnv::new();
    aimax(&env)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not installed"));
}

#[test]
fn status_json_is_machine_readable() {
    let env = TestEnv::new();
    aimax(&env)
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"key\": \"agents\""))
        .stdout(predicate::str::contains("\"installed\": false"));
}

#[test]
fn install_then_status_then_uninstall() {
    let env = TestEnv::new();
    env.seed_all_components();

    aimax(&env)
        .args(["install", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Install complete!"));

    assert!(env.claude_dir().join("agents/test-agent.md").exists());
    assert!(env.claude_dir().join("commands/aimax/review.md").exists());
    assert!(env.claude_dir().join("skills/review/SKILL.md").exists());
    assert!(env.claude_dir().join(".aimax-version").exists());

    aimax(&env)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Agents"))
        .stdout(predicate::str::contains("file(s)"));

    aimax(&env)
        .args(["uninstall", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uninstall complete!"));

    assert!(!env.claude_dir().join("agents/test-agent.md").exists());
    assert!(!env.claude_dir().join("commands/aimax").exists());
    assert!(!env.claude_dir().join(".aimax-version").exists());
}

#[test]
fn update_refreshes_previously_installed_components() {
    let env = TestEnv::new();
    env.seed_all_components();

    aimax(&env).args(["install", "--yes"]).assert().success();

    // Simulate a new package revision of one agent
    env.add_source_file("agents/test-agent.md", "# Test Agent v2");

    aimax(&env)
        .args(["update", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Install complete!"));

    let content =
        std::fs::read_to_string(env.claude_dir().join("agents/test-agent.md")).unwrap();
    assert_eq!(content, "# Test Agent v2");
}

#[test]
fn update_with_empty_ledger_selection_refreshes_all_components() {
    let env = TestEnv::new();
    env.seed_all_components();

    // The state left behind by installing an empty selection
    std::fs::write(
        env.claude_dir().join(".aimax-version"),
        "version = \"0.3.1\"\ncomponents = []\nupdated = \"2026-08-27T00:00:00Z\"\n",
    )
    .unwrap();

    aimax(&env).args(["update", "--yes"]).assert().success();

    assert!(env.claude_dir().join("agents/test-agent.md").exists());
    assert!(env.claude_dir().join("rules/test-rule.md").exists());
    assert!(env.claude_dir().join("commands/aimax/review.md").exists());
    assert!(env.claude_dir().join("skills/review/SKILL.md").exists());
}

#[test]
fn install_with_missing_source_exits_nonzero() {
    let env = TestEnv::new();
    // Source tree left empty: the agents directory does not exist

    aimax(&env)
        .args(["install", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn version_flag_prints_binary_name() {
    let env = TestEnv::new();
    aimax(&env)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("aimax"));
}
