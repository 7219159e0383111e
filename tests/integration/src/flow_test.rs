//! End-to-end flow tests against aimax-core directly
//!
//! Exercises the complete library flow: install -> ledger -> status ->
//! uninstall, without going through the binary.

use std::fs;

use aimax_core::{
    ComponentRegistry, InstallOptions, Installer, VersionLedger, check_status,
};
use aimax_test_utils::TestEnv;

fn installer(env: &TestEnv) -> Installer {
    Installer::new(
        ComponentRegistry::with_builtins(),
        env.source_root(),
        env.claude_dir(),
    )
}

#[test]
fn full_install_uninstall_cycle() {
    let env = TestEnv::new();
    env.seed_all_components();
    let ins = installer(&env);

    let keys = ins.registry().keys();
    let report = ins.install(&keys, InstallOptions::default()).unwrap();
    assert_eq!(report.installed.len(), 4);
    assert!(report.skipped.is_empty());

    // Ledger records the full selection
    let ledger = VersionLedger::load(env.claude_dir()).unwrap().unwrap();
    assert_eq!(ledger.components, vec!["agents", "rules", "commands", "skills"]);

    // Status sees everything
    let status = check_status(ins.registry(), env.claude_dir());
    assert!(status.iter().all(|s| s.installed));
    assert!(status.iter().all(|s| s.file_count >= 1));

    // Uninstall restores a clean tree
    let removed = ins.uninstall(&ledger.components).unwrap();
    assert!(!removed.is_empty());
    let status = check_status(ins.registry(), env.claude_dir());
    assert!(status.iter().all(|s| s.file_count == 0));
    assert!(VersionLedger::load(env.claude_dir()).unwrap().is_none());
}

#[test]
fn install_preserves_content_byte_for_byte() {
    let env = TestEnv::new();
    env.add_source_file("agents/test-agent.md", "# Test Agent");
    let ins = installer(&env);

    let report = ins.install(&["agents"], InstallOptions::default()).unwrap();

    let dest = env.claude_dir().join("agents/test-agent.md");
    assert!(report.installed.contains(&dest));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "# Test Agent");
}

#[test]
fn second_backup_install_keeps_one_generation() {
    let env = TestEnv::new();
    env.seed_all_components();
    let ins = installer(&env);

    ins.install(&["agents"], InstallOptions::default()).unwrap();
    ins.install(&["agents"], InstallOptions::default()).unwrap();
    ins.install(&["agents"], InstallOptions::default()).unwrap();

    let agents_dir = env.claude_dir().join("agents");
    let mut names: Vec<_> = fs::read_dir(&agents_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["test-agent.md", "test-agent.md.backup"]);
}

#[test]
fn ledger_file_is_valid_toml() {
    let env = TestEnv::new();
    env.seed_all_components();
    let ins = installer(&env);
    ins.install(&["agents", "rules"], InstallOptions::default())
        .unwrap();

    let raw = fs::read_to_string(env.claude_dir().join(".aimax-version")).unwrap();
    let parsed: toml::Value = toml::from_str(&raw).unwrap();
    assert!(parsed.get("version").is_some());
    assert_eq!(
        parsed["components"].as_array().unwrap().len(),
        2
    );
    assert!(parsed.get("updated").is_some());
}
