//! `prcov init` specs.

use crate::prelude::*;

#[test]
fn init_creates_config() {
    let project = Project::empty();

    project
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Created prcov.toml"));

    let config = project.read("prcov.toml");
    assert!(config.starts_with("# prcov configuration\nversion = 1\n"));
    assert!(config.contains("[sonar]"));
}

#[test]
fn init_refuses_to_overwrite() {
    let project = Project::with_config("version = 1\n");

    project
        .cmd()
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("--force"));

    assert_eq!(project.read("prcov.toml"), "version = 1\n");
}

#[test]
fn init_force_overwrites() {
    let project = Project::with_config("version = 1\n");

    project.cmd().args(["init", "--force"]).assert().success();

    assert!(project.read("prcov.toml").contains("min_coverage = 87.5"));
}
