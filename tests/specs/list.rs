//! `prcov list` specs.

use crate::prelude::*;

const MILESTONES: &str = r#"[
    {"number": 4, "title": "3.7"},
    {"number": 9, "title": "3.8"}
]"#;

const ISSUES: &str = r#"[
    {"number": 31, "pull_request": {"merged_at": "2026-02-01T12:00:00Z"}},
    {"number": 17, "pull_request": {"merged_at": "2026-01-20T08:00:00Z"}},
    {"number": 22, "pull_request": {"merged_at": null}},
    {"number": 19}
]"#;

fn remote() -> Remote {
    Remote::start(vec![
        route("/milestones", MILESTONES),
        route("milestone=9&", ISSUES),
        route("milestone=4&", "[]"),
    ])
}

#[test]
fn prints_report_command() {
    let remote = remote();
    let project = Project::with_config(&config_for(remote.url()));

    project
        .cmd()
        .args(["list", "--milestone", "3.8"])
        .assert()
        .success()
        .stdout("prcov report --pull-requests 17,31 -o 3.8-coverage.md\n");
}

#[test]
fn milestone_from_config() {
    let remote = remote();
    let project = Project::with_config(&format!("{}milestone = \"3.8\"\n", config_for(remote.url())));

    project
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("--pull-requests 17,31"));
}

#[test]
fn configured_output_file_replaces_milestone_name() {
    let remote = remote();
    let project = Project::with_config(&format!(
        "{}\n[output]\nfile = \"coverage.json\"\n",
        config_for(remote.url())
    ));

    project
        .cmd()
        .args(["list", "-m", "3.8"])
        .assert()
        .success()
        .stdout("prcov report --pull-requests 17,31 -o coverage.json\n");
}

#[test]
fn explicit_repository_is_passed_through() {
    let remote = remote();
    let project = Project::with_config(&config_for(remote.url()));

    project
        .cmd()
        .args(["list", "-m", "3.8", "--repository", "acme/widget"])
        .assert()
        .success()
        .stdout(predicates::str::ends_with("--repository acme/widget\n"));
}

#[test]
fn appends_to_script() {
    let remote = remote();
    let project = Project::with_config(&config_for(remote.url()));
    project.write("reports.sh", "#!/bin/sh\n");

    project
        .cmd()
        .args(["list", "-m", "3.8", "--script", "reports.sh"])
        .assert()
        .success();

    assert_eq!(
        project.read("reports.sh"),
        "#!/bin/sh\nprcov report --pull-requests 17,31 -o 3.8-coverage.md\n"
    );
}

#[test]
fn empty_milestone_message() {
    let remote = remote();
    let project = Project::with_config(&config_for(remote.url()));

    project
        .cmd()
        .args(["list", "-m", "3.7", "--script", "reports.sh"])
        .assert()
        .success()
        .stdout("No pull requests have been found for milestone 3.7\n");

    assert!(!project.file("reports.sh").exists());
}

#[test]
fn unknown_milestone_is_config_error() {
    let remote = remote();
    let project = Project::with_config(&config_for(remote.url()));

    project
        .cmd()
        .args(["list", "-m", "9.9"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("milestone not found: 9.9 in acme/widget"));
}

#[test]
fn missing_milestone_is_argument_error() {
    let remote = remote();
    let project = Project::with_config(&config_for(remote.url()));

    project
        .cmd()
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no milestone"));
}
