//! Tests for the `clean` target.

use predicates::prelude::*;
use serial_test::serial;

use crate::common::{FIXED_INPUTS, TestProject};

#[test]
#[serial]
#[cfg(unix)]
fn clean_removes_generated_binaries_only() {
  let project = TestProject::new(&["boom"]);
  project.install_flatc();
  project.cmd().assert().success();
  assert!(project.path("assets/sounds/boom.bin").is_file());

  project
    .cmd()
    .arg("clean")
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed 4 generated file(s)"));

  assert!(!project.path("assets/buses.bin").exists());
  assert!(!project.path("assets/sounds/boom.bin").exists());
  for input in FIXED_INPUTS {
    assert!(project.path(input).is_file());
  }
  assert!(project.path("src/rawassets/sounds/boom.json").is_file());
}

#[test]
#[serial]
fn clean_without_outputs_succeeds() {
  let project = TestProject::new(&["boom"]);

  project
    .cmd()
    .arg("clean")
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed 0 generated file(s)"));
}

#[test]
#[serial]
fn clean_failure_exits_with_one() {
  let project = TestProject::new(&[]);
  std::fs::create_dir_all(project.path("assets/buses.bin")).unwrap();

  project
    .cmd()
    .arg("clean")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Error cleaning"));

  assert!(project.path("src/rawassets/buses.json").is_file());
}
