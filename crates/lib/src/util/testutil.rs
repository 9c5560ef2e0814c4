//! Test utilities for pindrop-assets-lib.
//!
//! This module provides filesystem fixtures and a converter stand-in that
//! records invocations instead of spawning processes.

use std::ffi::OsString;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;

use crate::execute::actions::CommandRunner;

/// Converts string literals into an argument vector.
pub fn os_args(args: &[&str]) -> Vec<OsString> {
  args.iter().map(OsString::from).collect()
}

/// Writes `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).unwrap();
  }
  std::fs::write(path, content).unwrap();
}

/// Sets the modification time of an existing file.
pub fn set_mtime(path: &Path, time: SystemTime) {
  File::options().write(true).open(path).unwrap().set_modified(time).unwrap();
}

/// [`CommandRunner`] that records each argument vector and returns a fixed
/// exit code without running anything.
pub struct RecordingRunner {
  calls: Mutex<Vec<Vec<OsString>>>,
  exit_code: i32,
}

impl RecordingRunner {
  pub fn exiting_with(exit_code: i32) -> Self {
    Self {
      calls: Mutex::new(Vec::new()),
      exit_code,
    }
  }

  pub fn calls(&self) -> Vec<Vec<OsString>> {
    self.calls.lock().unwrap().clone()
  }
}

impl CommandRunner for RecordingRunner {
  async fn run(&self, argv: &[OsString]) -> io::Result<Option<i32>> {
    self.calls.lock().unwrap().push(argv.to_vec());
    Ok(Some(self.exit_code))
  }
}
