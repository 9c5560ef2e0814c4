//! Types for asset generation and cleaning.
//!
//! This module defines the error and result types shared by the generation
//! and clean procedures.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while generating binaries.
#[derive(Debug, Error)]
pub enum ExecuteError {
  /// The converter exited with a non-zero status.
  #[error("Error running command `{}`. Returned {}.", display_command(.argv), display_exit_code(.code))]
  BuildFailed { argv: Vec<OsString>, code: Option<i32> },

  /// The converter could not be started at all.
  #[error("failed to spawn `{}`: {source}", display_command(.argv))]
  Spawn {
    argv: Vec<OsString>,
    #[source]
    source: io::Error,
  },

  /// An output directory could not be created.
  #[error("failed to create output directory {}: {source}", .path.display())]
  CreateDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// A modification time could not be read.
  #[error("failed to stat {}: {source}", .path.display())]
  Stat {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl ExecuteError {
  /// Returns true for a converter that ran and failed, as opposed to an
  /// error raised by the orchestrator itself.
  pub fn is_build_failure(&self) -> bool {
    matches!(self, ExecuteError::BuildFailed { .. })
  }
}

/// Errors that can occur while removing generated binaries.
#[derive(Debug, Error)]
pub enum CleanError {
  #[error("failed to remove {}: {source}", .path.display())]
  Remove {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateResult {
  /// Targets the converter was invoked for, in invocation order.
  pub converted: Vec<PathBuf>,

  /// Targets newer than both their input and schema.
  pub up_to_date: Vec<PathBuf>,
}

impl GenerateResult {
  pub fn total(&self) -> usize {
    self.converted.len() + self.up_to_date.len()
  }
}

/// Outcome of a clean run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanResult {
  pub removed: Vec<PathBuf>,

  /// Outputs that were already absent.
  pub missing: Vec<PathBuf>,
}

/// Joins an argument vector into a single space-separated command line.
pub fn display_command(argv: &[OsString]) -> String {
  argv
    .iter()
    .map(|arg| arg.to_string_lossy())
    .collect::<Vec<_>>()
    .join(" ")
}

fn display_exit_code(code: &Option<i32>) -> String {
  match code {
    Some(code) => code.to_string(),
    None => "no exit code (terminated by signal)".to_string(),
  }
}
