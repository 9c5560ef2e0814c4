//! Converter process execution.
//!
//! The converter is an opaque external program. Each invocation inherits the
//! orchestrator's stdio and is awaited to completion before the next one
//! starts.

use std::ffi::OsString;
use std::future::Future;
use std::io;
use std::path::Path;

use tokio::process::Command;
use tracing::{debug, info};

use crate::execute::types::{ExecuteError, display_command};

/// Runs an argument vector as a process and reports its exit code.
///
/// `argv[0]` is the program. The returned code is `None` when the process was
/// terminated without one (e.g. by a signal).
pub trait CommandRunner {
  fn run(&self, argv: &[OsString]) -> impl Future<Output = io::Result<Option<i32>>>;
}

/// [`CommandRunner`] that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
  async fn run(&self, argv: &[OsString]) -> io::Result<Option<i32>> {
    let (program, args) = argv
      .split_first()
      .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command line"))?;

    debug!(program = ?program, "spawning process");

    let status = Command::new(program).args(args).status().await?;
    Ok(status.code())
  }
}

/// Builds `<converter> -o <out_dir> -b <schema> <json>`.
pub fn converter_argv(converter: &Path, out_dir: &Path, schema: &Path, json: &Path) -> Vec<OsString> {
  vec![
    converter.into(),
    "-o".into(),
    out_dir.into(),
    "-b".into(),
    schema.into(),
    json.into(),
  ]
}

/// Converts one JSON file into a FlatBuffers binary inside `out_dir`.
///
/// # Errors
///
/// `ExecuteError::BuildFailed` when the converter exits with anything other
/// than zero, `ExecuteError::Spawn` when it cannot be started.
pub async fn convert_json<R: CommandRunner>(
  runner: &R,
  converter: &Path,
  out_dir: &Path,
  schema: &Path,
  json: &Path,
) -> Result<(), ExecuteError> {
  let argv = converter_argv(converter, out_dir, schema, json);
  info!(cmd = %display_command(&argv), "converting");

  let code = match runner.run(&argv).await {
    Ok(code) => code,
    Err(source) => return Err(ExecuteError::Spawn { argv, source }),
  };

  if code != Some(0) {
    return Err(ExecuteError::BuildFailed { argv, code });
  }

  Ok(())
}
