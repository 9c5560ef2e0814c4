//! Asset generation and cleaning.
//!
//! This module provides the entry points that walk a [`Manifest`]:
//! - [`generate`] converts every stale input, stopping at the first failure
//! - [`clean`] removes every derived output
//!
//! Work is strictly sequential. Each converter run completes before the next
//! staleness check happens, and nothing is rolled back on failure.

pub mod actions;
mod clean;
pub mod types;

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use tracing::{debug, info};

use crate::manifest::Manifest;
use crate::platform::paths::ProjectLayout;

use actions::{CommandRunner, convert_json};

pub use clean::clean;
pub use types::{CleanError, CleanResult, ExecuteError, GenerateResult};

/// Returns true if `target` must be regenerated from `source`.
///
/// A missing target always needs a rebuild. Otherwise the target is stale only
/// when the source was modified strictly after it; equal timestamps count as
/// up to date.
///
/// # Errors
///
/// `ExecuteError::Stat` if an existing target or the source cannot be
/// inspected. A missing source next to an existing target is such an error.
pub fn needs_rebuild(source: &Path, target: &Path) -> Result<bool, ExecuteError> {
  let target_mtime = match fs::metadata(target) {
    Ok(meta) if !meta.is_file() => return Ok(true),
    Ok(meta) => modified(target, &meta)?,
    Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(true),
    Err(source) => {
      return Err(ExecuteError::Stat {
        path: target.to_path_buf(),
        source,
      });
    }
  };

  let source_meta = fs::metadata(source).map_err(|e| ExecuteError::Stat {
    path: source.to_path_buf(),
    source: e,
  })?;
  let source_mtime = modified(source, &source_meta)?;

  Ok(source_mtime > target_mtime)
}

fn modified(path: &Path, meta: &fs::Metadata) -> Result<SystemTime, ExecuteError> {
  meta.modified().map_err(|source| ExecuteError::Stat {
    path: path.to_path_buf(),
    source,
  })
}

/// Runs the converter for every input whose binary is older than the input
/// or its unit's schema.
///
/// Units are processed in manifest order. Each unit's output directory is
/// created first if needed. The first converter failure aborts the run;
/// binaries produced before it stay on disk.
///
/// # Arguments
///
/// * `manifest` - The conversion units to process
/// * `layout` - Layout used to derive each input's target binary
/// * `converter` - Path (or bare name) of the converter executable
/// * `runner` - Process runner used for each converter invocation
pub async fn generate<R: CommandRunner>(
  manifest: &Manifest,
  layout: &ProjectLayout,
  converter: &Path,
  runner: &R,
) -> Result<GenerateResult, ExecuteError> {
  info!(
    units = manifest.units().len(),
    inputs = manifest.input_count(),
    converter = %converter.display(),
    "generating flatbuffer binaries"
  );

  let mut result = GenerateResult::default();

  for unit in manifest.units() {
    let output_dir = unit.output_dir();
    if !output_dir.exists() {
      debug!(dir = %output_dir.display(), "creating output directory");
      tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|source| ExecuteError::CreateDir {
          path: output_dir.to_path_buf(),
          source,
        })?;
    }

    for input in unit.inputs() {
      let target = layout.processed_path(input);

      if needs_rebuild(input, &target)? || needs_rebuild(unit.schema(), &target)? {
        convert_json(runner, converter, output_dir, unit.schema(), input).await?;
        result.converted.push(target);
      } else {
        debug!(target = %target.display(), "up to date");
        result.up_to_date.push(target);
      }
    }
  }

  info!(
    converted = result.converted.len(),
    up_to_date = result.up_to_date.len(),
    "generation complete"
  );

  Ok(result)
}
