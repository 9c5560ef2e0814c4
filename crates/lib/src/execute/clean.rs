//! Removal of generated binaries.

use std::fs;
use std::io;

use tracing::{debug, info};

use super::types::{CleanError, CleanResult};
use crate::manifest::Manifest;
use crate::platform::paths::ProjectLayout;

/// Deletes every binary the manifest derives from its inputs.
///
/// Outputs that are already absent are recorded as missing rather than
/// treated as failures, so cleaning twice is harmless. Raw inputs, schemas and
/// output directories are left in place.
///
/// # Errors
///
/// `CleanError::Remove` on the first output that exists but cannot be
/// deleted. Outputs removed before it stay removed.
pub fn clean(manifest: &Manifest, layout: &ProjectLayout) -> Result<CleanResult, CleanError> {
  let mut result = CleanResult::default();

  for output in manifest.outputs(layout) {
    match fs::remove_file(&output) {
      Ok(()) => {
        debug!(path = %output.display(), "removed");
        result.removed.push(output);
      }
      Err(err) if err.kind() == io::ErrorKind::NotFound => {
        result.missing.push(output);
      }
      Err(source) => return Err(CleanError::Remove { path: output, source }),
    }
  }

  info!(removed = result.removed.len(), missing = result.missing.len(), "clean complete");

  Ok(result)
}
