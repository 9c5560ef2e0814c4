//! Project directory layout and converter lookup.
//!
//! Every path the orchestrator touches is derived from a single project root.
//! Raw JSON sources live under `src/rawassets/`, mirrored one-to-one by the
//! processed binaries under `assets/`.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::executable_name;
use crate::consts::{BINARY_EXTENSION, FLATC_ENV, FLATC_NAME, PROJECT_ROOT_ENV};

/// Fixed directory layout of a project checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
  root: PathBuf,
  assets: PathBuf,
  raw_assets: PathBuf,
  schemas: PathBuf,
}

impl ProjectLayout {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    let root = root.into();
    Self {
      assets: root.join("assets"),
      raw_assets: root.join("src").join("rawassets"),
      schemas: root.join("src").join("flatbufferschemas"),
      root,
    }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Root of the processed asset tree.
  pub fn assets_dir(&self) -> &Path {
    &self.assets
  }

  /// Root of the raw asset tree.
  pub fn raw_assets_dir(&self) -> &Path {
    &self.raw_assets
  }

  pub fn sounds_dir(&self) -> PathBuf {
    self.assets.join("sounds")
  }

  pub fn raw_sounds_dir(&self) -> PathBuf {
    self.raw_assets.join("sounds")
  }

  pub fn schema_dir(&self) -> &Path {
    &self.schemas
  }

  /// Directories searched for the converter, in priority order.
  pub fn converter_candidate_dirs(&self) -> Vec<PathBuf> {
    let bin = self.root.join("bin");
    vec![bin.clone(), bin.join("Release"), bin.join("Debug")]
  }

  /// Maps a raw asset path to the binary the converter produces for it.
  ///
  /// The raw asset root is swapped for the processed asset root and the
  /// extension becomes `.bin`. Paths outside the raw tree keep their
  /// directory and only change extension.
  pub fn processed_path(&self, input: &Path) -> PathBuf {
    let mut out = match input.strip_prefix(&self.raw_assets) {
      Ok(relative) => self.assets.join(relative),
      Err(_) => input.to_path_buf(),
    };
    out.set_extension(BINARY_EXTENSION);
    out
  }

  /// Directory that will hold the processed binary for `input`.
  pub fn processed_dir(&self, input: &Path) -> PathBuf {
    let out = self.processed_path(input);
    out.parent().map(Path::to_path_buf).unwrap_or_default()
  }
}

/// Resolves the project root.
///
/// Priority: the explicit path, then `PINDROP_PROJECT_ROOT`, then the current
/// working directory.
pub fn project_root(explicit: Option<&Path>) -> io::Result<PathBuf> {
  if let Some(root) = explicit {
    return Ok(root.to_path_buf());
  }
  if let Ok(root) = std::env::var(PROJECT_ROOT_ENV)
    && !root.is_empty()
  {
    return Ok(PathBuf::from(root));
  }
  std::env::current_dir()
}

/// Searches `dirs` in order for a regular file called `name`.
///
/// Falls back to the bare `name`, leaving resolution to the executable search
/// path when the process is spawned.
pub fn find_executable(name: &str, dirs: &[PathBuf]) -> PathBuf {
  for dir in dirs {
    let candidate = dir.join(name);
    if candidate.is_file() {
      debug!(path = %candidate.display(), "found executable");
      return candidate;
    }
  }
  debug!(name, "executable not found in candidate dirs, deferring to PATH");
  PathBuf::from(name)
}

/// Resolves the FlatBuffers compiler to invoke.
///
/// Priority: the explicit path, then `PINDROP_FLATC`, then the first
/// `flatc` found in the project's `bin` directories, then `flatc` on `PATH`.
pub fn resolve_converter(layout: &ProjectLayout, explicit: Option<&Path>) -> PathBuf {
  if let Some(path) = explicit {
    return path.to_path_buf();
  }
  if let Ok(path) = std::env::var(FLATC_ENV)
    && !path.is_empty()
  {
    return PathBuf::from(path);
  }
  find_executable(&executable_name(FLATC_NAME), &layout.converter_candidate_dirs())
}
