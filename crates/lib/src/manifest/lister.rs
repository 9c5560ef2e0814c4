//! Directory listing used to expand wildcard inputs.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Lists the files directly inside a directory that carry a given extension.
///
/// Implementations return paths sorted so that the manifest, and therefore the
/// conversion order, is stable across runs.
pub trait FileLister {
  fn list(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>>;
}

/// [`FileLister`] over the real filesystem.
///
/// A directory that does not exist lists as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkDirLister;

impl FileLister for WalkDirLister {
  fn list(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
      return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
      let entry = entry?;
      let path = entry.path();
      if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == extension) {
        files.push(path.to_path_buf());
      }
    }
    Ok(files)
  }
}
