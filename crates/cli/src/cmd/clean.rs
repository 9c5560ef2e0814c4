//! Implementation of the `clean` target.

use anyhow::{Context, Result};

use pindrop_assets_lib::execute::clean;
use pindrop_assets_lib::manifest::{Manifest, WalkDirLister};

use super::Options;
use crate::output::{print_json, print_paths, print_stat, print_success};

/// Execute the clean command.
///
/// Removes every binary derived from the standard manifest. Raw assets and
/// schemas are never touched.
pub fn cmd_clean(options: &Options) -> Result<()> {
  let layout = options.layout()?;
  let manifest = Manifest::standard(&layout, &WalkDirLister).context("Error cleaning")?;

  let result = clean(&manifest, &layout).context("Error cleaning")?;

  if options.output.is_json() {
    print_json(&result)?;
  } else {
    print_success(&format!("Removed {} generated file(s)", result.removed.len()));
    print_paths(&result.removed, layout.root());
    print_stat("Already absent", &result.missing.len().to_string());
  }

  Ok(())
}
