//! Implementation of the `all` and `flatbuffers` targets.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use pindrop_assets_lib::execute::actions::ProcessRunner;
use pindrop_assets_lib::execute::generate;
use pindrop_assets_lib::manifest::{Manifest, WalkDirLister};
use pindrop_assets_lib::platform::paths::resolve_converter;

use super::Options;
use crate::output::{format_duration, print_info, print_json, print_paths, print_stat, print_success};

/// Execute the generate command.
///
/// Builds the standard manifest, resolves `flatc`, and converts every stale
/// JSON asset. A converter failure is returned as-is so its message reaches
/// the user unchanged.
pub fn cmd_generate(options: &Options) -> Result<()> {
  let start = Instant::now();

  let layout = options.layout()?;
  let converter = resolve_converter(&layout, options.flatc.as_deref());
  debug!(root = %layout.root().display(), converter = %converter.display(), "resolved paths");

  let manifest = Manifest::standard(&layout, &WalkDirLister).context("Failed to list raw sound assets")?;

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let result = rt.block_on(generate(&manifest, &layout, &converter, &ProcessRunner))?;

  if options.output.is_json() {
    print_json(&result)?;
  } else {
    if result.converted.is_empty() {
      print_info("All assets up to date");
    } else {
      print_success(&format!("Converted {} asset(s)", result.converted.len()));
      print_paths(&result.converted, layout.root());
    }
    print_stat("Up to date", &result.up_to_date.len().to_string());
    print_stat("Duration", &format_duration(start.elapsed()));
  }

  Ok(())
}
