mod clean;
mod generate;

use std::path::PathBuf;

use anyhow::{Context, Result};

use pindrop_assets_lib::platform::paths::{ProjectLayout, project_root};

use crate::output::OutputFormat;

pub use clean::cmd_clean;
pub use generate::cmd_generate;

/// Build target named on the command line.
///
/// Unrecognized names are kept rather than rejected so that the caller can
/// warn and carry on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
  All,
  Flatbuffers,
  Clean,
  Unknown(String),
}

impl From<&str> for Target {
  fn from(name: &str) -> Self {
    match name {
      "all" => Target::All,
      "flatbuffers" => Target::Flatbuffers,
      "clean" => Target::Clean,
      other => Target::Unknown(other.to_string()),
    }
  }
}

/// Settings shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Options {
  pub project_root: Option<PathBuf>,
  pub flatc: Option<PathBuf>,
  pub output: OutputFormat,
}

impl Options {
  pub fn layout(&self) -> Result<ProjectLayout> {
    let root = project_root(self.project_root.as_deref()).context("Failed to determine project root")?;
    Ok(ProjectLayout::new(root))
  }
}
