//! Manifest types.

use std::io;
use std::path::{Path, PathBuf};

use super::FileLister;
use crate::consts::JSON_EXTENSION;
use crate::platform::paths::ProjectLayout;

/// One schema applied to a set of JSON inputs, writing into `output_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionUnit {
  schema: PathBuf,
  inputs: Vec<PathBuf>,
  output_dir: PathBuf,
}

impl ConversionUnit {
  pub fn new(schema: impl Into<PathBuf>, inputs: Vec<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
    Self {
      schema: schema.into(),
      inputs,
      output_dir: output_dir.into(),
    }
  }

  pub fn schema(&self) -> &Path {
    &self.schema
  }

  pub fn inputs(&self) -> &[PathBuf] {
    &self.inputs
  }

  pub fn output_dir(&self) -> &Path {
    &self.output_dir
  }
}

/// Ordered list of conversion units, processed front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
  units: Vec<ConversionUnit>,
}

impl Manifest {
  pub fn new(units: Vec<ConversionUnit>) -> Self {
    Self { units }
  }

  /// Builds the pindrop asset manifest for `layout`.
  ///
  /// The sound collection inputs are whatever `*.json` files `lister` finds in
  /// the raw sounds directory at call time; every other unit has a single,
  /// fixed input.
  pub fn standard(layout: &ProjectLayout, lister: &dyn FileLister) -> io::Result<Self> {
    let schema = |name: &str| layout.schema_dir().join(name);
    let raw = |name: &str| layout.raw_assets_dir().join(name);
    let assets = layout.assets_dir();

    let sound_collections = lister.list(&layout.raw_sounds_dir(), JSON_EXTENSION)?;

    Ok(Self::new(vec![
      ConversionUnit::new(schema("audio_config.fbs"), vec![raw("audio_config.json")], assets),
      ConversionUnit::new(schema("buses.fbs"), vec![raw("buses.json")], assets),
      ConversionUnit::new(schema("sound_assets.fbs"), vec![raw("sound_assets.json")], assets),
      ConversionUnit::new(
        schema("sound_collection_def.fbs"),
        sound_collections,
        layout.sounds_dir(),
      ),
    ]))
  }

  pub fn units(&self) -> &[ConversionUnit] {
    &self.units
  }

  /// Total number of JSON inputs across all units.
  pub fn input_count(&self) -> usize {
    self.units.iter().map(|unit| unit.inputs.len()).sum()
  }

  /// Every binary this manifest produces, in manifest order.
  pub fn outputs(&self, layout: &ProjectLayout) -> Vec<PathBuf> {
    self
      .units
      .iter()
      .flat_map(|unit| unit.inputs.iter())
      .map(|input| layout.processed_path(input))
      .collect()
  }
}
