//! Shared test helpers for CLI integration tests.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Stand-in converter. Logs its arguments and writes `<out>/<stem>.bin`, or
/// exits with `$FAKE_FLATC_EXIT` when that is set.
#[cfg(unix)]
const FAKE_FLATC: &str = r#"#!/bin/sh
echo "$@" >> "$FAKE_FLATC_LOG"
if [ -n "$FAKE_FLATC_EXIT" ]; then
  exit "$FAKE_FLATC_EXIT"
fi
name=$(basename "$5" .json)
: > "$2/$name.bin"
"#;

/// Raw inputs of the fixed units, relative to the project root.
pub const FIXED_INPUTS: [&str; 3] = [
  "src/rawassets/audio_config.json",
  "src/rawassets/buses.json",
  "src/rawassets/sound_assets.json",
];

pub const SCHEMAS: [&str; 4] = [
  "src/flatbufferschemas/audio_config.fbs",
  "src/flatbufferschemas/buses.fbs",
  "src/flatbufferschemas/sound_assets.fbs",
  "src/flatbufferschemas/sound_collection_def.fbs",
];

/// Isolated project checkout.
pub struct TestProject {
  pub temp: TempDir,
}

impl TestProject {
  /// Project with every schema, the three fixed inputs, and the given sound
  /// collections. All sources carry an old modification time.
  pub fn new(sounds: &[&str]) -> Self {
    let project = Self {
      temp: TempDir::new().unwrap(),
    };
    for schema in SCHEMAS {
      project.write_source(schema, "");
    }
    for input in FIXED_INPUTS {
      project.write_source(input, "{}");
    }
    for sound in sounds {
      project.write_source(&format!("src/rawassets/sounds/{}.json", sound), "{}");
    }
    project
  }

  pub fn root(&self) -> &Path {
    self.temp.path()
  }

  pub fn path(&self, relative: &str) -> PathBuf {
    self.temp.path().join(relative)
  }

  /// Writes a file dated well in the past.
  pub fn write_source(&self, relative: &str, content: &str) {
    let path = self.path(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    self.set_mtime(relative, SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000));
  }

  pub fn set_mtime(&self, relative: &str, time: SystemTime) {
    File::options()
      .write(true)
      .open(self.path(relative))
      .unwrap()
      .set_modified(time)
      .unwrap();
  }

  /// Installs the stand-in converter at `bin/flatc`.
  #[cfg(unix)]
  pub fn install_flatc(&self) {
    use std::os::unix::fs::PermissionsExt;

    let path = self.path("bin/flatc");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, FAKE_FLATC).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
  }

  pub fn log_path(&self) -> PathBuf {
    self.path("flatc.log")
  }

  /// Argument lines recorded by the stand-in converter.
  pub fn flatc_calls(&self) -> Vec<String> {
    std::fs::read_to_string(self.log_path())
      .map(|log| log.lines().map(str::to_string).collect())
      .unwrap_or_default()
  }

  /// Get a pre-configured Command for the build-assets binary.
  ///
  /// Clears the environment overrides so only `--project-root` and the
  /// project's `bin/` directory decide what runs.
  pub fn cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("build-assets");
    cmd.arg("--project-root").arg(self.root());
    cmd.env_remove("PINDROP_PROJECT_ROOT");
    cmd.env_remove("PINDROP_FLATC");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("FAKE_FLATC_EXIT");
    cmd.env("FAKE_FLATC_LOG", self.log_path());
    cmd
  }
}
