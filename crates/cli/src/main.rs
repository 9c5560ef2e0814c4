use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use cmd::{Options, Target, cmd_clean, cmd_generate};
use output::{OutputFormat, print_error, print_warning};

/// build-assets - Converts pindrop's raw JSON assets into FlatBuffers binaries
#[derive(Parser)]
#[command(name = "build-assets")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// What to build: `all`, `flatbuffers`, or `clean`
  #[arg(default_value = "all")]
  target: String,

  /// Project root (default: $PINDROP_PROJECT_ROOT, then the current directory)
  #[arg(long, value_name = "DIR")]
  project_root: Option<PathBuf>,

  /// FlatBuffers compiler to use (default: $PINDROP_FLATC, then bin/, then PATH)
  #[arg(long, value_name = "PATH")]
  flatc: Option<PathBuf>,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,

  /// Output format
  #[arg(short = 'o', long, value_enum, default_value = "text")]
  output: OutputFormat,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  init_tracing(cli.verbose);

  let options = Options {
    project_root: cli.project_root,
    flatc: cli.flatc,
    output: cli.output,
  };

  let result = match Target::from(cli.target.as_str()) {
    Target::All | Target::Flatbuffers => cmd_generate(&options),
    Target::Clean => cmd_clean(&options),
    Target::Unknown(name) => {
      print_warning(&format!("No rule to build target {}.", name));
      Ok(())
    }
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&format!("{:#}", err));
      ExitCode::FAILURE
    }
  }
}

/// Logs go to stderr so `--output json` keeps stdout clean. `RUST_LOG` takes
/// precedence over `--verbose`.
fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}
