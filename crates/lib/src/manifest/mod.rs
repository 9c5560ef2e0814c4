//! Asset conversion manifest.
//!
//! The manifest is the fixed list of conversions a project needs: which JSON
//! files are compiled against which schema, and where the binaries land.

mod lister;
mod types;

pub use lister::{FileLister, WalkDirLister};
pub use types::*;
