//! pindrop-assets-lib: asset build orchestration for pindrop.
//!
//! This crate converts the raw JSON assets under `src/rawassets/` into
//! FlatBuffers binaries under `assets/` by driving an external `flatc`:
//! - `ProjectLayout`: the fixed directory layout of a project checkout
//! - `Manifest`: the ordered list of schema/input/output conversion units
//! - `generate`: rebuilds every output whose JSON input or schema is newer
//! - `clean`: removes every derived output

pub mod consts;
pub mod execute;
pub mod manifest;
pub mod platform;
pub mod util;
