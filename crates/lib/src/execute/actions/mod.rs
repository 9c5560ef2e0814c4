//! Converter invocation.

pub mod cmd;

pub use cmd::{CommandRunner, ProcessRunner, convert_json, converter_argv};
