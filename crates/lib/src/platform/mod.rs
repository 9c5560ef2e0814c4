pub mod paths;

/// Returns `base` with the executable suffix of the current platform appended
/// (e.g. `flatc.exe` on Windows, `flatc` elsewhere).
pub fn executable_name(base: &str) -> String {
  format!("{}{}", base, std::env::consts::EXE_SUFFIX)
}
