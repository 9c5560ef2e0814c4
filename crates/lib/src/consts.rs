/// Environment variable overriding the project root.
pub const PROJECT_ROOT_ENV: &str = "PINDROP_PROJECT_ROOT";

/// Environment variable overriding the converter executable.
pub const FLATC_ENV: &str = "PINDROP_FLATC";

/// Base name of the FlatBuffers compiler, without platform suffix.
pub const FLATC_NAME: &str = "flatc";

/// Extension of raw JSON assets.
pub const JSON_EXTENSION: &str = "json";

/// Extension of converted FlatBuffers binaries.
pub const BINARY_EXTENSION: &str = "bin";
