//! End-to-end tests driving `build-assets` against a stand-in `flatc`.

mod clean_tests;
mod common;
