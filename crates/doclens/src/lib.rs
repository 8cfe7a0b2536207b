//! doclens library - Measure docstring coverage in Python codebases
//!
//! This library exposes the report rendering of doclens for testing
//! and embedding purposes; the scan pipeline itself lives in
//! `doclens-core`.

pub mod output;
