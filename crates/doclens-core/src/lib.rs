//! doclens-core - Core library for docstring coverage analysis
//!
//! This crate provides the building blocks for:
//! - Recognizing class and function/method definitions line by line
//! - Deciding whether each definition is immediately followed by a docstring,
//!   including docstrings that span multiple lines
//! - Aggregating per-file results into per-category coverage reports
//! - Running both category evaluations concurrently over one file list
//!
//! # Features
//!
//! - `walk` - Enable [`list_source_files`] for gitignore-aware directory
//!   walking (brings in `ignore`)
//! - `parallel` - Enable parallel per-file scanning inside a category
//!   evaluation (brings in `rayon`)
//!
//! # Scanning content
//!
//! [`scan_content`] takes raw text and needs no filesystem:
//!
//! ```
//! use doclens_core::{scan_content, FunctionPattern};
//!
//! let source = "def documented():\n    \"\"\"Does a thing.\"\"\"\n\ndef bare():\n    pass\n";
//! let scan = scan_content(&FunctionPattern, source);
//!
//! assert_eq!(scan.total_blocks, 2);
//! assert_eq!(scan.undocumented.len(), 1);
//! assert_eq!(scan.undocumented[0].signature, "bare()");
//! ```
//!
//! # Scanning a file tree
//!
//! ```ignore
//! use doclens_core::{list_source_files, scan, ClassPattern, FunctionPattern};
//!
//! let files = list_source_files("src".as_ref(), "py")?;
//! let result = scan(&files, [&ClassPattern, &FunctionPattern]);
//! for report in &result.reports {
//!     println!("{}: {:.1}%", report.label, report.coverage_percent());
//! }
//! ```

mod coverage;
mod orchestrate;
mod patterns;
mod scanner;
mod sources;

pub use coverage::{evaluate, CategoryReport, FileReport, SkippedFile};
pub use orchestrate::{scan, ScanResult};
pub use patterns::{
    is_docstring_delimiter, is_docstring_one_liner, BlockPattern, ClassPattern, FunctionPattern,
};
pub use scanner::{scan_content, DefinitionBlock, FileScan, FileScanner};
pub use sources::DEFAULT_EXTENSION;

#[cfg(feature = "walk")]
pub use sources::list_source_files;
