//! Per-category evaluation and coverage aggregation

use crate::patterns::BlockPattern;
use crate::scanner::{scan_content, DefinitionBlock, FileScan};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Undocumented blocks found in one file, ascending by line. Files with full
/// coverage never produce a report.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub undocumented: Vec<DefinitionBlock>,
}

/// A file that could not be read as text. Skipped for this invocation,
/// never retried.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Coverage results for one block category across all scanned files.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    /// Category display label (e.g. `CLASS`).
    pub label: String,
    /// Every block recognized in this category.
    pub total_blocks: usize,
    /// How many of those have no docstring.
    pub undocumented_blocks: usize,
    /// Documented fraction in `[0, 1]`, aggregated globally across files
    /// (micro-average). `1.0` when no blocks exist at all.
    pub coverage: f64,
    /// Only files with at least one undocumented block.
    pub files: HashMap<PathBuf, FileReport>,
    /// Files skipped because they could not be read.
    pub skipped: Vec<SkippedFile>,
}

impl CategoryReport {
    /// Coverage percentage (0.0 - 100.0)
    pub fn coverage_percent(&self) -> f64 {
        self.coverage * 100.0
    }

    /// Whether this category meets a minimum coverage percentage.
    pub fn is_passing(&self, threshold: f64) -> bool {
        self.coverage_percent() >= threshold
    }
}

/// Documented fraction; total of zero is vacuous full coverage.
fn coverage_ratio(undocumented: usize, total: usize) -> f64 {
    debug_assert!(undocumented <= total);
    if total == 0 {
        return 1.0;
    }
    1.0 - undocumented as f64 / total as f64
}

fn scan_file(pattern: &dyn BlockPattern, path: &Path) -> Result<FileScan, String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(scan_content(pattern, &content)),
        Err(err) => Err(err.to_string()),
    }
}

/// Run the scanner over every file for one category and fold the per-file
/// results into a [`CategoryReport`].
///
/// Files are independent: no state is shared between them, so the scans may
/// run in any order or in parallel without changing the result. Aggregation
/// always happens in input order, which keeps the `parallel` and sequential
/// paths bit-identical.
pub fn evaluate(pattern: &dyn BlockPattern, files: &[PathBuf]) -> CategoryReport {
    #[cfg(feature = "parallel")]
    let scans: Vec<Result<FileScan, String>> = {
        use rayon::prelude::*;
        files.par_iter().map(|path| scan_file(pattern, path)).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let scans: Vec<Result<FileScan, String>> =
        files.iter().map(|path| scan_file(pattern, path)).collect();

    let mut total_blocks = 0;
    let mut undocumented_blocks = 0;
    let mut file_reports = HashMap::new();
    let mut skipped = Vec::new();

    for (path, scan) in files.iter().zip(scans) {
        match scan {
            Ok(scan) => {
                debug!(
                    path = %path.display(),
                    blocks = scan.total_blocks,
                    undocumented = scan.undocumented.len(),
                    "scanned file"
                );
                total_blocks += scan.total_blocks;
                undocumented_blocks += scan.undocumented.len();
                if !scan.undocumented.is_empty() {
                    file_reports.insert(
                        path.clone(),
                        FileReport {
                            path: path.clone(),
                            undocumented: scan.undocumented,
                        },
                    );
                }
            }
            Err(reason) => {
                warn!(path = %path.display(), %reason, "skipping unreadable file");
                skipped.push(SkippedFile {
                    path: path.clone(),
                    reason,
                });
            }
        }
    }

    CategoryReport {
        label: pattern.label().to_string(),
        total_blocks,
        undocumented_blocks,
        coverage: coverage_ratio(undocumented_blocks, total_blocks),
        files: file_reports,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::FunctionPattern;
    use indoc::indoc;
    use std::fs;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("failed to write fixture");
        path
    }

    #[test]
    fn test_two_files_partial_coverage() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let covered = write_fixture(
            &dir,
            "covered.py",
            indoc! {r#"
                def fine():
                    """documented"""
            "#},
        );
        let partial = write_fixture(
            &dir,
            "partial.py",
            indoc! {r#"
                def good():
                    """documented"""

                def bad():
                    return 1
            "#},
        );

        let report = evaluate(&FunctionPattern, &[covered.clone(), partial.clone()]);

        assert_eq!(report.label, "FUNCTION/METHOD");
        assert_eq!(report.total_blocks, 3);
        assert_eq!(report.undocumented_blocks, 1);
        assert!((report.coverage - 2.0 / 3.0).abs() < 1e-9);

        // The fully documented file is omitted.
        assert!(!report.files.contains_key(&covered));
        let file_report = report.files.get(&partial).expect("partial.py reported");
        assert_eq!(file_report.undocumented.len(), 1);
        assert_eq!(file_report.undocumented[0].signature, "bad()");
    }

    #[test]
    fn test_no_blocks_is_vacuous_full_coverage() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let empty = write_fixture(&dir, "empty.py", "");
        let plain = write_fixture(&dir, "plain.py", "x = 1\ny = 2\n");

        let report = evaluate(&FunctionPattern, &[empty, plain]);

        assert_eq!(report.total_blocks, 0);
        assert_eq!(report.coverage, 1.0);
        assert!(report.files.is_empty());
    }

    #[test]
    fn test_unreadable_file_is_contained() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let readable = write_fixture(&dir, "ok.py", "def f():\n    pass\n");
        let missing = dir.path().join("missing.py");

        let report = evaluate(&FunctionPattern, &[readable, missing.clone()]);

        // The failed read skips that file only; the rest still aggregates.
        assert_eq!(report.total_blocks, 1);
        assert_eq!(report.undocumented_blocks, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].path, missing);
    }

    #[test]
    fn test_no_empty_file_reports() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let a = write_fixture(&dir, "a.py", "def f():\n    \"\"\"ok\"\"\"\n");
        let b = write_fixture(&dir, "b.py", "def g():\n    pass\n");

        let report = evaluate(&FunctionPattern, &[a, b]);

        assert!(report.files.values().all(|f| !f.undocumented.is_empty()));
        assert!(report.undocumented_blocks <= report.total_blocks);
        assert!((0.0..=1.0).contains(&report.coverage));
    }

    #[test]
    fn test_coverage_ratio_bounds() {
        assert_eq!(coverage_ratio(0, 0), 1.0);
        assert_eq!(coverage_ratio(0, 4), 1.0);
        assert_eq!(coverage_ratio(4, 4), 0.0);
        assert!((coverage_ratio(1, 3) - 2.0 / 3.0).abs() < 1e-9);
    }
}
