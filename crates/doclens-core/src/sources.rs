//! Source-file discovery
//!
//! The scan core consumes a plain list of paths; this module builds that list
//! from a root path. Walking is gitignore-aware and gated behind the `walk`
//! feature.

#[cfg(feature = "walk")]
use eyre::Result;
#[cfg(feature = "walk")]
use std::path::{Path, PathBuf};

/// Extension scanned when none is configured.
pub const DEFAULT_EXTENSION: &str = "py";

/// List the files to scan under `root`.
///
/// A root that is itself a file is returned as a one-element list. A
/// directory is walked recursively (following symlinks, honoring gitignore
/// files), keeping only files with the given extension. Anything else is a
/// fatal error, surfaced before any scanning starts.
///
/// The result is sorted: walk order depends on the on-disk directory layout,
/// and reports should be stable across runs.
#[cfg(feature = "walk")]
pub fn list_source_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    use ignore::WalkBuilder;

    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        eyre::bail!("{} is neither a file nor a directory", root.display());
    }

    let walker = WalkBuilder::new(root)
        .follow_links(true)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(all(test, feature = "walk"))]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_single_file_root() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let file = dir.path().join("only.py");
        fs::write(&file, "x = 1\n").expect("failed to write fixture");

        let files = list_source_files(&file, DEFAULT_EXTENSION).expect("listing failed");
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_directory_root_filters_and_sorts() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir(dir.path().join("pkg")).expect("failed to create subdir");
        fs::write(dir.path().join("b.py"), "").expect("write");
        fs::write(dir.path().join("a.py"), "").expect("write");
        fs::write(dir.path().join("notes.txt"), "").expect("write");
        fs::write(dir.path().join("pkg/mod.py"), "").expect("write");

        let files = list_source_files(dir.path(), DEFAULT_EXTENSION).expect("listing failed");
        let names: Vec<String> = files
            .iter()
            .map(|p| {
                p.strip_prefix(dir.path())
                    .expect("under root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(names, vec!["a.py", "b.py", "pkg/mod.py"]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("nope");

        assert!(list_source_files(&missing, DEFAULT_EXTENSION).is_err());
    }
}
