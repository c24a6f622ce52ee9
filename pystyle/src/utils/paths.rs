//! Path utilities for pystyle.
//!
//! This module consolidates all path-related logic for:
//! - Cross-platform path normalization
//! - Source file discovery with gitignore support

use crate::constants::DEFAULT_EXCLUDE_FOLDERS;
use std::path::{Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use pystyle::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\src\\main.py")), "src/main.py");
/// assert_eq!(normalize_display_path(Path::new("./src/lib.mys")), "src/lib.mys");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Checks if a name matches any exclusion pattern.
/// Supports exact matching and wildcard patterns starting with `*.`.
#[must_use]
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|exclude| {
        if exclude.starts_with("*.") {
            name.ends_with(&exclude[1..])
        } else {
            name == exclude
        }
    })
}

/// Collects source files to style under `root`, with gitignore support.
///
/// Uses the `ignore` crate to respect .gitignore, .git/info/exclude and the
/// global gitignore in addition to the default exclusions (venv, caches,
/// build output). A `root` that is itself a file is returned as-is,
/// whatever its extension.
///
/// # Arguments
/// * `root` - File or directory to search
/// * `exclude` - Additional user-specified exclusion patterns
/// * `include` - Folders to force-include (overrides excludes)
/// * `extensions` - File extensions (without dot) selected for styling
/// * `verbose` - Whether to print walk errors to stderr
#[must_use]
pub fn collect_source_files(
    root: &Path,
    exclude: &[String],
    include: &[String],
    extensions: &[String],
    verbose: bool,
) -> Vec<PathBuf> {
    use ignore::WalkBuilder;

    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let mut all_excludes: Vec<String> = exclude
        .iter()
        .cloned()
        .chain(DEFAULT_EXCLUDE_FOLDERS().iter().map(|&s| s.to_owned()))
        .collect();
    all_excludes.retain(|ex| !include.iter().any(|inc| ex == inc));

    let root_for_filter = root.to_path_buf();

    // Skip excluded directories at traversal time instead of filtering files later,
    // so we never descend into .venv, caches, etc.
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .filter_entry(move |entry| {
            if entry.path() == root_for_filter {
                return true;
            }
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !is_excluded(name, &all_excludes))
        })
        .build();

    let mut files = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let path = entry.path();
                let selected = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext));
                if selected {
                    files.push(path.to_path_buf());
                }
            }
            Err(e) => {
                // Ignore walk errors silently unless verbose
                if verbose {
                    eprintln!("Walk error: {e}");
                }
            }
        }
    }

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn exts() -> Vec<String> {
        vec!["py".to_owned(), "mys".to_owned()]
    }

    #[test]
    fn test_is_excluded_patterns() {
        let excludes = vec!["build".to_owned(), "*.egg-info".to_owned()];
        assert!(is_excluded("build", &excludes));
        assert!(is_excluded("pkg.egg-info", &excludes));
        assert!(!is_excluded("src", &excludes));
        assert!(!is_excluded("builder", &excludes));
    }

    #[test]
    fn test_collect_source_files_exclusion() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();

        fs::write(root.join("main.py"), "# main")?;
        fs::write(root.join("lib.mys"), "# lib")?;
        fs::write(root.join("notes.txt"), "not code")?;

        fs::create_dir_all(root.join(".venv"))?;
        fs::write(root.join(".venv/lib.py"), "# venv lib")?;

        fs::create_dir_all(root.join("__pycache__"))?;
        fs::write(root.join("__pycache__/cached.py"), "# cached")?;

        fs::create_dir_all(root.join("src"))?;
        fs::write(root.join("src/module.py"), "# module")?;

        fs::create_dir_all(root.join("generated"))?;
        fs::write(root.join("generated/out.py"), "# generated")?;

        let files = collect_source_files(root, &["generated".to_owned()], &[], &exts(), false);
        let names: Vec<String> = files
            .iter()
            .filter_map(|p| p.strip_prefix(root).ok())
            .map(normalize_display_path)
            .collect();

        assert_eq!(names, vec!["lib.mys", "main.py", "src/module.py"]);
        Ok(())
    }

    #[test]
    fn test_collect_source_files_force_include() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        fs::create_dir_all(root.join("build"))?;
        fs::write(root.join("build/keep.py"), "x = 1\n")?;

        let without = collect_source_files(root, &[], &[], &exts(), false);
        assert!(without.is_empty());

        let with = collect_source_files(root, &[], &["build".to_owned()], &exts(), false);
        assert_eq!(with.len(), 1);
        Ok(())
    }

    #[test]
    fn test_explicit_file_is_always_selected() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("script");
        fs::write(&file, "x = 1\n")?;

        let files = collect_source_files(&file, &[], &[], &exts(), false);
        assert_eq!(files, vec![file]);
        Ok(())
    }
}
