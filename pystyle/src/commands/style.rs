use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::style::format_source;
use crate::utils::{collect_source_files, normalize_display_path};

/// Options controlling a styling run.
#[derive(Debug, Clone, Default)]
pub struct StyleOptions {
    /// Report files that would change instead of rewriting them.
    pub check: bool,
    /// Emit the report as JSON.
    pub json: bool,
    /// Only print errors and the summary line.
    pub quiet: bool,
    /// Print `[VERBOSE]` diagnostics to stderr.
    pub verbose: bool,
    /// Folders skipped during discovery, on top of the defaults.
    pub exclude_folders: Vec<String>,
    /// Folders walked even when excluded.
    pub include_folders: Vec<String>,
    /// File extensions selected for styling.
    pub extensions: Vec<String>,
}

/// What styling did to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    /// The file already had canonical layout.
    Unchanged,
    /// The file was rewritten (or would be, in check mode).
    Changed,
}

/// A file that could not be styled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    /// Display path of the file.
    pub file: String,
    /// The error, including its context chain.
    pub error: String,
}

/// Summary of a styling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleReport {
    /// Number of files discovered and processed.
    pub files_checked: usize,
    /// Display paths of files that changed (or would change).
    pub changed: Vec<String>,
    /// Files that failed to read, parse or write.
    pub errors: Vec<FileError>,
}

impl StyleReport {
    /// Exit code for this report: 1 on any error, or when `check` is set
    /// and a file would change; 0 otherwise.
    #[must_use]
    pub fn exit_code(&self, check: bool) -> i32 {
        i32::from(!self.errors.is_empty() || (check && !self.changed.is_empty()))
    }
}

/// Styles one file in place.
///
/// The file is only written when the styled text differs from what is on
/// disk, and never when `write` is false.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or cannot
/// be written back.
pub fn style_file(path: &Path, write: bool) -> Result<FileOutcome> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let styled = format_source(&source)?;
    if styled == source {
        return Ok(FileOutcome::Unchanged);
    }
    if write {
        fs::write(path, &styled)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(FileOutcome::Changed)
}

/// Discovers every source file under `paths` and styles them in parallel.
///
/// A failing file is recorded in the report and does not stop the others.
#[must_use]
pub fn style_paths(paths: &[PathBuf], options: &StyleOptions) -> StyleReport {
    let mut files: Vec<PathBuf> = paths
        .iter()
        .flat_map(|path| {
            collect_source_files(
                path,
                &options.exclude_folders,
                &options.include_folders,
                &options.extensions,
                options.verbose,
            )
        })
        .collect();
    files.sort();
    files.dedup();

    if options.verbose && !options.json {
        eprintln!("[VERBOSE] Found {} files to style", files.len());
    }

    let show_progress = !options.json && !options.quiet;
    let pb = if show_progress {
        crate::output::create_progress_bar(files.len() as u64)
    } else {
        indicatif::ProgressBar::hidden()
    };

    let results: Vec<(PathBuf, Result<FileOutcome>)> = files
        .par_iter()
        .map(|file| {
            let outcome = style_file(file, !options.check);
            pb.inc(1);
            (file.clone(), outcome)
        })
        .collect();
    pb.finish_and_clear();

    let mut report = StyleReport {
        files_checked: results.len(),
        ..StyleReport::default()
    };
    for (file, outcome) in results {
        let display = normalize_display_path(&file);
        match outcome {
            Ok(FileOutcome::Changed) => {
                if options.verbose && !options.json {
                    eprintln!("[VERBOSE] Changed: {display}");
                }
                report.changed.push(display);
            }
            Ok(FileOutcome::Unchanged) => {
                if options.verbose && !options.json {
                    eprintln!("[VERBOSE] Unchanged: {display}");
                }
            }
            Err(e) => report.errors.push(FileError {
                file: display,
                error: format!("{e:#}"),
            }),
        }
    }
    report
}

/// Runs the styler over `paths` and prints the report.
///
/// Returns the process exit code.
///
/// # Errors
///
/// Returns an error if writing the report fails.
pub fn run_style<W: Write>(
    paths: &[PathBuf],
    options: &StyleOptions,
    writer: &mut W,
) -> Result<i32> {
    let start = Instant::now();
    let report = style_paths(paths, options);

    if options.verbose && !options.json {
        eprintln!(
            "[VERBOSE] Styling completed in {:.2}s",
            start.elapsed().as_secs_f64()
        );
    }

    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        crate::output::print_style_report(writer, &report, options.check, options.quiet)?;
    }

    Ok(report.exit_code(options.check))
}
