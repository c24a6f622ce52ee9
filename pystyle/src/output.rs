use crate::commands::StyleReport;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// Print the exclusion list in styled format.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_exclusion_list(writer: &mut impl Write, folders: &[String]) -> std::io::Result<()> {
    if folders.is_empty() {
        let defaults = crate::constants::DEFAULT_EXCLUDE_FOLDERS();
        let mut sorted_defaults: Vec<&str> = defaults.iter().copied().collect();
        sorted_defaults.sort_unstable();
        writeln!(
            writer,
            "{} {}",
            "[OK] Using default exclusions only:".green(),
            sorted_defaults.join(", ").dimmed()
        )?;
    } else {
        writeln!(writer, "{} {}", "Excluding:".yellow().bold(), folders.join(", "))?;
    }
    Ok(())
}

/// Create a progress bar with file count.
///
/// In test mode, returns a hidden progress bar to avoid polluting test output.
#[must_use]
pub fn create_progress_bar(total_files: u64) -> ProgressBar {
    if cfg!(test) {
        return ProgressBar::hidden();
    }

    let pb =
        ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr_with_hz(20));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.set_message("styling...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "file"
    } else {
        "files"
    }
}

/// Print a styling report as human-readable, colored text.
///
/// Each changed file is listed unless `quiet` is set; errors and the
/// summary line are always printed.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_style_report(
    writer: &mut impl Write,
    report: &StyleReport,
    check: bool,
    quiet: bool,
) -> std::io::Result<()> {
    if !quiet {
        let verb = if check { "would reformat" } else { "reformatted" };
        for file in &report.changed {
            writeln!(writer, "{} {}", verb.yellow().bold(), file)?;
        }
    }

    for error in &report.errors {
        writeln!(
            writer,
            "{} {}: {}",
            "error:".red().bold(),
            error.file.bold(),
            error.error
        )?;
    }

    let changed = report.changed.len();
    let unchanged = report
        .files_checked
        .saturating_sub(changed + report.errors.len());
    let mut parts = Vec::new();
    if changed > 0 {
        let verb = if check {
            "would be reformatted"
        } else {
            "reformatted"
        };
        parts.push(format!("{changed} {} {verb}", plural(changed)).yellow().to_string());
    }
    if unchanged > 0 || parts.is_empty() {
        let verb = if check {
            "already formatted"
        } else {
            "left unchanged"
        };
        parts.push(format!("{unchanged} {} {verb}", plural(unchanged)).green().to_string());
    }
    if !report.errors.is_empty() {
        let failed = report.errors.len();
        parts.push(format!("{failed} {} failed", plural(failed)).red().to_string());
    }
    writeln!(writer, "{}", parts.join(", "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::FileError;

    fn render(report: &StyleReport, check: bool, quiet: bool) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_style_report(&mut out, report, check, quiet).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_lists_changed_files_and_summary() {
        let report = StyleReport {
            files_checked: 3,
            changed: vec!["a.py".to_owned()],
            errors: vec![],
        };
        let text = render(&report, true, false);
        assert!(text.contains("would reformat a.py"));
        assert!(text.contains("1 file would be reformatted, 2 files already formatted"));
    }

    #[test]
    fn test_quiet_report_keeps_errors_and_summary() {
        let report = StyleReport {
            files_checked: 2,
            changed: vec!["a.py".to_owned()],
            errors: vec![FileError {
                file: "b.py".to_owned(),
                error: "syntax error at 1:6: boom".to_owned(),
            }],
        };
        let text = render(&report, false, true);
        assert!(!text.contains("reformatted a.py"));
        assert!(text.contains("error: b.py: syntax error at 1:6: boom"));
        assert!(text.contains("1 file reformatted, 1 file failed"));
    }

    #[test]
    fn test_empty_report() {
        let text = render(&StyleReport::default(), false, false);
        assert_eq!(text, "0 files left unchanged\n");
    }

    #[test]
    fn test_exclusion_list_with_user_folders() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_exclusion_list(&mut out, &["legacy".to_owned(), "gen".to_owned()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Excluding: legacy, gen\n");
    }
}
