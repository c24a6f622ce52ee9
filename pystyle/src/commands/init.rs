use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::constants::{CONFIG_FILENAME, PYPROJECT_FILENAME};

/// Contents of a freshly initialized `.pystyle.toml`.
pub const DEFAULT_CONFIG: &str = r#"
[pystyle]
# File extensions to style (without the dot)
extensions = ["py", "mys"]

# Path filters
exclude_folders = ["build", "dist", ".venv", ".git", "__pycache__", ".mypy_cache", ".pytest_cache"]
include_folders = []       # Force-include these folders even if excluded by default
"#;

/// Executes the init command in the current directory.
///
/// # Errors
///
/// Returns an error if the current directory is unavailable or the
/// configuration file cannot be written.
pub fn run_init<W: Write>(writer: &mut W) -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    run_init_in(&current_dir, writer)
}

/// Executes the init command in a specific directory.
///
/// An existing `.pystyle.toml`, or a `pyproject.toml` that already has a
/// `[tool.pystyle]` table, is left untouched.
///
/// # Errors
///
/// Returns an error if reading `pyproject.toml` or writing the new
/// configuration file fails.
pub fn run_init_in<W: Write>(root: &Path, writer: &mut W) -> Result<()> {
    writeln!(writer, "Initializing pystyle configuration...")?;

    let config_path = root.join(CONFIG_FILENAME);
    if config_path.exists() {
        writeln!(writer, "  • {CONFIG_FILENAME} already exists - skipping.")?;
        return Ok(());
    }

    let pyproject_path = root.join(PYPROJECT_FILENAME);
    if pyproject_path.exists() {
        let content = fs::read_to_string(&pyproject_path)
            .with_context(|| format!("Failed to read {}", pyproject_path.display()))?;
        if content.contains("[tool.pystyle]") {
            writeln!(
                writer,
                "  • {PYPROJECT_FILENAME} already contains [tool.pystyle] - skipping."
            )?;
            return Ok(());
        }
    }

    let mut file = fs::File::create(&config_path)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    writeln!(file, "{}", DEFAULT_CONFIG.trim())?;
    writeln!(
        writer,
        "  • Created {CONFIG_FILENAME} with default configuration."
    )?;

    writeln!(writer, "Initialization complete!")?;
    Ok(())
}
