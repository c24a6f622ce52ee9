use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.pystyle.toml):
  Create this file in your project root to set defaults
  (or use a [tool.pystyle] table in pyproject.toml).

  [pystyle]
  extensions = [\"py\", \"mys\"]          # File extensions to style
  exclude_folders = [\"build\", \"dist\"]  # Folders to skip
  include_folders = [\"src\"]            # Force-include these
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output a JSON report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output for debugging (shows files being styled).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: only print errors and the final summary.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "pystyle - Comment-preserving styler for Python-syntax sources",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute.
    pub command: Option<Commands>,

    /// Files or directories to style.
    /// When no paths are provided, defaults to the current directory.
    pub paths: Vec<PathBuf>,

    /// Don't write files back; exit with code 1 if any file would change.
    #[arg(long)]
    pub check: bool,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,

    /// Folders to exclude from styling.
    #[arg(long, alias = "exclude-folder")]
    pub exclude_folders: Vec<String>,

    /// Folders to force-include (overrides default exclusions).
    #[arg(long, alias = "include-folder")]
    pub include_folders: Vec<String>,

    /// File extensions to style, without the dot (overrides config).
    #[arg(long, value_delimiter = ',')]
    pub extensions: Vec<String>,
}

#[derive(Subcommand, Debug)]
/// Available subcommands.
pub enum Commands {
    /// Write a default .pystyle.toml into the current directory.
    Init,
}
