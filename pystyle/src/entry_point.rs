use crate::cli::{Cli, Commands};
use crate::commands::StyleOptions;
use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Runs the styler (or a subcommand) with the given arguments.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run pystyle with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if the command execution fails or output cannot be written.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["pystyle".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    if let Some(Commands::Init) = cli_var.command {
        crate::commands::run_init(writer)?;
        return Ok(0);
    }

    let paths = if cli_var.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli_var.paths
    };
    for path in &paths {
        if !path.exists() {
            eprintln!(
                "Error: The file or directory '{}' does not exist.",
                path.display()
            );
            return Ok(1);
        }
    }

    // Load config from the first path
    let config_path = paths.first().map_or(Path::new("."), PathBuf::as_path);
    let config = crate::config::Config::load_from_path(config_path);

    let mut exclude_folders = config.pystyle.exclude_folders.clone().unwrap_or_default();
    exclude_folders.extend(cli_var.exclude_folders);

    let mut include_folders = config.pystyle.include_folders.clone().unwrap_or_default();
    include_folders.extend(cli_var.include_folders);

    let extensions = if cli_var.extensions.is_empty() {
        config.pystyle.extensions_or_default()
    } else {
        cli_var
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_owned())
            .collect()
    };

    let options = StyleOptions {
        check: cli_var.check,
        json: cli_var.output.json,
        quiet: cli_var.output.quiet,
        verbose: cli_var.output.verbose,
        exclude_folders,
        include_folders,
        extensions,
    };

    if !options.json && !options.quiet {
        crate::output::print_exclusion_list(writer, &options.exclude_folders).ok();
    }

    if options.verbose && !options.json {
        eprintln!("[VERBOSE] pystyle v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("[VERBOSE] Using {} threads", rayon::current_num_threads());
        eprintln!("[VERBOSE] Configuration:");
        match &config.config_file_path {
            Some(file) => eprintln!("   Config file: {}", file.display()),
            None => eprintln!("   Config file: (defaults)"),
        }
        eprintln!("   Check only: {}", options.check);
        eprintln!("   Paths: {paths:?}");
        eprintln!("   Extensions: {:?}", options.extensions);
        if !options.exclude_folders.is_empty() {
            eprintln!("   Exclude folders: {:?}", options.exclude_folders);
        }
        if !options.include_folders.is_empty() {
            eprintln!("   Include folders: {:?}", options.include_folders);
        }
        eprintln!();
    }

    crate::commands::run_style(&paths, &options, writer)
}
