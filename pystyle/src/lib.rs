//! Core library for the `pystyle` source styler.
//!
//! This library rewrites Python-syntax source files into a canonical layout
//! (sorted `from` imports at the top, normalized blank lines, a blank line
//! before every definition) while keeping every comment and deliberate
//! blank line the syntax tree does not record.

#![allow(clippy::similar_names, clippy::items_after_statements)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module containing the styling core: gap discovery, comment replay and reprinting.
pub mod style;

/// Module for loading configuration.
pub mod config;

/// Module containing utility functions.
/// This includes the line index and source file discovery.
pub mod utils;

/// Module defining the entry point logic shared by all binaries.
pub mod entry_point;

/// Module containing shared constants.
pub mod constants;

/// Module for rich CLI output formatting with colored text and progress bars.
pub mod output;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;
