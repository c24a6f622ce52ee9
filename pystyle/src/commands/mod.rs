//! Command implementations invoked by the entry point.

mod init;
mod style;

pub use init::{run_init, run_init_in, DEFAULT_CONFIG};
pub use style::{
    run_style, style_file, style_paths, FileError, FileOutcome, StyleOptions, StyleReport,
};
