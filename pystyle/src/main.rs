//! Main binary entry point for `pystyle`.
//!
//! This binary delegates to the shared `entry_point::run_with_args()` function
//! so that it behaves exactly like the `pystyle-cli` binary.

use anyhow::Result;

fn main() -> Result<()> {
    let code = pystyle::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
