//! Command line interface for the Nuitka bundler.
//!
//! Argument parsing lives in [`args`]; `run` wires parsed arguments through
//! configuration resolution into the build runner.

mod args;

pub use args::Args;

use crate::builder;
use crate::config::BuildConfig;
use crate::error::Result;

/// Main CLI entry point.
///
/// Returns the process exit code: 0 on a successful build, the compiler's
/// own exit code on a failed one.
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let config = BuildConfig::resolve(&args)?;
    builder::run_build(&config).await
}
