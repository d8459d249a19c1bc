//! Error types for build automation.
//!
//! Build failures reported by Nuitka itself are not errors here; the runner
//! mirrors the child's exit code instead. This module only covers conditions
//! that stop the tool before or around the compiler invocation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all bundler operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// Entry-point file missing at build time
    #[error("main file '{}' not found", .0.display())]
    MissingEntryPoint(PathBuf),

    /// Nuitka executable not found on PATH
    #[error("nuitka not found! Install with: pip install nuitka")]
    CompilerNotFound,

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
