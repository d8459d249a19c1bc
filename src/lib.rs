//! Build automation library for packaging Python GUI applications with Nuitka.
//!
//! The pipeline is a single sequential pass:
//! 1. Resolve a [`config::BuildConfig`] from CLI flags plus filesystem
//!    heuristics (app name, GUI framework, data directories)
//! 2. Assemble the ordered Nuitka argument list for the host platform
//! 3. Run Nuitka as a child process and report its exit code
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, Result};
