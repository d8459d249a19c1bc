//! Command assembly and Nuitka execution.
//!
//! Split the way the build runs: [`command`] turns a resolved configuration
//! into the ordered Nuitka argument list, [`runner`] validates, cleans, and
//! drives the compiler process.

mod command;
mod runner;

pub use command::{HostOs, assemble_args};
pub use runner::run_build;
