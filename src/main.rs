//! nuitka-bundle - Nuitka build automation for Python GUI applications.
//!
//! This binary resolves a build configuration (application name, GUI
//! framework, data directories) and drives the Nuitka compiler to produce
//! a standalone executable, mirroring the compiler's exit code.

use std::process;

use nuitka_bundle::cli;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
