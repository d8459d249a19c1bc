//! Command line argument parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Framework;

/// Nuitka build automation for Python GUI applications
#[derive(Parser, Debug)]
#[command(
    name = "nuitka-bundle",
    version,
    about = "Build Python GUI applications into standalone executables with Nuitka",
    long_about = "Packages a Python GUI application into a standalone executable using Nuitka.

Detects the application name and GUI framework from the entry point, bundles
conventional data directories (assets, resources, ...), and applies the
platform-appropriate console, icon, and metadata flags.

Usage:
  nuitka-bundle
  nuitka-bundle --main app.py --onefile --clean
  nuitka-bundle --name MyApp --icon app.ico --framework pyqt6

Exit code 0 = build succeeded; a failed compile mirrors Nuitka's exit code."
)]
pub struct Args {
    /// Application name (default: detected from the main file or directory)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Entry point file
    #[arg(long, value_name = "PATH", default_value = "main.py")]
    pub main: PathBuf,

    /// Icon file path (.ico for Windows, .icns for macOS)
    #[arg(long, value_name = "PATH")]
    pub icon: Option<PathBuf>,

    /// Enable the console window (disabled by default for GUI apps)
    #[arg(long)]
    pub console: bool,

    /// Create a single executable (slower startup)
    #[arg(long)]
    pub onefile: bool,

    /// Clean build artifacts before building
    #[arg(long)]
    pub clean: bool,

    /// GUI framework for plugin selection (auto-detected if not specified)
    #[arg(long, value_enum, value_name = "FRAMEWORK")]
    pub framework: Option<Framework>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
