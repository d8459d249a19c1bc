//! Build configuration resolution.
//!
//! Turns raw CLI options into a fully-resolved [`BuildConfig`]. The
//! application name and GUI framework are derived from the working tree when
//! not supplied explicitly; data directories are discovered at call time and
//! never stored.

mod framework;

pub use framework::Framework;

use std::env;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::error::Result;

/// Conventional data directories bundled into the executable when present.
const DATA_DIR_CANDIDATES: &[&str] = &[
    "assets",
    "resources",
    "static",
    "images",
    "icons",
    "fonts",
    "themes",
];

/// Resolved build configuration.
///
/// Constructed once per invocation via [`BuildConfig::resolve`] and read-only
/// afterwards.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Entry-point Python file.
    pub main_file: PathBuf,

    /// Application name, explicit or derived.
    pub app_name: String,

    /// Icon file (.ico on Windows, .icns on macOS).
    pub icon: Option<PathBuf>,

    /// Keep the console window visible.
    pub console: bool,

    /// Produce a single executable instead of a directory bundle.
    pub onefile: bool,

    /// Remove previous build artifacts before building.
    pub clean: bool,

    /// GUI framework driving plugin selection.
    pub framework: Framework,

    /// Where Nuitka places the finished bundle.
    pub output_dir: PathBuf,

    /// Nuitka's intermediate build directory.
    pub build_dir: PathBuf,
}

impl BuildConfig {
    /// Resolves the configuration from parsed arguments and the working tree.
    ///
    /// # Errors
    ///
    /// Fails only if the current working directory cannot be determined.
    pub fn resolve(args: &Args) -> Result<Self> {
        let cwd = env::current_dir()?;

        let app_name = match &args.name {
            Some(name) => name.clone(),
            None => detect_app_name(&args.main, &cwd),
        };

        let framework = args
            .framework
            .unwrap_or_else(|| Framework::detect(&args.main));

        Ok(Self {
            main_file: args.main.clone(),
            app_name,
            icon: args.icon.clone(),
            console: args.console,
            onefile: args.onefile,
            clean: args.clean,
            framework,
            output_dir: PathBuf::from("dist"),
            build_dir: PathBuf::from("build"),
        })
    }

    /// Nuitka plugins to enable for the resolved framework.
    pub fn plugins(&self) -> &'static [&'static str] {
        self.framework.plugins()
    }

    /// Data directories present in the working directory, in candidate order.
    ///
    /// Checked against the filesystem on every call rather than cached at
    /// resolve time.
    pub fn data_dirs(&self) -> Vec<String> {
        discover_data_dirs(Path::new("."))
    }
}

/// Derives the application name from the entry file stem, falling back to
/// the working directory's name when the stem is the generic `main`.
fn detect_app_name(main_file: &Path, cwd: &Path) -> String {
    match main_file.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if stem != "main" => stem.to_string(),
        _ => cwd
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string(),
    }
}

/// Returns the subset of [`DATA_DIR_CANDIDATES`] existing as directories
/// under `root`, preserving candidate order.
fn discover_data_dirs(root: &Path) -> Vec<String> {
    DATA_DIR_CANDIDATES
        .iter()
        .filter(|dir| root.join(dir).is_dir())
        .map(|dir| dir.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn app_name_from_non_default_stem() {
        let name = detect_app_name(Path::new("app.py"), Path::new("/work/project"));
        assert_eq!(name, "app");
    }

    #[test]
    fn app_name_from_directory_for_default_stem() {
        let name = detect_app_name(Path::new("main.py"), Path::new("/work/project"));
        assert_eq!(name, "project");
    }

    #[test]
    fn app_name_uses_stem_of_nested_entry_path() {
        let name = detect_app_name(Path::new("src/gui/editor.py"), Path::new("/work/project"));
        assert_eq!(name, "editor");
    }

    #[test]
    fn data_dirs_are_the_existing_subset_in_fixed_order() {
        let root = tempdir().unwrap();
        // Created out of candidate order on purpose
        std::fs::create_dir(root.path().join("fonts")).unwrap();
        std::fs::create_dir(root.path().join("assets")).unwrap();
        // A plain file with a candidate name must not count
        std::fs::write(root.path().join("static"), b"not a dir").unwrap();

        let dirs = discover_data_dirs(root.path());
        assert_eq!(dirs, vec!["assets".to_string(), "fonts".to_string()]);
    }

    #[test]
    fn data_dirs_empty_when_none_exist() {
        let root = tempdir().unwrap();
        assert!(discover_data_dirs(root.path()).is_empty());
    }
}
