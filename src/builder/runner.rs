//! Build execution: validation, the clean step, and the Nuitka child process.

use std::io;
use std::path::Path;

use tokio::fs;
use tokio::process::Command;

use super::command::{HostOs, assemble_args};
use crate::config::BuildConfig;
use crate::error::{BundlerError, Result};

/// Runs a Nuitka build for the resolved configuration.
///
/// Validates the entry point, performs the optional clean step, locates the
/// `nuitka` executable, then runs it with inherited stdio and blocks until it
/// exits. Returns the exit code to report: 0 on success, the compiler's own
/// code on a failed compile.
///
/// # Errors
///
/// [`BundlerError::MissingEntryPoint`] if the entry file is absent (checked
/// before any subprocess work) and [`BundlerError::CompilerNotFound`] if the
/// `nuitka` executable cannot be located at invocation time.
pub async fn run_build(config: &BuildConfig) -> Result<i32> {
    if !config.main_file.exists() {
        return Err(BundlerError::MissingEntryPoint(config.main_file.clone()));
    }

    if config.clean {
        println!("🧹 Cleaning previous build artifacts...");
        clean_artifacts(config).await?;
    }

    let nuitka = which::which("nuitka").map_err(|e| {
        log::debug!("nuitka not found in PATH: {}", e);
        BundlerError::CompilerNotFound
    })?;
    log::debug!("Found nuitka at: {}", nuitka.display());

    let args = assemble_args(config, HostOs::current());

    println!("🚀 Building '{}' with Nuitka...", config.app_name);
    println!("📦 Framework: {}", config.framework);
    println!("📁 Output: {}", config.output_dir.display());
    println!("\n💻 Command:\n{} {}\n", nuitka.display(), args.join(" "));

    let status = Command::new(&nuitka)
        .args(&args)
        .status()
        .await
        .map_err(|e| match e.kind() {
            // The executable can disappear between lookup and exec
            io::ErrorKind::NotFound => BundlerError::CompilerNotFound,
            _ => BundlerError::Io(e),
        })?;

    if status.success() {
        println!(
            "\n✅ Build successful! Output in '{}'",
            config.output_dir.display()
        );
        Ok(0)
    } else {
        let code = status.code().unwrap_or(1);
        println!("\n❌ Build failed with exit code {}", code);
        Ok(code)
    }
}

/// Removes the output and intermediate build directories.
async fn clean_artifacts(config: &BuildConfig) -> Result<()> {
    remove_dir_all(&config.output_dir).await?;
    remove_dir_all(&config.build_dir).await
}

/// Removes the directory and its contents if it exists.
async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Framework;
    use tempfile::tempdir;

    fn config_in(root: &Path) -> BuildConfig {
        BuildConfig {
            main_file: root.join("main.py"),
            app_name: "app".to_string(),
            icon: None,
            console: false,
            onefile: false,
            clean: true,
            framework: Framework::Tkinter,
            output_dir: root.join("dist"),
            build_dir: root.join("build"),
        }
    }

    #[tokio::test]
    async fn missing_entry_point_fails_before_any_subprocess() {
        let dir = tempdir().unwrap();
        let err = run_build(&config_in(dir.path())).await.unwrap_err();
        assert!(matches!(err, BundlerError::MissingEntryPoint(_)));
    }

    #[tokio::test]
    async fn clean_removes_output_and_build_dirs() {
        let dir = tempdir().unwrap();
        let cfg = config_in(dir.path());
        std::fs::create_dir(&cfg.output_dir).unwrap();
        std::fs::write(cfg.output_dir.join("old.bin"), b"stale").unwrap();
        std::fs::create_dir(&cfg.build_dir).unwrap();

        clean_artifacts(&cfg).await.unwrap();

        assert!(!cfg.output_dir.exists());
        assert!(!cfg.build_dir.exists());
    }

    #[tokio::test]
    async fn clean_is_idempotent_when_dirs_are_absent() {
        let dir = tempdir().unwrap();
        let cfg = config_in(dir.path());

        clean_artifacts(&cfg).await.unwrap();
        clean_artifacts(&cfg).await.unwrap();
    }
}
