//! Ordered Nuitka flag assembly.
//!
//! Flag order is fixed and platform branches are mutually exclusive per host.
//! Assembly is a pure function of the configuration, the host class, and the
//! discovered data directories, so every platform branch is testable on any
//! host.

use std::env::consts;

use crate::config::BuildConfig;

/// Host platform classes with distinct Nuitka flag surfaces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HostOs {
    Windows,
    MacOs,
    /// Everything else; no console-hiding or icon-embedding flags assumed.
    Other,
}

impl HostOs {
    /// Classifies the running host.
    pub fn current() -> Self {
        match consts::OS {
            "windows" => HostOs::Windows,
            "macos" => HostOs::MacOs,
            _ => HostOs::Other,
        }
    }
}

/// Assembles the Nuitka argument list for `config` on `host`.
///
/// The entry-point path is always the final positional argument.
pub fn assemble_args(config: &BuildConfig, host: HostOs) -> Vec<String> {
    assemble(config, host, &config.data_dirs())
}

fn assemble(config: &BuildConfig, host: HostOs, data_dirs: &[String]) -> Vec<String> {
    let mut args = vec![
        "--standalone".to_string(),
        format!("--output-dir={}", config.output_dir.display()),
    ];

    // Mode: onefile or directory bundle
    if config.onefile {
        args.push("--onefile".to_string());
    }

    // Console
    if !config.console {
        match host {
            HostOs::Windows => args.push("--windows-disable-console".to_string()),
            HostOs::MacOs => args.push("--macos-disable-console".to_string()),
            HostOs::Other => {}
        }
    }

    // Framework plugins
    for plugin in config.plugins() {
        args.push(format!("--enable-plugin={plugin}"));
    }

    // Data directories, mapped onto themselves inside the bundle
    for dir in data_dirs {
        args.push(format!("--include-data-dir={dir}={dir}"));
    }

    // Icon
    if let Some(icon) = &config.icon {
        match host {
            HostOs::Windows => {
                args.push(format!("--windows-icon-from-ico={}", icon.display()));
            }
            HostOs::MacOs => {
                args.push(format!("--macos-app-icon={}", icon.display()));
            }
            HostOs::Other => {}
        }
    }

    // Product metadata (Windows) / app bundle (macOS)
    match host {
        HostOs::Windows => {
            args.push(format!("--product-name={}", config.app_name));
            args.push(format!("--file-description={}", config.app_name));
            args.push("--file-version=1.0.0.0".to_string());
            args.push("--product-version=1.0.0.0".to_string());
        }
        HostOs::MacOs => {
            args.push("--macos-create-app-bundle".to_string());
            args.push(format!("--macos-app-name={}", config.app_name));
        }
        HostOs::Other => {}
    }

    // Trailing optimizations
    args.push("--assume-yes-for-downloads".to_string());
    args.push("--remove-output".to_string());

    args.push(config.main_file.display().to_string());

    args
}
