//! GUI framework identification and Nuitka plugin mapping.

use std::fmt;
use std::fs;
use std::path::Path;

use clap::ValueEnum;

/// GUI frameworks recognized by the bundler.
///
/// A closed set: `--framework` values parse directly into this enum, and
/// every variant maps to a (possibly empty) Nuitka plugin list.
#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Framework {
    /// Qt bindings via PySide6 (the default).
    Pyside6,
    /// Qt bindings via PyQt6.
    Pyqt6,
    /// Qt bindings via PyQt5.
    Pyqt5,
    /// Generic Qt, resolved to the PySide6 plugin.
    Qt,
    /// CustomTkinter.
    Ctk,
    /// Plain tkinter from the standard library.
    Tkinter,
    /// Flet.
    Flet,
}

impl Framework {
    /// Nuitka plugins to enable for this framework.
    ///
    /// Frameworks without a dedicated plugin resolve to an empty list rather
    /// than an error; tkinter needs no plugin, Nuitka picks it up itself.
    pub fn plugins(self) -> &'static [&'static str] {
        match self {
            Framework::Pyside6 | Framework::Qt => &["pyside6"],
            Framework::Pyqt6 => &["pyqt6"],
            Framework::Pyqt5 => &["pyqt5"],
            Framework::Ctk => &["tk-inter"],
            Framework::Tkinter | Framework::Flet => &[],
        }
    }

    /// Detects the framework from the entry file's raw text.
    ///
    /// Best-effort: an unreadable file falls back to the default without
    /// failing the build.
    pub fn detect(main_file: &Path) -> Self {
        match fs::read_to_string(main_file) {
            Ok(content) => Self::from_source(&content),
            Err(e) => {
                log::debug!(
                    "could not read {} for framework detection ({}), assuming pyside6",
                    main_file.display(),
                    e
                );
                Framework::Pyside6
            }
        }
    }

    /// Matches framework tokens in fixed priority order; first hit wins.
    ///
    /// This is a raw substring scan, not a parser, so a comment mentioning a
    /// framework counts as a hit. `customtkinter` is checked before `tkinter`
    /// because the former contains the latter.
    fn from_source(content: &str) -> Self {
        if content.contains("PySide6") || content.contains("pyside6") {
            Framework::Pyside6
        } else if content.contains("PyQt6") {
            Framework::Pyqt6
        } else if content.contains("PyQt5") {
            Framework::Pyqt5
        } else if content.contains("customtkinter") || content.contains("ctk") {
            Framework::Ctk
        } else if content.contains("flet") {
            Framework::Flet
        } else if content.contains("tkinter") {
            Framework::Tkinter
        } else {
            Framework::Pyside6
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Framework::Pyside6 => "pyside6",
            Framework::Pyqt6 => "pyqt6",
            Framework::Pyqt5 => "pyqt5",
            Framework::Qt => "qt",
            Framework::Ctk => "ctk",
            Framework::Tkinter => "tkinter",
            Framework::Flet => "flet",
        };
        f.write_str(name)
    }
}
