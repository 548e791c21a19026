mod loader;
pub mod template;

use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Serialize};

use crate::browse::{BIF_BROWSEINCLUDEFILES, BIF_NEWDIALOGSTYLE, BIF_RETURNONLYFSDIRS};
use crate::execute::ShowCommand;
use crate::log::LogConfig;
use crate::notify::BalloonKind;

pub use loader::{config_dir, config_path, load, try_load};

/// Parses a unit-enum value by the name it has in `config.toml`,
/// ignoring ASCII case.
pub fn parse_name<T: DeserializeOwned>(name: &str) -> Option<T> {
    let lower = name.to_ascii_lowercase();
    let de: StrDeserializer<'_, ValueError> = lower.as_str().into_deserializer();
    T::deserialize(de).ok()
}

/// Balloon timeout range the shell honours, in milliseconds.
pub const BALLOON_TIMEOUT_MIN_MS: u32 = 10_000;
pub const BALLOON_TIMEOUT_MAX_MS: u32 = 30_000;

/// Top-level configuration for the `shellbind` CLI.
///
/// Loaded from `~/.config/shellbind/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File logging.
    pub log: LogConfig,
    /// Defaults for `shellbind open`.
    pub open: OpenConfig,
    /// Defaults for `shellbind browse`.
    pub browse: BrowseConfig,
    /// Defaults for `shellbind notify`.
    pub tray: TrayConfig,
}

/// `ShellExecuteW` defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenConfig {
    /// Window state passed as `nShowCmd`.
    pub show: ShowCommand,
}

/// Folder-browse dialog defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Instruction text shown above the folder tree.
    pub title: String,
    /// Use the resizable dialog with a "Make New Folder" button.
    pub new_dialog_style: bool,
    /// Also list files, not only folders.
    pub include_files: bool,
}

/// Notification-area defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    /// Icon identifier, unique per window.
    pub id: u32,
    /// Hover tooltip.
    pub tooltip: String,
    /// Balloon icon: "none", "info", "warning", "error", or "user".
    pub kind: BalloonKind,
    /// Suppress the balloon sound.
    pub silent: bool,
    /// Balloon timeout in milliseconds (clamped to 10–30 s).
    pub timeout_ms: u32,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            title: "Select a folder".into(),
            new_dialog_style: true,
            include_files: false,
        }
    }
}

impl BrowseConfig {
    /// Returns the `BIF_*` flags for these settings.
    pub fn flags(&self) -> u32 {
        let mut flags = BIF_RETURNONLYFSDIRS;
        if self.new_dialog_style {
            flags |= BIF_NEWDIALOGSTYLE;
        }
        if self.include_files {
            flags |= BIF_BROWSEINCLUDEFILES;
        }
        flags
    }
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            id: 1,
            tooltip: "shellbind".into(),
            kind: BalloonKind::Info,
            silent: false,
            timeout_ms: 10_000,
        }
    }
}

impl Config {
    /// Clamps values to the ranges the shell accepts.
    pub fn validate(&mut self) {
        self.tray.timeout_ms = self
            .tray
            .timeout_ms
            .clamp(BALLOON_TIMEOUT_MIN_MS, BALLOON_TIMEOUT_MAX_MS);
    }
}

#[cfg(test)]
mod tests;
