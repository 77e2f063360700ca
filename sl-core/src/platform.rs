//! Platform detection and OS-specific utilities.

use std::path::PathBuf;
use crate::error::{SlError, SlResult};

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Detect the current platform at compile time.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Get the platform-specific application data directory.
    ///
    /// - Windows: `%APPDATA%/SiteLink`
    /// - macOS: `~/Library/Application Support/SiteLink`
    /// - Linux: `~/.local/share/SiteLink`
    pub fn data_dir() -> SlResult<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| SlError::Config("could not determine data directory".into()))?;
        Ok(base.join("SiteLink"))
    }

    /// Get the platform-specific configuration directory.
    pub fn config_dir() -> SlResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| SlError::Config("could not determine config directory".into()))?;
        Ok(base.join("SiteLink"))
    }

    /// Get a human-readable platform name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        }
    }
}
