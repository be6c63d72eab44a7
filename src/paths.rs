//! Platform-specific filesystem path helpers.

use std::ffi::OsString;
use std::path::PathBuf;

/// Path to the debug log file, in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("filenav.log")
}

#[cfg(not(windows))]
fn home_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("HOME").map(PathBuf::from)
}

#[cfg(windows)]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("APPDATA")
        .or_else(|| var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(not(windows))]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            home_dir_from(var_os).map(|home| {
                #[cfg(target_os = "macos")]
                {
                    home.join("Library").join("Application Support")
                }

                #[cfg(not(target_os = "macos"))]
                {
                    home.join(".config")
                }
            })
        })
}

/// Resolve the user configuration directory for the current platform.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    config_dir_from(&mut var_os)
}
