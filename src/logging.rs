//! Debug logging setup.
//!
//! Logging is off by default. Set `DEBUG=0-3` to control verbosity
//! (0=off, 1=warn, 2=info, 3=debug); output goes to `filenav.log` in the
//! OS temp directory and can be followed with `tail -f`.

use anyhow::{Result, anyhow};
use tracing::Level;

/// Environment variable selecting the log level
pub const DEBUG_ENV: &str = "DEBUG";

/// Map a `DEBUG` value to a log level, `None` meaning logging is off
#[must_use]
pub const fn level_for_debug(debug_level: u8) -> Option<Level> {
    match debug_level {
        0 => None,
        1 => Some(Level::WARN),
        2 => Some(Level::INFO),
        _ => Some(Level::DEBUG),
    }
}

/// Read the `DEBUG` variable; missing or unparsable values mean 0
#[must_use]
pub fn debug_level_from_env() -> u8 {
    std::env::var(DEBUG_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(0)
}

/// Install a file logger according to `DEBUG`.
///
/// Returns `Ok(false)` when logging is disabled.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_from_env() -> Result<bool> {
    let Some(level) = level_for_debug(debug_level_from_env()) else {
        return Ok(false);
    };

    let log_path = crate::paths::log_path();
    let dir = log_path
        .parent()
        .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
    let file_appender = tracing_appender::rolling::never(dir, "filenav.log");

    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    tracing::info!(path = %log_path.display(), %level, "logging enabled");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, None)]
    #[case(1, Some(Level::WARN))]
    #[case(2, Some(Level::INFO))]
    #[case(3, Some(Level::DEBUG))]
    #[case(9, Some(Level::DEBUG))]
    fn test_level_for_debug(#[case] debug_level: u8, #[case] want: Option<Level>) {
        assert_eq!(level_for_debug(debug_level), want);
    }
}
