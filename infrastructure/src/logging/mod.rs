//! Logging infrastructure: `tracing` subscriber setup.
//!
//! Hosts call [`init_tracing`] once at startup with a verbosity level.
//! `RUST_LOG`, when set, takes precedence over the verbosity level.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity level
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Build the filter, preferring `RUST_LOG` over the verbosity level.
pub fn filter_for_verbosity(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Install the global fmt subscriber.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(verbosity: u8) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for_verbosity(verbosity))
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(3), "trace");
        assert_eq!(level_for_verbosity(9), "trace");
    }

    #[test]
    fn test_second_init_is_rejected() {
        let _ = init_tracing(0);
        assert!(!init_tracing(1));
    }
}
