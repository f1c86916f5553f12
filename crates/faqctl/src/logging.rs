//! Logging setup for faqctl
//!
//! Logs go to stderr so answers on stdout stay clean for piping.
//! Level precedence: `RUST_LOG`, then `-v` count, then config `log.level`.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Filter directive for a `-v` count, falling back to the configured level
pub fn level_for(verbosity: u8, configured: &str) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8, configured: &str) {
    INIT.call_once(|| {
        let fallback = level_for(verbosity, configured);
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&fallback))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0, "error"), "error");
        assert_eq!(level_for(1, "error"), "info");
        assert_eq!(level_for(2, "error"), "debug");
        assert_eq!(level_for(7, "error"), "trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0, "warn");
        init(3, "not a level");
    }
}
