//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so rendered pages and JSON on stdout stay clean.
//!
//! - 0 (no `-v`): warn
//! - 1 (`-v`): info
//! - 2 (`-vv`): debug
//! - 3+ (`-vvv`): trace
//!
//! `RUST_LOG` overrides the level chosen from the flags.

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init(verbosity: u8) {
    let filter = build_env_filter(level_for(verbosity));
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Other crates stay at warn.
        EnvFilter::new(format!("warn,creditview={level}", level = level_str))
    })
}
