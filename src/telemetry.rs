//! Tracing subscriber setup for host applications.
//!
//! The library itself only emits events (the preferences store warns on
//! storage failures); hosts call [`init`] once at startup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install a stdout fmt subscriber filtered by verbosity.
///
/// The `LOG` env var overrides the default directive. Returns quietly if a
/// global subscriber is already set, so embedding hosts keep theirs.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .with_env_var("LOG")
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
