//! Tracing subscriber setup for status messages

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map the `-q`/`-v` flags to the default log level
pub const fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::WARN;
    }
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a stderr subscriber; `RUST_LOG` directives are honoured on top of `level`
///
/// Returns `false` when a global subscriber was already installed.
pub fn init(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
