//! Logger setup for native binaries.

use crate::config::LogLevel;

/// Install `env_logger` at `level`. `RUST_LOG` still takes precedence, and
/// calling this more than once is harmless.
pub fn init(level: LogLevel) {
    let result = env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}
