#![deny(missing_docs)]

//! Defines the output format of traces and events produced while
//! assertions run inside a test binary.

use std::{env, io, str::FromStr};
use tracing_subscriber::fmt;

pub use tracing_core::Level;

mod formatter;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Environment variable holding the level used by [`init_from_env`].
pub const LOG_ENV: &str = "GRAPHQL_EXPECT_LOG";

/// Initializes a global tracing subscriber writing to stderr.
///
/// Test binaries call this from many tests; only the first call installs a
/// subscriber and later calls are no-ops.
pub fn init(level: Option<Level>) {
    // by default, no logs are printed.
    if let Some(level) = level {
        formatter::least_verbose(level);
    }
}

/// Initializes logging at the level named by [`LOG_ENV`], if it is set to one
/// of [`LEVELS`].
pub fn init_from_env() {
    init(level_from(env::var(LOG_ENV).ok().as_deref()));
}

fn level_from(value: Option<&str>) -> Option<Level> {
    value.and_then(|value| Level::from_str(value.trim()).ok())
}

/// Initializes a pretty, multi-line subscriber for debugging a single test.
pub fn init_pretty(level: Level) {
    let format = fmt::format().without_time().pretty();
    let _ = fmt()
        .with_max_level(level)
        .event_format(format)
        .with_writer(io::stderr)
        .try_init();
}
