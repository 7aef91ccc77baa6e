use crate::Level;

use tracing_subscriber::fmt;

pub(crate) fn least_verbose(level: Level) {
    let format = fmt::format().without_time().with_target(false).compact();
    // a subscriber may already be installed by another test in this binary
    let _ = fmt()
        .with_max_level(level)
        .event_format(format)
        .with_test_writer()
        .try_init();
}
