#![cfg(feature = "std")]

//! Stderr log sink for the host binaries. Stdout stays free for boards and
//! the JSON line printed by `sim`.

use std::env;
use log::{LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

struct StderrSink;

impl log::Log for StderrSink {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static SINK: StderrSink = StderrSink;

/// Level named by `value` (`off`, `error` .. `trace`, any case), else `info`.
fn level_from(value: Option<String>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Route `log` records to stderr at the level set in `TWENTY48_LOG`.
/// Calling it again after a logger is installed does nothing.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV_VAR).ok());
    if log::set_logger(&SINK).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_info() {
        assert_eq!(level_from(None), LevelFilter::Info);
        assert_eq!(level_from(Some("loud".into())), LevelFilter::Info);
        assert_eq!(level_from(Some(" Debug ".into())), LevelFilter::Debug);
        assert_eq!(level_from(Some("off".into())), LevelFilter::Off);
    }
}
