//! Log output setup
//!
//! Everything goes to stdout at `info` unless `RUST_LOG` says otherwise.

use env_logger::{Env, Target};
use log::LevelFilter;

pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("reqwest", LevelFilter::Warn)
        .filter_module("hyper_util", LevelFilter::Warn)
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_target(false)
        .init();
}

/// In-memory logger for asserting on emitted records
///
/// Records are kept per thread, so each `#[tokio::test]` (current-thread
/// runtime) only sees its own lines.
#[cfg(test)]
pub(crate) mod capture {
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;
    use std::sync::Once;

    struct CaptureLogger;

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    thread_local! {
        static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.with(|records| {
                records
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }

        fn flush(&self) {}
    }

    /// Install the logger (once per process) and clear this thread's records
    pub fn start() {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).expect("no other logger installed in tests");
            log::set_max_level(LevelFilter::Trace);
        });
        RECORDS.with(|records| records.borrow_mut().clear());
    }

    /// Messages logged on this thread at exactly `level`
    pub fn messages(level: Level) -> Vec<String> {
        RECORDS.with(|records| {
            records
                .borrow()
                .iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, message)| message.clone())
                .collect()
        })
    }
}
