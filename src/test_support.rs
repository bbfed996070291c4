//! Test-only logger that records error-level messages per thread.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

struct CaptureLogger;

thread_local! {
    static ERRORS: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Error
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        ERRORS.with(|errors| {
            if let Some(errors) = errors.borrow_mut().as_mut() {
                errors.push(record.args().to_string());
            }
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Runs `f` and returns its result with the error messages logged on
/// this thread meanwhile.
pub fn capture_errors<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Error);
        }
    });

    ERRORS.with(|errors| *errors.borrow_mut() = Some(Vec::new()));
    let result = f();
    let errors = ERRORS.with(|errors| errors.borrow_mut().take().unwrap_or_default());
    (result, errors)
}
