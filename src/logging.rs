//! Verbose diagnostics, written to stderr so they never mix with the board on stdout

use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose logging flag
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

/// Turns on verbose logging for the whole process
pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

/// Turns verbose logging back off
pub fn disable_verbose_logging() {
    VERBOSE_LOGGING.store(false, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

#[doc(hidden)]
pub fn write_log(message: String) {
    eprintln!("[connectn] {}", message);
}

/// Logs a formatted message when verbose logging is enabled
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            $crate::logging::write_log(format!($($arg)*));
        }
    };
}
