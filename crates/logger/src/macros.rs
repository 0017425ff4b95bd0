//! Level macros
//!
//! Thin conveniences over [`Logger::log`](crate::Logger::log): capture the
//! call site's file and line and accept `format!` arguments.
//!
//! ```
//! use jot_logger::{Logger, Severity, log_warn};
//!
//! let logger = Logger::with_level(Severity::Debug);
//! let missed = 3;
//! log_warn!(logger, "cache missed {missed} times");
//! ```

/// Log at an explicit severity with call-site location capture
#[macro_export]
macro_rules! jot_log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::LogRecord::new($severity, format!($($arg)+))
                .with_location(file!(), line!()),
        )
    };
}

/// Debug level logging
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::jot_log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Info level logging
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::jot_log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Warn level logging
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::jot_log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Error level logging
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::jot_log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Fatal level logging
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::jot_log!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}

#[cfg(test)]
#[path = "macros_test.rs"]
mod macros_test;
