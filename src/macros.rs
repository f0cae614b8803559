//! Logging macros for the format-string entry points.
//!
//! Each macro expands to the corresponding `*f` method with
//! `format_args!`, so arguments are rendered only when the call passes the
//! level filter, and caller-location decoration points at the macro use
//! site.
//!
//! # Examples
//!
//! ```
//! use taglog::{infof, Logger};
//!
//! let logger = Logger::to_writer(std::io::stderr());
//!
//! let port = 8080;
//! infof!(logger, "listening on port {}", port);
//! ```

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use taglog::Logger;
/// # let logger = Logger::to_writer(std::io::sink());
/// use taglog::{logf, Level};
/// logf!(logger, Level::Info, "simple message");
/// logf!(logger, Level::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a formatted warn-level message.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

/// Log a formatted error-level message.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log a formatted panic-level message, then panic with the rendered
/// message (only if the call passed the level filter).
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(format_args!($($arg)+))
    };
}

/// Log a formatted fatal-level message, then exit with status 1 (only if
/// the call passed the level filter).
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}
