//! Optional process-wide default logger.
//!
//! The core [`Logger`](crate::Logger) is meant to be constructed and passed
//! explicitly; this module is a convenience for programs that want one
//! shared instance without threading it through every call site.

use crate::core::{Flags, Logger};
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide default.
///
/// Returns `false` if a default was already installed (including the lazy
/// fallback created by a prior [`global`] call); the passed logger is
/// dropped in that case.
pub fn init(logger: Logger) -> bool {
    GLOBAL.set(logger).is_ok()
}

/// The process-wide default logger.
///
/// If [`init`] was never called, falls back to a stderr-backed logger with
/// [`Flags::STD`] decoration.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(|| {
        let logger = Logger::to_writer(std::io::stderr());
        logger.set_flags(Flags::STD);
        logger
    })
}
