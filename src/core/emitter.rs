//! LineEmitter trait for log output destinations

use super::{error::Result, flags::Flags};
use std::panic::Location;

/// The line-writing collaborator the logger delegates actual I/O to.
///
/// `line` arrives fully composed as `<TAG> <message>`, without a
/// terminator; the emitter appends one line terminator and any decoration
/// (date, time, caller file:line) its current [`Flags`] call for. `caller`
/// is the call site of the public severity method that produced the line,
/// propagated via `#[track_caller]`, so location decoration points at user
/// code rather than the logger's internal dispatch.
///
/// Implementations must serialize writes from concurrent callers so that
/// each emitted line reaches the destination intact, never interleaved
/// mid-line with another.
pub trait LineEmitter: Send + Sync {
    fn emit(&self, line: &str, caller: &'static Location<'static>) -> Result<()>;
    fn set_flags(&self, flags: Flags);
}
