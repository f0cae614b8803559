//! Main logger implementation

use super::{emitter::LineEmitter, flags::Flags, level::Level};
use parking_lot::RwLock;
use std::fmt;
use std::panic::Location;
use std::process;
use std::sync::Arc;

/// A leveled logger over an injected line emitter.
///
/// Every severity method funnels through one filter/render/emit procedure:
/// calls strictly below the minimum level are discarded before any
/// rendering; accepted calls are composed as `<TAG> <message>` and handed
/// to the emitter. `panic`/`panicf` additionally panic with the rendered
/// message after the write, and `fatal`/`fatalf` terminate the process with
/// status 1 — both only when the line was actually accepted by the filter.
///
/// A `Logger` is safe to share across threads. The minimum level is read
/// fresh on every call; a call racing a [`Logger::set_level`] may observe
/// either the old or the new threshold, which is accepted behavior for an
/// advisory setting. Atomicity of each written line is the emitter's
/// responsibility.
///
/// # Examples
///
/// ```
/// use taglog::{Flags, Level, Logger};
///
/// let logger = Logger::to_writer(std::io::stderr());
/// logger.set_level(Level::Info).set_flags(Flags::STD);
///
/// logger.debug("not emitted");
/// logger.info("starting up");
/// ```
pub struct Logger {
    min_level: RwLock<Level>,
    emitter: Arc<dyn LineEmitter>,
}

impl Logger {
    /// Bind a logger to an emitter. The minimum level starts at
    /// [`Level::Debug`], the most permissive setting.
    pub fn new(emitter: impl LineEmitter + 'static) -> Self {
        Self {
            min_level: RwLock::new(Level::Debug),
            emitter: Arc::new(emitter),
        }
    }

    /// Convenience constructor wrapping any writer in a
    /// [`WriterEmitter`](crate::emitters::WriterEmitter).
    pub fn to_writer(writer: impl std::io::Write + Send + 'static) -> Self {
        Self::new(crate::emitters::WriterEmitter::new(writer))
    }

    /// Set the minimum severity that will be emitted; returns `&self` for
    /// chaining. [`Level::None`] suppresses everything, including the
    /// panic and exit effects of `panic`/`fatal` calls.
    pub fn set_level(&self, level: Level) -> &Self {
        *self.min_level.write() = level;
        self
    }

    /// Forward decoration flags to the emitter; returns `&self` for
    /// chaining. The core does not interpret the bits.
    pub fn set_flags(&self, flags: Flags) -> &Self {
        self.emitter.set_flags(flags);
        self
    }

    /// The current minimum level.
    pub fn level(&self) -> Level {
        *self.min_level.read()
    }

    /// Whether a call at `level` would currently be emitted.
    ///
    /// [`Level::None`] is a threshold sentinel, never an emittable level.
    pub fn enabled(&self, level: Level) -> bool {
        level != Level::None && level >= *self.min_level.read()
    }

    /// Log a pre-rendered message at `level`.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<String>) {
        if !self.enabled(level) {
            return;
        }
        self.emit(level, message.into());
    }

    /// Log a formatted message at `level`. The arguments are rendered only
    /// after the level filter accepts the call.
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.emit(level, args.to_string());
    }

    /// The shared emission tail: compose `<TAG> <message>`, hand it to the
    /// emitter, then fire the severity effect. Callers have already passed
    /// the level filter.
    #[track_caller]
    fn emit(&self, level: Level, message: String) {
        let line = format!("{} {}", level.as_tag(), message);
        // Write failures are the sink's concern, not ours.
        let _ = self.emitter.emit(&line, Location::caller());

        match level {
            Level::Panic => panic!("{}", message),
            Level::Fatal => process::exit(1),
            _ => {}
        }
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warn, message);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    /// Log at [`Level::Panic`], then panic with the message as payload.
    ///
    /// The line is written before the unwind, and an enclosing
    /// `catch_unwind` can recover the message as a `String`. Below the
    /// threshold, neither the write nor the panic occurs.
    #[track_caller]
    pub fn panic(&self, message: impl Into<String>) {
        self.log(Level::Panic, message);
    }

    /// Log at [`Level::Fatal`], then terminate the process with status 1.
    ///
    /// Below the threshold, neither the write nor the exit occurs.
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(Level::Fatal, message);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warn, args);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args);
    }

    /// Formatted variant of [`Logger::panic`].
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Panic, args);
    }

    /// Formatted variant of [`Logger::fatal`].
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Fatal, args);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &*self.min_level.read())
            .finish_non_exhaustive()
    }
}
