//! # taglog
//!
//! A minimal leveled logging facade with four-letter severity tags and
//! pluggable line emitters.
//!
//! ## Features
//!
//! - **Level Filtering**: six ordered severities plus a suppress-all
//!   threshold sentinel
//! - **Pluggable Emitters**: writer, console, file, or any
//!   [`LineEmitter`] implementation
//! - **Severity Effects**: `panic`/`fatal` write their line first, then
//!   unwind or exit
//! - **Thread Safe**: designed for shared use across threads
//!
//! ## Quick start
//!
//! ```
//! use taglog::{infof, Flags, Level, Logger};
//!
//! let logger = Logger::to_writer(std::io::stderr());
//! logger.set_level(Level::Info).set_flags(Flags::STD);
//!
//! logger.info("server starting");
//! infof!(logger, "listening on port {}", 8080);
//! logger.debug("dropped by the filter");
//! ```

pub mod core;
pub mod emitters;
pub mod global;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::emitters::ConsoleEmitter;
    pub use crate::emitters::{FileEmitter, WriterEmitter};
    pub use crate::core::{EmitError, Flags, Level, LineEmitter, Logger, Result};
}

#[cfg(feature = "console")]
pub use crate::emitters::ConsoleEmitter;
pub use crate::core::{EmitError, Flags, Level, LineEmitter, Logger, Result};
pub use crate::emitters::{FileEmitter, WriterEmitter};
pub use crate::global::{global, init};
