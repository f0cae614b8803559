//! Core logger types and traits

pub mod emitter;
pub mod error;
pub mod flags;
pub mod level;
pub mod logger;

pub use emitter::LineEmitter;
pub use error::{EmitError, Result};
pub use flags::Flags;
pub use level::Level;
pub use logger::Logger;
