//! Line emitter implementations

#[cfg(feature = "console")]
pub mod console;
pub mod file;
pub mod writer;

#[cfg(feature = "console")]
pub use console::ConsoleEmitter;
pub use file::FileEmitter;
pub use writer::WriterEmitter;
