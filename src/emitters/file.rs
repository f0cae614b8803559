//! File emitter implementation

use super::writer::WriterEmitter;
use crate::core::{EmitError, Flags, LineEmitter, Result};
use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::panic::Location;
use std::path::PathBuf;

/// Append-mode file emitter.
///
/// A thin wrapper over [`WriterEmitter`] with a buffered file writer;
/// each line is flushed through to the file as it is emitted, so a
/// `fatal` line reaches disk before the process exits.
#[derive(Debug)]
pub struct FileEmitter {
    inner: WriterEmitter<BufWriter<File>>,
}

impl FileEmitter {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| EmitError::file(path.to_string_lossy(), e.to_string()))?;

        Ok(Self {
            inner: WriterEmitter::new(BufWriter::new(file)),
        })
    }

    pub fn with_flags(path: impl Into<PathBuf>, flags: Flags) -> Result<Self> {
        let emitter = Self::new(path)?;
        emitter.set_flags(flags);
        Ok(emitter)
    }
}

impl LineEmitter for FileEmitter {
    fn emit(&self, line: &str, caller: &'static Location<'static>) -> Result<()> {
        self.inner.emit(line, caller)
    }

    fn set_flags(&self, flags: Flags) {
        self.inner.set_flags(flags)
    }
}
