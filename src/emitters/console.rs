//! Console emitter implementation

use super::writer::render_header;
use crate::core::{Flags, Level, LineEmitter, Result};
use colored::Colorize;
use parking_lot::RwLock;
use std::io::Write;
use std::panic::Location;

/// Emitter for interactive use: stdout for routine lines, stderr for
/// `ERRO`/`PANI`/`FATA`, with the severity tag colored when enabled.
///
/// The level is recovered from the line's leading four-letter tag, which
/// the tag/level bijection makes unambiguous.
pub struct ConsoleEmitter {
    use_colors: bool,
    flags: RwLock<Flags>,
}

impl ConsoleEmitter {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            flags: RwLock::new(Flags::NONE),
        }
    }

    fn colorize(&self, level: Level, line: &str) -> String {
        let tag = level.as_tag();
        if !self.use_colors || tag.is_empty() || !line.starts_with(tag) {
            return line.to_string();
        }
        format!(
            "{}{}",
            tag.color(level.color_code()),
            &line[tag.len()..]
        )
    }
}

impl Default for ConsoleEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineEmitter for ConsoleEmitter {
    fn emit(&self, line: &str, caller: &'static Location<'static>) -> Result<()> {
        let flags = *self.flags.read();
        let level = Level::from_tag(line.get(..4).unwrap_or(""));

        let mut output = render_header(flags, caller);
        output.push_str(&self.colorize(level, line));
        output.push('\n');

        match level {
            Level::Error | Level::Panic | Level::Fatal => {
                let stderr = std::io::stderr();
                let mut handle = stderr.lock();
                handle.write_all(output.as_bytes())?;
                handle.flush()?;
            }
            _ => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(output.as_bytes())?;
                handle.flush()?;
            }
        }
        Ok(())
    }

    fn set_flags(&self, flags: Flags) {
        *self.flags.write() = flags;
    }
}
