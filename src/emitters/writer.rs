//! Generic writer emitter

use crate::core::{Flags, LineEmitter, Result};
use chrono::{Local, Utc};
use parking_lot::{Mutex, RwLock};
use std::io::Write;
use std::panic::Location;
use std::path::Path;

/// Line emitter over any writer.
///
/// Decorates each line with an optional header per the current [`Flags`],
/// in the order `date time[.micros] file:line: `, then the composed
/// `<TAG> <message>` body and a newline. With [`Flags::NONE`] the output
/// is exactly the body.
///
/// The writer sits behind a mutex, so concurrent emissions each land as
/// one intact line.
#[derive(Debug)]
pub struct WriterEmitter<W: Write + Send> {
    writer: Mutex<W>,
    flags: RwLock<Flags>,
}

impl<W: Write + Send> WriterEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_flags(writer, Flags::NONE)
    }

    pub fn with_flags(writer: W, flags: Flags) -> Self {
        Self {
            writer: Mutex::new(writer),
            flags: RwLock::new(flags),
        }
    }
}

/// Render the decoration header for one line; empty when no flag asks for
/// it. Shared by every emitter in this module.
pub(crate) fn render_header(flags: Flags, caller: &'static Location<'static>) -> String {
    let mut header = String::new();

    if flags.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS) {
        let mut fmt_str = String::new();
        if flags.contains(Flags::DATE) {
            fmt_str.push_str("%Y/%m/%d ");
        }
        if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
            fmt_str.push_str("%H:%M:%S");
            if flags.contains(Flags::MICROSECONDS) {
                fmt_str.push_str("%.6f");
            }
            fmt_str.push(' ');
        }
        if flags.contains(Flags::UTC) {
            header.push_str(&Utc::now().format(&fmt_str).to_string());
        } else {
            header.push_str(&Local::now().format(&fmt_str).to_string());
        }
    }

    if flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE) {
        let file = if flags.contains(Flags::SHORT_FILE) {
            // SHORT_FILE overrides LONG_FILE
            Path::new(caller.file())
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| caller.file().to_string())
        } else {
            caller.file().to_string()
        };
        header.push_str(&file);
        header.push(':');
        header.push_str(&caller.line().to_string());
        header.push_str(": ");
    }

    header
}

impl<W: Write + Send> LineEmitter for WriterEmitter<W> {
    fn emit(&self, line: &str, caller: &'static Location<'static>) -> Result<()> {
        let flags = *self.flags.read();

        let mut output = render_header(flags, caller);
        output.push_str(line);
        output.push('\n');

        let mut writer = self.writer.lock();
        writer.write_all(output.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn set_flags(&self, flags: Flags) {
        *self.flags.write() = flags;
    }
}
