//! Logging setup.
//!
//! Formats `tracing` events with `tracing-subscriber` and forwards each line
//! to the browser console method matching its level.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

use crate::config::LOG_LEVEL;

/// Install the global subscriber. Later calls are ignored.
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(LOG_LEVEL)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(level = %LOG_LEVEL, "logging initialized");
    }
}

struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event; flushed to the console on drop.
struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let value = wasm_bindgen::JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            Level::INFO => web_sys::console::info_1(&value),
            _ => web_sys::console::log_1(&value),
        }
    }
}
