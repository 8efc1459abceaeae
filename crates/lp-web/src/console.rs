//! `tracing-subscriber` writer for the browser console.
//!
//! Each formatted event is buffered and emitted as one console call when the
//! writer is dropped, routed to the console method matching the event level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
    Debug,
}

impl ConsoleMethod {
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            Level::DEBUG => Self::Log,
            Level::TRACE => Self::Debug,
        }
    }

    /// Write one line to the console, bypassing any subscriber.
    pub fn emit(self, message: &str) {
        let message = JsValue::from_str(message);
        match self {
            Self::Error => web_sys::console::error_1(&message),
            Self::Warn => web_sys::console::warn_1(&message),
            Self::Info => web_sys::console::info_1(&message),
            Self::Log => web_sys::console::log_1(&message),
            Self::Debug => web_sys::console::debug_1(&message),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMakeWriter;

impl ConsoleMakeWriter {
    pub fn new() -> Self {
        Self
    }
}

pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Buffered event text without the trailing newline, if any text was written.
fn buffered_line(buffer: &[u8]) -> Option<String> {
    let message = String::from_utf8_lossy(buffer);
    let message = message.trim_end();
    (!message.is_empty()).then(|| message.to_string())
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(message) = buffered_line(&self.buffer) {
            self.method.emit(&message);
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
    }
}
