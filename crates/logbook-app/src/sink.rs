//! Stdout-backed display sink.
//!
//! The terminal runs in raw mode, so line endings are written as
//! `\r\n` explicitly. Sink calls are best-effort; a failed stdout
//! write cannot be reported anywhere useful from here.

use std::io::{Stdout, Write, stdout};

use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use logbook_console::DisplaySink;

/// Display sink writing to the process stdout.
pub struct StdoutSink {
    out: Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { out: stdout() }
    }

    fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            log::warn!("stdout flush failed: {e}");
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for StdoutSink {
    fn write(&mut self, text: &str) {
        let _ = self.out.queue(Print(text));
        self.flush();
    }

    fn write_line(&mut self, text: &str) {
        let _ = self.out.queue(Print(text));
        let _ = self.out.queue(Print("\r\n"));
        self.flush();
    }

    fn clear(&mut self) {
        let _ = self.out.queue(Clear(ClearType::All));
        let _ = self.out.queue(MoveTo(0, 0));
        self.flush();
    }
}
