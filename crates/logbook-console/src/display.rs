//! Display sink capability.
//!
//! The session writes styled text through this trait and never learns
//! how it is rendered. Styled segments are opaque substrings; the sink
//! renders them without altering their boundaries.

/// A surface that accepts text output from the console.
pub trait DisplaySink {
    /// Append text without a trailing newline.
    fn write(&mut self, text: &str);

    /// Append text followed by a newline.
    fn write_line(&mut self, text: &str);

    /// Reset the surface to its initial blank state.
    fn clear(&mut self);
}

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkOp {
    Write(String),
    WriteLine(String),
    Clear,
}

/// A sink that records every call. Test double for the real display.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// All calls in order, including those before the last clear.
    pub ops: Vec<SinkOp>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten the recorded calls since the last clear into one string.
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            match op {
                SinkOp::Write(s) => out.push_str(s),
                SinkOp::WriteLine(s) => {
                    out.push_str(s);
                    out.push('\n');
                },
                SinkOp::Clear => out.clear(),
            }
        }
        out
    }
}

impl DisplaySink for RecordingSink {
    fn write(&mut self, text: &str) {
        self.ops.push(SinkOp::Write(text.to_string()));
    }

    fn write_line(&mut self, text: &str) {
        self.ops.push(SinkOp::WriteLine(text.to_string()));
    }

    fn clear(&mut self) {
        self.ops.push(SinkOp::Clear);
    }
}
