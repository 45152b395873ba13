//! Platform-agnostic input event types.
//!
//! Every input source maps its native key data to these events. The
//! console core never sees raw platform input.

/// The escape marker that introduces a directional sequence.
pub const ESCAPE_MARKER: char = '\u{1b}';

/// A discrete input event delivered to the console.
///
/// An event carries either a single character (printable or control)
/// or an escape marker together with the suffix characters that arrived
/// in the same payload. A suffix shorter than two characters means the
/// source could not complete the sequence; the console ignores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEvent {
    /// A single key press: printable character or control code.
    Key(char),
    /// An escape marker plus the immediate suffix from the same payload.
    Escape(String),
}

/// Chunk a raw input payload into discrete events.
///
/// An escape marker consumes the next two characters of the same
/// payload as its suffix, even when those characters would otherwise
/// be printable. A marker at the end of the payload yields an escape
/// event with whatever suffix remains (possibly empty).
pub fn chunk_events(payload: &str) -> Vec<RawEvent> {
    let mut events = Vec::new();
    let mut chars = payload.chars();
    while let Some(ch) = chars.next() {
        if ch == ESCAPE_MARKER {
            let mut suffix = String::new();
            for _ in 0..2 {
                if let Some(s) = chars.next() {
                    suffix.push(s);
                }
            }
            events.push(RawEvent::Escape(suffix));
        } else {
            events.push(RawEvent::Key(ch));
        }
    }
    events
}
