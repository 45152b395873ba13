//! Line-editing state machine.
//!
//! Classifies each raw event as a printable character, control key, or
//! escape sequence, and mutates the line buffer and recall history
//! accordingly. Methods return a description of the required display
//! side effects instead of performing them, so a thin adapter can do
//! the actual sink calls.

use logbook_types::RawEvent;

/// Carriage return, ends the line.
const CR: char = '\r';
/// Backspace control code.
const BS: char = '\u{8}';
/// Delete control code, treated as backspace.
const DEL: char = '\u{7f}';

/// A display side effect requested by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write text verbatim, no trailing newline.
    Echo(String),
    /// Visually erase the last `n` characters (back, space, back).
    Erase(usize),
    /// Advance the display to a fresh line.
    Newline,
}

/// What the processed event did to the current line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The line is still being edited.
    None,
    /// The line ended but was empty or whitespace-only; re-prompt only.
    Empty,
    /// A command line was finalized, upper-cased and ready to dispatch.
    Command(String),
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    /// Display side effects, in order.
    pub effects: Vec<Effect>,
    /// Whether the event finalized a line.
    pub submission: Submission,
}

impl Update {
    fn edit(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            submission: Submission::None,
        }
    }
}

/// The line-editing state machine.
///
/// Owns the in-progress line buffer and the recall history. The
/// history cursor ranges over `[0, history.len()]`, where `len` means
/// "no entry selected, the buffer is authoritative".
#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: String,
    history: Vec<String>,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current line buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Previously submitted lines, oldest first, raw trimmed form.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Process one raw event and describe the required display output.
    pub fn handle_event(&mut self, event: &RawEvent) -> Update {
        match event {
            RawEvent::Key(CR) => self.submit(),
            RawEvent::Key(BS) | RawEvent::Key(DEL) => self.erase_one(),
            RawEvent::Key(ch) if *ch >= ' ' => {
                self.buffer.push(*ch);
                Update::edit(vec![Effect::Echo(ch.to_string())])
            },
            // Remaining control codes have no meaning here.
            RawEvent::Key(_) => Update::edit(vec![]),
            RawEvent::Escape(suffix) => match suffix.as_str() {
                "[A" => self.history_previous(),
                "[B" => self.history_next(),
                // Unrecognized or incomplete sequences are absorbed.
                _ => Update::edit(vec![]),
            },
        }
    }

    fn submit(&mut self) -> Update {
        let effects = vec![Effect::Newline];
        let trimmed = self.buffer.trim().to_string();
        self.buffer.clear();
        if trimmed.is_empty() {
            return Update {
                effects,
                submission: Submission::Empty,
            };
        }
        let line = trimmed.to_uppercase();
        self.history.push(trimmed);
        self.cursor = self.history.len();
        Update {
            effects,
            submission: Submission::Command(line),
        }
    }

    fn erase_one(&mut self) -> Update {
        if self.buffer.pop().is_some() {
            Update::edit(vec![Effect::Erase(1)])
        } else {
            Update::edit(vec![])
        }
    }

    /// Replace the visible buffer with `text`, erasing what was shown.
    fn reload(&mut self, text: String) -> Vec<Effect> {
        let mut effects = Vec::new();
        let shown = self.buffer.chars().count();
        if shown > 0 {
            effects.push(Effect::Erase(shown));
        }
        if !text.is_empty() {
            effects.push(Effect::Echo(text.clone()));
        }
        self.buffer = text;
        effects
    }

    fn history_previous(&mut self) -> Update {
        if self.cursor == 0 {
            // Oldest entry stays shown.
            return Update::edit(vec![]);
        }
        self.cursor -= 1;
        let text = self.history[self.cursor].clone();
        Update::edit(self.reload(text))
    }

    fn history_next(&mut self) -> Update {
        if self.cursor >= self.history.len() {
            // Already past the newest entry; cursor stays pinned.
            return Update::edit(vec![]);
        }
        self.cursor += 1;
        let text = if self.cursor < self.history.len() {
            self.history[self.cursor].clone()
        } else {
            // Past the newest entry: recall returns to a blank line.
            String::new()
        };
        Update::edit(self.reload(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(ch: char) -> RawEvent {
        RawEvent::Key(ch)
    }

    fn up() -> RawEvent {
        RawEvent::Escape("[A".to_string())
    }

    fn down() -> RawEvent {
        RawEvent::Escape("[B".to_string())
    }

    fn type_line(ed: &mut LineEditor, line: &str) -> Submission {
        for ch in line.chars() {
            ed.handle_event(&key(ch));
        }
        ed.handle_event(&key('\r')).submission
    }

    #[test]
    fn printable_chars_append_and_echo() {
        let mut ed = LineEditor::new();
        let mut echoed = String::new();
        for ch in "help".chars() {
            let update = ed.handle_event(&key(ch));
            assert_eq!(update.submission, Submission::None);
            for effect in update.effects {
                match effect {
                    Effect::Echo(s) => echoed.push_str(&s),
                    other => panic!("unexpected effect {other:?}"),
                }
            }
        }
        assert_eq!(ed.buffer(), "help");
        assert_eq!(echoed, "help");
    }

    #[test]
    fn space_is_printable() {
        let mut ed = LineEditor::new();
        ed.handle_event(&key(' '));
        assert_eq!(ed.buffer(), " ");
    }

    #[test]
    fn no_length_limit() {
        let mut ed = LineEditor::new();
        for _ in 0..10_000 {
            ed.handle_event(&key('x'));
        }
        assert_eq!(ed.buffer().len(), 10_000);
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut ed = LineEditor::new();
        ed.handle_event(&key('a'));
        ed.handle_event(&key('b'));
        let update = ed.handle_event(&key('\u{8}'));
        assert_eq!(ed.buffer(), "a");
        assert_eq!(update.effects, vec![Effect::Erase(1)]);
    }

    #[test]
    fn delete_code_also_erases() {
        let mut ed = LineEditor::new();
        ed.handle_event(&key('a'));
        ed.handle_event(&key('\u{7f}'));
        assert_eq!(ed.buffer(), "");
    }

    #[test]
    fn backspace_on_empty_buffer_is_noop() {
        let mut ed = LineEditor::new();
        let update = ed.handle_event(&key('\u{8}'));
        assert_eq!(ed.buffer(), "");
        assert!(update.effects.is_empty());
    }

    #[test]
    fn submit_uppercases_whole_line() {
        let mut ed = LineEditor::new();
        match type_line(&mut ed, "read abc") {
            Submission::Command(line) => assert_eq!(line, "READ ABC"),
            other => panic!("expected command, got {other:?}"),
        }
    }

    #[test]
    fn submit_stores_raw_trimmed_history() {
        let mut ed = LineEditor::new();
        type_line(&mut ed, "  read abc  ");
        assert_eq!(ed.history(), ["read abc"]);
    }

    #[test]
    fn submit_clears_buffer_and_emits_newline() {
        let mut ed = LineEditor::new();
        for ch in "list".chars() {
            ed.handle_event(&key(ch));
        }
        let update = ed.handle_event(&key('\r'));
        assert_eq!(ed.buffer(), "");
        assert_eq!(update.effects, vec![Effect::Newline]);
    }

    #[test]
    fn empty_line_is_not_history_and_not_command() {
        let mut ed = LineEditor::new();
        assert_eq!(type_line(&mut ed, ""), Submission::Empty);
        assert_eq!(type_line(&mut ed, "   "), Submission::Empty);
        assert!(ed.history().is_empty());
    }

    #[test]
    fn other_control_codes_ignored() {
        let mut ed = LineEditor::new();
        for code in ['\u{1}', '\t', '\n', '\u{3}'] {
            let update = ed.handle_event(&key(code));
            assert!(update.effects.is_empty(), "code {code:?} leaked effects");
        }
        assert_eq!(ed.buffer(), "");
    }

    #[test]
    fn unknown_escape_suffix_ignored() {
        let mut ed = LineEditor::new();
        ed.handle_event(&key('a'));
        for suffix in ["[C", "[D", "", "[", "OA"] {
            let update = ed.handle_event(&RawEvent::Escape(suffix.to_string()));
            assert!(update.effects.is_empty());
        }
        // Buffer is not corrupted.
        assert_eq!(ed.buffer(), "a");
    }

    #[test]
    fn history_previous_recalls_last_line() {
        let mut ed = LineEditor::new();
        type_line(&mut ed, "list");
        let update = ed.handle_event(&up());
        assert_eq!(ed.buffer(), "list");
        assert_eq!(update.effects, vec![Effect::Echo("list".to_string())]);
    }

    #[test]
    fn history_previous_erases_current_buffer_first() {
        let mut ed = LineEditor::new();
        type_line(&mut ed, "list");
        ed.handle_event(&key('a'));
        ed.handle_event(&key('b'));
        let update = ed.handle_event(&up());
        assert_eq!(
            update.effects,
            vec![Effect::Erase(2), Effect::Echo("list".to_string())]
        );
        assert_eq!(ed.buffer(), "list");
    }

    #[test]
    fn history_previous_walks_backwards() {
        let mut ed = LineEditor::new();
        type_line(&mut ed, "first");
        type_line(&mut ed, "second");
        ed.handle_event(&up());
        assert_eq!(ed.buffer(), "second");
        ed.handle_event(&up());
        assert_eq!(ed.buffer(), "first");
    }

    #[test]
    fn history_previous_idempotent_at_oldest() {
        let mut ed = LineEditor::new();
        type_line(&mut ed, "only");
        ed.handle_event(&up());
        let update = ed.handle_event(&up());
        assert_eq!(ed.buffer(), "only");
        assert!(update.effects.is_empty());
    }

    #[test]
    fn history_next_returns_to_blank_line() {
        let mut ed = LineEditor::new();
        type_line(&mut ed, "one");
        type_line(&mut ed, "two");
        ed.handle_event(&up());
        ed.handle_event(&up());
        ed.handle_event(&down());
        assert_eq!(ed.buffer(), "two");
        let update = ed.handle_event(&down());
        assert_eq!(ed.buffer(), "");
        assert_eq!(update.effects, vec![Effect::Erase(3)]);
    }

    #[test]
    fn history_next_idempotent_past_newest() {
        let mut ed = LineEditor::new();
        type_line(&mut ed, "one");
        ed.handle_event(&up());
        ed.handle_event(&down());
        let update = ed.handle_event(&down());
        assert_eq!(ed.buffer(), "");
        assert!(update.effects.is_empty());
    }

    #[test]
    fn history_next_without_recall_is_noop() {
        let mut ed = LineEditor::new();
        type_line(&mut ed, "one");
        let update = ed.handle_event(&down());
        assert!(update.effects.is_empty());
        assert_eq!(ed.buffer(), "");
    }

    #[test]
    fn submit_round_trip_through_recall() {
        let mut ed = LineEditor::new();
        type_line(&mut ed, "read 001");
        ed.handle_event(&up());
        assert_eq!(ed.buffer(), "read 001");
        // Submitting the recalled line dispatches it again.
        match ed.handle_event(&key('\r')).submission {
            Submission::Command(line) => assert_eq!(line, "READ 001"),
            other => panic!("expected command, got {other:?}"),
        }
    }

    #[test]
    fn submission_resets_recall_cursor() {
        let mut ed = LineEditor::new();
        type_line(&mut ed, "one");
        type_line(&mut ed, "two");
        ed.handle_event(&up());
        ed.handle_event(&up());
        assert_eq!(ed.buffer(), "one");
        ed.handle_event(&key('\r'));
        // Cursor is back past the newest entry ("one" resubmitted).
        ed.handle_event(&up());
        assert_eq!(ed.buffer(), "one");
    }

    #[test]
    fn recall_erase_counts_characters_not_bytes() {
        let mut ed = LineEditor::new();
        type_line(&mut ed, "héllo");
        ed.handle_event(&key('é'));
        ed.handle_event(&key('é'));
        let update = ed.handle_event(&up());
        assert_eq!(
            update.effects,
            vec![Effect::Erase(2), Effect::Echo("héllo".to_string())]
        );
    }

    #[test]
    fn recalled_entry_can_be_edited() {
        let mut ed = LineEditor::new();
        type_line(&mut ed, "read 001");
        ed.handle_event(&up());
        ed.handle_event(&key('\u{8}'));
        ed.handle_event(&key('2'));
        assert_eq!(ed.buffer(), "read 002");
    }
}
