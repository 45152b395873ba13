//! A complete console session.
//!
//! Owns the line editor, the command registry, and the content store
//! binding. Each raw event is handled to completion: editor effects
//! are applied to the sink, and a finalized line is dispatched and
//! rendered before the next event is accepted. Instances share no
//! state; run one `Console` per session.

use logbook_shell::{CommandOutput, CommandRegistry, Environment, register_builtins};
use logbook_store::ContentStore;
use logbook_types::{LogbookError, RawEvent};

use crate::config::ConsoleConfig;
use crate::display::DisplaySink;
use crate::editor::{Effect, LineEditor, Submission};

/// Move back, overwrite with a space, move back again.
const ERASE_ONE: &str = "\u{8} \u{8}";

/// An interactive console session.
pub struct Console {
    editor: LineEditor,
    registry: CommandRegistry,
    store: Box<dyn ContentStore>,
    config: ConsoleConfig,
}

impl Console {
    /// Create a session with the built-in commands registered.
    pub fn new(config: ConsoleConfig, store: Box<dyn ContentStore>) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        Self {
            editor: LineEditor::new(),
            registry,
            store,
            config,
        }
    }

    /// Emit the welcome banner and the first prompt.
    pub fn start(&self, sink: &mut dyn DisplaySink) {
        self.banner(sink);
        self.prompt(sink);
    }

    /// Handle one raw input event to completion.
    pub fn handle_event(&mut self, event: &RawEvent, sink: &mut dyn DisplaySink) {
        let update = self.editor.handle_event(event);
        for effect in &update.effects {
            apply_effect(effect, sink);
        }
        match update.submission {
            Submission::None => {},
            Submission::Empty => self.prompt(sink),
            Submission::Command(line) => {
                log::info!("command: {line}");
                self.dispatch(&line, sink);
                self.prompt(sink);
            },
        }
    }

    /// The line currently being edited.
    pub fn current_line(&self) -> &str {
        self.editor.buffer()
    }

    /// Previously submitted lines, oldest first.
    pub fn history(&self) -> &[String] {
        self.editor.history()
    }

    fn dispatch(&self, line: &str, sink: &mut dyn DisplaySink) {
        let env = Environment {
            store: self.store.as_ref(),
        };
        match self.registry.execute(line, &env) {
            Ok(CommandOutput::Text(text)) => {
                for out_line in text.lines() {
                    sink.write_line(out_line);
                }
            },
            Ok(CommandOutput::None) => {},
            Ok(CommandOutput::Clear) => {
                sink.clear();
                self.banner(sink);
            },
            // Command errors carry user-facing text; everything else is
            // rendered through its Display form. The session never halts.
            Err(LogbookError::Command(msg)) => {
                for err_line in msg.lines() {
                    sink.write_line(err_line);
                }
            },
            Err(e) => {
                log::warn!("command failed: {e}");
                sink.write_line(&format!("error: {e}"));
            },
        }
    }

    fn banner(&self, sink: &mut dyn DisplaySink) {
        for line in self.config.banner.lines() {
            sink.write_line(line);
        }
    }

    fn prompt(&self, sink: &mut dyn DisplaySink) {
        sink.write(&self.config.prompt);
    }
}

fn apply_effect(effect: &Effect, sink: &mut dyn DisplaySink) {
    match effect {
        Effect::Echo(text) => sink.write(text),
        Effect::Erase(n) => {
            for _ in 0..*n {
                sink.write(ERASE_ONE);
            }
        },
        Effect::Newline => sink.write_line(""),
    }
}
