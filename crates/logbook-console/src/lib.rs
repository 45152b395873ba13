//! Console session core.
//!
//! The line editor turns raw key events into display effect
//! descriptions and finalized command lines; the session applies the
//! effects to a display sink and routes finalized lines through the
//! command registry. The editor never touches the sink itself, which
//! keeps it testable without a display.

mod config;
mod display;
mod editor;
mod session;

/// Console configuration (prompt, banner, entries path).
pub use config::ConsoleConfig;
/// Display sink capability consumed by the session.
pub use display::DisplaySink;
/// Recording sink test double.
pub use display::{RecordingSink, SinkOp};
/// The line-editing state machine.
pub use editor::{Effect, LineEditor, Submission, Update};
/// A complete console session: editor + registry + store binding.
pub use session::Console;
