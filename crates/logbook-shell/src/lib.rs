//! Command dispatcher for the logbook console.
//!
//! The dispatcher is a registry-based system. Commands implement the
//! `Command` trait and are registered by verb (plus aliases). The
//! registry parses a finalized line, resolves the verb, and dispatches
//! `execute()`. Verbs arrive upper-cased from the input stage, so
//! matching is effectively case-insensitive.

mod commands;
mod interpreter;

/// Register all built-in commands (help, list, read, clear, about, exit).
pub use commands::register_builtins;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, clear signal, nothing).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Read-only environment passed to every command.
pub use interpreter::Environment;
