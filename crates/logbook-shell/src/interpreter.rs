//! Command trait, registry, and dispatch logic.

use std::collections::HashMap;

use logbook_store::ContentStore;
use logbook_types::error::{LogbookError, Result};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text lines.
    Text(String),
    /// Command produced no visible output.
    None,
    /// Signal to reset the display and re-emit the welcome banner.
    Clear,
}

/// Read-only environment passed to every command.
pub struct Environment<'a> {
    /// The static content store entries are read from.
    pub store: &'a dyn ContentStore,
}

/// A single executable command.
pub trait Command {
    /// The canonical verb (what the user types, upper-cased).
    fn name(&self) -> &str;

    /// Alternative verbs resolving to this command.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for HELP.
    fn description(&self) -> &str;

    /// Usage string (e.g. "READ <id>").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands with dispatch.
///
/// Built once at construction; no dynamic registration afterwards.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Register a command under its verb and all of its aliases.
    /// Replaces any existing command with the same verb.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_string();
        for alias in cmd.aliases() {
            self.aliases.insert((*alias).to_string(), name.clone());
        }
        self.commands.insert(name, cmd);
    }

    /// Parse and execute a finalized command line.
    ///
    /// The line arrives upper-cased from the input stage. The first
    /// whitespace-delimited token is the verb, the rest are positional
    /// arguments. An empty line is a no-op.
    pub fn execute(&self, line: &str, env: &Environment<'_>) -> Result<CommandOutput> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            return Ok(CommandOutput::None);
        }
        let verb = parts[0];
        let args = &parts[1..];

        let canonical = self.aliases.get(verb).map(String::as_str).unwrap_or(verb);
        match self.commands.get(canonical) {
            Some(cmd) => {
                log::debug!("dispatching {verb} with {} args", args.len());
                cmd.execute(args, env)
            },
            None => Err(LogbookError::Command(format!(
                "bad command: {verb}\nType HELP for the command reference."
            ))),
        }
    }

    /// Return a sorted list of (verb, description) pairs.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect();
        cmds.sort_by_key(|(name, _)| *name);
        cmds
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
