//! Built-in commands for the logbook console.

use logbook_types::error::{LogbookError, Result};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(ListCmd));
    reg.register(Box::new(ReadCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(ExitCmd));
}

// ---------------------------------------------------------------------------
// HELP
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "HELP"
    }
    fn aliases(&self) -> &[&str] {
        &["?"]
    }
    fn description(&self) -> &str {
        "Show the command reference"
    }
    fn usage(&self) -> &str {
        "HELP"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(
            "Available commands:\n\
             \n  HELP, ?      Show this command reference\
             \n  LIST, DIR    List every entry with a summary\
             \n  READ <id>    Read one entry in full\
             \n  CLEAR, CLS   Clear the screen\
             \n  ABOUT        About this console\
             \n  EXIT, QUIT   Leave the console"
                .to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// LIST
// ---------------------------------------------------------------------------

struct ListCmd;
impl Command for ListCmd {
    fn name(&self) -> &str {
        "LIST"
    }
    fn aliases(&self) -> &[&str] {
        &["DIR"]
    }
    fn description(&self) -> &str {
        "List every entry with a summary"
    }
    fn usage(&self) -> &str {
        "LIST"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let entries = env.store.list_all();
        if entries.is_empty() {
            return Ok(CommandOutput::Text("The logbook is empty.".to_string()));
        }
        let mut blocks = Vec::new();
        for e in entries {
            blocks.push(format!(
                "[{}] {}\n      {}{}",
                e.id,
                e.title,
                e.date,
                format_tags(&e.tags)
            ));
        }
        let noun = if entries.len() == 1 { "entry" } else { "entries" };
        blocks.push(format!("{} {noun}.", entries.len()));
        Ok(CommandOutput::Text(blocks.join("\n\n")))
    }
}

// ---------------------------------------------------------------------------
// READ
// ---------------------------------------------------------------------------

struct ReadCmd;
impl Command for ReadCmd {
    fn name(&self) -> &str {
        "READ"
    }
    fn description(&self) -> &str {
        "Read one entry in full"
    }
    fn usage(&self) -> &str {
        "READ <id>"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let id = args
            .first()
            .copied()
            .ok_or_else(|| LogbookError::Command(format!("usage: {}", self.usage())))?;

        let entry = env.store.find_by_id(id).ok_or_else(|| {
            LogbookError::Command(format!(
                "no entry with id '{id}'\nType LIST to see available entries."
            ))
        })?;

        let mut lines = vec![
            format!("=== {} ===", entry.title),
            format!("{}{}", entry.date, format_tags(&entry.tags)),
            String::new(),
        ];
        for line in entry.body.lines() {
            lines.push(line.to_string());
        }
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// CLEAR
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "CLEAR"
    }
    fn aliases(&self) -> &[&str] {
        &["CLS"]
    }
    fn description(&self) -> &str {
        "Clear the screen"
    }
    fn usage(&self) -> &str {
        "CLEAR"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// ABOUT
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "ABOUT"
    }
    fn description(&self) -> &str {
        "About this console"
    }
    fn usage(&self) -> &str {
        "ABOUT"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(
            "logbook -- a terminal-style reading room for a static \
             logbook.\nEverything here is read-only; the prompt only \
             ever looks things up.\nType LIST to browse, READ <id> to \
             open an entry."
                .to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// EXIT
// ---------------------------------------------------------------------------

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "EXIT"
    }
    fn aliases(&self) -> &[&str] {
        &["QUIT"]
    }
    fn description(&self) -> &str {
        "Leave the console"
    }
    fn usage(&self) -> &str {
        "EXIT"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        // There is no process to terminate from in here; closing the
        // surrounding window is the real exit.
        Ok(CommandOutput::Text(
            "This console has nowhere to exit to. Close the window, or \
             stay and LIST a while."
                .to_string(),
        ))
    }
}

/// Render a tag list as " #a #b"; empty for no tags.
fn format_tags(tags: &[String]) -> String {
    let mut out = String::new();
    for tag in tags {
        out.push_str("  #");
        out.push_str(tag);
    }
    out
}
