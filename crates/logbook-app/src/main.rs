//! Terminal entry point for the logbook console.
//!
//! Puts the terminal into raw mode, maps key presses onto console
//! events, and writes console output to stdout. Configuration comes
//! from a TOML file named by the first CLI argument or the
//! LOGBOOK_CONFIG environment variable; entries come from the
//! configured entries file or the built-in demo set.

mod input;
mod sink;

use std::fs;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use logbook_console::{Console, ConsoleConfig};
use logbook_store::{MemoryStore, demo_entries};
use sink::StdoutSink;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let store = load_store(&config)?;
    log::info!("starting logbook console ({} entries)", store.len());

    let mut display = StdoutSink::new();
    terminal::enable_raw_mode()?;
    let result = run(config, store, &mut display);
    terminal::disable_raw_mode()?;
    result
}

fn run(config: ConsoleConfig, store: MemoryStore, display: &mut StdoutSink) -> Result<()> {
    let mut console = Console::new(config, Box::new(store));
    console.start(display);

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if input::is_interrupt(&key) {
                log::info!("interrupt, leaving");
                return Ok(());
            }
            if let Some(raw) = input::map_key(&key) {
                console.handle_event(&raw, display);
            }
        }
    }
}

/// Resolve configuration from CLI arg, LOGBOOK_CONFIG, or defaults.
fn load_config() -> Result<ConsoleConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("LOGBOOK_CONFIG").ok());
    match path {
        Some(path) => {
            log::info!("loading config from {path}");
            let text = fs::read_to_string(&path)?;
            Ok(ConsoleConfig::from_toml_str(&text)?)
        },
        None => Ok(ConsoleConfig::default()),
    }
}

/// Load the entries file named by the config, or the demo set.
fn load_store(config: &ConsoleConfig) -> Result<MemoryStore> {
    match &config.entries_path {
        Some(path) => {
            log::info!("loading entries from {}", path.display());
            let text = fs::read_to_string(path)?;
            Ok(MemoryStore::from_toml_str(&text)?)
        },
        None => Ok(MemoryStore::new(demo_entries())),
    }
}
