//! Console configuration.
//!
//! Loaded once at startup from a TOML document; every field has a
//! default so a missing or partial file still yields a usable console.

use std::path::PathBuf;

use serde::Deserialize;

use logbook_types::Result;

/// Configuration for a console session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Text echoed at the start of every input line.
    pub prompt: String,
    /// Banner emitted at session start and after CLEAR.
    pub banner: String,
    /// Optional path to a TOML entries file. `None` = demo entries.
    pub entries_path: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            banner: "LOGBOOK CONSOLE\nType HELP for the command reference.".to_string(),
            entries_path: None,
        }
    }
}

impl ConsoleConfig {
    /// Parse a TOML configuration document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config = toml::from_str(text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_prompt_and_banner() {
        let config = ConsoleConfig::default();
        assert_eq!(config.prompt, "> ");
        assert!(config.banner.contains("HELP"));
        assert!(config.entries_path.is_none());
    }

    #[test]
    fn from_toml_str_full() {
        let config = ConsoleConfig::from_toml_str(
            r#"
            prompt = "$ "
            banner = "hi"
            entries_path = "/var/log/entries.toml"
            "#,
        )
        .unwrap();
        assert_eq!(config.prompt, "$ ");
        assert_eq!(config.banner, "hi");
        assert_eq!(
            config.entries_path,
            Some(PathBuf::from("/var/log/entries.toml"))
        );
    }

    #[test]
    fn from_toml_str_partial_keeps_defaults() {
        let config = ConsoleConfig::from_toml_str(r#"prompt = ":: ""#).unwrap();
        assert_eq!(config.prompt, ":: ");
        assert!(config.banner.contains("LOGBOOK"));
    }

    #[test]
    fn from_toml_str_empty_is_default() {
        let config = ConsoleConfig::from_toml_str("").unwrap();
        assert_eq!(config.prompt, ConsoleConfig::default().prompt);
    }

    #[test]
    fn from_toml_str_rejects_bad_toml() {
        assert!(ConsoleConfig::from_toml_str("prompt = ").is_err());
    }
}
