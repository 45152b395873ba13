//! Error types for the logbook console.

use std::io;

/// Errors produced by the logbook console.
#[derive(Debug, thiserror::Error)]
pub enum LogbookError {
    #[error("command error: {0}")]
    Command(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, LogbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_display() {
        let e = LogbookError::Command("bad command: FOO".into());
        assert_eq!(format!("{e}"), "command error: bad command: FOO");
    }

    #[test]
    fn store_error_display() {
        let e = LogbookError::Store("entry not found".into());
        assert_eq!(format!("{e}"), "store error: entry not found");
    }

    #[test]
    fn config_error_display() {
        let e = LogbookError::Config("missing prompt".into());
        assert_eq!(format!("{e}"), "config error: missing prompt");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: LogbookError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: LogbookError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn error_is_debug() {
        let e = LogbookError::Command("test".into());
        assert!(format!("{e:?}").contains("Command"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(42);
        assert_eq!(r.unwrap(), 42);
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(LogbookError::Store("oops".into()));
        assert!(r.is_err());
    }
}
