//! Error types for termfolio.

use std::io;

/// Errors produced by the termfolio console.
///
/// The first three variants are user-visible: their `Display` output is the
/// exact text the console prints.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),

    #[error("{command}: {file}: No such file or directory")]
    FileNotFound { command: String, file: String },

    #[error("{command}: missing file operand")]
    MissingOperand { command: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermfolioError>;
