//! Console core for the portfolio terminal.
//!
//! Commands live in a [`CommandRegistry`] and are dispatched by their first
//! token. A [`Session`] owns the registry together with the history log and
//! reveals each command's output progressively, one [`Reveal`] at a time.

pub mod animation;
mod autocomplete;
mod commands;
mod content_commands;
mod fun_commands;
mod history;
mod interpreter;
pub mod reveal;
mod session;
mod system_commands;

/// Running animation state and its handle.
pub use animation::{AnimationId, AnimationKind, AnimationProgress};
/// Ghost-text completion for a partial input line.
pub use autocomplete::suggest;
/// Register every built-in command into a registry.
pub use commands::register_builtins;
/// One submitted command and its (partially) revealed output.
pub use history::{CURSOR_GLYPH, HistoryEntry, InputLog};
/// Command table types and dispatch.
pub use interpreter::{
    CommandAction, CommandEntry, CommandFn, CommandOutput, CommandRegistry, Environment,
};
/// Progressive output reveal.
pub use reveal::{Reveal, RevealKind, RevealPolicy, RevealState};
/// The interactive console session.
pub use session::Session;
/// Version shown in the banner.
pub use system_commands::CONSOLE_VERSION;
