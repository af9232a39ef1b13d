//! Platform-agnostic key events.
//!
//! The front end maps its native terminal events to these. The session never
//! sees raw terminal input.

/// A key the console reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character typed into the input line.
    Char(char),
    /// Delete the character left of the caret.
    Backspace,
    /// Submit the current input line.
    Enter,
    /// Walk back toward older submissions.
    RecallPrevious,
    /// Walk forward toward newer submissions.
    RecallNext,
    /// Accept the ghost completion.
    Complete,
    /// Move the view of the output log one page toward older output.
    ScrollUp,
    /// Move the view one page back toward the newest output.
    ScrollDown,
    /// User asked to leave the console.
    Quit,
}
