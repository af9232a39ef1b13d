//! Session log entries and the recall log behind Up/Down.

use std::borrow::Cow;
use std::time::Duration;

use crate::animation::AnimationId;

/// Glyph appended to an entry's output while it is still being revealed.
pub const CURSOR_GLYPH: char = '█';

/// One submitted command and (a prefix of) its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    input: String,
    output: String,
    reveal_complete: bool,
    reveal_speed: Duration,
    animation: Option<AnimationId>,
}

impl HistoryEntry {
    /// An entry whose output will be filled in by a reveal.
    pub(crate) fn revealing(input: impl Into<String>, speed: Duration) -> Self {
        Self {
            input: input.into(),
            output: String::new(),
            reveal_complete: false,
            reveal_speed: speed,
            animation: None,
        }
    }

    /// An entry whose output is already final.
    pub fn finished(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            reveal_complete: true,
            reveal_speed: Duration::ZERO,
            animation: None,
        }
    }

    /// An entry rendered by an animation instead of text.
    pub(crate) fn animated(input: impl Into<String>, id: AnimationId) -> Self {
        Self {
            input: input.into(),
            output: String::new(),
            reveal_complete: true,
            reveal_speed: Duration::ZERO,
            animation: Some(id),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The output revealed so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_complete(&self) -> bool {
        self.reveal_complete
    }

    pub fn reveal_speed(&self) -> Duration {
        self.reveal_speed
    }

    pub fn animation(&self) -> Option<AnimationId> {
        self.animation
    }

    /// Output as drawn: with a trailing cursor glyph while revealing.
    pub fn display_output(&self) -> Cow<'_, str> {
        if self.reveal_complete {
            Cow::Borrowed(&self.output)
        } else {
            Cow::Owned(format!("{}{CURSOR_GLYPH}", self.output))
        }
    }

    /// Publish a reveal increment. Completed entries are never modified.
    pub(crate) fn publish(&mut self, revealed: &str, complete: bool) {
        if self.reveal_complete {
            log::warn!("ignored reveal update for completed entry {:?}", self.input);
            return;
        }
        self.output.clear();
        self.output.push_str(revealed);
        self.reveal_complete = complete;
    }
}

/// Submitted input lines, newest last, with a shell-style recall cursor.
#[derive(Debug, Clone)]
pub struct InputLog {
    lines: Vec<String>,
    /// Steps back from the newest line; `None` when not recalling.
    cursor: Option<usize>,
    limit: usize,
}

impl InputLog {
    pub fn new(limit: usize) -> Self {
        Self {
            lines: Vec::new(),
            cursor: None,
            limit,
        }
    }

    /// Record a submitted line and stop recalling.
    pub fn push(&mut self, line: &str) {
        self.cursor = None;
        if self.limit == 0 {
            return;
        }
        // Don't add duplicates of the last command.
        if self.lines.last().is_some_and(|last| last == line) {
            return;
        }
        self.lines.push(line.to_string());
        if self.lines.len() > self.limit {
            self.lines.remove(0);
        }
    }

    /// Step toward older lines. `None` when there is nothing older.
    pub fn previous(&mut self) -> Option<&str> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.lines.len() {
            return None;
        }
        self.cursor = Some(next);
        Some(&self.lines[self.lines.len() - 1 - next])
    }

    /// Step toward newer lines. Stepping past the newest yields `""` and
    /// ends recall; `None` when not recalling at all.
    pub fn next(&mut self) -> Option<&str> {
        match self.cursor? {
            0 => {
                self.cursor = None;
                Some("")
            },
            c => {
                self.cursor = Some(c - 1);
                Some(&self.lines[self.lines.len() - c])
            },
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
