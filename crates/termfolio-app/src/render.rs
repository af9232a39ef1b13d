//! Full-screen redraw of the console.
//!
//! [`layout`] turns the session into a [`Screen`] of plain lines; [`draw`]
//! paints it with crossterm. Keeping the two apart lets the layout be tested
//! without a terminal.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use termfolio_terminal::{CONSOLE_VERSION, Session};

const BANNER: &str = "JOSEPH HUGHES - BLOCKCHAIN ENTHUSIAST";
const HINT: &str = "Type 'help'. Tab completes, Up/Down recalls, PgUp/PgDn scrolls, Esc quits.";
/// Banner, version line, hint and separator.
const HEADER_ROWS: usize = 4;

/// How a line is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Banner,
    Hint,
    Echo,
    Output,
    Frame,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLine {
    pub text: String,
    pub style: LineStyle,
}

impl ScreenLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Everything on screen for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub header: Vec<ScreenLine>,
    /// The tail of the history log that fits between header and prompt.
    pub body: Vec<ScreenLine>,
    pub prompt: String,
    pub input: String,
    pub ghost: String,
    /// Rows the body sits above the newest output, clamped to the log.
    pub scroll: usize,
}

impl Screen {
    /// The portfolio file named on screen row `row`, if that row is a file
    /// line of a listing.
    pub fn file_at(&self, row: u16, session: &Session) -> Option<String> {
        let line = self.body.get(usize::from(row).checked_sub(self.header.len())?)?;
        if line.style != LineStyle::Output {
            return None;
        }
        let (_, name) = line.text.split_once(']')?;
        let name = name.trim();
        session
            .files()
            .names()
            .find(|file| *file == name)
            .map(str::to_string)
    }
}

/// History rows that fit on a `height`-row terminal.
pub fn page_rows(height: u16) -> usize {
    usize::from(height).saturating_sub(HEADER_ROWS + 1)
}

/// Lay the session out for a `width` x `height` terminal, `scroll` rows up
/// from the newest output.
pub fn layout(session: &Session, width: u16, height: u16, scroll: usize) -> Screen {
    let width = usize::from(width.max(1));
    let header = vec![
        ScreenLine::new(BANNER, LineStyle::Banner),
        ScreenLine::new(
            format!("INTERACTIVE PORTFOLIO CONSOLE v{CONSOLE_VERSION}"),
            LineStyle::Banner,
        ),
        ScreenLine::new(HINT, LineStyle::Hint),
        ScreenLine::new("=".repeat(width.min(BANNER.len() + 8)), LineStyle::Hint),
    ];

    let prompt = session.prompt();
    let mut lines = Vec::new();
    for entry in session.history() {
        let echo = format!("{prompt} {}", entry.input());
        push_wrapped(&mut lines, &echo, LineStyle::Echo, width);
        match entry.animation().and_then(|id| session.animation(id)) {
            Some(progress) => {
                for frame_line in progress.frame() {
                    push_wrapped(&mut lines, &frame_line, LineStyle::Frame, width);
                }
            },
            None => {
                let output = entry.display_output();
                if !output.is_empty() {
                    for line in output.split('\n') {
                        push_wrapped(&mut lines, line, LineStyle::Output, width);
                    }
                }
            },
        }
    }

    let room = page_rows(height);
    let scroll = scroll.min(lines.len().saturating_sub(room));
    lines.truncate(lines.len() - scroll);
    let body = lines.split_off(lines.len().saturating_sub(room));

    Screen {
        header,
        body,
        prompt,
        input: session.input().to_string(),
        ghost: session.suggestion_suffix(),
        scroll,
    }
}

/// Split `text` into rows of at most `width` chars.
fn push_wrapped(lines: &mut Vec<ScreenLine>, text: &str, style: LineStyle, width: usize) {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        lines.push(ScreenLine::new(String::new(), style));
        return;
    }
    for row in chars.chunks(width) {
        lines.push(ScreenLine::new(row.iter().collect::<String>(), style));
    }
}

fn color(style: LineStyle) -> Color {
    match style {
        LineStyle::Banner => Color::Green,
        LineStyle::Hint => Color::DarkGreen,
        LineStyle::Echo => Color::Yellow,
        LineStyle::Output => Color::Green,
        LineStyle::Frame => Color::DarkGreen,
    }
}

/// Paint a screen from the top-left corner.
pub fn draw(out: &mut impl Write, screen: &Screen) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    let mut row: u16 = 0;
    for line in screen.header.iter().chain(&screen.body) {
        queue!(out, MoveTo(0, row), SetForegroundColor(color(line.style)))?;
        if line.style == LineStyle::Banner {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(out, Print(&line.text), SetAttribute(Attribute::Reset), ResetColor)?;
        row = row.saturating_add(1);
    }

    let caret = screen.prompt.chars().count() + 1 + screen.input.chars().count();
    queue!(
        out,
        MoveTo(0, row),
        SetForegroundColor(Color::Yellow),
        Print(&screen.prompt),
        Print(' '),
        SetForegroundColor(Color::White),
        Print(&screen.input),
        SetForegroundColor(Color::DarkGrey),
        Print(&screen.ghost),
        ResetColor,
        MoveTo(u16::try_from(caret).unwrap_or(u16::MAX), row),
    )?;
    out.flush()
}
