//! termfolio terminal entry point.
//!
//! Runs the portfolio console full-screen. Type commands at the prompt,
//! Tab or Right accepts the ghost completion, Up/Down walk the recall log,
//! PgUp/PgDn or the mouse wheel scroll the output, and clicking a listed
//! file reads it. Esc or Ctrl-C quits.
//!
//! The configuration file is taken from the first argument, else from
//! `TERMFOLIO_CONFIG`, else built-in defaults are used.

mod input;
mod render;

use std::cell::Cell;
use std::io;
use std::panic;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use termfolio_terminal::Session;
use termfolio_types::config::ConsoleConfig;
use termfolio_types::error::TermfolioError;
use termfolio_types::input::Key;

use crate::input::MouseAction;

/// Poll interval when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);
/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: usize = 3;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config()?;
    log::info!("Starting termfolio as {}", config.prompt());

    let mut session = Session::portfolio(config);
    let grew = Rc::new(Cell::new(false));
    let flag = Rc::clone(&grew);
    session.set_scroll_listener(move || flag.set(true));

    // Restore the terminal before a panic message is printed.
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, cursor::Show);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    let result = run(&mut session, &grew);

    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, cursor::Show)?;
    log::info!("Session ended after {} entries", session.history().len());
    result
}

/// Resolve the configuration: CLI path, then `TERMFOLIO_CONFIG`, then defaults.
fn load_config() -> Result<ConsoleConfig> {
    if let Some(path) = std::env::args().nth(1) {
        return ConsoleConfig::load(&path).with_context(|| format!("loading config from {path}"));
    }
    let Ok(path) = std::env::var("TERMFOLIO_CONFIG") else {
        return Ok(ConsoleConfig::default());
    };
    match ConsoleConfig::load(&path) {
        Ok(config) => Ok(config),
        Err(TermfolioError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("TERMFOLIO_CONFIG={path} not found, using defaults");
            Ok(ConsoleConfig::default())
        },
        Err(e) => Err(e).with_context(|| format!("loading config from {path}")),
    }
}

/// Event loop. The poll timeout is the time to the session's next deadline,
/// so one wait serves both as the reveal timer and as the point where a key
/// press cuts a reveal short.
///
/// `grew` is raised by the session whenever the log grows; the view then
/// jumps back to the newest output.
fn run(session: &mut Session, grew: &Cell<bool>) -> Result<()> {
    let mut stdout = io::stdout();
    let mut dirty = true;
    let mut scroll = 0;
    let mut screen = None;
    session.run_script(Instant::now());

    loop {
        if grew.replace(false) {
            scroll = 0;
            dirty = true;
        }
        let (width, height) = terminal::size()?;
        if dirty {
            let laid_out = render::layout(session, width, height, scroll);
            scroll = laid_out.scroll;
            render::draw(&mut stdout, &laid_out)?;
            screen = Some(laid_out);
            dirty = false;
        }

        let timeout = session
            .next_deadline()
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(Instant::now()));
        if event::poll(timeout)? {
            let page = render::page_rows(height);
            match event::read()? {
                Event::Key(key) => match input::map_key(&key) {
                    Some(Key::ScrollUp) => {
                        scroll = scroll.saturating_add(page);
                        dirty = true;
                    },
                    Some(Key::ScrollDown) => {
                        scroll = scroll.saturating_sub(page);
                        dirty = true;
                    },
                    Some(key) => {
                        if !session.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        dirty = true;
                    },
                    None => {},
                },
                Event::Mouse(mouse) => match input::map_mouse(&mouse) {
                    Some(MouseAction::WheelUp) => {
                        scroll = scroll.saturating_add(WHEEL_ROWS);
                        dirty = true;
                    },
                    Some(MouseAction::WheelDown) => {
                        scroll = scroll.saturating_sub(WHEEL_ROWS);
                        dirty = true;
                    },
                    Some(MouseAction::Click { row }) => {
                        let file = screen.as_ref().and_then(|s| s.file_at(row, session));
                        if let Some(file) = file {
                            let typed = session.input().to_string();
                            session.submit_line(&format!("cat {file}"), Instant::now());
                            session.set_input(typed);
                            dirty = true;
                        }
                    },
                    None => {},
                },
                Event::Resize(..) => dirty = true,
                _ => {},
            }
        }

        if session.tick(Instant::now()) {
            dirty = true;
        }
    }
}
