//! The console session: history log, in-flight reveal, input line, and
//! the timers that drive them.
//!
//! The session is clock-agnostic. Every time-dependent call takes an
//! explicit `now`, and the host asks [`Session::next_deadline`] how long it
//! may sleep before calling [`Session::tick`].

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use termfolio_platform::{DesktopClock, TimeService};
use termfolio_types::config::ConsoleConfig;
use termfolio_types::input::Key;
use termfolio_vfs::{FileTable, portfolio_files};

use crate::animation::{AnimationId, AnimationProgress};
use crate::autocomplete::suggest;
use crate::commands::register_builtins;
use crate::history::{HistoryEntry, InputLog};
use crate::interpreter::{CommandOutput, CommandRegistry, Environment};
use crate::reveal::{Reveal, RevealKind};

/// The reveal currently writing into the history log.
struct InFlight {
    entry: usize,
    reveal: Reveal,
    due: Instant,
}

/// An interactive console session.
pub struct Session {
    config: ConsoleConfig,
    registry: CommandRegistry,
    files: FileTable,
    time: Box<dyn TimeService>,
    history: Vec<HistoryEntry>,
    in_flight: Option<InFlight>,
    input: String,
    input_log: InputLog,
    animations: HashMap<AnimationId, AnimationProgress>,
    /// Starts at a random value so each session seeds its animations
    /// differently.
    next_animation: u64,
    script: VecDeque<String>,
    script_due: Option<Instant>,
    scroll_listener: Option<Box<dyn FnMut()>>,
}

impl Session {
    pub fn new(
        config: ConsoleConfig,
        registry: CommandRegistry,
        files: FileTable,
        time: Box<dyn TimeService>,
    ) -> Self {
        let input_log = InputLog::new(config.history_limit);
        Self {
            config,
            registry,
            files,
            time,
            history: Vec::new(),
            in_flight: None,
            input: String::new(),
            input_log,
            animations: HashMap::new(),
            next_animation: rand::random(),
            script: VecDeque::new(),
            script_due: None,
            scroll_listener: None,
        }
    }

    /// The stock portfolio console: built-in commands, the compiled-in
    /// files, and the desktop clock.
    pub fn portfolio(config: ConsoleConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        log::info!("session started with {} commands", registry.len());
        Self::new(config, registry, portfolio_files(), Box::new(DesktopClock::new()))
    }

    /// Called whenever the log grows or an entry's output changes.
    pub fn set_scroll_listener(&mut self, listener: impl FnMut() + 'static) {
        self.scroll_listener = Some(Box::new(listener));
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn files(&self) -> &FileTable {
        &self.files
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn prompt(&self) -> String {
        self.config.prompt()
    }

    pub fn animation(&self, id: AnimationId) -> Option<&AnimationProgress> {
        self.animations.get(&id)
    }

    pub fn is_revealing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether scripted commands are still waiting to run.
    pub fn script_pending(&self) -> bool {
        !self.script.is_empty()
    }

    // -- input line ---------------------------------------------------------

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn recall_previous(&mut self) {
        if let Some(line) = self.input_log.previous() {
            self.input = line.to_string();
        }
    }

    pub fn recall_next(&mut self) {
        if let Some(line) = self.input_log.next() {
            self.input = line.to_string();
        }
    }

    /// Ghost completion for the current input, or `""`.
    pub fn suggestion(&self) -> String {
        suggest(&self.input, &self.registry, &self.files)
    }

    /// The part of the suggestion not yet typed.
    pub fn suggestion_suffix(&self) -> String {
        let suggestion = self.suggestion();
        if !is_continuation(&suggestion, &self.input) {
            return String::new();
        }
        suggestion.chars().skip(self.input.chars().count()).collect()
    }

    /// Replace the input with the suggestion when it extends what was typed.
    pub fn accept_suggestion(&mut self) -> bool {
        let suggestion = self.suggestion();
        if suggestion.is_empty() || !is_continuation(&suggestion, &self.input) {
            return false;
        }
        self.input = suggestion;
        true
    }

    /// Apply a key. Returns `false` when the user asked to quit.
    pub fn handle_key(&mut self, key: Key, now: Instant) -> bool {
        match key {
            Key::Char(c) => self.insert_char(c),
            Key::Backspace => self.backspace(),
            Key::Enter => self.submit(now),
            Key::RecallPrevious => self.recall_previous(),
            Key::RecallNext => self.recall_next(),
            Key::Complete => {
                self.accept_suggestion();
            },
            Key::Quit => return false,
            Key::ScrollUp | Key::ScrollDown => {},
        }
        true
    }

    // -- submission ---------------------------------------------------------

    /// Submit the input line at the interactive typing speed.
    ///
    /// Blank input is ignored. Any reveal still in flight is completed first.
    pub fn submit(&mut self, now: Instant) {
        if self.input.trim().is_empty() {
            return;
        }
        let line = std::mem::take(&mut self.input);
        self.input_log.push(&line);
        let speed = self.config.reveal.typing_speed();
        self.run_line(&line, speed, now);
        self.arm_script(now);
    }

    /// Submit `line` as if typed.
    pub fn submit_line(&mut self, line: &str, now: Instant) {
        self.input = line.to_string();
        self.submit(now);
    }

    /// Queue the configured initial commands. The first runs after
    /// `initial_delay`, each next one `initial_delay` after the previous
    /// reveal completes.
    pub fn run_script(&mut self, now: Instant) {
        self.script = self.config.initial_commands.iter().cloned().collect();
        self.script_due = None;
        log::info!("running {} initial commands", self.script.len());
        self.arm_script(now);
    }

    fn run_line(&mut self, line: &str, speed: Duration, now: Instant) {
        self.finish_reveal();
        let output = {
            let env = Environment {
                vfs: &self.files,
                time: Some(self.time.as_ref()),
                history: &self.history,
                user: &self.config.user,
            };
            self.registry.resolve(line, &env)
        };
        match output {
            CommandOutput::None => {},
            CommandOutput::Clear => {
                log::info!("cleared {} entries", self.history.len());
                self.history.clear();
                self.animations.clear();
                self.notify();
            },
            CommandOutput::Animation(kind) => {
                let id = AnimationId::new(self.next_animation);
                self.next_animation = self.next_animation.wrapping_add(1);
                self.animations
                    .insert(id, AnimationProgress::new(kind, id, &self.config.animation, now));
                self.history.push(HistoryEntry::animated(line, id));
                self.notify();
            },
            CommandOutput::Text(text) => self.start_reveal(line, text, RevealKind::Text, speed, now),
            CommandOutput::Listing(text) => {
                self.start_reveal(line, text, RevealKind::Listing, speed, now)
            },
        }
    }

    fn start_reveal(
        &mut self,
        line: &str,
        text: String,
        kind: RevealKind,
        speed: Duration,
        now: Instant,
    ) {
        let reveal = Reveal::new(text, kind, speed, &self.config.reveal);
        self.history.push(HistoryEntry::revealing(line, speed));
        self.in_flight = Some(InFlight {
            entry: self.history.len() - 1,
            reveal,
            due: now,
        });
        self.tick_reveal(now);
    }

    /// Force the in-flight reveal to its full text.
    fn finish_reveal(&mut self) {
        let Some(mut flight) = self.in_flight.take() else {
            return;
        };
        let full = flight.reveal.cancel();
        if let Some(entry) = self.history.get_mut(flight.entry) {
            entry.publish(full, true);
        }
        log::debug!("reveal of entry {} cut short", flight.entry);
        self.notify();
    }

    // -- timers -------------------------------------------------------------

    /// Advance everything that is due. Returns whether anything visible
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.tick_reveal(now);
        changed |= self.tick_animations(now);
        changed |= self.tick_script(now);
        self.arm_script(now);
        changed
    }

    /// The earliest instant at which [`Session::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let reveal = self.in_flight.as_ref().map(|f| f.due);
        let animations = self.animations.values().filter_map(AnimationProgress::due);
        reveal
            .into_iter()
            .chain(animations)
            .chain(self.script_due)
            .min()
    }

    fn tick_reveal(&mut self, now: Instant) -> bool {
        let Some(flight) = self.in_flight.as_mut() else {
            return false;
        };
        if flight.due > now {
            return false;
        }
        let delay = match flight.reveal.advance() {
            Some(inc) => {
                if let Some(entry) = self.history.get_mut(flight.entry) {
                    entry.publish(inc.revealed, inc.complete);
                }
                inc.delay
            },
            None => None,
        };
        match delay {
            Some(delay) => flight.due = now + delay,
            None => self.in_flight = None,
        }
        self.notify();
        true
    }

    fn tick_animations(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for progress in self.animations.values_mut() {
            changed |= progress.tick(now);
        }
        if changed {
            self.notify();
        }
        changed
    }

    fn tick_script(&mut self, now: Instant) -> bool {
        match self.script_due {
            Some(due) if due <= now => {},
            _ => return false,
        }
        self.script_due = None;
        // Wait for the current reveal; arm_script reschedules afterwards.
        if self.in_flight.is_some() {
            return false;
        }
        let Some(line) = self.script.pop_front() else {
            return false;
        };
        log::debug!("scripted command {line:?}");
        let speed = self.config.reveal.script_speed();
        self.run_line(&line, speed, now);
        true
    }

    fn arm_script(&mut self, now: Instant) {
        if self.script_due.is_none() && self.in_flight.is_none() && !self.script.is_empty() {
            self.script_due = Some(now + self.config.initial_delay());
        }
    }

    fn notify(&mut self) {
        if let Some(listener) = self.scroll_listener.as_mut() {
            listener();
        }
    }
}

fn is_continuation(suggestion: &str, input: &str) -> bool {
    suggestion.to_lowercase().starts_with(&input.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use termfolio_platform::SystemTime;
    use termfolio_types::error::Result;
    use termfolio_vfs::ABOUT_TXT;

    struct FixedClock;

    impl TimeService for FixedClock {
        fn now(&self) -> Result<SystemTime> {
            Ok(SystemTime::from_unix_secs(1_709_210_096))
        }
        fn uptime_secs(&self) -> Result<u64> {
            Ok(42)
        }
    }

    fn config() -> ConsoleConfig {
        ConsoleConfig {
            initial_commands: vec!["whoami".to_string(), "pwd".to_string()],
            ..ConsoleConfig::default()
        }
    }

    fn session_with(files: FileTable) -> Session {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        Session::new(config(), registry, files, Box::new(FixedClock))
    }

    fn session() -> Session {
        session_with(portfolio_files())
    }

    /// Tick at each deadline until the reveal finishes.
    fn finish(session: &mut Session, mut now: Instant) -> Instant {
        while session.is_revealing() {
            let Some(due) = session.next_deadline() else {
                break;
            };
            now = now.max(due);
            session.tick(now);
        }
        now
    }

    #[test]
    fn first_increment_is_published_on_submit() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit_line("whoami", t0);
        assert_eq!(s.history().len(), 1);
        let entry = &s.history()[0];
        assert_eq!(entry.input(), "whoami");
        assert_eq!(entry.output(), "j");
        assert!(!entry.is_complete());
        assert_eq!(entry.display_output(), "j█");
        assert_eq!(entry.reveal_speed(), Duration::from_millis(15));
        assert_eq!(s.next_deadline(), Some(t0 + Duration::from_millis(15)));
    }

    #[test]
    fn reveal_grows_monotonically_to_full_output() {
        let mut s = session();
        let mut now = Instant::now();
        s.submit_line("whoami", now);
        let mut seen = vec![s.history()[0].output().to_string()];
        while let Some(due) = s.next_deadline() {
            now = due;
            s.tick(now);
            seen.push(s.history()[0].output().to_string());
        }
        assert!(seen.windows(2).all(|w| w[1].starts_with(&w[0])));
        assert_eq!(seen.last().map(String::as_str), Some("joseph-hughes"));
        assert!(s.history()[0].is_complete());
        assert_eq!(seen.len(), "joseph-hughes".len());
    }

    #[test]
    fn tick_before_deadline_does_nothing() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit_line("whoami", t0);
        assert!(!s.tick(t0 + Duration::from_millis(5)));
        assert_eq!(s.history()[0].output(), "j");
    }

    #[test]
    fn new_submission_completes_previous_reveal() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit_line("about", t0);
        s.tick(t0 + Duration::from_millis(50));
        assert!(s.history()[0].output().len() < ABOUT_TXT.len());
        s.submit_line("whoami", t0 + Duration::from_millis(60));
        assert_eq!(s.history()[0].output(), ABOUT_TXT);
        assert!(s.history()[0].is_complete());
        assert_eq!(s.history()[1].output(), "j");
        assert!(!s.history()[1].is_complete());
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut s = session();
        s.set_input("   ");
        s.submit(Instant::now());
        assert!(s.history().is_empty());
        s.recall_previous();
        assert_eq!(s.input(), "   ");
    }

    #[test]
    fn unknown_command_reveals_error_text() {
        let mut s = session();
        let now = s_submit(&mut s, "FooBar");
        finish(&mut s, now);
        assert_eq!(
            s.history()[0].output(),
            "Command not found: FooBar. Type 'help' for available commands."
        );
    }

    fn s_submit(s: &mut Session, line: &str) -> Instant {
        let now = Instant::now();
        s.submit_line(line, now);
        now
    }

    #[test]
    fn clear_empties_log_without_adding_entry() {
        let mut s = session();
        let now = s_submit(&mut s, "whoami");
        let now = finish(&mut s, now);
        s.submit_line("CLEAR", now);
        assert!(s.history().is_empty());
        assert!(!s.is_revealing());
        s.recall_previous();
        assert_eq!(s.input(), "CLEAR");
    }

    #[test]
    fn status_sees_history_so_far() {
        let mut s = session();
        let mut now = Instant::now();
        for line in ["whoami", "pwd", "status"] {
            s.submit_line(line, now);
            now = finish(&mut s, now);
        }
        assert!(s.history()[2].output().contains("Total Commands: 2"));
        assert!(s.history()[2].output().contains("Last Updated: 2/29/2024"));
    }

    #[test]
    fn empty_output_completes_immediately() {
        let mut s = session_with(FileTable::new());
        s.submit_line("ls", Instant::now());
        assert!(!s.is_revealing());
        assert_eq!(s.history()[0].output(), "");
        assert!(s.history()[0].is_complete());
    }

    #[test]
    fn listing_reveals_line_by_line() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit_line("ls", t0);
        assert_eq!(s.history()[0].output(), "[TXT] about.txt\n");
        assert_eq!(s.next_deadline(), Some(t0 + Duration::from_millis(45)));
    }

    #[test]
    fn recall_walks_submissions() {
        let mut s = session();
        let now = Instant::now();
        for line in ["a", "b", "c"] {
            s.submit_line(line, now);
        }
        s.handle_key(Key::RecallPrevious, now);
        assert_eq!(s.input(), "c");
        s.handle_key(Key::RecallPrevious, now);
        assert_eq!(s.input(), "b");
        s.handle_key(Key::RecallNext, now);
        assert_eq!(s.input(), "c");
        s.handle_key(Key::RecallNext, now);
        assert_eq!(s.input(), "");
    }

    #[test]
    fn typing_and_submitting_through_keys() {
        let mut s = session();
        let now = Instant::now();
        for c in "whoamx".chars() {
            assert!(s.handle_key(Key::Char(c), now));
        }
        s.handle_key(Key::Backspace, now);
        s.handle_key(Key::Char('i'), now);
        s.handle_key(Key::Enter, now);
        assert_eq!(s.input(), "");
        assert_eq!(s.history()[0].input(), "whoami");
        assert!(!s.handle_key(Key::Quit, now));
    }

    #[test]
    fn accepting_suggestions() {
        let mut s = session();
        s.set_input("whoa");
        assert_eq!(s.suggestion_suffix(), "mi");
        assert!(s.accept_suggestion());
        assert_eq!(s.input(), "whoami");

        s.set_input("cat READ");
        s.handle_key(Key::Complete, Instant::now());
        assert_eq!(s.input(), "cat README.md");

        s.set_input("xyz");
        assert!(!s.accept_suggestion());
        assert_eq!(s.input(), "xyz");
        assert_eq!(s.suggestion_suffix(), "");
    }

    #[test]
    fn script_runs_with_pacing_and_stays_out_of_recall() {
        let mut s = session();
        let t0 = Instant::now();
        s.run_script(t0);
        let delay = Duration::from_secs(1);
        assert_eq!(s.next_deadline(), Some(t0 + delay));
        assert!(!s.tick(t0 + Duration::from_millis(999)));
        assert!(s.history().is_empty());

        s.tick(t0 + delay);
        assert_eq!(s.history()[0].input(), "whoami");
        assert_eq!(s.history()[0].reveal_speed(), Duration::from_millis(20));
        let done = finish(&mut s, t0 + delay);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.next_deadline(), Some(done + delay));

        s.tick(done + delay);
        finish(&mut s, done + delay);
        assert_eq!(s.history()[1].output(), "/home/d2dreamer/portfolio");
        assert!(!s.script_pending());
        assert_eq!(s.next_deadline(), None);

        s.recall_previous();
        assert_eq!(s.input(), "");
    }

    #[test]
    fn script_waits_for_interactive_reveal() {
        let mut s = session();
        let t0 = Instant::now();
        s.run_script(t0);
        let late = t0 + Duration::from_millis(990);
        s.submit_line("about", late);
        s.tick(t0 + Duration::from_secs(1));
        assert_eq!(s.history().len(), 1);
        let done = finish(&mut s, t0 + Duration::from_secs(1));
        assert_eq!(s.history().len(), 1);
        let resume = s.next_deadline().unwrap();
        assert!(resume >= done + Duration::from_secs(1));
        s.tick(resume);
        assert_eq!(s.history()[1].input(), "whoami");
    }

    #[test]
    fn animation_runs_and_clear_drops_it() {
        let mut s = session();
        let mut now = Instant::now();
        s.submit_line("hack", now);
        let id = s.history()[0].animation().unwrap();
        assert!(!s.is_revealing());
        assert!(s.animation(id).is_some());
        while let Some(due) = s.next_deadline() {
            now = due;
            s.tick(now);
        }
        let frame = s.animation(id).unwrap().frame();
        assert_eq!(frame.last().map(String::as_str), Some("ACCESS GRANTED"));

        s.submit_line("clear", now);
        assert!(s.animation(id).is_none());
    }

    #[test]
    fn animation_ids_are_unique() {
        let mut s = session();
        let now = Instant::now();
        s.submit_line("matrix", now);
        s.submit_line("matrix", now);
        let a = s.history()[0].animation().unwrap();
        let b = s.history()[1].animation().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn first_rain_differs_between_sessions() {
        let now = Instant::now();
        let mut a = session();
        let mut b = session();
        a.submit_line("matrix", now);
        b.submit_line("matrix", now);
        for step in 1..=20 {
            let later = now + Duration::from_millis(60 * step);
            a.tick(later);
            b.tick(later);
        }
        let id_a = a.history()[0].animation().unwrap();
        let id_b = b.history()[0].animation().unwrap();
        assert_ne!(id_a, id_b);
        assert_ne!(
            a.animation(id_a).unwrap().frame(),
            b.animation(id_b).unwrap().frame()
        );
    }

    #[test]
    fn scroll_keys_leave_the_session_alone() {
        let mut s = session();
        s.set_input("ab");
        assert!(s.handle_key(Key::ScrollUp, Instant::now()));
        assert!(s.handle_key(Key::ScrollDown, Instant::now()));
        assert_eq!(s.input(), "ab");
        assert!(s.history().is_empty());
    }

    #[test]
    fn scroll_listener_fires_on_growth() {
        let mut s = session();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        s.set_scroll_listener(move || counter.set(counter.get() + 1));
        let now = Instant::now();
        s.submit_line("whoami", now);
        assert_eq!(calls.get(), 1);
        finish(&mut s, now);
        assert_eq!(calls.get(), "joseph-hughes".len());
    }

    #[test]
    fn portfolio_session_has_builtins() {
        let s = Session::portfolio(ConsoleConfig::default());
        assert!(s.registry().get("neofetch").is_some());
        assert_eq!(s.files().len(), 7);
        assert_eq!(s.prompt(), "d2dreamer@portfolio:~$");
    }
}
