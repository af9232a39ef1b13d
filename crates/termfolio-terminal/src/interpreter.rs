//! Command table, registry, and dispatch.
//!
//! A command is a [`CommandEntry`]: a name plus a [`CommandAction`] that is
//! either a constant string, a function of the arguments and session state,
//! or an animation sentinel. The registry is built once at session start and
//! never changes afterwards.

use std::collections::HashMap;

use termfolio_platform::TimeService;
use termfolio_types::error::{Result, TermfolioError};
use termfolio_vfs::FileTable;

use crate::animation::AnimationKind;
use crate::history::HistoryEntry;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text, revealed with the length-based policy.
    Text(String),
    /// A directory-scan style listing, revealed one line at a time.
    Listing(String),
    /// Hand rendering off to a cosmetic animation.
    Animation(AnimationKind),
    /// Signal to empty the session log.
    Clear,
    /// Blank input; nothing to show.
    None,
}

impl CommandOutput {
    /// The display text, or `""` for signals.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(t) | Self::Listing(t) => t,
            _ => "",
        }
    }
}

/// Read-only view of session state handed to every command.
pub struct Environment<'a> {
    /// The virtual file table.
    pub vfs: &'a FileTable,
    /// Clock for `date`/`uptime`-style commands.
    pub time: Option<&'a dyn TimeService>,
    /// Entries submitted before the current one.
    pub history: &'a [HistoryEntry],
    /// Name used in paths such as `pwd`.
    pub user: &'a str,
}

/// Signature of a computed command.
pub type CommandFn = fn(&[&str], &Environment<'_>) -> Result<CommandOutput>;

/// What a command does when invoked.
#[derive(Clone, Copy)]
pub enum CommandAction {
    /// Always the same text; arguments are ignored.
    Constant(&'static str),
    /// Computed from the arguments and session state.
    Computed(CommandFn),
    /// Start a cosmetic animation instead of printing text.
    Animation(AnimationKind),
}

/// One row of the command table.
#[derive(Clone)]
pub struct CommandEntry {
    name: &'static str,
    description: &'static str,
    usage: &'static str,
    category: &'static str,
    action: CommandAction,
}

impl CommandEntry {
    /// A command that prints fixed text.
    pub const fn constant(
        name: &'static str,
        description: &'static str,
        category: &'static str,
        text: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            usage: name,
            category,
            action: CommandAction::Constant(text),
        }
    }

    /// A command whose output is computed on every call.
    pub const fn computed(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        category: &'static str,
        run: CommandFn,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            category,
            action: CommandAction::Computed(run),
        }
    }

    /// A command that hands off to an animation.
    pub const fn animation(
        name: &'static str,
        description: &'static str,
        kind: AnimationKind,
    ) -> Self {
        Self {
            name,
            description,
            usage: name,
            category: "fun",
            action: CommandAction::Animation(kind),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn usage(&self) -> &'static str {
        self.usage
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn action(&self) -> CommandAction {
        self.action
    }

    fn run(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        match self.action {
            CommandAction::Constant(text) => Ok(CommandOutput::Text(text.to_string())),
            CommandAction::Computed(run) => run(args, env),
            CommandAction::Animation(kind) => Ok(CommandOutput::Animation(kind)),
        }
    }
}

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, entry: CommandEntry) {
        let key = entry.name().to_ascii_lowercase();
        match self.index.get(&key) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            },
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Parse and execute a command line.
    ///
    /// The first whitespace-separated token, lower-cased, names the command;
    /// the rest are its arguments. Unknown commands are an error carrying
    /// the token as typed.
    pub fn execute(&self, line: &str, env: &Environment<'_>) -> Result<CommandOutput> {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Ok(CommandOutput::None);
        };
        let args: Vec<&str> = tokens.collect();
        let name = first.to_lowercase();
        log::debug!("dispatch {name} ({} args)", args.len());

        if name == "help" && !args.is_empty() {
            return self.execute_help(&args);
        }

        match self.get(&name) {
            Some(entry) => entry.run(&args, env),
            None => Err(TermfolioError::UnknownCommand(first.to_string())),
        }
    }

    /// Resolve a command line to its output. Never fails: errors become
    /// their user-facing text.
    pub fn resolve(&self, line: &str, env: &Environment<'_>) -> CommandOutput {
        match self.execute(line, env) {
            Ok(output) => output,
            Err(e) => {
                log::debug!("command failed: {e}");
                CommandOutput::Text(e.to_string())
            },
        }
    }

    /// `help <command>`: details for a single command.
    fn execute_help(&self, args: &[&str]) -> Result<CommandOutput> {
        let name = args[0];
        let entry = self
            .get(name)
            .ok_or_else(|| TermfolioError::UnknownCommand(name.to_string()))?;
        let mut out = format!("{} ({})\n", entry.name(), entry.category());
        out.push_str(&format!("  {}\n", entry.description()));
        out.push_str(&format!("  Usage: {}", entry.usage()));
        Ok(CommandOutput::Text(out))
    }

    /// Return a sorted list of (name, description) pairs.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|c| (c.name(), c.description()))
            .collect();
        cmds.sort_by_key(|(name, _)| *name);
        cmds
    }

    /// Command names in registration order.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| -> &str { c.name() })
    }

    /// Command names starting with `partial`, case-insensitively, in
    /// registration order.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        let lower = partial.to_lowercase();
        self.command_names()
            .filter(|name| name.to_lowercase().starts_with(&lower))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(args.join(" ")))
    }

    fn count(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.history.len().to_string()))
    }

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        reg.register(CommandEntry::computed(
            "echo",
            "Print arguments",
            "echo [text...]",
            "general",
            echo,
        ));
        reg.register(CommandEntry::constant(
            "whoami",
            "Display current user",
            "navigation",
            "joseph-hughes",
        ));
        reg.register(CommandEntry::computed(
            "count",
            "Count history",
            "count",
            "general",
            count,
        ));
        reg.register(CommandEntry::animation(
            "matrix",
            "Enter the matrix",
            AnimationKind::Matrix,
        ));
        reg
    }

    fn with_env<R>(history: &[HistoryEntry], f: impl FnOnce(&Environment<'_>) -> R) -> R {
        let vfs = FileTable::new();
        let env = Environment {
            vfs: &vfs,
            time: None,
            history,
            user: "d2dreamer",
        };
        f(&env)
    }

    #[test]
    fn register_and_execute() {
        let reg = registry();
        let out = with_env(&[], |env| reg.execute("echo hello world", env).unwrap());
        assert_eq!(out, CommandOutput::Text("hello world".to_string()));
    }

    #[test]
    fn constant_ignores_arguments() {
        let reg = registry();
        let out = with_env(&[], |env| reg.resolve("whoami --verbose", env));
        assert_eq!(out.text(), "joseph-hughes");
    }

    #[test]
    fn empty_input() {
        let reg = registry();
        assert_eq!(
            with_env(&[], |env| reg.resolve("", env)),
            CommandOutput::None
        );
        assert_eq!(
            with_env(&[], |env| reg.resolve("   \t  ", env)),
            CommandOutput::None
        );
    }

    #[test]
    fn unknown_command_is_error() {
        let reg = registry();
        let err = with_env(&[], |env| reg.execute("nonexistent", env)).unwrap_err();
        assert!(matches!(err, TermfolioError::UnknownCommand(ref t) if t == "nonexistent"));
    }

    #[test]
    fn unknown_command_resolves_to_text_with_original_case() {
        let reg = registry();
        let out = with_env(&[], |env| reg.resolve("FooBar baz", env));
        assert_eq!(
            out.text(),
            "Command not found: FooBar. Type 'help' for available commands."
        );
    }

    #[test]
    fn command_case_insensitive() {
        let reg = registry();
        let out = with_env(&[], |env| reg.resolve("WhoAmI", env));
        assert_eq!(out.text(), "joseph-hughes");
    }

    #[test]
    fn leading_trailing_whitespace() {
        let reg = registry();
        let out = with_env(&[], |env| reg.resolve("  echo   hi    there  ", env));
        assert_eq!(out.text(), "hi there");
    }

    #[test]
    fn computed_sees_history() {
        let reg = registry();
        let history = vec![
            HistoryEntry::finished("a", "1"),
            HistoryEntry::finished("b", "2"),
        ];
        let out = with_env(&history, |env| reg.resolve("count", env));
        assert_eq!(out.text(), "2");
    }

    #[test]
    fn animation_sentinel() {
        let reg = registry();
        let out = with_env(&[], |env| reg.resolve("MATRIX", env));
        assert_eq!(out, CommandOutput::Animation(AnimationKind::Matrix));
        assert_eq!(out.text(), "");
    }

    #[test]
    fn help_for_single_command() {
        let reg = registry();
        let out = with_env(&[], |env| reg.resolve("help ECHO", env));
        assert_eq!(
            out.text(),
            "echo (general)\n  Print arguments\n  Usage: echo [text...]"
        );
    }

    #[test]
    fn help_for_unknown_command() {
        let reg = registry();
        let out = with_env(&[], |env| reg.resolve("help nope", env));
        assert!(out.text().starts_with("Command not found: nope."));
    }

    #[test]
    fn register_replaces_existing_command() {
        let mut reg = registry();
        let before = reg.len();
        reg.register(CommandEntry::constant("WHOAMI", "Replaced", "navigation", "guest"));
        assert_eq!(reg.len(), before);
        let out = with_env(&[], |env| reg.resolve("whoami", env));
        assert_eq!(out.text(), "guest");
    }

    #[test]
    fn list_commands_sorted() {
        let reg = registry();
        let names: Vec<&str> = reg.list_commands().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["count", "echo", "matrix", "whoami"]);
    }

    #[test]
    fn command_names_keep_registration_order() {
        let reg = registry();
        let names: Vec<&str> = reg.command_names().collect();
        assert_eq!(names, vec!["echo", "whoami", "count", "matrix"]);
    }

    #[test]
    fn completions_prefix() {
        let reg = registry();
        assert_eq!(reg.completions("EC"), vec!["echo".to_string()]);
        assert!(reg.completions("xyz").is_empty());
    }

    #[test]
    fn default_creates_empty_registry() {
        let reg = CommandRegistry::default();
        assert!(reg.is_empty());
        assert!(reg.get("help").is_none());
    }

    #[test]
    fn unicode_arguments_pass_through() {
        let reg = registry();
        let out = with_env(&[], |env| reg.resolve("echo héllo wörld", env));
        assert_eq!(out.text(), "héllo wörld");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn dispatch_ignores_case(mask in proptest::collection::vec(any::<bool>(), 6)) {
                let reg = registry();
                let name: String = "whoami"
                    .chars()
                    .zip(mask)
                    .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                    .collect();
                let out = with_env(&[], |env| reg.resolve(&name, env));
                prop_assert_eq!(out.text(), "joseph-hughes");
            }

            #[test]
            fn unknown_tokens_are_echoed(token in "[A-Za-z]{3,12}") {
                prop_assume!(reg_lacks(&token));
                let reg = registry();
                let out = with_env(&[], |env| reg.resolve(&token, env));
                prop_assert!(out.text().contains(&token));
            }
        }

        fn reg_lacks(token: &str) -> bool {
            registry().get(token).is_none() && !token.eq_ignore_ascii_case("help")
        }
    }
}
