//! Navigation and system commands: pwd, whoami, date, uptime, version,
//! neofetch, status, intro.

use termfolio_types::error::Result;

use crate::interpreter::{CommandEntry, CommandOutput, CommandRegistry, Environment};

/// Version shown by the banner, `version` and `neofetch`.
pub const CONSOLE_VERSION: &str = "1.0.2";

const WELCOME: &str = "Welcome to Joseph Hughes' Interactive Portfolio!

This is a terminal-style CV written in Rust.

Quick Navigation:
- Type 'ls' to see all available files
- Type 'cat <filename>' to read content
- Type 'help' for all available commands
- Type 'neofetch' for system information

Enjoy exploring!";

/// Register pwd, whoami, date and uptime.
pub fn register_navigation_commands(reg: &mut CommandRegistry) {
    reg.register(CommandEntry::computed(
        "pwd",
        "Show current directory",
        "pwd",
        "navigation",
        pwd,
    ));
    reg.register(CommandEntry::constant(
        "whoami",
        "Display current user",
        "navigation",
        "joseph-hughes",
    ));
    reg.register(CommandEntry::computed(
        "date",
        "Show current date and time",
        "date",
        "navigation",
        date,
    ));
    reg.register(CommandEntry::computed(
        "uptime",
        "Show session uptime",
        "uptime",
        "navigation",
        uptime,
    ));
}

/// Register version, neofetch, status, intro and welcome.
pub fn register_system_commands(reg: &mut CommandRegistry) {
    reg.register(CommandEntry::computed(
        "version",
        "Show version information",
        "version",
        "system",
        version,
    ));
    reg.register(CommandEntry::computed(
        "neofetch",
        "Display system information",
        "neofetch",
        "system",
        neofetch,
    ));
    reg.register(CommandEntry::computed(
        "status",
        "Show portfolio status",
        "status",
        "system",
        status,
    ));
    reg.register(CommandEntry::constant(
        "intro",
        "Show welcome message",
        "system",
        WELCOME,
    ));
    reg.register(CommandEntry::constant(
        "welcome",
        "Show welcome message",
        "system",
        WELCOME,
    ));
}

/// Today's date as `M/D/YYYY`, or `unknown` without a clock.
fn today(env: &Environment<'_>) -> Result<String> {
    match env.time {
        Some(time) => Ok(time.now()?.to_short_date()),
        None => Ok("unknown".to_string()),
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

fn pwd(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    Ok(CommandOutput::Text(format!("/home/{}/portfolio", env.user)))
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

fn date(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    match env.time {
        Some(time) => Ok(CommandOutput::Text(time.now()?.to_date_string())),
        None => Ok(CommandOutput::Text(
            "date: no time service available".to_string(),
        )),
    }
}

// ---------------------------------------------------------------------------
// uptime
// ---------------------------------------------------------------------------

fn uptime(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    let Some(time) = env.time else {
        return Ok(CommandOutput::Text(
            "uptime: no time service available".to_string(),
        ));
    };
    let secs = time.uptime_secs()?;
    let mins = secs / 60;
    let hours = mins / 60;
    Ok(CommandOutput::Text(format!(
        "System uptime: {hours}h {}m {}s",
        mins % 60,
        secs % 60
    )))
}

// ---------------------------------------------------------------------------
// version
// ---------------------------------------------------------------------------

fn version(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    Ok(CommandOutput::Text(format!(
        "Console Portfolio v{CONSOLE_VERSION}\nBuilt with Rust\nLast updated: {}",
        today(env)?
    )))
}

// ---------------------------------------------------------------------------
// neofetch
// ---------------------------------------------------------------------------

fn neofetch(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    let uptime = match env.time {
        Some(time) => format!("{}s", time.uptime_secs()?),
        None => "unknown".to_string(),
    };
    let lines = [
        format!("OS: Portfolio Console v{CONSOLE_VERSION}"),
        format!("Host: {}-portfolio", env.user),
        format!("Kernel: termfolio {}", env!("CARGO_PKG_VERSION")),
        format!("Uptime: {uptime}"),
        "Shell: Interactive Console".to_string(),
        "Terminal: ANSI".to_string(),
        "CPU: Native".to_string(),
        "Memory: Dynamic".to_string(),
        "Theme: 8-bit Green".to_string(),
        "Icons: ASCII".to_string(),
    ];
    Ok(CommandOutput::Text(lines.join("\n")))
}

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

fn status(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    Ok(CommandOutput::Text(format!(
        "Portfolio Status: ONLINE\n\
         Last Updated: {}\n\
         Total Commands: {}\n\
         System: Running smoothly\n\
         Theme: 8-bit Green Terminal\n\
         \n\
         Ready for your next command!",
        today(env)?,
        env.history.len()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use termfolio_platform::{SystemTime, TimeService};
    use termfolio_vfs::FileTable;

    struct FixedClock {
        now: u64,
        uptime: u64,
    }

    impl TimeService for FixedClock {
        fn now(&self) -> Result<SystemTime> {
            Ok(SystemTime::from_unix_secs(self.now))
        }
        fn uptime_secs(&self) -> Result<u64> {
            Ok(self.uptime)
        }
    }

    fn setup() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        register_navigation_commands(&mut reg);
        register_system_commands(&mut reg);
        reg
    }

    fn run_with(
        line: &str,
        time: Option<&dyn TimeService>,
        history: &[HistoryEntry],
    ) -> String {
        let reg = setup();
        let vfs = FileTable::new();
        let env = Environment {
            vfs: &vfs,
            time,
            history,
            user: "d2dreamer",
        };
        reg.resolve(line, &env).text().to_string()
    }

    const CLOCK: FixedClock = FixedClock {
        // 2024-02-29 12:34:56 UTC
        now: 1_709_210_096,
        uptime: 3 * 3600 + 25 * 60 + 7,
    };

    #[test]
    fn pwd_uses_user() {
        assert_eq!(run_with("pwd", None, &[]), "/home/d2dreamer/portfolio");
    }

    #[test]
    fn whoami_is_constant() {
        assert_eq!(run_with("whoami", None, &[]), "joseph-hughes");
    }

    #[test]
    fn date_formats_long_form() {
        assert_eq!(
            run_with("date", Some(&CLOCK), &[]),
            "Thu Feb 29 2024 12:34:56 GMT+0000"
        );
    }

    #[test]
    fn uptime_breakdown() {
        assert_eq!(
            run_with("uptime", Some(&CLOCK), &[]),
            "System uptime: 3h 25m 7s"
        );
    }

    #[test]
    fn uptime_past_a_day_keeps_counting_hours() {
        let clock = FixedClock {
            now: 0,
            uptime: 26 * 3600 + 59,
        };
        assert_eq!(
            run_with("uptime", Some(&clock), &[]),
            "System uptime: 26h 0m 59s"
        );
    }

    #[test]
    fn no_time_service() {
        assert!(run_with("date", None, &[]).contains("no time service"));
        assert!(run_with("uptime", None, &[]).contains("no time service"));
        assert!(run_with("version", None, &[]).ends_with("Last updated: unknown"));
    }

    #[test]
    fn version_banner() {
        assert_eq!(
            run_with("version", Some(&CLOCK), &[]),
            "Console Portfolio v1.0.2\nBuilt with Rust\nLast updated: 2/29/2024"
        );
    }

    #[test]
    fn neofetch_reports_uptime_seconds() {
        let out = run_with("neofetch", Some(&CLOCK), &[]);
        assert!(out.starts_with("OS: Portfolio Console v1.0.2\nHost: d2dreamer-portfolio\n"));
        assert!(out.contains("Uptime: 12307s"));
        assert!(out.ends_with("Icons: ASCII"));
    }

    #[test]
    fn status_counts_history() {
        let history = vec![
            HistoryEntry::finished("ls", "..."),
            HistoryEntry::finished("about", "..."),
            HistoryEntry::finished("skills", "..."),
        ];
        let out = run_with("status", Some(&CLOCK), &history);
        assert_eq!(
            out,
            "Portfolio Status: ONLINE\nLast Updated: 2/29/2024\nTotal Commands: 3\n\
             System: Running smoothly\nTheme: 8-bit Green Terminal\n\n\
             Ready for your next command!"
        );
    }

    #[test]
    fn intro_and_welcome_agree() {
        let intro = run_with("intro", None, &[]);
        assert_eq!(intro, run_with("WELCOME", None, &[]));
        assert!(intro.starts_with("Welcome to Joseph Hughes' Interactive Portfolio!"));
    }
}
