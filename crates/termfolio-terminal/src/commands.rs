//! Built-in commands for the portfolio console.

use termfolio_types::error::{Result, TermfolioError};
use termfolio_vfs::HELP_TXT;

use crate::interpreter::{CommandEntry, CommandOutput, CommandRegistry, Environment};

/// Register all built-in commands into a registry.
///
/// Registration order is the order autocomplete considers candidates in.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(CommandEntry::computed(
        "ls",
        "List portfolio files",
        "ls",
        "files",
        ls,
    ));
    reg.register(CommandEntry::computed(
        "cat",
        "Display file contents",
        "cat <file>",
        "files",
        cat,
    ));
    reg.register(CommandEntry::computed(
        "tree",
        "Show the portfolio file tree",
        "tree",
        "files",
        tree,
    ));
    crate::system_commands::register_navigation_commands(reg);
    crate::content_commands::register_content_commands(reg);
    crate::system_commands::register_system_commands(reg);
    reg.register(CommandEntry::computed(
        "clear",
        "Clear the terminal screen",
        "clear",
        "system",
        clear,
    ));
    reg.register(CommandEntry::computed(
        "help",
        "Show available commands",
        "help [command]",
        "system",
        help,
    ));
    crate::fun_commands::register_fun_commands(reg);
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

fn ls(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    let lines: Vec<String> = env
        .vfs
        .iter()
        .map(|f| format!("{} {}", f.tag(), f.name()))
        .collect();
    Ok(CommandOutput::Listing(lines.join("\n")))
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

fn cat(args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    if args.is_empty() {
        return Err(TermfolioError::MissingOperand {
            command: "cat".to_string(),
        });
    }
    // Runs of whitespace between arguments collapse to one space.
    let file = args.join(" ");
    match env.vfs.read(&file) {
        Some(content) => Ok(CommandOutput::Text(content.to_string())),
        None => Err(TermfolioError::FileNotFound {
            command: "cat".to_string(),
            file,
        }),
    }
}

// ---------------------------------------------------------------------------
// tree
// ---------------------------------------------------------------------------

fn tree(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    let mut lines = vec!["portfolio/".to_string()];
    let count = env.vfs.len();
    for (i, file) in env.vfs.iter().enumerate() {
        let branch = if i + 1 == count { "└──" } else { "├──" };
        lines.push(format!("{branch} [FILE] {}", file.name()));
    }
    lines.push(String::new());
    lines.push(format!("0 directories, {count} files"));
    Ok(CommandOutput::Text(lines.join("\n")))
}

// ---------------------------------------------------------------------------
// clear / help
// ---------------------------------------------------------------------------

fn clear(_args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
    Ok(CommandOutput::Clear)
}

/// Bare `help`. `help <command>` is intercepted by the registry, which is
/// the only place that can see every entry.
fn help(_args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
    let text = env.vfs.read("help.txt").unwrap_or(HELP_TXT);
    Ok(CommandOutput::Text(text.to_string()))
}
