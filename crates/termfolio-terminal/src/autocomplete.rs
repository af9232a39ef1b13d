//! Ghost-text completion for the input line.

use termfolio_vfs::FileTable;

use crate::interpreter::CommandRegistry;

/// The command whose argument completes against file names.
const FILE_COMMAND: &str = "cat";

/// Suggest a completion for `input`.
///
/// - `cat <partial>`: a unique case-insensitive file-name match yields
///   `cat <ExactName>`.
/// - A single token: commands and files matching the lower-cased prefix. A
///   unique match is returned verbatim; several matches return their common
///   lower-cased prefix when it is longer than the input.
///
/// Returns `""` when there is nothing to offer.
pub fn suggest(input: &str, registry: &CommandRegistry, files: &FileTable) -> String {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        [command, partial] if command.eq_ignore_ascii_case(FILE_COMMAND) => {
            let lower = partial.to_lowercase();
            let mut matches = files
                .names()
                .filter(|name| name.to_lowercase().starts_with(&lower));
            match (matches.next(), matches.next()) {
                (Some(name), None) => format!("{FILE_COMMAND} {name}"),
                _ => String::new(),
            }
        },
        [partial] => complete_token(partial, registry, files),
        _ => String::new(),
    }
}

fn complete_token(partial: &str, registry: &CommandRegistry, files: &FileTable) -> String {
    let lower = partial.to_lowercase();
    let mut matches = registry.completions(partial);
    matches.extend(
        files
            .names()
            .filter(|name| name.to_lowercase().starts_with(&lower))
            .map(str::to_string),
    );
    match matches.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        many => {
            let prefix = common_prefix(many.iter().map(|m| m.to_lowercase()));
            if prefix.chars().count() > lower.chars().count() {
                prefix
            } else {
                String::new()
            }
        },
    }
}

/// Longest common prefix, compared char by char.
fn common_prefix(mut words: impl Iterator<Item = String>) -> String {
    let Some(first) = words.next() else {
        return String::new();
    };
    let mut len = first.chars().count();
    for word in words {
        len = first
            .chars()
            .zip(word.chars())
            .take(len)
            .take_while(|(a, b)| a == b)
            .count();
    }
    first.chars().take(len).collect()
}
