//! Interactive session
//!
//! Line-based loop over a single store, with commands mirroring the one-shot queries.

use super::query::{
    CompletionResult, RankResult, SearchResult, bump_word, complete_prefix, rank_of, search_word,
};
use crate::core::RankedWordStore;
use crate::output::{print_completion_result, print_rank_result, print_search_result};
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};
use tracing::{info, warn};

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    Complete(String),
    Rank(String),
    Bump(String),
    Reload,
    Stats,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line
    ///
    /// The argument is everything after the first space, taken verbatim.
    ///
    /// # Errors
    ///
    /// Returns a message for unknown commands or a missing argument.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (name, arg) = line.split_once(' ').unwrap_or((line, ""));

        let require = |ctor: fn(String) -> Self, what: &str| {
            if arg.is_empty() {
                Err(format!("Missing {what} for '{name}'"))
            } else {
                Ok(ctor(arg.to_string()))
            }
        };

        match name.to_lowercase().as_str() {
            "search" | "s" => require(Self::Search, "word"),
            "complete" | "ac" | "c" => require(Self::Complete, "prefix"),
            "rank" | "r" => require(Self::Rank, "word"),
            "bump" | "b" => require(Self::Bump, "word"),
            "reload" => Ok(Self::Reload),
            "stats" => Ok(Self::Stats),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            "" => Err("Empty command".to_string()),
            other => Err(format!("Unknown command '{other}'")),
        }
    }
}

/// Outcome of executing a session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Searched(SearchResult),
    Completed(CompletionResult),
    Ranked(RankResult),
    Reloaded { added: usize, total: usize },
    ReloadFailed(String),
    Stats { words: usize },
    Help,
    Quit,
}

/// Apply a command to the store
pub fn execute(
    store: &mut RankedWordStore,
    source: &WordSource,
    command: SessionCommand,
    limit: Option<usize>,
) -> Outcome {
    match command {
        SessionCommand::Search(word) => Outcome::Searched(search_word(store, &word)),
        SessionCommand::Complete(prefix) => {
            Outcome::Completed(complete_prefix(store, &prefix, limit))
        }
        SessionCommand::Rank(word) => Outcome::Ranked(rank_of(store, &word)),
        SessionCommand::Bump(word) => Outcome::Ranked(bump_word(store, &word)),
        SessionCommand::Reload => match source.read() {
            Ok(words) => {
                let added = store.load(words);
                info!(%source, added, total = store.len(), "reloaded word list");
                Outcome::Reloaded {
                    added,
                    total: store.len(),
                }
            }
            Err(e) => {
                warn!(error = %e, "reload failed, keeping current words");
                Outcome::ReloadFailed(e.to_string())
            }
        },
        SessionCommand::Stats => Outcome::Stats { words: store.len() },
        SessionCommand::Help => Outcome::Help,
        SessionCommand::Quit => Outcome::Quit,
    }
}

/// Run the interactive session until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_session(
    store: &mut RankedWordStore,
    source: &WordSource,
    limit: Option<usize>,
) -> io::Result<()> {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD RANK - Interactive Mode".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n{} words loaded from {source}", store.len());
    print_help();

    loop {
        let Some(line) = get_user_input(">")? else {
            println!();
            return Ok(());
        };

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{} {message}", "✗".red());
                continue;
            }
        };

        match execute(store, source, command, limit) {
            Outcome::Searched(result) => print_search_result(&result),
            Outcome::Completed(result) => print_completion_result(&result),
            Outcome::Ranked(result) => print_rank_result(&result),
            Outcome::Reloaded { added, total } => {
                println!("{} Reloaded: {added} new, {total} total", "✓".green());
            }
            Outcome::ReloadFailed(message) => println!("{} {message}", "✗".red()),
            Outcome::Stats { words } => println!("Words stored: {words}"),
            Outcome::Help => print_help(),
            Outcome::Quit => return Ok(()),
        }
    }
}

fn print_help() {
    println!("\nCommands:");
    println!("  search <word>      look up a word (counts as a vote)");
    println!("  complete <prefix>  ranked suggestions (votes for every match)");
    println!("  rank <word>        show a word's rank");
    println!("  bump <word>        add one vote to a word");
    println!("  reload             load the word list again, keeping ranks");
    println!("  stats              number of stored words");
    println!("  quit               leave\n");
}

/// Prompt and read a line; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt} ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input))
}
