//! Word Rank - CLI
//!
//! Ranked autocomplete over a word list, as one-shot queries or an interactive session.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use word_rank::{
    commands::{complete_prefix, rank_of, run_benchmark, run_session, sample_prefixes, search_word},
    core::RankedWordStore,
    output::{
        print_benchmark_result, print_completion_result, print_rank_result, print_search_result,
    },
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "word_rank",
    about = "Prefix-indexed word store with popularity-ranked autocomplete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'default' (embedded dictionary) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Abort if the word list cannot be read instead of starting with an empty store
    #[arg(long, global = true)]
    strict: bool,

    /// Maximum number of suggestions to show (all matches are still ranked)
    #[arg(short, long, global = true)]
    limit: Option<NonZeroUsize>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Simple,

    /// Look up a word
    Search {
        /// The word to look up
        word: String,
    },

    /// List ranked suggestions for a prefix
    Complete {
        /// Prefix to complete
        prefix: String,
    },

    /// Show the rank of a word
    Rank {
        /// The word to inspect
        word: String,
    },

    /// Measure autocomplete throughput
    Benchmark {
        /// Number of random prefixes to query
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Characters kept from each sampled word
        #[arg(short = 'p', long, default_value = "2")]
        prefix_len: usize,
    },
}

/// Log filter: `RUST_LOG` when set, otherwise `word_rank=info` (`word_rank=debug` with `-v`)
fn log_filter(rust_log: Option<&str>, verbose: bool) -> Result<EnvFilter> {
    let directives = match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ if verbose => "word_rank=debug",
        _ => "word_rank=info",
    };

    Ok(EnvFilter::try_new(directives)?)
}

fn init_tracing(verbose: bool) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), verbose)?)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Build the store from the configured source
///
/// An unreadable source yields an empty store unless `strict` is set.
fn load_store(source: &WordSource, strict: bool) -> Result<RankedWordStore> {
    let mut store = RankedWordStore::new();

    match source.read() {
        Ok(words) => {
            store.load(words);
        }
        Err(e) if strict => return Err(e.into()),
        Err(e) => warn!(error = %e, "no words loaded"),
    }

    Ok(store)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let source = WordSource::from_name(&cli.wordlist);
    let mut store = load_store(&source, cli.strict)?;
    let limit = cli.limit.map(NonZeroUsize::get);

    // Default to the interactive session if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_session(&mut store, &source, limit)?,
        Commands::Search { word } => print_search_result(&search_word(&mut store, &word)),
        Commands::Complete { prefix } => {
            print_completion_result(&complete_prefix(&mut store, &prefix, limit));
        }
        Commands::Rank { word } => print_rank_result(&rank_of(&store, &word)),
        Commands::Benchmark { count, prefix_len } => {
            println!("Running autocomplete on {count} random prefixes of length {prefix_len}...");
            let prefixes = sample_prefixes(&store, count, prefix_len);
            let result = run_benchmark(&mut store, &prefixes, prefix_len);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
