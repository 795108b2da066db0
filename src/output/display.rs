//! Display functions for command results

use super::formatters::{format_rank, rank_bar};
use crate::commands::{BenchmarkResult, CompletionResult, RankResult, SearchResult};
use colored::Colorize;

/// Print the result of a word lookup
pub fn print_search_result(result: &SearchResult) {
    if result.found {
        println!(
            "{} '{}' found (rank {})",
            "✓".green(),
            result.word.bright_white().bold(),
            format_rank(result.rank).bright_yellow()
        );
    } else {
        println!("{} '{}' not found", "✗".red(), result.word.bright_white());
    }
}

/// Print ranked suggestions for a prefix
pub fn print_completion_result(result: &CompletionResult) {
    if result.suggestions.is_empty() {
        println!(
            "No suggestions for '{}'",
            result.prefix.bright_white().bold()
        );
        return;
    }

    println!(
        "\nSuggestions for '{}':",
        result.prefix.bright_white().bold()
    );

    let top_rank = result.suggestions.first().map_or(0, |(_, rank)| *rank);
    let width = result
        .suggestions
        .iter()
        .map(|(word, _)| word.chars().count())
        .max()
        .unwrap_or(0);

    for (i, (word, rank)) in result.suggestions.iter().enumerate() {
        println!(
            "  {:>3}. {word:<width$}  {} {}",
            (i + 1).to_string().bright_black(),
            rank_bar(*rank, top_rank, 20).green(),
            rank.to_string().bright_yellow()
        );
    }
    println!();
}

/// Print the rank of a word
pub fn print_rank_result(result: &RankResult) {
    println!(
        "Rank of '{}': {}",
        result.word.bright_white().bold(),
        format_rank(result.rank).bright_yellow()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries:          {}", result.queries);
    println!("   Prefix length:    {}", result.prefix_len);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!(
        "   Queries/second:   {}",
        format!("{:.1}", result.queries_per_second)
            .bright_yellow()
            .bold()
    );

    println!("\n📈 {}", "Suggestions:".bright_cyan().bold());
    println!("   Total:            {}", result.total_suggestions);
    println!("   Average:          {:.2}", result.average_suggestions);
    println!(
        "   Largest:          {}",
        format!("{}", result.max_suggestions).yellow()
    );
    println!(
        "   Empty results:    {}",
        format!("{}", result.empty_results).bright_black()
    );
}
