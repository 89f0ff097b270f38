//! Display functions for command results

use super::formatters::{criterion_label, predicate_text, results_grid, window_bar};
use crate::commands::{BenchmarkResult, FilterReport};
use crate::core::Criterion;
use crate::filter::{FilterEngine, Session};
use colored::Colorize;

/// Words per row in result grids
const GRID_COLUMNS: usize = 10;

/// Print the numbered criteria list
pub fn print_criteria(criteria: &[Criterion]) {
    println!("{}", "Filters:".bright_cyan().bold());
    if criteria.is_empty() {
        println!("   {}", "(none)".bright_black());
    }
    for (i, criterion) in criteria.iter().enumerate() {
        let label = criterion_label(criterion);
        let line = if criterion.is_empty() {
            label.bright_black()
        } else {
            label.normal()
        };
        println!("   {}. {line}", i + 1);
    }
}

/// Print the displayed window of results with a paging footer
pub fn print_window(engine: &FilterEngine) {
    let rows = results_grid(engine.window(), GRID_COLUMNS);

    println!("\n{}", "Results:".bright_cyan().bold());
    if rows.is_empty() {
        println!("   {}", "No results".yellow());
    }
    for row in rows {
        println!("   {row}");
    }

    println!(
        "\n   [{}] showing {} of {}{}",
        window_bar(engine.window_len(), engine.result_count(), 20).green(),
        engine.window_len(),
        engine.result_count(),
        if engine.has_more() {
            " ('more' for the next page)"
        } else {
            ""
        }
    );
}

/// Print criteria, predicate and results for an interactive session
pub fn print_session(session: &Session) {
    println!("\n{}", "─".repeat(60).cyan());
    print_criteria(session.criteria());
    println!(
        "\n{} {}",
        "Condition:".bright_cyan().bold(),
        predicate_text(session.predicate()).bright_yellow()
    );
    print_window(session.engine());
    println!("{}", "─".repeat(60).cyan());
}

/// Print the result of a one-shot filter run
pub fn print_filter_report(report: &FilterReport) {
    println!("\n{}", "═".repeat(60).cyan());
    print_criteria(&report.criteria);
    println!(
        "\n{} {}",
        "Condition:".bright_cyan().bold(),
        predicate_text(&report.predicate).bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} of {} words match",
        report.matches.to_string().bright_yellow().bold(),
        report.corpus_size
    );

    if report.shown.is_empty() {
        println!("\n   {}", "No results".yellow());
    } else {
        println!();
        for row in report.shown.chunks(GRID_COLUMNS) {
            println!("   {}", row.join("  "));
        }
    }

    if report.has_more {
        println!(
            "\n   … {} more (use --pages or --all)",
            report.matches - report.shown.len()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Trials:           {}", result.trials);
    println!("   Corpus size:      {}", result.corpus_size);
    println!("   Seed:             {}", result.seed);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!(
        "   Scans/second:     {}",
        format!("{:.1}", result.scans_per_second)
            .bright_yellow()
            .bold()
    );

    println!("\n📈 {}", "Selectivity:".bright_cyan().bold());
    println!("   Average atoms:    {:.2}", result.average_atoms);
    println!("   Average matches:  {:.1}", result.average_matches);
    println!(
        "   Fewest matches:   {}",
        format!("{}", result.min_matches).green()
    );
    println!(
        "   Most matches:     {}",
        format!("{}", result.max_matches).yellow()
    );
    println!("   Empty results:    {}", result.empty_results);
}
