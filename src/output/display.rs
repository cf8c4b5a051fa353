//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{RankedWord, SimulationReport, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, &step.feedback),
            step.feedback
        );

        if verbose {
            println!("  Candidates left: {}", step.candidates_after);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.max_guesses)
                .red()
                .bold()
        );
    }
}

/// Print the summary of a simulation batch with the top `count` entries of each ranking
pub fn print_simulation_report(report: &SimulationReport, count: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", report.games);
    println!(
        "   Won / lost:       {} / {}",
        report.wins.to_string().green(),
        report.losses.to_string().red()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", report.average_guesses())
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Seed:             {}", report.seed);

    let worst_mean = |ranked: &[RankedWord]| ranked.last().map_or(0.0, |r| r.mean_guesses);
    let scale = worst_mean(&report.targets).max(worst_mean(&report.openings));

    print_ranking("Easiest targets:", report.easiest(count).iter(), scale);
    print_ranking("Hardest targets:", report.hardest(count), scale);
    print_ranking(
        "Best opening words:",
        report.best_openings(count).iter(),
        scale,
    );
    print_ranking(
        "Worst opening words:",
        report.worst_openings(count),
        scale,
    );

    if !report.failures.is_empty() {
        println!(
            "\n⚠️  {}",
            format!("{} games ran out of candidates:", report.failures.len())
                .yellow()
                .bold()
        );
        for failure in &report.failures {
            println!(
                "   {} (trial {}): guessed {} after {} guesses",
                failure.target.to_uppercase().red(),
                failure.trial,
                failure.guessed_words.join(", "),
                failure.guessed_words.len()
            );
            println!("      {}", failure.knowledge.to_string().bright_black());
        }
    }
}

fn print_ranking<'a>(
    title: &str,
    ranked: impl Iterator<Item = &'a RankedWord>,
    scale: f64,
) {
    println!("\n📈 {}", title.bright_cyan().bold());
    for (i, entry) in ranked.enumerate() {
        println!(
            "   {:>3}. {} [{}] {} ({} games)",
            i + 1,
            entry.word.to_uppercase().bold(),
            create_progress_bar(entry.mean_guesses, scale, 20).green(),
            format!("{:.2}", entry.mean_guesses).bright_yellow(),
            entry.games
        );
    }
}
