//! Display functions for command results

use super::formatters::{colored_preview, colored_result, create_progress_bar, result_to_emoji};
use crate::commands::{Suggestion, WorstCaseReport};
use crate::core::Color;
use crate::game::GameRecord;
use colored::Colorize;

/// Width of the group size bars in the worst-case report
const BAR_WIDTH: usize = 30;

/// Print every round of a finished game
pub fn print_game_record(record: &GameRecord, max_rounds: usize, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    match &record.hidden {
        Some(hidden) => println!("Solving: {}", hidden.text().bright_yellow().bold()),
        None => println!("{}", "Evil mode: no hidden word".bright_red().bold()),
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in record.steps.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            colored_result(&step.result),
            result_to_emoji(&step.result)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    let rounds = record.rounds();
    if record.solved_within(max_rounds) {
        println!(
            "{}",
            format!("✅ Solved in {rounds} rounds!").green().bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Solved in {rounds} rounds, over the limit of {max_rounds}")
                .red()
                .bold()
        );
    }
    println!("State: {}", record.final_state.serialize().dimmed());
}

/// Print a one-shot suggestion
pub fn print_suggestion(suggestion: &Suggestion) {
    println!("{} {}", "State:".bold(), suggestion.state);
    for result in suggestion.state.previous_guesses() {
        println!("  {}", colored_result(result));
    }
    println!("{}", suggestion.possibility_text().bright_cyan());
    if let Some(best) = &suggestion.best {
        println!("{} {}", "Best guess:".bold(), best.text().bright_yellow().bold());
    }
}

/// Print the adversary's answer and how the candidates split
pub fn print_worst_case(report: &WorstCaseReport) {
    println!("{} {}", "State:".bold(), report.state);
    println!(
        "{} {} {}",
        "Worst case:".bold(),
        colored_result(&report.result),
        report.result.color_text()
    );
    println!("{} candidates\n", report.candidates);

    for (result, size) in &report.groups {
        println!(
            "  {} {} {size}",
            result_to_emoji(result),
            create_progress_bar(*size, report.candidates, BAR_WIDTH).cyan()
        );
    }
}

/// Print the known colors of a typed word
pub fn print_preview(word: &str, colors: &[Option<Color>]) {
    let legend: String = colors
        .iter()
        .map(|c| c.map_or('?', Color::to_char))
        .collect();
    println!("{} {}", colored_preview(&word.to_uppercase(), colors), legend);
}
