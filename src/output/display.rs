//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::SimulationResult;
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Won:              {}",
        format!("{}", result.won).green()
    );
    println!("   Lost:             {}", format!("{}", result.lost).red());
    if result.unfinished > 0 {
        println!(
            "   Unfinished:       {}",
            format!("{}", result.unfinished).yellow()
        );
    }
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.won == 0 {
        return;
    }

    println!("\n📈 {}", "Mistakes in won rounds:".bright_cyan().bold());
    for (&mistakes, &count) in &result.mistake_distribution {
        let pct = count as f64 / result.won as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {mistakes}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
