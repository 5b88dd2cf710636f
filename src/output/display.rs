//! Display functions for game and command results

use super::formatters::{attempts_bar, format_chain, percentage};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::game::{Acceptance, GameState, GuessOutcome, Scoreboard};
use crate::solver::{PathOrigin, SolutionPath};
use colored::Colorize;

/// Print the chain, target and attempts of a game
pub fn print_game_state(state: &GameState) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Target: {}   Score: {}",
        state.target_name().bright_yellow().bold(),
        state.score().to_string().bright_cyan()
    );
    println!("Chain:  {}", format_chain(state.chain()).bright_white());
    println!(
        "Tries:  [{}] {}/{}",
        attempts_bar(state.remaining_attempts(), state.max_attempts(), 20).green(),
        state.remaining_attempts(),
        state.max_attempts()
    );
    if state.is_active() {
        match state.next_letter() {
            Some(letter) => println!(
                "Next:   {}",
                letter.to_uppercase().to_string().bright_yellow().bold()
            ),
            None => println!("Next:   {}", "?".bright_black()),
        }
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the outcome of a guess
pub fn print_outcome(outcome: &GuessOutcome, state: &GameState) {
    match outcome {
        GuessOutcome::Accepted { name, result } => match result {
            Acceptance::Continue { next_letter } => println!(
                "{} {} added. Next name must start with {}",
                "✓".green().bold(),
                name.bright_white().bold(),
                next_letter.to_uppercase().to_string().bright_yellow()
            ),
            Acceptance::TargetReached => println!(
                "\n{}",
                format!(
                    "🎉 VICTORY! You reached {} in {} steps!",
                    state.target_name(),
                    state.steps()
                )
                .bright_green()
                .bold()
            ),
            Acceptance::NoContinuations { letter } => println!(
                "\n{}",
                format!(
                    "🎉 VICTORY! No more valid names starting with {}. Your chain length: {}",
                    letter.to_uppercase(),
                    state.chain().len()
                )
                .bright_green()
                .bold()
            ),
        },
        GuessOutcome::Rejected {
            reason,
            remaining_attempts,
        } => {
            println!("{} {}", "✗".red().bold(), reason.message(*remaining_attempts));
        }
        GuessOutcome::GameOver { reason } => {
            println!("\n{}", format!("❌ {reason}").red().bold());
        }
    }
}

/// Print a solution path with how it was produced
pub fn print_solution(path: &SolutionPath) {
    if path.is_empty() {
        println!("  {}", "No path could be found.".bright_black());
        return;
    }

    let label = match path.origin {
        PathOrigin::Trivial | PathOrigin::Found => "Solution".green().bold(),
        PathOrigin::Illustrative => "Example chain".yellow().bold(),
        PathOrigin::Explored | PathOrigin::Longest => "Partial chain".yellow().bold(),
        PathOrigin::Unavailable => "No path".red().bold(),
    };
    println!("  {label}: {}", format_chain(path.names.as_slice()).bright_white());
    if !path.reaches_target() {
        println!(
            "  {}",
            "The search could not reach the target; this is the best it found.".bright_black()
        );
    }
}

/// Print the result of solving a path
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} → {}",
        result.start.bright_yellow().bold(),
        result.target.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!();
    print_solution(&result.path);
    println!();

    if result.path.reaches_target() {
        println!(
            "{}",
            format!(
                "✅ Connected in {} steps ({:.1} ms)",
                result.path.len().saturating_sub(1),
                result.duration.as_secs_f64() * 1000.0
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ No complete path found ({} fallback)", result.path.origin)
                .red()
                .bold()
        );
    }
}

/// Print the result of name analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NAME ANALYSIS:".bright_cyan().bold(),
        result.name.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    match result.required_letter {
        Some(letter) => println!(
            "\n   Next letter:    {}",
            letter.to_uppercase().to_string().bright_yellow()
        ),
        None => println!("\n   Next letter:    {}", "none (chain ends here)".red()),
    }
    println!(
        "   Continuations:  {} of {} names ({:.1}%)",
        result.continuations,
        result.total_names,
        percentage(result.continuations, result.total_names)
    );
    println!("   Predecessors:   {}", result.predecessors);

    if result.is_dead_end() {
        println!("\n   {}", "Playing this name ends the game.".yellow());
    } else {
        println!("\n   Could follow with: {}", result.sample.join(", "));
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Searches:         {}", result.total_runs);
    println!(
        "   Complete paths:   {}",
        format!(
            "{} ({:.1}%)",
            result.complete,
            result.complete_rate() * 100.0
        )
        .bright_yellow()
        .bold()
    );
    println!("   Average length:   {:.2}", result.average_length);
    println!(
        "   Shortest:         {}",
        result.min_length.to_string().green()
    );
    println!(
        "   Longest:          {}",
        result.max_length.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    println!("\n📈 {}", "Path origins:".bright_cyan().bold());
    for origin in [
        PathOrigin::Found,
        PathOrigin::Illustrative,
        PathOrigin::Explored,
        PathOrigin::Longest,
        PathOrigin::Unavailable,
    ] {
        if let Some(&count) = result.origins.get(&origin) {
            let pct = percentage(count, result.total_runs);
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {:<12} {bar} {count:4} ({pct:5.1}%)", origin.label());
        }
    }
}

/// Print session statistics and the best games
pub fn print_scoreboard(scoreboard: &Scoreboard) {
    if scoreboard.games_played() == 0 {
        return;
    }

    println!("\n🏆 {}", "Session:".bright_cyan().bold());
    println!("   Games played:     {}", scoreboard.games_played());
    println!("   Targets reached:  {}", scoreboard.targets_reached());
    println!(
        "   Average chain:    {:.1}",
        scoreboard.average_chain_length()
    );

    for (rank, record) in scoreboard.high_scores(3).iter().enumerate() {
        println!(
            "   {}. {} ({} → {})",
            (rank + 1).to_string().bright_black(),
            record.score.to_string().bright_yellow().bold(),
            record.start_name,
            record.target_name
        );
    }
}
