//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::game::Session;
use crate::output::{print_game_state, print_outcome, print_scoreboard, print_solution};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no game
/// can be started with the loaded names.
pub fn run_simple<R: Rng>(session: &mut Session<'_, R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  NameChain - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Build a chain of names from the start name to the target.");
    println!("Each name must begin with the second letter of the previous one");
    println!("(the first letter after the first character, skipping symbols).\n");
    println!("Commands: 'hint', 'give up', 'new' for a new game, 'quit' to exit\n");

    start_new_game(session)?;

    loop {
        let input = get_user_input("Your guess")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                start_new_game(session)?;
                continue;
            }
            "hint" | "h" => {
                let path = session.hint().map_err(|e| e.to_string())?;
                print_solution(&path);
                continue;
            }
            "give up" | "giveup" | "g" => {
                let concession = session.give_up().map_err(|e| e.to_string())?;
                print_outcome(&concession.outcome, &concession.state);
                println!(
                    "Your chain length: {}",
                    concession.state.chain().len().to_string().bright_cyan()
                );
                print_solution(&concession.solution);
            }
            _ => {
                let outcome = session.guess(&input);
                if let Some(state) = session.game() {
                    print_outcome(&outcome, state);
                    if !outcome.ends_game() && outcome.is_accepted() {
                        print_game_state(state);
                    }
                }
            }
        }

        if session.game().is_some_and(|state| !state.is_active()) {
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => start_new_game(session)?,
                _ => break,
            }
        }
    }

    print_scoreboard(session.scoreboard());
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn start_new_game<R: Rng>(session: &mut Session<'_, R>) -> Result<(), String> {
    let state = session.start().map_err(|e| e.to_string())?;
    println!(
        "\n🔄 New game: start with {} and reach {}\n",
        state.start_name().bright_white().bold(),
        state.target_name().bright_yellow().bold()
    );
    print_game_state(state);
    Ok(())
}

/// Get user input with a prompt
///
/// End of input reads as `quit`.
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
