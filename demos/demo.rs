//! Auto-played round in the terminal.
//!
//! Run with: `RUST_LOG=info cargo run --example demo`
//!
//! The demo plays the role of the UI collaborator:
//!
//! 1. Reads the saved menu values (`PlayerPreferences`), falling back to
//!    defaults, and builds a seeded `GameConfig` from them.
//! 2. Drives the round exactly like a browser would: one click per tick,
//!    with a wrong guess now and then, and `advance_tick()` as the timer.
//! 3. Prints the board whenever it changes and the statistics at the end.

use pair_words::{snapshot_json, statistics_json, PairingGame, PlayerPreferences, RoundSnapshot};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn print_board(state: &RoundSnapshot) {
    println!(
        "── correct {}  incorrect {}  time {}s ──",
        state.correct_count, state.incorrect_count, state.elapsed_seconds
    );
    for (left, right) in state.left_words.iter().zip(&state.right_words) {
        let left = if left.is_empty() { "·" } else { left.as_str() };
        let right = if right.is_empty() { "·" } else { right.as_str() };
        println!("  {:<24} {}", left, right);
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let prefs = PlayerPreferences::load();
    let config = prefs.to_config().with_seed(42);
    println!(
        "Playing {} pairs on {} rows from {}",
        config.target_pairs, config.rows, config.selector
    );

    let mut game = PairingGame::new(config)?;
    let mut clicker = StdRng::seed_from_u64(7);
    let mut state = game.start_game()?;
    print_board(&state);

    while !state.is_complete {
        let visible: Vec<usize> = (0..state.left_words.len())
            .filter(|&i| !state.left_words[i].is_empty())
            .collect();

        if !visible.is_empty() {
            let left = visible[clicker.gen_range(0..visible.len())];
            let right = if clicker.gen_bool(0.25) {
                clicker.gen_range(0..state.right_words.len())
            } else {
                game.matching_right_index(left).unwrap_or(0)
            };
            let correct = game.words_paired(left, right)?;
            println!(
                "  {} {} → {}",
                if correct { "✓" } else { "✗" },
                state.left_words[left],
                state.right_words[right]
            );
        }

        let next = game.advance_tick()?;
        if next.left_words != state.left_words {
            print_board(&next);
        }
        state = next;
    }

    println!("{}", serde_json::to_string_pretty(&snapshot_json(&state))?);
    let stats = game.get_statistics()?;
    println!("{}", serde_json::to_string_pretty(&statistics_json(&stats))?);
    Ok(())
}
