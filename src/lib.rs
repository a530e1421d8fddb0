//! # pair_words
//!
//! The engine behind a word-pair memorisation game: the learner sees two
//! shuffled columns, originals on the left and translations on the right,
//! and clicks matching pairs until a target number has been found.
//!
//! ## How it works
//!
//! 1. Describe the round with a [`GameConfig`]: a word selector (a set of
//!    [`Category`] tables or a level `1..=20` of the A1 list), the number of
//!    pairs to find, the number of visible rows and an optional RNG seed.
//! 2. [`PairingGame::start_game`] deals `rows` pairs, shuffling both columns
//!    independently so position never gives the answer away.
//! 3. The UI calls [`PairingGame::words_paired`] on every click and
//!    [`PairingGame::advance_tick`] on a timer. Matched slots are cleared and
//!    all of them are refilled every `refresh_rate` ticks while the round
//!    needs more pairs than are visible.
//! 4. Once the target is reached, [`PairingGame::get_statistics`] returns the
//!    counts, the time taken and every wrong attempt.
//!
//! The engine does no I/O and owns no timer; dropping it (or simply not
//! calling it any more) is all the teardown there is.
//!
//! ## Quick start
//!
//! ```rust
//! use pair_words::{Category, GameConfig, PairingGame};
//!
//! let config = GameConfig::new(vec![Category::Animals], 3, 2).with_seed(42);
//! let mut game = PairingGame::new(config)?;
//! let mut state = game.start_game()?;
//!
//! while !state.is_complete {
//!     if let Some(right) = game.matching_right_index(0) {
//!         game.words_paired(0, right)?;
//!     } else if let Some(right) = game.matching_right_index(1) {
//!         game.words_paired(1, right)?;
//!     }
//!     state = game.advance_tick()?;
//! }
//!
//! let stats = game.get_statistics()?;
//! assert_eq!(stats.correct_count, 3);
//! # Ok::<(), pair_words::GameError>(())
//! ```

pub mod pairing_engine;

// Convenience re-exports so callers can use `pair_words::PairingGame`
// directly without reaching into `pairing_engine::`.
pub use pairing_engine::{
    client::{snapshot_json, statistics_json},
    pick_unique_indices, shuffle, Category, GameConfig, GameError, GameStatistics, Mistake,
    PairingGame, PlayerPreferences, Result, RoundPhase, RoundSnapshot, Side, Slot, WordPair,
    WordSelector, WordSupply,
};
