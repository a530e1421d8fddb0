//! Core pairing engine: word supply, random selection, and the round state
//! machine.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: selectors, word pairs, slots, snapshots, statistics |
//! | `error`       | `GameError` and the crate `Result` alias |
//! | `random`      | Unique index sampling and Fisher-Yates shuffling |
//! | `vocabulary`  | Fixed German → English tables (categories and the A1 list) |
//! | `supply`      | `WordSupply`, the deduplicated pool, random disjoint batches |
//! | `config`      | `GameConfig`, round parameters, defaults and range checks |
//! | `game`        | `PairingGame`: start, pair, tick, statistics |
//! | `preferences` | Menu values remembered between sessions |
//! | `client`      | JSON payloads for a UI that renders the board |

pub mod client;
pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod preferences;
pub mod random;
pub mod supply;
pub mod vocabulary;

// Re-export the public API surface so callers can use
// `pairing_engine::PairingGame` without reaching into sub-modules.
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::PairingGame;
pub use models::{
    Category, GameStatistics, Mistake, RoundPhase, RoundSnapshot, Side, Slot, WordPair,
    WordSelector,
};
pub use preferences::PlayerPreferences;
pub use random::{pick_unique_indices, shuffle};
pub use supply::WordSupply;
