//! The pairing round: two independently shuffled columns, scoring, staggered
//! replenishment and the end-of-round summary.
//!
//! The engine never schedules anything itself. The host calls
//! [`PairingGame::words_paired`] on every click and [`PairingGame::advance_tick`]
//! on a fixed interval; both run to completion and either apply fully or fail
//! without touching the round.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::pairing_engine::{
    config::GameConfig,
    error::{GameError, Result},
    models::{GameStatistics, Mistake, RoundPhase, RoundSnapshot, Side, Slot, WordPair},
    random::shuffle,
    supply::WordSupply,
};

#[derive(Debug)]
pub struct PairingGame {
    supply: WordSupply,
    config: GameConfig,
    rng: StdRng,
    phase: RoundPhase,

    // round state
    left: Vec<Slot>,
    right: Vec<Slot>,
    /// Every pair shown this round, original → translation. Never shrinks.
    active_pairs: HashMap<String, String>,
    correct: u32,
    incorrect: u32,
    refresh_counter: u32,

    // statistics
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
    mistakes: Vec<Mistake>,
}

impl PairingGame {
    /// Validate `config` and build the word pool its selector describes.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let supply = WordSupply::new(&config.selector)?;
        Self::with_supply(supply, config)
    }

    /// Use an already built pool; `config.selector` is ignored.
    pub fn with_supply(supply: WordSupply, config: GameConfig) -> Result<Self> {
        config.validate_round()?;

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        Ok(PairingGame {
            supply,
            config,
            rng,
            phase: RoundPhase::NotStarted,
            left: Vec::new(),
            right: Vec::new(),
            active_pairs: HashMap::new(),
            correct: 0,
            incorrect: 0,
            refresh_counter: 0,
            started_at: None,
            ended_at: None,
            mistakes: Vec::new(),
        })
    }

    /// Deal `rows` fresh pairs and start the clock. Calling it again starts
    /// a new round from scratch.
    pub fn start_game(&mut self) -> Result<RoundSnapshot> {
        let pairs = self.supply.get_words(&mut self.rng, self.config.rows)?;
        let (left, right) = self.split_shuffled(&pairs);

        self.left = left.into_iter().map(Slot::Word).collect();
        self.right = right.into_iter().map(Slot::Word).collect();
        self.active_pairs = pairs.into_iter().map(|p| (p.original, p.translation)).collect();
        self.correct = 0;
        self.incorrect = 0;
        self.refresh_counter = 0;
        self.mistakes.clear();
        self.started_at = Some(Instant::now());
        self.ended_at = None;
        self.phase = RoundPhase::InProgress;

        info!(
            "Game started with {} words to pair ({} rows, {} pool words)",
            self.config.target_pairs,
            self.config.rows,
            self.supply.available_word_count()
        );
        Ok(self.snapshot())
    }

    /// Score the learner's choice of one left and one right slot.
    ///
    /// Returns `Ok(false)` without side effects when the left slot was already
    /// cleared (a late click on a hidden button). A match clears both slots;
    /// a miss is counted and logged and leaves the board as it is.
    pub fn words_paired(&mut self, left_index: usize, right_index: usize) -> Result<bool> {
        self.ensure_in_progress()?;
        if left_index >= self.left.len() {
            return Err(GameError::Index { side: Side::Left, index: left_index, len: self.left.len() });
        }
        if right_index >= self.right.len() {
            return Err(GameError::Index { side: Side::Right, index: right_index, len: self.right.len() });
        }

        let Some(original) = self.left[left_index].word() else {
            return Ok(false);
        };
        let Some(expected) = self.active_pairs.get(original) else {
            warn!("left slot {left_index} shows '{original}' which is not an active pair");
            return Ok(false);
        };
        let chosen = self.right[right_index].as_str();

        if expected == chosen {
            self.correct += 1;
            self.left[left_index] = Slot::Empty;
            self.right[right_index] = Slot::Empty;
            self.complete_if_done();
            Ok(true)
        } else {
            self.mistakes.push(Mistake {
                original: original.to_string(),
                wrong_translation: chosen.to_string(),
                correct_translation: expected.clone(),
            });
            self.incorrect += 1;
            Ok(false)
        }
    }

    /// One beat of the host's timer.
    ///
    /// Every `refresh_rate` ticks, while the round needs more pairs than are
    /// visible, every cleared slot is refilled. Both fresh batches are shuffled
    /// on their own, so a new left word never sits next to its translation by
    /// construction.
    pub fn advance_tick(&mut self) -> Result<RoundSnapshot> {
        match self.phase {
            RoundPhase::NotStarted => return Err(GameError::NotInProgress { phase: self.phase }),
            RoundPhase::Complete   => return Ok(self.snapshot()),
            RoundPhase::InProgress => {}
        }

        let rate = self.config.refresh_rate;
        let empty = self.left.iter().filter(|s| s.is_empty()).count();
        let visible = self.left.len() - empty;
        let remaining = (self.config.target_pairs - self.correct) as usize;

        if self.refresh_counter >= rate && remaining > visible {
            if empty > 0 {
                self.replenish(empty)?;
            }
            self.refresh_counter = 0;
        } else {
            self.refresh_counter = (self.refresh_counter + 1).min(rate);
        }

        self.complete_if_done();
        Ok(self.snapshot())
    }

    /// End-of-round summary. Fails with [`GameError::NotComplete`] while the
    /// round is still running.
    pub fn get_statistics(&self) -> Result<GameStatistics> {
        let (Some(started), Some(ended)) = (self.started_at, self.ended_at) else {
            return Err(GameError::NotComplete);
        };
        if self.phase != RoundPhase::Complete {
            return Err(GameError::NotComplete);
        }

        let statistics = GameStatistics {
            correct_count: self.correct,
            incorrect_count: self.incorrect,
            elapsed_seconds: ended.duration_since(started).as_secs_f64(),
            mistakes: self.mistakes.clone(),
        };
        info!(
            "Game ended in {:.1} seconds. Correct: {}, Incorrect: {}",
            statistics.elapsed_seconds, statistics.correct_count, statistics.incorrect_count
        );
        Ok(statistics)
    }

    /// Current board without advancing the tick counter. The clock keeps
    /// running after completion; the frozen duration is in
    /// [`get_statistics`](Self::get_statistics).
    pub fn snapshot(&self) -> RoundSnapshot {
        let elapsed = self.started_at.map_or(0, |started| started.elapsed().as_secs());
        RoundSnapshot {
            left_words: self.left.iter().map(|s| s.as_str().to_string()).collect(),
            right_words: self.right.iter().map(|s| s.as_str().to_string()).collect(),
            correct_count: self.correct,
            incorrect_count: self.incorrect,
            is_complete: self.phase == RoundPhase::Complete,
            elapsed_seconds: elapsed,
        }
    }

    /// Right-hand index holding the translation of the word at `left_index`,
    /// if it is currently visible.
    pub fn matching_right_index(&self, left_index: usize) -> Option<usize> {
        let original = self.left.get(left_index)?.word()?;
        let expected = self.active_pairs.get(original)?;
        self.right.iter().position(|s| s.word() == Some(expected.as_str()))
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn left_slots(&self) -> &[Slot] {
        &self.left
    }

    pub fn right_slots(&self) -> &[Slot] {
        &self.right
    }

    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    pub fn incorrect_count(&self) -> u32 {
        self.incorrect
    }

    pub fn mistakes(&self) -> &[Mistake] {
        &self.mistakes
    }

    pub fn refresh_counter(&self) -> u32 {
        self.refresh_counter
    }

    /// Translation of any word shown so far this round.
    pub fn translation_of(&self, original: &str) -> Option<&str> {
        self.active_pairs.get(original).map(String::as_str)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn supply(&self) -> &WordSupply {
        &self.supply
    }

    // ── internals ───────────────────────────────────────────────────────────

    fn ensure_in_progress(&self) -> Result<()> {
        if self.phase == RoundPhase::InProgress {
            Ok(())
        } else {
            Err(GameError::NotInProgress { phase: self.phase })
        }
    }

    fn complete_if_done(&mut self) {
        if self.phase == RoundPhase::InProgress && self.correct == self.config.target_pairs {
            self.phase = RoundPhase::Complete;
            self.ended_at = Some(Instant::now());
            info!("All {} pairs matched", self.correct);
        }
    }

    fn split_shuffled(&mut self, pairs: &[WordPair]) -> (Vec<String>, Vec<String>) {
        let originals: Vec<String> = pairs.iter().map(|p| p.original.clone()).collect();
        let translations: Vec<String> = pairs.iter().map(|p| p.translation.clone()).collect();
        (shuffle(&mut self.rng, &originals), shuffle(&mut self.rng, &translations))
    }

    /// Write `fill` fresh pairs into the cleared slots of each column.
    fn replenish(&mut self, fill: usize) -> Result<()> {
        let originals: HashSet<&str> = self.left.iter().filter_map(Slot::word).collect();
        let translations: HashSet<&str> = self.right.iter().filter_map(Slot::word).collect();
        let fresh = self
            .supply
            .get_words_excluding(&mut self.rng, fill, &originals, &translations)?;
        let (new_left, new_right) = self.split_shuffled(&fresh);

        debug!("Replenishing {} slots: {:?}", fill, new_left);
        place(&mut self.left, new_left);
        place(&mut self.right, new_right);
        self.active_pairs
            .extend(fresh.into_iter().map(|p| (p.original, p.translation)));
        Ok(())
    }
}

/// Fill cleared slots in encounter order until `words` runs out.
fn place(slots: &mut [Slot], words: Vec<String>) {
    let mut words = words.into_iter();
    for slot in slots.iter_mut().filter(|s| s.is_empty()) {
        match words.next() {
            Some(word) => *slot = Slot::Word(word),
            None => break,
        }
    }
}
