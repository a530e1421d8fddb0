//! Word supply: owns the deduplicated vocabulary pool of a game and hands out
//! random disjoint batches of pairs.
//!
//! The pool is fixed once built. Originals are unique keys and the entry seen
//! first wins. Translations may repeat ("die Bank" and "das Ufer" are both
//! "the bank"), so every draw takes at most one pair per translation and the
//! right column never shows the same word twice.

use std::collections::HashSet;

use rand::Rng;

use crate::pairing_engine::{
    error::{GameError, Result},
    models::{Category, WordPair, WordSelector},
    random::pick_unique_indices,
    vocabulary::{self, MAX_LEVEL},
};

#[derive(Debug, Clone)]
pub struct WordSupply {
    pool: Vec<WordPair>,
}

impl WordSupply {
    /// Build the pool described by `selector`.
    pub fn new(selector: &WordSelector) -> Result<Self> {
        match selector {
            WordSelector::Categories(categories) => Self::from_categories(categories),
            WordSelector::Level(level)           => Self::from_level(*level),
        }
    }

    /// Union of the chosen category tables, in the order given.
    pub fn from_categories(categories: &[Category]) -> Result<Self> {
        if categories.is_empty() {
            return Err(GameError::config("no words selected, enable at least one category"));
        }
        let entries = categories
            .iter()
            .flat_map(|&c| vocabulary::category_table(c).iter());
        Self::from_entries(entries)
    }

    /// Stride sample of the A1 master list for `level` in `1..=20`.
    pub fn from_level(level: u32) -> Result<Self> {
        if !(1..=MAX_LEVEL).contains(&level) {
            return Err(GameError::config(format!(
                "level must be between 1 and {MAX_LEVEL} (got {level})"
            )));
        }
        Self::from_entries(vocabulary::level_entries(level))
    }

    /// Pool from caller-provided pairs (custom word lists). Pairs with an
    /// empty side are skipped.
    pub fn from_pairs(pairs: impl IntoIterator<Item = WordPair>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut pool = Vec::new();

        for pair in pairs {
            if pair.original.is_empty() || pair.translation.is_empty() {
                continue;
            }
            if seen.insert(pair.original.clone()) {
                pool.push(pair);
            }
        }

        if pool.is_empty() {
            return Err(GameError::config("no words selected, the vocabulary pool is empty"));
        }
        Ok(WordSupply { pool })
    }

    fn from_entries<'a>(entries: impl Iterator<Item = &'a (&'a str, &'a str)>) -> Result<Self> {
        Self::from_pairs(entries.map(|&(original, translation)| WordPair::new(original, translation)))
    }

    /// `count` distinct pairs drawn uniformly without replacement, no two of
    /// them sharing a translation.
    pub fn get_words<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<Vec<WordPair>> {
        let candidates: Vec<&WordPair> = self.pool.iter().collect();
        draw(rng, &candidates, count)
    }

    /// Like [`get_words`](Self::get_words), but skips pairs whose original is
    /// in `originals` or whose translation is in `translations` (the left and
    /// right columns already on the board).
    pub fn get_words_excluding<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        originals: &HashSet<&str>,
        translations: &HashSet<&str>,
    ) -> Result<Vec<WordPair>> {
        let candidates: Vec<&WordPair> = self
            .pool
            .iter()
            .filter(|p| {
                !originals.contains(p.original.as_str()) && !translations.contains(p.translation.as_str())
            })
            .collect();
        draw(rng, &candidates, count)
    }

    /// Number of distinct originals in the pool.
    pub fn available_word_count(&self) -> usize {
        self.pool.len()
    }

    /// The pool in table order.
    pub fn pairs(&self) -> &[WordPair] {
        &self.pool
    }

    pub fn translation_of(&self, original: &str) -> Option<&str> {
        self.pool
            .iter()
            .find(|p| p.original == original)
            .map(|p| p.translation.as_str())
    }
}

/// Walk the candidates in random order and keep the first pair of each
/// translation until `count` are taken.
fn draw<R: Rng + ?Sized>(rng: &mut R, candidates: &[&WordPair], count: usize) -> Result<Vec<WordPair>> {
    let available = candidates
        .iter()
        .map(|p| p.translation.as_str())
        .collect::<HashSet<_>>()
        .len();
    if count > available {
        return Err(GameError::InsufficientPool { requested: count, available });
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    let order = pick_unique_indices(rng, candidates.len(), 0, candidates.len() as i64 - 1)?;
    let mut taken_translations = HashSet::with_capacity(count);
    let mut words = Vec::with_capacity(count);
    for i in order {
        let pair = candidates[i as usize];
        if taken_translations.insert(pair.translation.as_str()) {
            words.push(pair.clone());
            if words.len() == count {
                break;
            }
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn no_categories_is_a_configuration_error() {
        let err = WordSupply::from_categories(&[]).unwrap_err();
        assert!(matches!(err, GameError::Configuration(_)));
    }

    #[test]
    fn levels_outside_range_are_rejected() {
        for level in [0, 21, 100] {
            assert!(
                matches!(WordSupply::from_level(level), Err(GameError::Configuration(_))),
                "level {level} should be rejected"
            );
        }
    }

    #[test]
    fn every_level_and_category_has_words() {
        for level in 1..=MAX_LEVEL {
            assert!(WordSupply::from_level(level).unwrap().available_word_count() > 0);
        }
        for category in Category::ALL {
            assert!(WordSupply::from_categories(&[category]).unwrap().available_word_count() > 0);
        }
    }

    #[test]
    fn level_pool_follows_the_stride() {
        let supply = WordSupply::from_level(1).unwrap();
        let expected: Vec<&str> = vocabulary::A1_DE_EN.iter().step_by(20).map(|(k, _)| *k).collect();
        let actual: Vec<&str> = supply.pairs().iter().map(|p| p.original.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn category_union_keeps_first_occurrence() {
        let emotions = WordSupply::from_categories(&[Category::Emotions]).unwrap();
        let personality = WordSupply::from_categories(&[Category::Personality]).unwrap();
        let both = WordSupply::from_categories(&[Category::Emotions, Category::Personality]).unwrap();
        // `fröhlich` is in both tables.
        assert_eq!(
            both.available_word_count(),
            emotions.available_word_count() + personality.available_word_count() - 1
        );
        assert_eq!(both.translation_of("fröhlich"), Some("cheerful"));
    }

    #[test]
    fn repeated_category_does_not_grow_the_pool() {
        let once = WordSupply::from_categories(&[Category::Animals]).unwrap();
        let twice = WordSupply::from_categories(&[Category::Animals, Category::Animals]).unwrap();
        assert_eq!(once.available_word_count(), twice.available_word_count());
    }

    #[test]
    fn duplicate_keys_are_dropped_first_wins() {
        let supply = WordSupply::from_pairs(vec![
            WordPair::new("a", "1"),
            WordPair::new("a", "2"),
            WordPair::new("b", "1"),
            WordPair::new("c", "3"),
            WordPair::new("", "4"),
            WordPair::new("d", ""),
        ])
        .unwrap();
        assert_eq!(supply.available_word_count(), 3);
        assert_eq!(supply.translation_of("a"), Some("1"));
        assert_eq!(supply.translation_of("b"), Some("1"));
        assert_eq!(supply.translation_of("d"), None);
    }

    #[test]
    fn homonyms_stay_in_the_pool() {
        let supply = WordSupply::from_pairs(vec![
            WordPair::new("die Bank", "the bank"),
            WordPair::new("das Ufer", "the bank"),
        ])
        .unwrap();
        assert_eq!(supply.available_word_count(), 2);
        assert_eq!(supply.translation_of("das Ufer"), Some("the bank"));
    }

    #[test]
    fn a_draw_never_repeats_a_translation() {
        let supply = WordSupply::from_pairs(vec![
            WordPair::new("die Bank", "the bank"),
            WordPair::new("das Ufer", "the bank"),
            WordPair::new("der Hund", "the dog"),
        ])
        .unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let words = supply.get_words(&mut rng, 2).unwrap();
            let translations: HashSet<&str> = words.iter().map(|p| p.translation.as_str()).collect();
            assert_eq!(translations.len(), 2, "seed {seed} drew {words:?}");
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            supply.get_words(&mut rng, 3),
            Err(GameError::InsufficientPool { requested: 3, available: 2 })
        );
    }

    #[test]
    fn get_words_returns_distinct_pairs_from_the_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let supply = WordSupply::from_categories(&Category::ALL).unwrap();
        let words = supply.get_words(&mut rng, 5).unwrap();
        assert_eq!(words.len(), 5);
        let originals: HashSet<&str> = words.iter().map(|p| p.original.as_str()).collect();
        assert_eq!(originals.len(), 5);
        for pair in &words {
            assert_eq!(supply.translation_of(&pair.original), Some(pair.translation.as_str()));
        }
    }

    #[test]
    fn get_words_can_drain_the_whole_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let supply = WordSupply::from_level(20).unwrap();
        let n = supply.available_word_count();
        assert_eq!(supply.get_words(&mut rng, n).unwrap().len(), n);
        assert!(supply.get_words(&mut rng, 0).unwrap().is_empty());
    }

    #[test]
    fn asking_for_too_many_words_fails() {
        let mut rng = StdRng::seed_from_u64(3);
        let supply = WordSupply::from_level(5).unwrap();
        let n = supply.available_word_count();
        assert_eq!(
            supply.get_words(&mut rng, n + 1),
            Err(GameError::InsufficientPool { requested: n + 1, available: n })
        );
    }

    #[test]
    fn excluded_words_are_never_returned() {
        let mut rng = StdRng::seed_from_u64(8);
        let supply = WordSupply::from_pairs(vec![
            WordPair::new("a", "1"),
            WordPair::new("b", "2"),
            WordPair::new("c", "3"),
        ])
        .unwrap();
        let originals: HashSet<&str> = ["a"].into_iter().collect();
        let translations: HashSet<&str> = ["2"].into_iter().collect();
        let words = supply.get_words_excluding(&mut rng, 1, &originals, &translations).unwrap();
        assert_eq!(words, vec![WordPair::new("c", "3")]);
        assert_eq!(
            supply.get_words_excluding(&mut rng, 2, &originals, &translations),
            Err(GameError::InsufficientPool { requested: 2, available: 1 })
        );
    }

    #[test]
    fn exclusion_is_per_column() {
        // "b" shows on the right only, so the pair whose original is "b" may
        // still go on the left.
        let mut rng = StdRng::seed_from_u64(8);
        let supply = WordSupply::from_pairs(vec![WordPair::new("a", "b"), WordPair::new("b", "c")]).unwrap();
        let originals: HashSet<&str> = ["a"].into_iter().collect();
        let translations: HashSet<&str> = ["b"].into_iter().collect();
        assert_eq!(
            supply.get_words_excluding(&mut rng, 1, &originals, &translations).unwrap(),
            vec![WordPair::new("b", "c")]
        );
    }
}
