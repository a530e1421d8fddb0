use std::collections::HashSet;

use rand::seq::index;
use rand::Rng;

use crate::pairing_engine::error::{GameError, Result};

/// Draw `count` distinct integers from the inclusive range `[min, max]`.
///
/// The result is in draw order, not sorted. `count == 0` yields an empty
/// vector for any valid range.
pub fn pick_unique_indices<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    min: i64,
    max: i64,
) -> Result<Vec<i64>> {
    let invalid = GameError::InvalidRange { count, min, max };
    if max < min {
        return Err(invalid);
    }
    let span = max as i128 - min as i128 + 1;
    if span < count as i128 {
        return Err(invalid);
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    match usize::try_from(span) {
        Ok(len) => Ok(index::sample(rng, len, count)
            .into_iter()
            .map(|i| (min as i128 + i as i128) as i64)
            .collect()),
        // Only the full i64 range lands here, so collisions are negligible.
        Err(_) => {
            let mut seen = HashSet::with_capacity(count);
            let mut picked = Vec::with_capacity(count);
            while picked.len() < count {
                let n = rng.gen_range(min..=max);
                if seen.insert(n) {
                    picked.push(n);
                }
            }
            Ok(picked)
        }
    }
}

/// Return a uniformly shuffled copy of `items`; the input is left as is.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();

    // Fisher-Yates shuffle
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }

    shuffled
}
