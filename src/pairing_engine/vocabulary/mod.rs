//! Fixed vocabulary tables.
//!
//! | Module       | Contents |
//! |--------------|----------|
//! | `categories` | Nine themed tables, switched on per [`Category`] |
//! | `a1`         | The A1 master list that levels are sampled from |

/// Themed tables, one per category.
pub mod categories;
/// A1 master list for level-based selection.
pub mod a1;

use crate::pairing_engine::models::Category;

pub use a1::A1_DE_EN;

/// Highest selectable level; also the stride of the level sample.
pub const MAX_LEVEL: u32 = 20;

/// The raw table behind a category.
pub fn category_table(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Adjectives  => categories::ADJECTIVES,
        Category::Animals     => categories::ANIMALS,
        Category::BodyParts   => categories::BODY_PARTS,
        Category::Business    => categories::BUSINESS,
        Category::Legal       => categories::LEGAL,
        Category::Calendar    => categories::CALENDAR,
        Category::Verbs       => categories::VERBS,
        Category::Emotions    => categories::EMOTIONS,
        Category::Personality => categories::PERSONALITY,
    }
}

/// Entries of the master list belonging to `level` (1-based): every
/// `MAX_LEVEL`th entry starting at `level - 1`.
pub fn level_entries(level: u32) -> impl Iterator<Item = &'static (&'static str, &'static str)> {
    A1_DE_EN
        .iter()
        .skip(level.saturating_sub(1) as usize)
        .step_by(MAX_LEVEL as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_words() {
        for category in Category::ALL {
            assert!(!category_table(category).is_empty(), "{category} is empty");
        }
    }

    #[test]
    fn master_keys_and_translations_are_unique() {
        let keys: HashSet<&str> = A1_DE_EN.iter().map(|(k, _)| *k).collect();
        let values: HashSet<&str> = A1_DE_EN.iter().map(|(_, v)| *v).collect();
        assert_eq!(keys.len(), A1_DE_EN.len());
        assert_eq!(values.len(), A1_DE_EN.len());
    }

    #[test]
    fn levels_partition_the_master_list() {
        let total: usize = (1..=MAX_LEVEL).map(|l| level_entries(l).count()).sum();
        assert_eq!(total, A1_DE_EN.len());
    }

    #[test]
    fn level_stride_starts_at_offset() {
        let entries: Vec<_> = level_entries(3).take(2).collect();
        assert_eq!(*entries[0], A1_DE_EN[2]);
        assert_eq!(*entries[1], A1_DE_EN[22]);
    }
}
