use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Vocabulary selection
// ---------------------------------------------------------------------------

/// A themed vocabulary table that can be switched on in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Adjectives,
    Animals,
    BodyParts,
    Business,
    Legal,
    Calendar,
    Verbs,
    Emotions,
    Personality,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 9] = [
        Category::Adjectives,
        Category::Animals,
        Category::BodyParts,
        Category::Business,
        Category::Legal,
        Category::Calendar,
        Category::Verbs,
        Category::Emotions,
        Category::Personality,
    ];

    /// Parse the menu identifier (e.g. `"bodyParts"`).
    pub fn from_key(key: &str) -> Option<Category> {
        match key {
            "adjectives"  => Some(Category::Adjectives),
            "animals"     => Some(Category::Animals),
            "bodyParts"   => Some(Category::BodyParts),
            "business"    => Some(Category::Business),
            "legal"       => Some(Category::Legal),
            "calendar"    => Some(Category::Calendar),
            "verbs"       => Some(Category::Verbs),
            "emotions"    => Some(Category::Emotions),
            "personality" => Some(Category::Personality),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Adjectives  => "Adjectives",
            Category::Animals     => "Animals",
            Category::BodyParts   => "Body Parts",
            Category::Business    => "Business",
            Category::Legal       => "Legal",
            Category::Calendar    => "Calendar",
            Category::Verbs       => "Verbs",
            Category::Emotions    => "Emotions",
            Category::Personality => "Personality",
        };
        write!(f, "{}", s)
    }
}

/// How the word pool is chosen: a union of categories, or one level of the
/// A1 master list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WordSelector {
    Categories(Vec<Category>),
    /// 1..=20; level `n` takes every 20th master entry starting at `n - 1`.
    Level(u32),
}

impl Default for WordSelector {
    fn default() -> Self {
        WordSelector::Level(1)
    }
}

impl From<u32> for WordSelector {
    fn from(level: u32) -> Self {
        WordSelector::Level(level)
    }
}

impl From<Vec<Category>> for WordSelector {
    fn from(categories: Vec<Category>) -> Self {
        WordSelector::Categories(categories)
    }
}

impl fmt::Display for WordSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSelector::Level(level) => write!(f, "level {}", level),
            WordSelector::Categories(cats) => {
                let names: Vec<String> = cats.iter().map(|c| c.to_string()).collect();
                write!(f, "categories [{}]", names.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    pub original: String,
    pub translation: String,
}

impl WordPair {
    pub fn new(original: impl Into<String>, translation: impl Into<String>) -> Self {
        WordPair { original: original.into(), translation: translation.into() }
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.original, self.translation)
    }
}

// ---------------------------------------------------------------------------
// Board slots
// ---------------------------------------------------------------------------

/// One visible button on the board. `Empty` is a slot whose pair was matched
/// and which waits for the next replenishment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Slot {
    Word(String),
    #[default]
    Empty,
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn word(&self) -> Option<&str> {
        match self {
            Slot::Word(w) => Some(w),
            Slot::Empty   => None,
        }
    }

    /// Text shown on the button; the empty string for a cleared slot.
    pub fn as_str(&self) -> &str {
        self.word().unwrap_or("")
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which column an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left  => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

// ---------------------------------------------------------------------------
// Round state / outputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    NotStarted,
    InProgress,
    Complete,
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundPhase::NotStarted => write!(f, "not started"),
            RoundPhase::InProgress => write!(f, "in progress"),
            RoundPhase::Complete   => write!(f, "complete"),
        }
    }
}

/// A wrong pairing attempt, kept for the end-of-round review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mistake {
    pub original: String,
    pub wrong_translation: String,
    pub correct_translation: String,
}

/// What the UI redraws after every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Left column; `""` marks a cleared slot.
    pub left_words: Vec<String>,
    /// Right column; `""` marks a cleared slot.
    pub right_words: Vec<String>,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub is_complete: bool,
    /// Whole seconds since the round started.
    pub elapsed_seconds: u64,
}

impl RoundSnapshot {
    /// Number of cleared slots in the left column.
    pub fn empty_slots(&self) -> usize {
        self.left_words.iter().filter(|w| w.is_empty()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStatistics {
    pub correct_count: u32,
    pub incorrect_count: u32,
    /// Fractional seconds from start to the final match.
    pub elapsed_seconds: f64,
    pub mistakes: Vec<Mistake>,
}
