use serde_json::{json, Value};

use crate::pairing_engine::models::{GameStatistics, RoundSnapshot};

/// One board row: the two buttons that share a line on screen.
fn row(id: usize, left: &str, right: &str) -> Value {
    json!({
        "id": id,
        "left": left,
        "right": right,
        "leftCleared": left.is_empty(),
        "rightCleared": right.is_empty()
    })
}

/// Render a snapshot as the board + toolbar payload a UI redraws each tick.
pub fn snapshot_json(snapshot: &RoundSnapshot) -> Value {
    let rows: Vec<Value> = snapshot
        .left_words
        .iter()
        .zip(snapshot.right_words.iter())
        .enumerate()
        .map(|(i, (l, r))| row(i, l, r))
        .collect();

    json!({
        "board": rows,
        "toolbar": {
            "correct": snapshot.correct_count,
            "incorrect": snapshot.incorrect_count,
            "time": snapshot.elapsed_seconds
        },
        "isGameOver": snapshot.is_complete
    })
}

/// Render the end-of-round summary, mistakes in the order they were made.
pub fn statistics_json(statistics: &GameStatistics) -> Value {
    let mistakes: Vec<Value> = statistics
        .mistakes
        .iter()
        .map(|m| {
            json!({
                "original": m.original,
                "wrongTranslation": m.wrong_translation,
                "correctTranslation": m.correct_translation
            })
        })
        .collect();

    json!({
        "correct": statistics.correct_count,
        "incorrect": statistics.incorrect_count,
        "elapsedTime": statistics.elapsed_seconds,
        "mistakes": mistakes
    })
}
