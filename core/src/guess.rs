use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Points for a correct guess, indexed by hints used.
pub const POINTS_BY_HINTS: [u32; MAX_HINTS as usize + 1] = [10, 8, 6, 4];

pub const fn points_for_hints(hints_used: u8) -> u32 {
    let index = if (hints_used as usize) < POINTS_BY_HINTS.len() {
        hints_used as usize
    } else {
        POINTS_BY_HINTS.len() - 1
    };
    POINTS_BY_HINTS[index]
}

/// Whitespace-free, lowercased form used to compare guesses with titles.
pub fn normalize(text: &str) -> String {
    strip_whitespace(text).flat_map(char::to_lowercase).collect()
}

pub fn is_match(guess: &str, title: &str) -> bool {
    normalize(guess) == normalize(title)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    Correct { points: u32, total: u32 },
    Incorrect { title: String, score: u32 },
}

impl GuessOutcome {
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    pub const fn points(&self) -> u32 {
        match self {
            Self::Correct { points, .. } => *points,
            Self::Incorrect { .. } => 0,
        }
    }

    /// Cumulative score after this guess.
    pub const fn score(&self) -> u32 {
        match self {
            Self::Correct { total, .. } => *total,
            Self::Incorrect { score, .. } => *score,
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct { points, total } => write!(
                f,
                "Correct! You earned {points} points. Your total score is {total}."
            ),
            Self::Incorrect { title, score } => write!(
                f,
                "Incorrect. The correct title was \"{title}\". Your final score is {score}."
            ),
        }
    }
}

/// Scores `guess` against `title`, ignoring whitespace and case.
pub fn evaluate_guess(guess: &str, title: &str, hints_used: u8, previous_score: u32) -> GuessOutcome {
    if is_match(guess, title) {
        let points = points_for_hints(hints_used);
        GuessOutcome::Correct {
            points,
            total: previous_score.saturating_add(points),
        }
    } else {
        GuessOutcome::Incorrect {
            title: title.to_owned(),
            score: previous_score,
        }
    }
}
