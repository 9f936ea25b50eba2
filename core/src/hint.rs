use serde::{Deserialize, Serialize};

use crate::*;

/// Hints a player may take in one round.
pub const MAX_HINTS: u8 = 3;

/// Hints used in the current round, never above [`MAX_HINTS`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintCounter(u8);

impl HintCounter {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn used(self) -> u8 {
        self.0
    }

    pub const fn remaining(self) -> u8 {
        MAX_HINTS - self.0
    }

    pub const fn is_exhausted(self) -> bool {
        self.0 >= MAX_HINTS
    }

    fn record(&mut self) {
        debug_assert!(!self.is_exhausted());
        self.0 += 1;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintOutcome {
    NoChange,
    Revealed(Coord2),
}

impl HintOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Revealed(_) => true,
        }
    }
}

/// Reveals one hidden letter picked uniformly among all hidden letters, and counts the hint.
///
/// Does nothing once the counter is exhausted or when no hidden letter is left; a hint is only counted when a
/// letter was actually uncovered.
pub fn reveal_hint(
    grid: &mut TitleGrid,
    hints: &mut HintCounter,
    rng: &mut impl RandomSource,
) -> HintOutcome {
    if hints.is_exhausted() {
        log::debug!("hint ignored, all {} hints used", MAX_HINTS);
        return HintOutcome::NoChange;
    }

    let hidden = grid.hidden_letter_coords();
    if hidden.is_empty() {
        log::debug!("hint ignored, no hidden letters left");
        return HintOutcome::NoChange;
    }

    let coords = hidden[rng.pick_index(hidden.len())];
    log::trace!("hint picked {:?} of {} hidden letters", coords, hidden.len());
    match grid.reveal(coords) {
        RevealOutcome::Revealed => {
            hints.record();
            HintOutcome::Revealed(coords)
        }
        RevealOutcome::NoChange => HintOutcome::NoChange,
    }
}
