//! Puzzle and session engine for CineScramble, a movie-title guessing game.
//!
//! A title is laid out in a square [`TitleGrid`] of hidden letters. The player takes up to [`MAX_HINTS`]
//! hints, each uncovering one random letter, then guesses the title from the plot and the letters shown.
//! A [`Session`] chains rounds together while the guesses keep coming out right.

use serde::{Deserialize, Serialize};

pub use catalog::*;
pub use error::*;
pub use grid::*;
pub use guess::*;
pub use hint::*;
pub use rng::*;
pub use session::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod catalog;
mod error;
mod grid;
mod guess;
mod hint;
mod rng;
mod session;
mod tile;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Revealed => true,
        }
    }
}
