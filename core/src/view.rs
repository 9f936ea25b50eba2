use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer may show for one cell. Hidden letters are not carried.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewCell {
    Blank,
    Hidden,
    Revealed(char),
}

impl From<GridCell> for ViewCell {
    fn from(cell: GridCell) -> Self {
        match cell {
            GridCell::Blank => Self::Blank,
            GridCell::Hidden(_) => Self::Hidden,
            GridCell::Revealed(letter) => Self::Revealed(letter),
        }
    }
}

/// Snapshot of a session for the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub grid: Vec<Vec<ViewCell>>,
    pub plot: String,
    pub score: u32,
    pub rounds_won: u32,
    pub hints_used: u8,
    pub hints_remaining: u8,
    pub state: SessionState,
    pub game_over: bool,
    pub answer_shown: bool,
    pub answer: Option<String>,
    pub message: Option<String>,
}

impl<R> Session<R> {
    pub fn view(&self) -> SessionView {
        let grid = self
            .grid()
            .rows()
            .map(|row| row.iter().map(|&cell| ViewCell::from(cell)).collect())
            .collect();

        SessionView {
            grid,
            plot: self.plot().to_owned(),
            score: self.score(),
            rounds_won: self.rounds_won(),
            hints_used: self.hints_used(),
            hints_remaining: self.hints_remaining(),
            state: self.state(),
            game_over: self.is_game_over(),
            answer_shown: self.is_answer_shown(),
            answer: self.answer().map(str::to_owned),
            message: self.message(),
        }
    }
}
