use core::ops::Index;
use ndarray::{Array2, Ix1, iter::AxisIter};
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid holding the letters of a title, row by row, with blank padding after the last letter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TitleGrid {
    cells: Array2<GridCell>,
    letter_count: CellCount,
    revealed_count: CellCount,
}

impl TitleGrid {
    /// Lays out `title` with whitespace removed into a `side × side` grid, `side = ceil(sqrt(letters))`.
    /// Every letter starts hidden.
    pub fn from_title(title: &str) -> Self {
        let letters: Vec<char> = strip_whitespace(title).collect();
        let side = grid_side(letters.len());

        let mut cells: Array2<GridCell> = Array2::default((side, side));
        for (cell, &letter) in cells.iter_mut().zip(&letters) {
            *cell = GridCell::Hidden(letter);
        }

        Self {
            cells,
            letter_count: letters.len(),
            revealed_count: 0,
        }
    }

    pub fn side(&self) -> Coord {
        self.cells.nrows()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len()
    }

    pub fn letter_count(&self) -> CellCount {
        self.letter_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn hidden_count(&self) -> CellCount {
        self.letter_count - self.revealed_count
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<GridCell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Coordinates of every letter still hidden, in row-major order.
    pub fn hidden_letter_coords(&self) -> Vec<Coord2> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_hidden())
            .map(|(coords, _)| coords)
            .collect()
    }

    /// Iterates the grid one row at a time, top to bottom.
    pub fn rows(&self) -> AxisIter<'_, GridCell, Ix1> {
        self.cells.outer_iter()
    }

    /// Flips a hidden letter to revealed. Blanks, already revealed letters and out of range coordinates are
    /// left alone.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(cell) = self.cells.get_mut(coords.to_nd_index()) else {
            return RevealOutcome::NoChange;
        };
        let GridCell::Hidden(letter) = *cell else {
            return RevealOutcome::NoChange;
        };

        *cell = GridCell::Revealed(letter);
        self.revealed_count += 1;
        RevealOutcome::Revealed
    }
}

impl Index<Coord2> for TitleGrid {
    type Output = GridCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
