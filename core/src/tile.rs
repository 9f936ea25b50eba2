use serde::{Deserialize, Serialize};

/// One cell of a title grid, with its visibility carried explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridCell {
    /// Padding past the end of the title, never revealable.
    Blank,
    Hidden(char),
    Revealed(char),
}

impl GridCell {
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden(_))
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    /// The letter in this cell, whether or not it is visible.
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Blank => None,
            Self::Hidden(ch) | Self::Revealed(ch) => Some(ch),
        }
    }

    /// The letter a player is allowed to see.
    pub const fn visible_letter(self) -> Option<char> {
        match self {
            Self::Revealed(ch) => Some(ch),
            Self::Blank | Self::Hidden(_) => None,
        }
    }
}

impl Default for GridCell {
    fn default() -> Self {
        Self::Blank
    }
}
