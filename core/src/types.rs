/// Single coordinate axis used for grid side and positions.
pub type Coord = usize;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Count type used for letter, hint and cell counts.
pub type CellCount = usize;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0, self.1]
    }
}

/// Smallest side whose square holds `len` cells, i.e. `ceil(sqrt(len))`.
pub const fn grid_side(len: CellCount) -> Coord {
    let side = len.isqrt();
    if side * side < len { side + 1 } else { side }
}

/// Characters of `text` with every whitespace character removed.
pub fn strip_whitespace(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|ch| !ch.is_whitespace())
}
