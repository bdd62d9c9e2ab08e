use ndarray::Array2;

/// Single coordinate axis used for the board side length, rows and columns.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Row-major index of a cell, `row * size + col`.
pub type Position = CellCount;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Splits a position into `(row, col)` on a `size`-wide board.
pub const fn to_coords(position: Position, size: Coord) -> Coord2 {
    let size = size as Position;
    ((position / size) as Coord, (position % size) as Coord)
}

/// Joins `(row, col)` back into a row-major position.
pub const fn to_position((row, col): Coord2, size: Coord) -> Position {
    row as Position * size as Position + col as Position
}

/// The in-bounds neighbors of `position` on a `size` x `size` board.
///
/// Never wraps across a row boundary. Corners have 3 neighbors, other edge
/// cells 5 and interior cells 8.
pub fn neighbors(position: Position, size: Coord) -> NeighborIter {
    NeighborIter::new(to_coords(position, size), size)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, position: Position) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, position: Position) -> NeighborIter {
        let size = self.nrows().try_into().unwrap_or(Coord::MAX);
        neighbors(position, size)
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), size: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= size {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= size {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, size: Coord) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.size);
            self.index += 1;

            if let Some(coords) = next_item {
                return Some(to_position(coords, self.size));
            }
        }
    }
}
