use std::fmt;

/// A cell on the board. `x` is the row, `y` the column, both zero-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Chebyshev (king-move) distance between two cells.
    pub fn distance(&self, other: Coord) -> usize {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_chebyshev() {
        let center = Coord::new(7, 7);
        assert_eq!(center.distance(center), 0);
        assert_eq!(center.distance(Coord::new(8, 8)), 1);
        assert_eq!(center.distance(Coord::new(5, 8)), 2);
        assert_eq!(Coord::new(0, 0).distance(Coord::new(3, 1)), 3);
    }
}
