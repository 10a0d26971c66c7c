use std::fmt;

use super::coord::Coord;
use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let last_move = self.last_move();

        write!(f, "   ")?;
        for y in 0..self.size {
            write!(f, "{:>3}", y)?;
        }
        writeln!(f)?;

        for x in 0..self.size {
            write!(f, "{:>3}", x)?;
            for y in 0..self.size {
                let coord = Coord::new(x, y);
                let stone = match self.get(coord) {
                    Some(color) => color.to_char(),
                    None => '·',
                };
                // the most recent stone is bracketed so it stands out
                if last_move == Some(coord) {
                    write!(f, " [{}", stone)?;
                } else if last_move == Some(Coord::new(x, y.wrapping_sub(1))) {
                    write!(f, "] {}", stone)?;
                } else {
                    write!(f, "  {}", stone)?;
                }
            }
            if last_move == Some(Coord::new(x, self.size - 1)) {
                write!(f, "]")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
