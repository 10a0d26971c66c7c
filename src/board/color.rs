use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Stone color. Black moves first and is the maximizing side; White is the
/// minimizing side. The two signs sum to zero.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn maximize_score(&self) -> bool {
        match self {
            Color::Black => true,
            Color::White => false,
        }
    }

    /// `+1` for Black, `-1` for White. Evaluation scores carry the same sign.
    pub fn sign(&self) -> i32 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' | 'B' | 'b' => Some(Color::Black),
            'O' | 'o' | 'W' | 'w' => Some(Color::White),
            _ => None,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Color::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Black => "black",
            Color::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            "random" => Ok(Color::random()),
            _ => Err("invalid color; options are: black, white, random"),
        }
    }
}
