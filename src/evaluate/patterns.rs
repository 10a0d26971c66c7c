//! Weighted stone-line signatures recognized by the evaluator.
//!
//! Signatures are written from the point of view of the side owning the
//! pattern: `p` is an own stone, `n` an opponent stone and `0` an empty cell.
//! A line reads the same in both directions, so every signature is stored
//! together with its mirror image.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::board::color::Color;

/// A single cell of a signature, relative to the pattern's owner.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PatternCell {
    Empty = 0,
    Own = 1,
    Opponent = 2,
}

impl PatternCell {
    /// Classifies a board cell from `owner`'s perspective.
    #[inline(always)]
    pub fn relative_to(cell: Option<Color>, owner: Color) -> Self {
        match cell {
            None => PatternCell::Empty,
            Some(color) if color == owner => PatternCell::Own,
            Some(_) => PatternCell::Opponent,
        }
    }

    fn from_char(c: char) -> Self {
        match c {
            'p' => PatternCell::Own,
            'n' => PatternCell::Opponent,
            _ => PatternCell::Empty,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PatternClass {
    /// Two stones obstructed on one end ("sleeping two").
    BlockedTwo,
    /// Two stones free on both ends ("alive two").
    OpenTwo,
    BlockedThree,
    OpenThree,
    BlockedFour,
    OpenFour,
    Five,
}

impl PatternClass {
    // A blocked four and an open three share a weight: both force a reply.
    pub fn weight(&self) -> i32 {
        match self {
            PatternClass::BlockedTwo => 1,
            PatternClass::OpenTwo => 5,
            PatternClass::BlockedThree => 50,
            PatternClass::OpenThree => 500,
            PatternClass::BlockedFour => 500,
            PatternClass::OpenFour => 10_000,
            PatternClass::Five => 100_000,
        }
    }
}

const SIGNATURES: [(PatternClass, &str); 19] = [
    (PatternClass::BlockedTwo, "p000p"),
    (PatternClass::BlockedTwo, "npp000"),
    (PatternClass::BlockedTwo, "np0p00"),
    (PatternClass::BlockedTwo, "np00p0"),
    (PatternClass::OpenTwo, "p00p"),
    (PatternClass::OpenTwo, "0p0p0"),
    (PatternClass::OpenTwo, "00pp00"),
    (PatternClass::BlockedThree, "pp00p"),
    (PatternClass::BlockedThree, "p0p0p"),
    (PatternClass::BlockedThree, "nppp00"),
    (PatternClass::BlockedThree, "npp0p0"),
    (PatternClass::BlockedThree, "np0pp0"),
    (PatternClass::OpenThree, "0ppp0"),
    (PatternClass::OpenThree, "0pp0p0"),
    (PatternClass::BlockedFour, "ppp0p"),
    (PatternClass::BlockedFour, "pp0pp"),
    (PatternClass::BlockedFour, "npppp0"),
    (PatternClass::OpenFour, "0pppp0"),
    (PatternClass::Five, "ppppp"),
];

/// Packs a window into a base-3 integer. The leading `1` keeps windows of
/// different lengths apart, since `Empty` encodes as zero.
#[inline(always)]
pub fn signature_key<I>(cells: I) -> u32
where
    I: IntoIterator<Item = PatternCell>,
{
    cells
        .into_iter()
        .fold(1, |key, cell| key * 3 + cell as u32)
}

/// The process-wide table shared by every evaluator, built on first use.
pub static PATTERN_TABLE: Lazy<PatternTable> = Lazy::new(PatternTable::new);

/// Immutable lookup table from signature to weight.
#[derive(Clone, Debug)]
pub struct PatternTable {
    weights: FxHashMap<u32, i32>,
}

impl PatternTable {
    fn new() -> Self {
        let mut weights = FxHashMap::default();

        for (class, signature) in SIGNATURES.iter() {
            let cells: Vec<PatternCell> = signature.chars().map(PatternCell::from_char).collect();
            weights.insert(signature_key(cells.iter().copied()), class.weight());
            weights.insert(signature_key(cells.iter().rev().copied()), class.weight());
        }

        Self { weights }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn weight(&self, key: u32) -> Option<i32> {
        self.weights.get(&key).copied()
    }

    /// Weight of `window` if it matches a signature owned by `owner`.
    #[inline(always)]
    pub fn match_window(&self, window: &[Option<Color>], owner: Color) -> Option<i32> {
        let key = signature_key(
            window
                .iter()
                .map(|cell| PatternCell::relative_to(*cell, owner)),
        );
        self.weight(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(signature: &str) -> Vec<PatternCell> {
        signature.chars().map(PatternCell::from_char).collect()
    }

    #[test]
    fn test_table_contains_signatures_and_mirrors() {
        let table = &*PATTERN_TABLE;
        // 19 signatures, 10 of which are not palindromes
        assert_eq!(table.len(), 29);
    }

    #[test]
    fn test_mirror_has_identical_weight() {
        let table = &*PATTERN_TABLE;
        for (class, signature) in SIGNATURES.iter() {
            let forward = signature_key(cells(signature));
            let mirrored = signature_key(cells(signature).into_iter().rev());
            assert_eq!(table.weight(forward), Some(class.weight()), "{}", signature);
            assert_eq!(table.weight(mirrored), Some(class.weight()), "{}", signature);
        }
    }

    #[test]
    fn test_signatures_do_not_overlap_between_classes() {
        for (i, (class_a, sig_a)) in SIGNATURES.iter().enumerate() {
            for (class_b, sig_b) in SIGNATURES.iter().skip(i + 1) {
                let b_forward = signature_key(cells(sig_b));
                let b_mirror = signature_key(cells(sig_b).into_iter().rev());
                let a = signature_key(cells(sig_a));
                if a == b_forward || a == b_mirror {
                    assert_eq!(class_a, class_b, "{} collides with {}", sig_a, sig_b);
                }
            }
        }
    }

    #[test]
    fn test_keys_distinguish_lengths() {
        assert_ne!(signature_key(cells("0p0p")), signature_key(cells("00p0p")));
    }

    #[test]
    fn test_match_window_uses_owner_perspective() {
        let table = &*PATTERN_TABLE;
        let b = Some(Color::Black);
        let w = Some(Color::White);
        let open_three = [None, b, b, b, None];
        assert_eq!(table.match_window(&open_three, Color::Black), Some(500));
        assert_eq!(table.match_window(&open_three, Color::White), None);

        let blocked_four = [b, w, w, w, w, None];
        assert_eq!(table.match_window(&blocked_four, Color::White), Some(500));
        assert_eq!(table.match_window(&blocked_four, Color::Black), None);
    }
}
