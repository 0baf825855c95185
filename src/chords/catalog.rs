//! Chord catalog: major bar chord names by fret
//!
//! Two root shapes are covered:
//! - E-shape (root on the low E string)
//! - A-shape (root on the A string)

use serde::Serialize;
use std::fmt;

/// A bar chord shape, named after the open chord it is moved from
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ChordFamily {
    EShape,
    AShape,
}

/// One quizzable position: fret and the major chord it produces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChordEntry {
    pub fret: u8,
    pub name: &'static str,
}

const fn entry(fret: u8, name: &'static str) -> ChordEntry {
    ChordEntry { fret, name }
}

const E_SHAPE: [ChordEntry; 9] = [
    entry(0, "E"),
    entry(2, "F#"),
    entry(4, "G#"),
    entry(5, "A"),
    entry(7, "B"),
    entry(9, "C#"),
    entry(11, "D#"),
    entry(12, "E"),
    entry(14, "F#"),
];

const A_SHAPE: [ChordEntry; 9] = [
    entry(0, "A"),
    entry(2, "B"),
    entry(4, "C#"),
    entry(5, "D"),
    entry(7, "E"),
    entry(9, "F#"),
    entry(11, "G#"),
    entry(12, "A"),
    entry(14, "B"),
];

impl ChordFamily {
    pub const ALL: [ChordFamily; 2] = [ChordFamily::EShape, ChordFamily::AShape];

    /// Ordered entries for this family
    pub fn entries(self) -> &'static [ChordEntry] {
        match self {
            ChordFamily::EShape => &E_SHAPE,
            ChordFamily::AShape => &A_SHAPE,
        }
    }

    /// Look up the entry at a fret, if the family quizzes that fret
    pub fn entry_at(self, fret: u8) -> Option<&'static ChordEntry> {
        self.entries().iter().find(|e| e.fret == fret)
    }

    /// Open-chord letter used in prompts ("E" or "A")
    pub fn root(self) -> &'static str {
        match self {
            ChordFamily::EShape => "E",
            ChordFamily::AShape => "A",
        }
    }
}

impl fmt::Display for ChordFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-shape", self.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_lookup() {
        assert_eq!(ChordFamily::EShape.entry_at(2).unwrap().name, "F#");
        assert_eq!(ChordFamily::AShape.entry_at(5).unwrap().name, "D");
        assert!(ChordFamily::EShape.entry_at(3).is_none());
    }

    #[test]
    fn test_entries_are_ordered_and_distinct() {
        for family in ChordFamily::ALL {
            let frets: Vec<u8> = family.entries().iter().map(|e| e.fret).collect();
            assert!(frets.windows(2).all(|w| w[0] < w[1]), "{family}");
            assert!(frets.len() >= 2);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ChordFamily::AShape.to_string(), "A-shape");
    }
}
