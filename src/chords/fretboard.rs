//! Fretboard note names for the two root strings
//!
//! Notes are spelled with sharps and derived by semitone offset
//! from the open string.

use crate::chords::ChordFamily;

/// Highest fret drawn on the fretboard
pub const LAST_FRET: u8 = 15;

/// Frets carrying a single inlay dot
pub const SINGLE_INLAYS: [u8; 4] = [3, 5, 7, 9];

/// Fret carrying the double inlay
pub const DOUBLE_INLAY: u8 = 12;

const CHROMATIC: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// A string the chord root sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootString {
    LowE,
    A,
}

impl RootString {
    fn open_index(self) -> usize {
        match self {
            RootString::LowE => 7,
            RootString::A => 0,
        }
    }
}

impl From<ChordFamily> for RootString {
    fn from(family: ChordFamily) -> Self {
        match family {
            ChordFamily::EShape => RootString::LowE,
            ChordFamily::AShape => RootString::A,
        }
    }
}

/// Note sounding at `fret` on `string`
pub fn note_at(string: RootString, fret: u8) -> &'static str {
    CHROMATIC[(string.open_index() + fret as usize) % CHROMATIC.len()]
}

pub fn inlay_dots(fret: u8) -> usize {
    if fret == DOUBLE_INLAY {
        2
    } else if SINGLE_INLAYS.contains(&fret) {
        1
    } else {
        0
    }
}
