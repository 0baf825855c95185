//! Answer evaluation
//!
//! Exact, case-insensitive match against the chord name. No trimming and
//! no enharmonic equivalence: "Gb" is not accepted for "F#".

use crate::quiz::round::RoundState;

/// Compare a submitted answer with the expected chord name
pub fn matches_chord_name(submitted: &str, expected: &str) -> bool {
    submitted.to_uppercase() == expected.to_uppercase()
}

/// Check an answer against the round's chord
pub fn evaluate(submitted: &str, round: &RoundState) -> bool {
    matches_chord_name(submitted, round.expected_name())
}
