//! Chord data: the bar chord catalog and fretboard note names
//!
//! # Components
//! - `catalog.rs`: Fixed (fret, name) lists per chord family
//! - `fretboard.rs`: Note names on the low E and A strings

pub mod catalog;
pub mod fretboard;

pub use catalog::{ChordEntry, ChordFamily};
