// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and octave-qualified notes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pitch class type (0-11, 0 = C)
pub type PitchClass = u8;

/// Octave number type
pub type Octave = i32;

/// Number of semitones in an octave
pub const SEMITONES_PER_OCTAVE: u8 = 12;

/// Note symbols indexed by pitch class
pub const NOTE_SYMBOLS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Get the symbol for a pitch class
///
/// # Panics
/// Panics if `pitch_class` is not below 12.
pub fn symbol(pitch_class: PitchClass) -> &'static str {
    assert!(
        pitch_class < SEMITONES_PER_OCTAVE,
        "pitch class {} is out of range",
        pitch_class
    );
    NOTE_SYMBOLS[pitch_class as usize]
}

/// Raised when a deserialized note carries an invalid pitch class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pitch class {0} is out of range (expected 0-11)")]
pub struct PitchClassOutOfRange(pub u8);

/// A pitch class in a specific octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawNote")]
pub struct Note {
    octave: Octave,
    note: PitchClass,
}

#[derive(Deserialize)]
struct RawNote {
    octave: Octave,
    note: PitchClass,
}

impl TryFrom<RawNote> for Note {
    type Error = PitchClassOutOfRange;

    fn try_from(raw: RawNote) -> Result<Self, Self::Error> {
        if raw.note >= SEMITONES_PER_OCTAVE {
            return Err(PitchClassOutOfRange(raw.note));
        }
        Ok(Note::new(raw.octave, raw.note))
    }
}

impl Note {
    /// Create a note from an octave and a pitch class
    ///
    /// # Panics
    /// Panics if `pitch_class` is not below 12.
    pub fn new(octave: Octave, pitch_class: PitchClass) -> Self {
        assert!(
            pitch_class < SEMITONES_PER_OCTAVE,
            "pitch class {} is out of range",
            pitch_class
        );
        Self {
            octave,
            note: pitch_class,
        }
    }

    /// Get the pitch class
    pub fn note(&self) -> PitchClass {
        self.note
    }

    /// Get the octave
    pub fn octave(&self) -> Octave {
        self.octave
    }
}
