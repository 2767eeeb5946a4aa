// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scales built on a tonic.
//!
//! Provides scale-degree to semitone mapping, lookup of a pitch class
//! within the scale, and transposition of notes by scale degrees.
//!
//! Degree arithmetic uses floored division, so negative degrees wrap
//! downward by whole octaves: degree -1 is the seventh degree one octave
//! below the tonic.

use std::fmt;

use thiserror::Error;

use super::note::{symbol, Note, PitchClass, SEMITONES_PER_OCTAVE};
use super::template::ScaleTemplate;

/// Number of degrees in a diatonic scale
pub const DEGREES: usize = 7;

/// Tonics must be below this value
pub const MAX_TONIC: PitchClass = 8;

const OCTAVE: i32 = SEMITONES_PER_OCTAVE as i32;

/// Errors raised by scale lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScaleError {
    #[error("note not in scale (pitch class {pitch_class})")]
    NotInScale { pitch_class: PitchClass },
}

/// A seven-note scale built from a tonic and a template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scale {
    tonic: PitchClass,
    pattern: [PitchClass; DEGREES],
    name: String,
}

impl Scale {
    /// Create a new scale from a tonic and a template
    ///
    /// # Panics
    /// Panics if `tonic` is not below [`MAX_TONIC`].
    pub fn new(tonic: PitchClass, template: &ScaleTemplate) -> Self {
        assert!(
            tonic < MAX_TONIC,
            "tonic {} is out of range (expected 0-{})",
            tonic,
            MAX_TONIC - 1
        );

        let pattern = template.transpose(tonic);
        let name = format!("{}{}", symbol(tonic), template.name());
        tracing::debug!(scale = %name, ?pattern, "created scale");

        Self {
            tonic,
            pattern,
            name,
        }
    }

    /// Get the scale name (tonic symbol followed by the template name)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the tonic
    pub fn tonic(&self) -> PitchClass {
        self.tonic
    }

    /// Get the pitch classes of the scale, in degree order
    pub fn pattern(&self) -> &[PitchClass; DEGREES] {
        &self.pattern
    }

    /// Check if a pitch class is in this scale
    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.pattern.contains(&pitch_class)
    }

    /// Semitones from the tonic to the nth degree (0-based)
    ///
    /// Every seven degrees add a full octave, whatever the template spans.
    pub fn note_offset(&self, n: i32) -> i32 {
        let degrees = DEGREES as i32;
        let octaves = n.div_euclid(degrees) * OCTAVE;
        let degree = self.pattern[n.rem_euclid(degrees) as usize] as i32;

        octaves + (OCTAVE + degree - self.tonic as i32) % OCTAVE
    }

    /// Get the degree index (0-based) of a pitch class
    pub fn note_index(&self, pitch_class: PitchClass) -> Result<usize, ScaleError> {
        self.pattern
            .iter()
            .position(|&pc| pc == pitch_class)
            .ok_or_else(|| {
                tracing::trace!(scale = %self.name, pitch_class, "note not in scale");
                ScaleError::NotInScale { pitch_class }
            })
    }

    /// Get the degree index (0-based) of a note's pitch class
    pub fn note_index_of(&self, note: Note) -> Result<usize, ScaleError> {
        self.note_index(note.note())
    }

    /// Move a note by `degrees` scale degrees (positive = up, negative = down)
    ///
    /// The result always lands on a pitch class of this scale.
    pub fn interval(&self, note: Note, degrees: i32) -> Result<Note, ScaleError> {
        let i = self.note_index_of(note)? as i32;
        let tonic = self.tonic as i32;

        // Absolute positions measured from pitch class 0 of the tonic's octave
        let start = tonic + self.note_offset(i);
        let end = tonic + self.note_offset(i + degrees);

        // Octave changes are counted from the note's own position, so a note
        // below the tonic's pitch class keeps its octave on a zero move.
        let octave_delta = end.div_euclid(OCTAVE) - start.div_euclid(OCTAVE);
        let pitch_class = end.rem_euclid(OCTAVE) as PitchClass;

        Ok(Note::new(note.octave() + octave_delta, pitch_class))
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
