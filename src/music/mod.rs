// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities.
//!
//! This module provides pitch classes and notes, interval templates, and
//! the scale type that ties them together for diatonic transposition.

pub mod note;
pub mod scale;
pub mod template;

pub use note::{
    symbol, Note, Octave, PitchClass, PitchClassOutOfRange, NOTE_SYMBOLS, SEMITONES_PER_OCTAVE,
};
pub use scale::{Scale, ScaleError, DEGREES, MAX_TONIC};
pub use template::{ScaleTemplate, TemplateDefinition, TemplateError};
