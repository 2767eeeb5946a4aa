// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic scale arithmetic.
//!
//! A [`Scale`] is built from a tonic pitch class and a [`ScaleTemplate`]. It
//! maps scale degrees to semitone offsets, finds a pitch class within the
//! scale, and transposes notes by scale degrees instead of raw semitones.

pub mod config;
pub mod music;

pub use config::TemplateFile;
pub use music::{
    Note, Octave, PitchClass, Scale, ScaleError, ScaleTemplate, TemplateDefinition, TemplateError,
};
