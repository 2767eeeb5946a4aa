// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Named seven-note interval patterns.
//!
//! A template holds the semitone offsets of each scale degree from the
//! tonic. It is independent of any particular tonic; [`ScaleTemplate::transpose`]
//! produces the pitch classes for a concrete one.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::note::{PitchClass, SEMITONES_PER_OCTAVE};
use super::scale::DEGREES;

/// Errors raised when building a template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template name must not be empty")]
    EmptyName,
    #[error("template {name:?} has {len} intervals, expected 7")]
    WrongLength { name: String, len: usize },
    #[error("template {name:?} interval {interval} is out of range (expected 0-11)")]
    IntervalOutOfRange { name: String, interval: u8 },
}

/// Raw template definition, as written in config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    /// Name of the template (e.g., "Major")
    pub name: String,
    /// Intervals from the tonic (semitones)
    pub intervals: Vec<u8>,
}

/// A validated seven-note interval pattern with a name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TemplateDefinition", into = "TemplateDefinition")]
pub struct ScaleTemplate {
    name: String,
    intervals: [PitchClass; DEGREES],
}

impl ScaleTemplate {
    /// Create a template from a name and its semitone offsets from the tonic
    pub fn new(name: impl Into<String>, intervals: &[u8]) -> Result<Self, TemplateError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TemplateError::EmptyName);
        }

        if let Some(&interval) = intervals.iter().find(|&&i| i >= SEMITONES_PER_OCTAVE) {
            return Err(TemplateError::IntervalOutOfRange { name, interval });
        }

        let len = intervals.len();
        let intervals: [PitchClass; DEGREES] = intervals
            .try_into()
            .map_err(|_| TemplateError::WrongLength {
                name: name.clone(),
                len,
            })?;

        tracing::debug!(template = %name, ?intervals, "created scale template");
        Ok(Self { name, intervals })
    }

    /// Get the template name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the intervals (semitones from the tonic)
    pub fn intervals(&self) -> &[PitchClass; DEGREES] {
        &self.intervals
    }

    /// Pitch classes of the scale built on `tonic`, in scale-degree order
    pub fn transpose(&self, tonic: PitchClass) -> [PitchClass; DEGREES] {
        self.intervals
            .map(|i| ((i as u16 + tonic as u16) % SEMITONES_PER_OCTAVE as u16) as PitchClass)
    }
}

impl TryFrom<TemplateDefinition> for ScaleTemplate {
    type Error = TemplateError;

    fn try_from(def: TemplateDefinition) -> Result<Self, Self::Error> {
        ScaleTemplate::new(def.name, &def.intervals)
    }
}

impl From<ScaleTemplate> for TemplateDefinition {
    fn from(template: ScaleTemplate) -> Self {
        Self {
            name: template.name,
            intervals: template.intervals.to_vec(),
        }
    }
}

impl fmt::Display for ScaleTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
