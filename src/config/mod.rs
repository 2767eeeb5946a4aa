// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration files for scale templates.
//!
//! Templates are stored as YAML (or TOML, by file extension) lists of
//! named interval patterns:
//!
//! ```yaml
//! templates:
//!   - name: Major
//!     intervals: [0, 2, 4, 5, 7, 9, 11]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::ScaleTemplate;

/// A collection of scale templates loaded from a file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TemplateFile {
    /// Template definitions, in file order
    #[serde(default)]
    pub templates: Vec<ScaleTemplate>,
}

impl TemplateFile {
    /// Load templates from a file (TOML for `.toml`, YAML otherwise)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template file: {:?}", path))?;

        let is_toml = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("toml"));
        let file = if is_toml {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        }
        .with_context(|| format!("Invalid template file: {:?}", path))?;

        tracing::debug!(path = ?path, count = file.templates.len(), "loaded scale templates");
        Ok(file)
    }

    /// Parse templates from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: Self =
            serde_yaml::from_str(yaml).context("Failed to parse YAML template file")?;
        file.validate()?;
        Ok(file)
    }

    /// Parse templates from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: Self = toml::from_str(text).context("Failed to parse TOML template file")?;
        file.validate()?;
        Ok(file)
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize templates to YAML")
    }

    /// Save templates to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write template file: {:?}", path.as_ref()))
    }

    /// Find a template by exact name
    pub fn find(&self, name: &str) -> Option<&ScaleTemplate> {
        self.templates.iter().find(|t| t.name() == name)
    }

    /// List template names, in file order
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name()).collect()
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for template in &self.templates {
            if !seen.insert(template.name()) {
                bail!("Duplicate template name: {}", template.name());
            }
        }
        Ok(())
    }
}
