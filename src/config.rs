// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matcher configuration.
//!
//! The defaults are the values the site ships with. A JSON file can override
//! any subset of them; missing keys fall back to the defaults.

use crate::scoring::{
    DEFAULT_DISTANCE, DEFAULT_LOCATION, DEFAULT_THRESHOLD, DESCRIPTION_WEIGHT, TAGS_WEIGHT,
    TITLE_WEIGHT,
};
use crate::types::{Field, WeightedField};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading or validating a [`MatcherConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("threshold must be within [0, 1], got {0}")]
    Threshold(f64),
    #[error("distance must be positive, got {0}")]
    Distance(usize),
    #[error("weight for field '{field}' must be positive and finite, got {weight}")]
    Weight { field: Field, weight: f64 },
    #[error("field '{0}' is configured more than once")]
    DuplicateField(Field),
    #[error("at least one weighted field is required")]
    NoFields,
}

/// How the fuzzy matcher scores and filters records.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MatcherConfig {
    /// Maximum share of the query that may be mistyped (`errors / query
    /// length`) for a field to match. `0.0` requires an exact substring,
    /// `1.0` matches anything.
    pub threshold: f64,
    /// Expected character offset of a match within a field.
    pub location: usize,
    /// How far (in characters) from `location` a match may drift before the
    /// proximity penalty peaks. The penalty only orders matches; it never
    /// rejects one.
    pub distance: usize,
    /// Ignore where in the field the match occurs.
    pub ignore_location: bool,
    /// Fields searched and their relative weight.
    pub fields: Vec<WeightedField>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            location: DEFAULT_LOCATION,
            distance: DEFAULT_DISTANCE,
            ignore_location: false,
            fields: vec![
                WeightedField::new(Field::Title, TITLE_WEIGHT),
                WeightedField::new(Field::Tags, TAGS_WEIGHT),
                WeightedField::new(Field::Description, DESCRIPTION_WEIGHT),
            ],
        }
    }
}

impl MatcherConfig {
    /// Read a JSON config file and validate it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        let config: MatcherConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: display,
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and field weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::Threshold(self.threshold));
        }
        if self.distance == 0 {
            return Err(ConfigError::Distance(self.distance));
        }
        if self.fields.is_empty() {
            return Err(ConfigError::NoFields);
        }
        for (i, field) in self.fields.iter().enumerate() {
            if !field.weight.is_finite() || field.weight <= 0.0 {
                return Err(ConfigError::Weight {
                    field: field.name,
                    weight: field.weight,
                });
            }
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(ConfigError::DuplicateField(field.name));
            }
        }
        Ok(())
    }

    /// Sum of all field weights.
    pub fn total_weight(&self) -> f64 {
        self.fields.iter().map(|f| f.weight).sum()
    }
}
