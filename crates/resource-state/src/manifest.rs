// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Snapshot manifest parsing.
//!
//! A manifest is the raw, caller-supplied description of a resource
//! state. Quantities are signed so that bad input can be represented and
//! rejected rather than silently wrapped.
//!
//! # Format
//! ```json
//! {
//!   "name": "textbook",
//!   "processes": 5,
//!   "resource_types": 3,
//!   "resource_names": ["A", "B", "C"],
//!   "allocation": [[0,1,0],[2,0,0],[3,0,2],[2,1,1],[0,0,2]],
//!   "maximum":    [[7,5,3],[3,2,2],[9,0,2],[2,2,2],[4,3,3]],
//!   "available":  [3,3,2]
//! }
//! ```
//! The same keys are accepted in TOML. `processes`, `resource_types`,
//! `name` and `resource_names` are optional.

use crate::{ManifestError, MalformedSnapshot, Snapshot};
use std::path::Path;

/// A resource-state description as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SnapshotManifest {
    /// Human-readable snapshot name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Declared process count. Defaults to the number of allocation rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processes: Option<i64>,
    /// Declared resource-type count. Defaults to the length of `available`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_types: Option<i64>,
    /// Optional labels for the resource types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_names: Vec<String>,
    /// Instances currently held, one row per process.
    #[serde(default)]
    pub allocation: Vec<Vec<i64>>,
    /// Declared maximum demand, one row per process.
    #[serde(default)]
    pub maximum: Vec<Vec<i64>>,
    /// Instances not held by any process.
    #[serde(default)]
    pub available: Vec<i64>,
}

impl SnapshotManifest {
    /// Loads a manifest from a `.json` or `.toml` file.
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = std::fs::read_to_string(path)?;
        tracing::debug!("read snapshot manifest '{}'", path.display());

        match extension.as_str() {
            "json" => Self::from_json(&content),
            "toml" => Self::from_toml(&content),
            other => Err(ManifestError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Parses a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a manifest from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialises the manifest to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the manifest, producing a [`Snapshot`].
    pub fn validate(self) -> Result<Snapshot, MalformedSnapshot> {
        Snapshot::try_from(self)
    }
}

/// Loads and validates a snapshot from a manifest file in one step.
pub fn load(path: &Path) -> Result<Snapshot, ManifestError> {
    let manifest = SnapshotManifest::from_file(path)?;
    Ok(manifest.validate()?)
}
