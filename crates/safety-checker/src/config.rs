// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Checker configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! scan_order = "ascending"
//! record_timing = true
//! ```

use crate::{CheckerError, SafetyChecker, ScanOrder};
use std::path::Path;

/// Configuration for the safety checker.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CheckerConfig {
    /// Tie-break policy name: `"ascending"` or `"descending"`.
    #[serde(default = "default_scan_order")]
    pub scan_order: String,
    /// Whether to record wall-clock time per run.
    #[serde(default = "default_true")]
    pub record_timing: bool,
}

fn default_scan_order() -> String {
    ScanOrder::default().as_str().to_string()
}

fn default_true() -> bool {
    true
}

impl CheckerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CheckerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckerError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, CheckerError> {
        toml::from_str(toml_str)
            .map_err(|e| CheckerError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, CheckerError> {
        toml::to_string_pretty(self)
            .map_err(|e| CheckerError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Resolves the scan-order policy named by this config.
    pub fn parse_scan_order(&self) -> Result<ScanOrder, CheckerError> {
        ScanOrder::from_str_loose(&self.scan_order).ok_or_else(|| {
            CheckerError::ConfigError(format!(
                "unknown scan order '{}'; expected 'ascending' or 'descending'",
                self.scan_order
            ))
        })
    }

    /// Creates the checker described by this config.
    pub fn create_checker(&self) -> Result<SafetyChecker, CheckerError> {
        Ok(SafetyChecker::new(self.parse_scan_order()?).with_timing(self.record_timing))
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            scan_order: default_scan_order(),
            record_timing: true,
        }
    }
}
