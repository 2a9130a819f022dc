// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for snapshot construction and loading.

use std::fmt;

/// Which quantity of a snapshot a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Allocation,
    Maximum,
    Available,
}

impl Quantity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quantity::Allocation => "allocation",
            Quantity::Maximum => "maximum",
            Quantity::Available => "available",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A snapshot rejected at construction time.
///
/// This is the only failure the safety checker knows about: once a
/// [`crate::Snapshot`] exists, classification cannot fail. Malformed input
/// is reported as-is and never clamped or corrected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedSnapshot {
    /// The snapshot declares or contains no processes.
    #[error("malformed snapshot: process count must be positive, got {0}")]
    NoProcesses(i64),

    /// The snapshot declares or contains no resource types.
    #[error("malformed snapshot: resource type count must be positive, got {0}")]
    NoResourceTypes(i64),

    /// A matrix or vector does not have the expected shape.
    #[error("malformed snapshot: {what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// A declared quantity is negative.
    #[error("malformed snapshot: {quantity}{} of resource {resource} is negative ({value})", process_label(.process))]
    NegativeQuantity {
        quantity: Quantity,
        process: Option<usize>,
        resource: usize,
        value: i64,
    },

    /// A process declares a maximum below what it already holds.
    #[error("malformed snapshot: P{process} declares maximum {maximum} of resource {resource} but holds {allocation}")]
    MaximumBelowAllocation {
        process: usize,
        resource: usize,
        maximum: i64,
        allocation: i64,
    },

    /// The total instance count of a resource type does not fit a counter.
    #[error("malformed snapshot: total instances of resource {resource} overflow")]
    CapacityOverflow { resource: usize },
}

fn process_label(process: &Option<usize>) -> String {
    match process {
        Some(p) => format!(" of P{p}"),
        None => String::new(),
    }
}

/// Errors that can occur when loading a snapshot manifest from disk.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read snapshot manifest: {0}")]
    ReadError(#[from] std::io::Error),

    /// The manifest JSON is malformed.
    #[error("failed to parse snapshot manifest: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The manifest TOML is malformed.
    #[error("failed to parse snapshot manifest: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("unsupported manifest format '{0}': expected .json or .toml")]
    UnsupportedFormat(String),

    /// The manifest parsed but describes an invalid snapshot.
    #[error(transparent)]
    Malformed(#[from] MalformedSnapshot),
}
