// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the safety checker.

use resource_state::{MalformedSnapshot, ManifestError, ProcessId, ResourceId};

/// Errors surfaced by the checker's entry points.
///
/// Classification itself is total; every variant here comes from the
/// boundary around it (input validation, loading, configuration).
#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    /// The snapshot was rejected at construction.
    #[error(transparent)]
    Malformed(#[from] MalformedSnapshot),

    /// The snapshot manifest could not be loaded.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Why a proposed completion order is not a valid admission sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderViolation {
    /// The order does not list every process exactly once.
    #[error("order has {actual} entries, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    /// The order names a process that does not exist.
    #[error("position {position}: P{process} is not a process of this snapshot")]
    OutOfRange { position: usize, process: ProcessId },

    /// The order names a process twice.
    #[error("position {position}: P{process} appears more than once")]
    Duplicate { position: usize, process: ProcessId },

    /// A process's need exceeds what is free when its turn comes.
    #[error("position {position}: P{process} needs {need} of resource {resource}, only {available} free")]
    InsufficientResources {
        position: usize,
        process: ProcessId,
        resource: ResourceId,
        need: u64,
        available: u64,
    },
}
