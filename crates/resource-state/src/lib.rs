// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # resource-state
//!
//! The data model consumed by the Banker's safety checker: a static
//! snapshot of which processes hold which resources, what each may still
//! claim, and what is free.
//!
//! # Key Components
//!
//! - [`SnapshotManifest`] — raw caller input with signed quantities,
//!   loadable from JSON or TOML.
//! - [`Snapshot`] — the validated state: non-negative `P × R` matrices
//!   plus the derived need matrix (`maximum - allocation`).
//! - [`MalformedSnapshot`] — why a manifest was rejected.
//!
//! # Validation Boundary
//!
//! ```text
//! caller data ──► SnapshotManifest ──validate()──► Snapshot ──► checker
//!                                        │
//!                                        └──► MalformedSnapshot
//! ```
//!
//! The conservation invariant (`available + Σ allocation = total`) is the
//! allocator's responsibility and is not re-derived here.
//!
//! # Example
//! ```
//! use resource_state::SnapshotManifest;
//!
//! let snap = SnapshotManifest {
//!     allocation: vec![vec![0, 1, 0], vec![2, 0, 0]],
//!     maximum: vec![vec![7, 5, 3], vec![3, 2, 2]],
//!     available: vec![3, 3, 2],
//!     ..Default::default()
//! }
//! .validate()
//! .unwrap();
//!
//! assert_eq!(snap.need(1), &[1, 2, 2]);
//! ```

mod error;
pub mod manifest;
mod snapshot;

pub use error::{MalformedSnapshot, ManifestError, Quantity};
pub use manifest::{load, SnapshotManifest};
pub use snapshot::{format_vector, ProcessId, ProcessRow, ResourceId, Snapshot};
