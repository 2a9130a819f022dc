// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # safety-checker
//!
//! The Banker's safety algorithm: decides whether a static
//! resource-allocation snapshot is **safe** (some completion order lets
//! every process obtain its remaining need, finish, and release what it
//! holds) and, if so, returns one such order.
//!
//! # Key Components
//!
//! - [`SafetyChecker`] — runs the fixed-point pass loop.
//! - [`Outcome`] — `Safe { order }` or `Unsafe { stuck }`.
//! - [`Classification`] — the outcome plus [`PassStats`] and final `work`.
//! - [`ScanOrder`] — tie-break policy between simultaneously eligible
//!   processes (ascending index by default).
//! - [`verify_order`] — replays a completion order independently.
//! - [`CheckerConfig`] — TOML configuration.
//!
//! # Purity
//!
//! Classification performs no I/O, holds no state between calls, and
//! cannot fail once a [`resource_state::Snapshot`] exists. Independent
//! snapshots can be classified concurrently without synchronisation.
//!
//! # Example
//! ```
//! use resource_state::SnapshotManifest;
//! use safety_checker::{classify_manifest, Outcome};
//!
//! let outcome = classify_manifest(SnapshotManifest {
//!     allocation: vec![vec![0, 1, 0], vec![2, 0, 0], vec![3, 0, 2], vec![2, 1, 1], vec![0, 0, 2]],
//!     maximum: vec![vec![7, 5, 3], vec![3, 2, 2], vec![9, 0, 2], vec![2, 2, 2], vec![4, 3, 3]],
//!     available: vec![3, 3, 2],
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! assert_eq!(outcome, Outcome::Safe { order: vec![1, 3, 4, 0, 2] });
//! ```

mod checker;
mod config;
mod error;
mod outcome;
mod policy;
mod stats;
mod verify;

pub use checker::SafetyChecker;
pub use config::CheckerConfig;
pub use error::{CheckerError, OrderViolation};
pub use outcome::{Classification, Outcome};
pub use policy::ScanOrder;
pub use stats::PassStats;
pub use verify::verify_order;

use resource_state::{MalformedSnapshot, Snapshot, SnapshotManifest};

/// Classifies a validated snapshot with the default (ascending) policy.
pub fn classify(snapshot: &Snapshot) -> Outcome {
    SafetyChecker::default().with_timing(false).run(snapshot).outcome
}

/// Validates raw input and classifies it.
///
/// This is the whole contract in one call: malformed input is rejected
/// before the algorithm runs, and a validated snapshot always classifies.
pub fn classify_manifest(manifest: SnapshotManifest) -> Result<Outcome, MalformedSnapshot> {
    let snapshot = manifest.validate()?;
    Ok(classify(&snapshot))
}
