// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The Banker's safety algorithm.
//!
//! # Algorithm
//!
//! ```text
//! work ← available, finished ← [false; P], sequence ← []
//! loop
//!     before ← work
//!     for p in scan order, unfinished:
//!         if need[p] ≤ work:                 (component-wise)
//!             work += allocation[p]          (released immediately)
//!             finished[p] ← true; sequence.push(p)
//!     if all finished or work = before: stop
//! safe  ⇔ all finished
//! ```
//!
//! Releases take effect within the same pass, so a process that only fits
//! because an earlier one in this pass finished is admitted straight away.
//!
//! # Termination
//!
//! `work` never shrinks. A pass that leaves it unchanged admitted nothing
//! that could help anyone else, and the next pass would see exactly the
//! same inputs, so the run stops. Every other pass admits at least one
//! process, which bounds a run to `P` passes.

use crate::{CheckerError, Classification, Outcome, PassStats, ScanOrder};
use resource_state::{Snapshot, SnapshotManifest};
use std::collections::BTreeSet;
use std::time::Instant;

/// Runs the safety algorithm over validated snapshots.
///
/// The checker is stateless between calls: every run allocates its own
/// working vectors and drops them on return, so one checker can be shared
/// freely across threads.
///
/// # Example
/// ```
/// use resource_state::Snapshot;
/// use safety_checker::SafetyChecker;
///
/// let snap = Snapshot::new(
///     vec![vec![1], vec![1]],
///     vec![vec![2], vec![3]],
///     vec![1],
/// ).unwrap();
///
/// let result = SafetyChecker::default().run(&snap);
/// assert_eq!(result.outcome.order(), Some(&[0, 1][..]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyChecker {
    order: ScanOrder,
    record_timing: bool,
}

impl Default for SafetyChecker {
    fn default() -> Self {
        Self::new(ScanOrder::default())
    }
}

impl SafetyChecker {
    /// Creates a checker with the given tie-break policy.
    pub fn new(order: ScanOrder) -> Self {
        Self {
            order,
            record_timing: true,
        }
    }

    /// Enables or disables wall-clock timing in [`PassStats`].
    pub fn with_timing(mut self, record_timing: bool) -> Self {
        self.record_timing = record_timing;
        self
    }

    /// The tie-break policy in use.
    pub fn scan_order(&self) -> ScanOrder {
        self.order
    }

    /// Classifies a snapshot.
    pub fn run(&self, snapshot: &Snapshot) -> Classification {
        let start = Instant::now();
        let process_count = snapshot.process_count();

        let mut work = snapshot.available().to_vec();
        let mut finished = vec![false; process_count];
        let mut sequence = Vec::with_capacity(process_count);
        let mut stats = PassStats::default();

        loop {
            let before = work.clone();
            let mut admitted = 0;

            for p in self.order.scan(process_count) {
                if finished[p] || !fits(snapshot.need(p), &work) {
                    continue;
                }
                release(&mut work, snapshot.allocation(p));
                finished[p] = true;
                sequence.push(p);
                admitted += 1;
                tracing::trace!("pass {}: admitted P{p}, work now {work:?}", stats.passes() + 1);
            }

            stats.record_pass(admitted);
            tracing::debug!(
                "pass {} admitted {admitted} process(es), {}/{process_count} finished",
                stats.passes(),
                sequence.len(),
            );

            if sequence.len() == process_count || work == before {
                break;
            }
        }

        let outcome = if sequence.len() == process_count {
            Outcome::Safe { order: sequence }
        } else {
            let stuck: BTreeSet<_> = (0..process_count).filter(|&p| !finished[p]).collect();
            Outcome::Unsafe { stuck }
        };

        if self.record_timing {
            stats.elapsed = Some(start.elapsed());
        }

        let classification = Classification {
            outcome,
            stats,
            final_work: work,
        };
        tracing::info!("{}", classification.summary());
        classification
    }

    /// Validates a manifest and classifies the resulting snapshot.
    pub fn check_manifest(
        &self,
        manifest: SnapshotManifest,
    ) -> Result<Classification, CheckerError> {
        let snapshot = manifest.validate()?;
        Ok(self.run(&snapshot))
    }

    /// Loads, validates and classifies a snapshot file (`.json` / `.toml`).
    pub fn check_file(&self, path: &std::path::Path) -> Result<Classification, CheckerError> {
        let snapshot = resource_state::load(path)?;
        Ok(self.run(&snapshot))
    }
}

/// `need ≤ work`, component-wise.
fn fits(need: &[u64], work: &[u64]) -> bool {
    need.iter().zip(work).all(|(n, w)| n <= w)
}

fn release(work: &mut [u64], allocation: &[u64]) {
    // Snapshot validation guarantees these sums cannot overflow.
    for (w, held) in work.iter_mut().zip(allocation) {
        *w += held;
    }
}
