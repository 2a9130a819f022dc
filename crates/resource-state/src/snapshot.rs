// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Validated resource-allocation snapshot.
//!
//! ```text
//! SnapshotManifest   — raw, signed quantities straight from the caller.
//!       │  .validate()  /  Snapshot::try_from(manifest)
//!       ▼
//! Snapshot           — non-negative quantities, need matrix derived,
//!                      ready for the safety checker.
//! ```
//!
//! There is no other way to obtain a [`Snapshot`], so code that receives
//! one never has to re-check signs or shapes.

use crate::error::Quantity;
use crate::{MalformedSnapshot, SnapshotManifest};
use std::fmt;

/// Index of a process, `0..P`.
pub type ProcessId = usize;

/// Index of a resource type, `0..R`.
pub type ResourceId = usize;

/// A complete, validated resource-allocation state.
///
/// All matrices are sized exactly `P × R`. The snapshot is immutable; the
/// checker copies what it needs to mutate.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot {
    name: Option<String>,
    resource_names: Vec<String>,
    allocation: Vec<Vec<u64>>,
    maximum: Vec<Vec<u64>>,
    need: Vec<Vec<u64>>,
    available: Vec<u64>,
}

/// One process's row of the snapshot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessRow<'a> {
    pub process: ProcessId,
    pub allocation: &'a [u64],
    pub maximum: &'a [u64],
    pub need: &'a [u64],
}

impl Snapshot {
    /// Builds a snapshot from bare matrices, without labels.
    ///
    /// # Example
    /// ```
    /// use resource_state::Snapshot;
    ///
    /// let snap = Snapshot::new(
    ///     vec![vec![1, 0], vec![0, 1]],
    ///     vec![vec![2, 1], vec![1, 1]],
    ///     vec![1, 0],
    /// ).unwrap();
    /// assert_eq!(snap.process_count(), 2);
    /// assert_eq!(snap.need(0), &[1, 1]);
    ///
    /// // A maximum below the current allocation is rejected.
    /// assert!(Snapshot::new(vec![vec![3]], vec![vec![2]], vec![0]).is_err());
    /// ```
    pub fn new(
        allocation: Vec<Vec<i64>>,
        maximum: Vec<Vec<i64>>,
        available: Vec<i64>,
    ) -> Result<Self, MalformedSnapshot> {
        SnapshotManifest {
            allocation,
            maximum,
            available,
            ..Default::default()
        }
        .validate()
    }

    /// Number of processes (`P`).
    pub fn process_count(&self) -> usize {
        self.allocation.len()
    }

    /// Number of resource types (`R`).
    pub fn resource_type_count(&self) -> usize {
        self.available.len()
    }

    /// Optional human-readable name of the snapshot.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Labels for each resource type. Defaults to `R0`, `R1`, ...
    pub fn resource_names(&self) -> &[String] {
        &self.resource_names
    }

    /// Instances currently held by `process`.
    ///
    /// # Panics
    /// Panics if `process >= P`.
    pub fn allocation(&self, process: ProcessId) -> &[u64] {
        &self.allocation[process]
    }

    /// Declared maximum demand of `process`.
    ///
    /// # Panics
    /// Panics if `process >= P`.
    pub fn maximum(&self, process: ProcessId) -> &[u64] {
        &self.maximum[process]
    }

    /// Remaining need of `process`: `maximum - allocation`.
    ///
    /// # Panics
    /// Panics if `process >= P`.
    pub fn need(&self, process: ProcessId) -> &[u64] {
        &self.need[process]
    }

    /// Instances of each resource type not held by any process.
    pub fn available(&self) -> &[u64] {
        &self.available
    }

    /// Total instances per resource type: available plus everything held.
    pub fn total_instances(&self) -> Vec<u64> {
        // Validation has already proven these sums fit.
        let mut totals = self.available.clone();
        for row in &self.allocation {
            for (total, held) in totals.iter_mut().zip(row) {
                *total += held;
            }
        }
        totals
    }

    /// Iterates over the per-process rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = ProcessRow<'_>> {
        (0..self.process_count()).map(move |p| ProcessRow {
            process: p,
            allocation: &self.allocation[p],
            maximum: &self.maximum[p],
            need: &self.need[p],
        })
    }

    /// Returns a copy of this snapshot with a different available vector.
    pub fn with_available(&self, available: Vec<i64>) -> Result<Self, MalformedSnapshot> {
        let mut manifest = SnapshotManifest::from(self);
        manifest.available = available;
        manifest.validate()
    }

    /// Returns a one-line description of the snapshot.
    pub fn summary(&self) -> String {
        format!(
            "Snapshot '{}': {} processes, {} resource types, available {}",
            self.name().unwrap_or("unnamed"),
            self.process_count(),
            self.resource_type_count(),
            format_vector(&self.available),
        )
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl TryFrom<SnapshotManifest> for Snapshot {
    type Error = MalformedSnapshot;

    /// Validates a manifest.
    ///
    /// # Checks
    /// - Declared process / resource-type counts are positive.
    /// - Allocation and maximum have `P` rows of length `R`; available
    ///   has length `R`; resource labels, when given, number `R`.
    /// - No allocation, maximum or available quantity is negative.
    /// - No maximum lies below the corresponding allocation.
    /// - `available + Σ allocation` fits a `u64` for every resource type.
    ///
    /// The first violation is reported, scanning processes then resource
    /// types in ascending order.
    fn try_from(manifest: SnapshotManifest) -> Result<Self, Self::Error> {
        let process_count = resolve_count(
            manifest.processes,
            manifest.allocation.len(),
            MalformedSnapshot::NoProcesses,
        )?;
        let resource_type_count = resolve_count(
            manifest.resource_types,
            manifest.available.len(),
            MalformedSnapshot::NoResourceTypes,
        )?;

        expect_len("allocation", process_count, manifest.allocation.len())?;
        expect_len("maximum", process_count, manifest.maximum.len())?;
        expect_len("available", resource_type_count, manifest.available.len())?;
        for p in 0..process_count {
            expect_len(
                &format!("allocation row P{p}"),
                resource_type_count,
                manifest.allocation[p].len(),
            )?;
            expect_len(
                &format!("maximum row P{p}"),
                resource_type_count,
                manifest.maximum[p].len(),
            )?;
        }
        if !manifest.resource_names.is_empty() {
            expect_len(
                "resource_names",
                resource_type_count,
                manifest.resource_names.len(),
            )?;
        }

        let mut allocation = Vec::with_capacity(process_count);
        let mut maximum = Vec::with_capacity(process_count);
        let mut need = Vec::with_capacity(process_count);

        for p in 0..process_count {
            let mut alloc_row = Vec::with_capacity(resource_type_count);
            let mut max_row = Vec::with_capacity(resource_type_count);
            let mut need_row = Vec::with_capacity(resource_type_count);

            for r in 0..resource_type_count {
                let held = non_negative(manifest.allocation[p][r], Quantity::Allocation, Some(p), r)?;
                let max = non_negative(manifest.maximum[p][r], Quantity::Maximum, Some(p), r)?;
                if max < held {
                    return Err(MalformedSnapshot::MaximumBelowAllocation {
                        process: p,
                        resource: r,
                        maximum: manifest.maximum[p][r],
                        allocation: manifest.allocation[p][r],
                    });
                }
                alloc_row.push(held);
                max_row.push(max);
                need_row.push(max - held);
            }

            allocation.push(alloc_row);
            maximum.push(max_row);
            need.push(need_row);
        }

        let available = manifest
            .available
            .iter()
            .enumerate()
            .map(|(r, &value)| non_negative(value, Quantity::Available, None, r))
            .collect::<Result<Vec<_>, _>>()?;

        for (r, &free) in available.iter().enumerate() {
            allocation
                .iter()
                .try_fold(free, |acc, row| acc.checked_add(row[r]))
                .ok_or(MalformedSnapshot::CapacityOverflow { resource: r })?;
        }

        let resource_names = if manifest.resource_names.is_empty() {
            (0..resource_type_count).map(|r| format!("R{r}")).collect()
        } else {
            manifest.resource_names
        };

        tracing::debug!(
            "validated snapshot: {process_count} processes, {resource_type_count} resource types",
        );

        Ok(Self {
            name: manifest.name,
            resource_names,
            allocation,
            maximum,
            need,
            available,
        })
    }
}

impl From<&Snapshot> for SnapshotManifest {
    fn from(snapshot: &Snapshot) -> Self {
        let widen = |rows: &[Vec<u64>]| -> Vec<Vec<i64>> {
            rows.iter()
                .map(|row| row.iter().map(|&v| to_signed(v)).collect())
                .collect()
        };
        SnapshotManifest {
            name: snapshot.name.clone(),
            processes: None,
            resource_types: None,
            resource_names: snapshot.resource_names.clone(),
            allocation: widen(&snapshot.allocation),
            maximum: widen(&snapshot.maximum),
            available: snapshot.available.iter().map(|&v| to_signed(v)).collect(),
        }
    }
}

/// Formats a resource vector as `[a, b, c]`.
pub fn format_vector(values: &[u64]) -> String {
    let inner: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", inner.join(", "))
}

// ── Validation helpers ─────────────────────────────────────────────

fn resolve_count(
    declared: Option<i64>,
    actual: usize,
    empty: fn(i64) -> MalformedSnapshot,
) -> Result<usize, MalformedSnapshot> {
    match declared {
        Some(n) if n <= 0 => Err(empty(n)),
        Some(n) => usize::try_from(n).map_err(|_| empty(n)),
        None if actual == 0 => Err(empty(0)),
        None => Ok(actual),
    }
}

fn expect_len(what: &str, expected: usize, actual: usize) -> Result<(), MalformedSnapshot> {
    if expected != actual {
        return Err(MalformedSnapshot::DimensionMismatch {
            what: what.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

fn non_negative(
    value: i64,
    quantity: Quantity,
    process: Option<ProcessId>,
    resource: ResourceId,
) -> Result<u64, MalformedSnapshot> {
    u64::try_from(value).map_err(|_| MalformedSnapshot::NegativeQuantity {
        quantity,
        process,
        resource,
        value,
    })
}

// Every validated quantity started life as a non-negative i64.
fn to_signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> SnapshotManifest {
        SnapshotManifest {
            name: Some("textbook".into()),
            allocation: vec![
                vec![0, 1, 0],
                vec![2, 0, 0],
                vec![3, 0, 2],
                vec![2, 1, 1],
                vec![0, 0, 2],
            ],
            maximum: vec![
                vec![7, 5, 3],
                vec![3, 2, 2],
                vec![9, 0, 2],
                vec![2, 2, 2],
                vec![4, 3, 3],
            ],
            available: vec![3, 3, 2],
            ..Default::default()
        }
    }

    #[test]
    fn test_need_matrix_derived() {
        let snap = textbook().validate().unwrap();
        let need: Vec<&[u64]> = (0..5).map(|p| snap.need(p)).collect();
        assert_eq!(
            need,
            vec![
                &[7, 4, 3][..],
                &[1, 2, 2][..],
                &[6, 0, 0][..],
                &[0, 1, 1][..],
                &[4, 3, 1][..],
            ]
        );
    }

    #[test]
    fn test_dimensions() {
        let snap = textbook().validate().unwrap();
        assert_eq!(snap.process_count(), 5);
        assert_eq!(snap.resource_type_count(), 3);
        assert_eq!(snap.available(), &[3, 3, 2]);
        assert_eq!(snap.name(), Some("textbook"));
    }

    #[test]
    fn test_default_resource_names() {
        let snap = textbook().validate().unwrap();
        assert_eq!(snap.resource_names(), &["R0", "R1", "R2"]);
    }

    #[test]
    fn test_total_instances() {
        let snap = textbook().validate().unwrap();
        assert_eq!(snap.total_instances(), vec![10, 5, 7]);
    }

    #[test]
    fn test_rows_in_order() {
        let snap = textbook().validate().unwrap();
        let rows: Vec<_> = snap.rows().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[3].process, 3);
        assert_eq!(rows[3].allocation, &[2, 1, 1]);
        assert_eq!(rows[3].need, &[0, 1, 1]);
    }

    #[test]
    fn test_zero_processes_rejected() {
        let m = SnapshotManifest {
            available: vec![1],
            ..Default::default()
        };
        assert_eq!(m.validate(), Err(MalformedSnapshot::NoProcesses(0)));
    }

    #[test]
    fn test_zero_resource_types_rejected() {
        let m = SnapshotManifest {
            allocation: vec![vec![]],
            maximum: vec![vec![]],
            ..Default::default()
        };
        assert_eq!(m.validate(), Err(MalformedSnapshot::NoResourceTypes(0)));
    }

    #[test]
    fn test_negative_declared_counts_rejected() {
        let mut m = textbook();
        m.processes = Some(-1);
        assert_eq!(m.validate(), Err(MalformedSnapshot::NoProcesses(-1)));

        let mut m = textbook();
        m.resource_types = Some(0);
        assert_eq!(m.validate(), Err(MalformedSnapshot::NoResourceTypes(0)));
    }

    #[test]
    fn test_declared_count_mismatch() {
        let mut m = textbook();
        m.processes = Some(4);
        assert!(matches!(
            m.validate(),
            Err(MalformedSnapshot::DimensionMismatch { expected: 4, actual: 5, .. })
        ));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let mut m = textbook();
        m.maximum[2] = vec![9, 0];
        match m.validate() {
            Err(MalformedSnapshot::DimensionMismatch { what, expected, actual }) => {
                assert_eq!(what, "maximum row P2");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_negative_allocation_rejected() {
        let mut m = textbook();
        m.allocation[1][2] = -1;
        assert_eq!(
            m.validate(),
            Err(MalformedSnapshot::NegativeQuantity {
                quantity: Quantity::Allocation,
                process: Some(1),
                resource: 2,
                value: -1,
            })
        );
    }

    #[test]
    fn test_negative_maximum_rejected() {
        let mut m = textbook();
        m.maximum[0][0] = -7;
        assert!(matches!(
            m.validate(),
            Err(MalformedSnapshot::NegativeQuantity {
                quantity: Quantity::Maximum,
                process: Some(0),
                ..
            })
        ));
    }

    #[test]
    fn test_negative_available_rejected() {
        let mut m = textbook();
        m.available[1] = -3;
        assert_eq!(
            m.validate(),
            Err(MalformedSnapshot::NegativeQuantity {
                quantity: Quantity::Available,
                process: None,
                resource: 1,
                value: -3,
            })
        );
    }

    #[test]
    fn test_maximum_below_allocation_rejected() {
        let mut m = textbook();
        m.maximum[3] = vec![1, 2, 2];
        assert_eq!(
            m.validate(),
            Err(MalformedSnapshot::MaximumBelowAllocation {
                process: 3,
                resource: 0,
                maximum: 1,
                allocation: 2,
            })
        );
    }

    #[test]
    fn test_capacity_overflow_rejected() {
        let m = SnapshotManifest {
            allocation: vec![vec![i64::MAX], vec![i64::MAX]],
            maximum: vec![vec![i64::MAX], vec![i64::MAX]],
            available: vec![i64::MAX],
            ..Default::default()
        };
        // Two i64::MAX fit in a u64; a third does not.
        assert_eq!(
            m.validate(),
            Err(MalformedSnapshot::CapacityOverflow { resource: 0 })
        );
    }

    #[test]
    fn test_resource_names_length_checked() {
        let mut m = textbook();
        m.resource_names = vec!["A".into(), "B".into()];
        assert!(matches!(
            m.validate(),
            Err(MalformedSnapshot::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_with_available() {
        let snap = textbook().validate().unwrap();
        let starved = snap.with_available(vec![0, 0, 0]).unwrap();
        assert_eq!(starved.available(), &[0, 0, 0]);
        assert_eq!(starved.need(0), snap.need(0));
        assert!(snap.with_available(vec![0, -1, 0]).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = MalformedSnapshot::NegativeQuantity {
            quantity: Quantity::Allocation,
            process: Some(2),
            resource: 1,
            value: -4,
        };
        assert_eq!(
            err.to_string(),
            "malformed snapshot: allocation of P2 of resource 1 is negative (-4)"
        );
    }

    #[test]
    fn test_summary() {
        let snap = textbook().validate().unwrap();
        let s = snap.summary();
        assert!(s.contains("'textbook'"));
        assert!(s.contains("5 processes"));
        assert!(s.contains("[3, 3, 2]"));
    }
}
