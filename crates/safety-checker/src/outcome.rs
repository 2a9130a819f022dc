// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Classification results.

use crate::PassStats;
use resource_state::{format_vector, ProcessId};
use std::collections::BTreeSet;
use std::fmt;

/// The verdict on a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Outcome {
    /// Every process can finish. `order` is one witnessing completion
    /// sequence: a permutation of `0..P`.
    Safe { order: Vec<ProcessId> },
    /// Some processes cannot be shown to finish. `stuck` is non-empty.
    Unsafe { stuck: BTreeSet<ProcessId> },
}

impl Outcome {
    pub fn is_safe(&self) -> bool {
        matches!(self, Outcome::Safe { .. })
    }

    /// The safe sequence, if the snapshot is safe.
    pub fn order(&self) -> Option<&[ProcessId]> {
        match self {
            Outcome::Safe { order } => Some(order),
            Outcome::Unsafe { .. } => None,
        }
    }

    /// The processes that could not be admitted, if the snapshot is unsafe.
    pub fn stuck(&self) -> Option<&BTreeSet<ProcessId>> {
        match self {
            Outcome::Safe { .. } => None,
            Outcome::Unsafe { stuck } => Some(stuck),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Safe { order } => {
                let seq: Vec<String> = order.iter().map(|p| format!("P{p}")).collect();
                write!(f, "SAFE: {}", seq.join(" -> "))
            }
            Outcome::Unsafe { stuck } => {
                let set: Vec<String> = stuck.iter().map(|p| format!("P{p}")).collect();
                write!(f, "UNSAFE: stuck {{{}}}", set.join(", "))
            }
        }
    }
}

/// Everything a single checker run produces.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Classification {
    pub outcome: Outcome,
    /// Pass-by-pass statistics.
    pub stats: PassStats,
    /// The `work` vector at the fixed point: available plus everything
    /// released by admitted processes.
    pub final_work: Vec<u64>,
}

impl Classification {
    /// Returns a summary string suitable for logging or CLI display.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}, final work {})",
            self.outcome,
            self.stats.summary(),
            format_vector(&self.final_work),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_accessors() {
        let o = Outcome::Safe { order: vec![1, 0] };
        assert!(o.is_safe());
        assert_eq!(o.order(), Some(&[1, 0][..]));
        assert!(o.stuck().is_none());
    }

    #[test]
    fn test_unsafe_accessors() {
        let o = Outcome::Unsafe {
            stuck: BTreeSet::from([2, 0]),
        };
        assert!(!o.is_safe());
        assert!(o.order().is_none());
        assert_eq!(o.stuck().unwrap().iter().copied().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_display() {
        let safe = Outcome::Safe { order: vec![1, 3, 4, 0, 2] };
        assert_eq!(safe.to_string(), "SAFE: P1 -> P3 -> P4 -> P0 -> P2");

        let unsafe_ = Outcome::Unsafe {
            stuck: BTreeSet::from([0, 2]),
        };
        assert_eq!(unsafe_.to_string(), "UNSAFE: stuck {P0, P2}");
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&Outcome::Safe { order: vec![0] }).unwrap();
        assert_eq!(json, r#"{"verdict":"safe","order":[0]}"#);

        let json = serde_json::to_string(&Outcome::Unsafe {
            stuck: BTreeSet::from([1]),
        })
        .unwrap();
        assert_eq!(json, r#"{"verdict":"unsafe","stuck":[1]}"#);
    }
}
