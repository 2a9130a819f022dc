// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scan-order policy.
//!
//! When several processes can finish at the same point of a pass, the one
//! scanned first is admitted first. The order only changes *which* safe
//! sequence is reported, never the verdict.

use resource_state::ProcessId;
use std::fmt;

/// The order in which each pass visits processes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanOrder {
    /// `P0, P1, ..., P(n-1)`.
    #[default]
    Ascending,
    /// `P(n-1), ..., P1, P0`.
    Descending,
}

impl ScanOrder {
    /// Parses a policy name, case-insensitively.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ascending" | "asc" => Some(Self::Ascending),
            "descending" | "desc" => Some(Self::Descending),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Process indices of one pass over `process_count` processes.
    pub fn scan(&self, process_count: usize) -> Box<dyn Iterator<Item = ProcessId>> {
        match self {
            Self::Ascending => Box::new(0..process_count),
            Self::Descending => Box::new((0..process_count).rev()),
        }
    }
}

impl fmt::Display for ScanOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ascending() {
        assert_eq!(ScanOrder::default(), ScanOrder::Ascending);
    }

    #[test]
    fn test_scan() {
        assert_eq!(ScanOrder::Ascending.scan(4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(ScanOrder::Descending.scan(4).collect::<Vec<_>>(), vec![3, 2, 1, 0]);
        assert_eq!(ScanOrder::Ascending.scan(0).count(), 0);
    }

    #[test]
    fn test_from_str_loose() {
        assert_eq!(ScanOrder::from_str_loose("Ascending"), Some(ScanOrder::Ascending));
        assert_eq!(ScanOrder::from_str_loose(" desc "), Some(ScanOrder::Descending));
        assert_eq!(ScanOrder::from_str_loose("random"), None);
    }

    #[test]
    fn test_display_matches_parse() {
        for order in [ScanOrder::Ascending, ScanOrder::Descending] {
            assert_eq!(ScanOrder::from_str_loose(&order.to_string()), Some(order));
        }
    }
}
