// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-run pass statistics.

use std::time::Duration;

/// What happened during one classification run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct PassStats {
    /// Number of processes admitted in each full scan, in scan order.
    pub admissions: Vec<usize>,
    /// Wall-clock time of the run, when timing is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<Duration>,
}

impl PassStats {
    /// Total number of full scans performed.
    pub fn passes(&self) -> usize {
        self.admissions.len()
    }

    /// Number of scans that admitted at least one process.
    pub fn productive_passes(&self) -> usize {
        self.admissions.iter().filter(|&&n| n > 0).count()
    }

    /// Total number of processes admitted across all scans.
    pub fn admitted(&self) -> usize {
        self.admissions.iter().sum()
    }

    pub(crate) fn record_pass(&mut self, admitted: usize) {
        self.admissions.push(admitted);
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        let timing = match self.elapsed {
            Some(d) => format!(" in {:.1} µs", d.as_secs_f64() * 1e6),
            None => String::new(),
        };
        format!(
            "{} passes ({} productive), {} admitted{timing}",
            self.passes(),
            self.productive_passes(),
            self.admitted(),
        )
    }
}
