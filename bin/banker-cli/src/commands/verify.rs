// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `banker verify` command: replay a proposed completion order.

use anyhow::Context;
use resource_state::ProcessId;
use std::path::PathBuf;
use std::process::ExitCode;

pub fn execute(file: PathBuf, order: &str) -> anyhow::Result<ExitCode> {
    let snapshot = resource_state::load(&file)
        .with_context(|| format!("failed to load snapshot '{}'", file.display()))?;
    let order = parse_order(order)?;

    match safety_checker::verify_order(&snapshot, &order) {
        Ok(()) => {
            println!("valid: {}", format_order(&order));
            Ok(super::exit_status(true))
        }
        Err(violation) => {
            println!("invalid: {violation}");
            Ok(super::exit_status(false))
        }
    }
}

/// Parses `"1, 3,4"` into `[1, 3, 4]`. Accepts an optional `P` prefix.
fn parse_order(s: &str) -> anyhow::Result<Vec<ProcessId>> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            let digits = t.strip_prefix(['P', 'p']).unwrap_or(t);
            digits
                .parse::<ProcessId>()
                .with_context(|| format!("invalid process index '{t}'"))
        })
        .collect()
}

fn format_order(order: &[ProcessId]) -> String {
    let parts: Vec<String> = order.iter().map(|p| format!("P{p}")).collect();
    parts.join(" -> ")
}
