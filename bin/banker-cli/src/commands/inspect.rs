// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `banker inspect` command: display a snapshot and its verdict.
//!
//! Prints the per-process allocation / maximum / need table, the free and
//! total instance vectors, then the safe sequence or the stuck set.

use anyhow::Context;
use resource_state::{format_vector, Snapshot};
use safety_checker::{CheckerConfig, Classification, Outcome};
use std::path::PathBuf;
use std::process::ExitCode;

pub fn execute(file: PathBuf, config: &CheckerConfig) -> anyhow::Result<ExitCode> {
    super::banner("banker · Snapshot Inspector");

    let snapshot = resource_state::load(&file)
        .with_context(|| format!("failed to load snapshot '{}'", file.display()))?;
    let result = config.create_checker()?.run(&snapshot);

    print_report(&snapshot, &result);
    Ok(super::exit_status(result.outcome.is_safe()))
}

/// Prints the snapshot table followed by the classification.
pub(crate) fn print_report(snapshot: &Snapshot, result: &Classification) {
    println!("  {}", snapshot.summary());
    println!("  Resources: {}", snapshot.resource_names().join(", "));
    println!();

    let rows: Vec<[String; 4]> = snapshot
        .rows()
        .map(|row| {
            [
                format!("P{}", row.process),
                format_vector(row.allocation),
                format_vector(row.maximum),
                format_vector(row.need),
            ]
        })
        .collect();

    let headers = ["Process", "Allocation", "Maximum", "Need"];
    let widths: Vec<usize> = (0..4)
        .map(|col| {
            rows.iter()
                .map(|r| r[col].chars().count())
                .chain(std::iter::once(headers[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    println!(
        "  {:<w0$}  {:<w1$}  {:<w2$}  {:<w3$}",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
    println!("  {}", "-".repeat(widths.iter().sum::<usize>() + 6));
    for r in &rows {
        println!(
            "  {:<w0$}  {:<w1$}  {:<w2$}  {:<w3$}",
            r[0],
            r[1],
            r[2],
            r[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
    }
    println!();
    println!("  Available:  {}", format_vector(snapshot.available()));
    println!("  Total:      {}", format_vector(&snapshot.total_instances()));
    println!();

    match &result.outcome {
        Outcome::Safe { order } => {
            let seq: Vec<String> = order.iter().map(|p| format!("P{p}")).collect();
            println!("  Safe sequence:  {}", seq.join(" "));
        }
        Outcome::Unsafe { stuck } => {
            let set: Vec<String> = stuck.iter().map(|p| format!("P{p}")).collect();
            println!("  Stuck processes:  {}", set.join(" "));
        }
    }
    println!("  Passes:  {}", result.stats.summary());
    println!();

    if result.outcome.is_safe() {
        println!("  RESULT: the system is in a safe state; no deadlock can arise.");
    } else {
        println!("  RESULT: the system is NOT in a safe state; deadlock is possible.");
    }
    println!();
}
