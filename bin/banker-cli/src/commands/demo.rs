// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `banker demo` command: the classic 5-process / 3-resource example.
//!
//! Runs the snapshot once as given (safe) and once with nothing free
//! (unsafe), so both verdicts are on screen.

use resource_state::SnapshotManifest;
use safety_checker::CheckerConfig;
use std::process::ExitCode;

pub fn execute(config: &CheckerConfig) -> anyhow::Result<ExitCode> {
    super::banner("banker · Textbook Example");

    let checker = config.create_checker()?;

    let snapshot = textbook().validate()?;
    let result = checker.run(&snapshot);
    super::inspect::print_report(&snapshot, &result);

    println!("  With every instance already handed out:");
    println!();
    let starved = snapshot.with_available(vec![0, 0, 0])?;
    let result = checker.run(&starved);
    super::inspect::print_report(&starved, &result);

    Ok(ExitCode::SUCCESS)
}

fn textbook() -> SnapshotManifest {
    SnapshotManifest {
        name: Some("textbook".into()),
        resource_names: vec!["A".into(), "B".into(), "C".into()],
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
