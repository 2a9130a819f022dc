// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `banker check` command: classify snapshot files.
//!
//! Each file is classified on its own blocking task. Runs share nothing,
//! so they proceed in parallel without any coordination.

use safety_checker::{CheckerConfig, CheckerError, Classification};
use std::path::PathBuf;
use std::process::ExitCode;

pub async fn execute(
    files: Vec<PathBuf>,
    config: &CheckerConfig,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let checker = config.create_checker()?;
    tracing::info!(
        "checking {} snapshot(s) with {} scan order",
        files.len(),
        checker.scan_order(),
    );

    let mut tasks = tokio::task::JoinSet::new();
    for (index, path) in files.into_iter().enumerate() {
        tasks.spawn_blocking(move || {
            let result = checker.check_file(&path);
            (index, path, result)
        });
    }

    let mut results: Vec<(usize, PathBuf, Result<Classification, CheckerError>)> = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        results.push(joined?);
    }
    results.sort_by_key(|(index, _, _)| *index);

    let all_ok = results.iter().all(|(_, _, r)| r.is_ok());
    let all_safe = results
        .iter()
        .all(|(_, _, r)| matches!(r, Ok(c) if c.outcome.is_safe()));

    if json {
        let report: Vec<serde_json::Value> = results
            .iter()
            .map(|(_, path, result)| match result {
                Ok(c) => serde_json::json!({ "file": path, "classification": c }),
                Err(e) => serde_json::json!({ "file": path, "error": e.to_string() }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (_, path, result) in &results {
            match result {
                Ok(c) => println!("{}: {}", path.display(), c.outcome),
                Err(e) => eprintln!("error: {}: {e}", path.display()),
            }
        }
    }

    if !all_ok {
        return Ok(ExitCode::FAILURE);
    }
    Ok(super::exit_status(all_safe))
}
