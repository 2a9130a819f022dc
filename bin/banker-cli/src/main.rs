// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # banker
//!
//! Command-line interface for the Banker's safety checker.
//!
//! ## Usage
//! ```bash
//! # Classify one or more snapshots (exit 0 = all safe, 2 = some unsafe)
//! banker check demos/textbook.json demos/starved.json
//!
//! # Print the allocation / maximum / need table and the verdict
//! banker inspect demos/textbook.toml
//!
//! # Check a hand-written completion order
//! banker verify demos/textbook.json --order 1,3,4,0,2
//!
//! # Run the built-in textbook example
//! banker demo
//! ```

mod commands;

use clap::{Parser, Subcommand};
use safety_checker::CheckerConfig;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "banker",
    about = "Banker's algorithm safety checker for resource-allocation snapshots",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify snapshot files as safe or unsafe.
    Check {
        /// Snapshot manifests (.json or .toml).
        #[arg(required = true)]
        files: Vec<std::path::PathBuf>,

        /// Tie-break policy: ascending or descending (overrides the config file).
        #[arg(short, long)]
        scan_order: Option<String>,

        /// Emit machine-readable JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show a snapshot's allocation, maximum and need table with its verdict.
    Inspect {
        /// Snapshot manifest (.json or .toml).
        file: std::path::PathBuf,
    },

    /// Verify a proposed completion order against a snapshot.
    Verify {
        /// Snapshot manifest (.json or .toml).
        file: std::path::PathBuf,

        /// Comma-separated process indices, e.g. "1,3,4,0,2".
        #[arg(short, long)]
        order: String,
    },

    /// Classify the classic 5-process / 3-resource example.
    Demo,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => CheckerConfig::from_file(path)?,
        None => CheckerConfig::default(),
    };

    match cli.command {
        Commands::Check {
            files,
            scan_order,
            json,
        } => {
            if let Some(order) = scan_order {
                config.scan_order = order;
            }
            commands::check::execute(files, &config, json).await
        }
        Commands::Inspect { file } => commands::inspect::execute(file, &config),
        Commands::Verify { file, order } => commands::verify::execute(file, &order),
        Commands::Demo => commands::demo::execute(&config),
    }
}
