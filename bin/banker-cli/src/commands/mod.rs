// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations.

pub mod check;
pub mod demo;
pub mod inspect;
pub mod verify;

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit status when at least one snapshot is unsafe or an order is rejected.
pub const EXIT_UNSAFE: u8 = 2;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count.
pub fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub(crate) fn exit_status(all_safe: bool) -> ExitCode {
    if all_safe {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_UNSAFE)
    }
}

pub(crate) fn banner(title: &str) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║{:^54}║", title);
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
}
