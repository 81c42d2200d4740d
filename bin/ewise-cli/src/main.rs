// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # ewise
//!
//! Command-line interface for the elementwise arithmetic engine.
//!
//! ## Usage
//! ```bash
//! # Broadcast a row across a matrix
//! ewise eval --op add --lhs '[[1,2,3],[4,5,6]]' --rhs '[[10,20,30]]'
//!
//! # Integer division over part of a vector
//! ewise eval --op divide --dtype i64 --lhs '[8,8,8,8]' --rhs '[0,2,4,0]' --range 1..3
//!
//! # Print the effective batch policy
//! ewise --config batch.toml config
//!
//! # Compare whole-buffer and chunked execution
//! ewise bench --len 1048576 --chunks 1,4,16,64
//! ```

mod commands;

use anyhow::Context;
use array_core::{BatchPolicy, Range};
use clap::{Parser, Subcommand};
use commands::{DTypeArg, OpArg};

#[derive(Parser)]
#[command(
    name = "ewise",
    about = "Elementwise arithmetic over scalars, vectors, matrices and n-dimensional arrays",
    version,
    author
)]
struct Cli {
    /// Path to a TOML batch policy file.
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
    /// Evaluate one operation on two JSON operands and print the result.
    Eval {
        /// Operation to apply.
        #[arg(short, long, value_enum)]
        op: OpArg,

        /// Left operand: a number or a nested JSON array.
        #[arg(long)]
        lhs: String,

        /// Right operand: a number or a nested JSON array.
        #[arg(long)]
        rhs: String,

        /// Element type of both operands.
        #[arg(short, long, value_enum, default_value = "f64")]
        dtype: DTypeArg,

        /// Treat arrays as n-dimensional, broadcasting on every axis.
        #[arg(long)]
        nd: bool,

        /// Restrict the computation to `begin..end`.
        #[arg(short, long, value_parser = commands::parse_range)]
        range: Option<Range>,
    },

    /// Print the effective batch policy as TOML.
    Config,

    /// Time whole-buffer execution against chunked ranged execution.
    Bench {
        /// Number of elements per operand.
        #[arg(short, long, default_value_t = 1 << 20)]
        len: usize,

        /// Comma-separated chunk counts to compare (e.g., "1,4,16,64").
        #[arg(long, default_value = "1,4,16,64")]
        chunks: String,

        /// Timed repetitions per configuration.
        #[arg(long, default_value_t = 20)]
        iters: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    if let Some(path) = &cli.config {
        let policy = BatchPolicy::from_file(path)
            .with_context(|| format!("failed to load batch policy from '{}'", path.display()))?;
        policy.install()?;
    }

    match cli.command {
        Commands::Eval {
            op,
            lhs,
            rhs,
            dtype,
            nd,
            range,
        } => commands::eval::execute(op, &lhs, &rhs, dtype, nd, range),
        Commands::Config => commands::config::execute(),
        Commands::Bench { len, chunks, iters } => commands::bench::execute(len, &chunks, iters),
    }
}
