// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared argument types.

pub mod bench;
pub mod config;
pub mod eval;

use array_core::Range;

/// Operations selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OpArg {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Element types selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DTypeArg {
    F64,
    I64,
    /// Q47.16 fixed point.
    Fixed,
}

/// Installs a stderr `fmt` subscriber whose level follows the `-v` count.
///
/// `RUST_LOG` is ignored; stdout stays reserved for command output.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parses `begin..end` into a contiguous [`Range`].
pub fn parse_range(s: &str) -> Result<Range, String> {
    let (begin, end) = s
        .split_once("..")
        .ok_or_else(|| format!("expected 'begin..end', got '{s}'"))?;
    let begin = begin
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid range start '{begin}': {e}"))?;
    let end = end
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid range end '{end}': {e}"))?;
    Ok(Range::new(begin, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("1..3").unwrap(), Range::new(1, 3));
        assert_eq!(parse_range(" 0 .. 10 ").unwrap(), Range::new(0, 10));
    }

    #[test]
    fn test_parse_range_rejects_garbage() {
        assert!(parse_range("1-3").is_err());
        assert!(parse_range("a..3").is_err());
        assert!(parse_range("1..").is_err());
    }
}
