// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `ewise bench` command: whole-buffer vs chunked ranged execution.
//!
//! Splits one `f64` add over `len` elements into `n` contiguous ranged calls
//! for each requested chunk count and prints a comparison table of
//! latency, throughput and memory bandwidth against the single
//! whole-buffer call.

use array_core::{BatchPolicy, Element, Range, Vector};
use elementwise::{add_into, add_ranged_into};
use std::time::{Duration, Instant};

pub fn execute(len: usize, chunks_str: &str, iters: usize) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            ewise · Chunked Execution Bench           ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    if len == 0 || iters == 0 {
        anyhow::bail!("--len and --iters must be positive");
    }

    // Parse comma-separated chunk counts.
    let chunk_counts: Vec<usize> = chunks_str
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| anyhow::anyhow!("invalid chunk count '{}'", s.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let policy = BatchPolicy::current();
    println!("  Elements:   {len}");
    println!("  Iterations: {iters}");
    println!(
        "  Policy:     parallel={}, min_parallel_len={}, chunk_size={}, threads={}",
        policy.parallel,
        policy.min_parallel_len,
        policy.chunk_size,
        policy.resolve_threads(),
    );
    println!();

    let a = Vector::from_vec((0..len).map(|i| i as f64 * 0.5).collect());
    let b = Vector::from_vec((0..len).map(|i| (i % 97) as f64 + 1.0).collect());
    let mut out = Vector::<f64>::zeros(len);

    // Warm up: touch every page of the output once.
    add_into(&a, &b, &mut out)?;

    let baseline = time(iters, || add_into(&a, &b, &mut out))?;
    // Two reads and one write per element.
    let bytes = 3 * len * f64::DTYPE.size_bytes();

    // ── Results Table ──────────────────────────────────────────
    println!(
        "  {:<12} {:>8} {:>12} {:>10} {:>8} {:>10}",
        "Mode", "Calls", "Latency", "Melem/s", "GB/s", "vs whole",
    );
    println!("  {}", "-".repeat(66));
    print_row("whole", 1, baseline, (len, bytes), baseline);

    for &n in &chunk_counts {
        let windows = split(len, n);
        let elapsed = time(iters, || {
            windows.iter().try_for_each(|&(begin, end)| {
                add_ranged_into(&a, &b, Range::new(begin, end), &mut out)
            })
        })?;
        print_row("chunked", windows.len(), elapsed, (len, bytes), baseline);
    }
    println!();

    Ok(())
}

/// Returns the mean duration of `iters` runs of `f`.
fn time<E, F>(iters: usize, mut f: F) -> Result<Duration, E>
where
    F: FnMut() -> Result<(), E>,
{
    let start = Instant::now();
    for _ in 0..iters {
        f()?;
    }
    Ok(start.elapsed().div_f64(iters as f64))
}

/// Splits `0..len` into at most `n` contiguous, non-empty windows.
fn split(len: usize, n: usize) -> Vec<(usize, usize)> {
    let step = len.div_ceil(n.max(1)).max(1);
    (0..len)
        .step_by(step)
        .map(|begin| (begin, (begin + step).min(len)))
        .collect()
}

fn print_row(
    mode: &str,
    calls: usize,
    elapsed: Duration,
    (len, bytes): (usize, usize),
    baseline: Duration,
) {
    let secs = elapsed.as_secs_f64();
    let per_sec = |n: usize, unit: f64| {
        if secs > 0.0 {
            n as f64 / secs / unit
        } else {
            f64::INFINITY
        }
    };
    let ratio = if baseline.is_zero() {
        1.0
    } else {
        secs / baseline.as_secs_f64()
    };
    println!(
        "  {:<12} {:>8} {:>10.3}ms {:>10.1} {:>8.2} {:>9.2}x",
        mode,
        calls,
        secs * 1000.0,
        per_sec(len, 1e6),
        per_sec(bytes, 1e9),
        ratio,
    );
}
