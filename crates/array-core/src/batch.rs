// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Batch-apply execution policy, loaded from TOML files or constructed
//! programmatically.
//!
//! The policy decides when a container's batch-apply capability splits a
//! window into chunks and runs them on the `rayon` pool. Every output index
//! is computed independently, so the choice never changes results.
//!
//! # TOML Format
//! ```toml
//! parallel = true
//! min_parallel_len = 32768
//! chunk_size = 8192
//! num_threads = 4
//! ```

use crate::ArrayError;
use rayon::prelude::*;
use std::path::Path;
use std::sync::OnceLock;

static INSTALLED: OnceLock<BatchPolicy> = OnceLock::new();
static DEFAULT: OnceLock<BatchPolicy> = OnceLock::new();

/// Configuration for data-parallel batch apply.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BatchPolicy {
    /// Whether large windows may be split across worker threads.
    pub parallel: bool,
    /// Windows shorter than this run on the calling thread.
    pub min_parallel_len: usize,
    /// Number of elements handed to one worker at a time.
    pub chunk_size: usize,
    /// Size of the global worker pool (defaults to the number of online CPU cores).
    pub num_threads: Option<usize>,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_len: 32_768,
            chunk_size: 8_192,
            num_threads: None,
        }
    }
}

impl BatchPolicy {
    /// A policy that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Loads a policy from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ArrayError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ArrayError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses a policy from a TOML string. Missing keys take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ArrayError> {
        let policy: Self = toml::from_str(toml_str)
            .map_err(|e| ArrayError::Config(format!("TOML parse error: {e}")))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Serialises the policy to TOML.
    pub fn to_toml(&self) -> Result<String, ArrayError> {
        toml::to_string_pretty(self)
            .map_err(|e| ArrayError::Config(format!("TOML serialise error: {e}")))
    }

    /// Checks the policy for values no executor can honour.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.chunk_size == 0 {
            return Err(ArrayError::Config("chunk_size must be positive".into()));
        }
        if self.num_threads == Some(0) {
            return Err(ArrayError::Config("num_threads must be positive".into()));
        }
        Ok(())
    }

    /// Resolves the number of worker threads.
    pub fn resolve_threads(&self) -> usize {
        self.num_threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        })
    }

    /// Makes this the process-wide policy returned by [`BatchPolicy::current`].
    ///
    /// When `num_threads` is set, the global `rayon` pool is built with that
    /// many workers. Installation succeeds at most once per process.
    pub fn install(self) -> Result<(), ArrayError> {
        self.validate()?;
        if let Some(n) = self.num_threads {
            match rayon::ThreadPoolBuilder::new().num_threads(n).build_global() {
                Ok(()) => tracing::info!("batch worker pool started with {n} threads"),
                Err(e) => tracing::warn!("batch worker pool already initialised: {e}"),
            }
        }
        tracing::info!(
            "batch policy installed: parallel={}, min_parallel_len={}, chunk_size={}",
            self.parallel,
            self.min_parallel_len,
            self.chunk_size,
        );
        INSTALLED
            .set(self)
            .map_err(|_| ArrayError::Config("batch policy already installed".into()))
    }

    /// Returns the installed policy, or the default one.
    pub fn current() -> &'static BatchPolicy {
        INSTALLED
            .get()
            .unwrap_or_else(|| DEFAULT.get_or_init(BatchPolicy::default))
    }

    /// Returns `true` if a window of `len` elements is split across workers.
    pub fn splits(&self, len: usize) -> bool {
        self.parallel && self.chunk_size > 0 && len >= self.min_parallel_len && len > self.chunk_size
    }
}

/// Runs `f` over `data[window]`, either as one call on the calling thread or
/// as one call per chunk on the worker pool.
///
/// `f` receives the absolute index of the first element of its chunk
/// together with the chunk itself.
pub fn for_each_chunk<T, F>(
    data: &mut [T],
    window: std::ops::Range<usize>,
    policy: &BatchPolicy,
    f: F,
) where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    let begin = window.start;
    let slice = &mut data[window];
    if policy.splits(slice.len()) {
        let chunk = policy.chunk_size;
        slice
            .par_chunks_mut(chunk)
            .enumerate()
            .for_each(|(i, part)| f(begin + i * chunk, part));
    } else {
        f(begin, slice);
    }
}
