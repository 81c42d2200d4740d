// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `ewise config` command: print the effective batch policy.

use array_core::BatchPolicy;

pub fn execute() -> anyhow::Result<()> {
    let policy = BatchPolicy::current();
    println!("# effective batch policy");
    println!("# worker threads: {}", policy.resolve_threads());
    print!("{}", policy.to_toml()?);
    Ok(())
}
