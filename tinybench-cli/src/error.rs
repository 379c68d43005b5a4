// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Errors surfaced by CLI commands.

use std::io;

use thiserror::Error;
use tinybench_core::BenchError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Bench(#[from] BenchError),

    #[error("Suite not found in plan: {name}")]
    UnknownSuite { name: String },

    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },
}
