// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `tinybench validate` command - Validate a benchmark plan.

use std::io::{self, Write};

use tinybench_core::{Config, ConfigLoader};

use crate::error::CliError;

pub fn execute(file: &str) -> Result<(), CliError> {
    tracing::info!(file = %file, "Validating benchmark plan");

    let config = ConfigLoader::load_file(file)?;
    write_summary(&config, &mut io::stdout().lock()).map_err(|source| CliError::Io {
        context: "writing plan summary",
        source,
    })
}

/// Print the suites and workloads of a valid plan.
pub fn write_summary<W: Write>(config: &Config, out: &mut W) -> io::Result<()> {
    writeln!(out, "✓ Benchmark plan is valid")?;
    writeln!(out)?;
    writeln!(out, "Output: {}", config.output)?;
    writeln!(out)?;
    writeln!(out, "Suites ({}):", config.suites.len())?;
    for suite in &config.suites {
        writeln!(out, "  - {}", suite.name)?;
        for w in &suite.workloads {
            writeln!(
                out,
                "      {} (kind: {}, repeat: {})",
                w.label,
                w.kind.describe(),
                w.repeat
            )?;
        }
    }
    out.flush()
}
