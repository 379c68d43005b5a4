// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `tinybench run` command - Execute a benchmark plan.

use std::io::{self, Write};

use tinybench_core::{
    Bench, Config, ConfigLoader, Milliseconds, OutputTarget, Stopwatch, SuiteConfig,
};

use crate::error::CliError;
use crate::workload;

pub fn execute(config_path: &str, suites: &[String]) -> Result<(), CliError> {
    tracing::info!(config = %config_path, "Loading benchmark plan");
    let config = ConfigLoader::load_file(config_path)?;
    run_plan(&config, suites)
}

/// Run the selected suites of `config` on its configured output stream.
pub fn run_plan(config: &Config, filter: &[String]) -> Result<(), CliError> {
    let selected = select_suites(config, filter)?;

    let out: Box<dyn Write> = match config.output {
        OutputTarget::Stdout => Box::new(io::stdout()),
        OutputTarget::Stderr => Box::new(io::stderr()),
    };
    let mut bench = Bench::with_writer(out);

    run_suites(&mut bench, &selected)
}

/// Pick suites by name, in plan order. An empty filter selects all.
pub fn select_suites<'a>(
    config: &'a Config,
    filter: &[String],
) -> Result<Vec<&'a SuiteConfig>, CliError> {
    if let Some(name) = filter.iter().find(|name| config.suite(name).is_none()) {
        return Err(CliError::UnknownSuite { name: name.clone() });
    }

    Ok(config
        .suites
        .iter()
        .filter(|s| filter.is_empty() || filter.iter().any(|f| f == s.name.as_str()))
        .collect())
}

/// Run each suite inside its own section.
pub fn run_suites<W: Write>(bench: &mut Bench<W>, suites: &[&SuiteConfig]) -> Result<(), CliError> {
    for suite in suites {
        tracing::info!(
            suite = %suite.name,
            workloads = suite.workloads.len(),
            "Running suite"
        );

        let mut wall = Stopwatch::new();
        wall.start();
        let mut section = bench.section(suite.name.as_str())?;
        for w in &suite.workloads {
            workload::run(&mut *section, w);
        }
        section.close()?;
        wall.stop();

        tracing::info!(
            suite = %suite.name,
            elapsed = %wall.display_in::<Milliseconds>(),
            "Suite finished"
        );
    }

    Ok(())
}
