// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `tinybench demo` command - Run the built-in plan.

use tinybench_core::ConfigLoader;

use crate::commands::run;
use crate::error::CliError;

/// Plan used when no configuration file is involved.
pub const DEMO_PLAN: &str = r#"
suites:
  - name: timers
    workloads:
      - kind: sleep
        millis: 10
        repeat: 3
      - kind: spin
        iterations: 1000000
  - name: memory
    workloads:
      - kind: alloc
        bytes: 16777216
        repeat: 2
      - kind: sort
        len: 100000
        label: "sort 100k u64"
      - kind: format
        count: 10000
"#;

pub fn execute() -> Result<(), CliError> {
    tracing::info!("Running built-in demo plan");
    let config = ConfigLoader::load_string(DEMO_PLAN)?;
    run::run_plan(&config, &[])
}
