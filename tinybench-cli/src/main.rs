// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! tinybench CLI
//!
//! Runs benchmark plans described in YAML and prints one timing table per
//! suite.

use clap::{Parser, Subcommand};

mod commands;
mod error;
mod workload;

/// tinybench - in-process micro-benchmarks with aligned table output
#[derive(Parser)]
#[command(name = "tinybench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the suites of a benchmark plan
    Run {
        /// Benchmark plan path
        #[arg(short, long, default_value = "tinybench.yaml")]
        config: String,

        /// Only run the named suite (repeatable)
        #[arg(short, long = "suite")]
        suites: Vec<String>,
    },

    /// Validate a benchmark plan
    Validate {
        /// Path to the plan file
        file: String,
    },

    /// Run the built-in demo plan
    Demo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging; tables own stdout.
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Run { config, suites } => commands::run::execute(&config, &suites)?,
        Commands::Validate { file } => {
            if let Err(e) = commands::validate::execute(&file) {
                eprintln!("✗ Benchmark plan validation failed:");
                eprintln!("  {}", e);
                std::process::exit(1);
            }
        }
        Commands::Demo => commands::demo::execute()?,
    }

    Ok(())
}
