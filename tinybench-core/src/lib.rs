// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! tinybench Core Library
//!
//! In-process micro-benchmarking: a monotonic stopwatch, an optimization
//! barrier that keeps measured work alive, an ordered log of timing
//! samples, and an aligned table reporter. Named sections bracket a span
//! of code and flush the log when they close.
//!
//! ```no_run
//! use tinybench_core::Bench;
//!
//! let mut bench = Bench::new();
//! {
//!     let mut section = bench.section("vectors").unwrap();
//!     section.measure("collect 1k", || (0..1000).collect::<Vec<u32>>());
//!     section.start();
//!     let total: u64 = (0..1000u64).sum();
//!     tinybench_core::escape(&total);
//!     section.stop_and_record("sum 1k");
//! } // prints the table and `--- END vectors ---`
//! ```

pub mod barrier;
pub mod bench;
pub mod clock;
pub mod config;
pub mod error;
pub mod reporter;
pub mod sample;
pub mod section;
pub mod types;

// Re-export commonly used types
pub use barrier::{black_box_value, escape};
pub use bench::Bench;
pub use clock::{Microseconds, Milliseconds, Nanoseconds, Seconds, Stopwatch, TimeUnit};
pub use config::{Config, ConfigLoader, OutputTarget, SuiteConfig, WorkloadConfig, WorkloadKind};
pub use error::{BenchError, BenchResult, HardValidationError};
pub use reporter::TableReporter;
pub use sample::{SampleLog, TimingSample};
pub use section::{Section, SectionState};
pub use types::{RepeatCount, SuiteName};
