// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Caller-facing benchmarking context.
//!
//! A [`Bench`] owns one stopwatch, one sample log and the stream the log is
//! rendered to. Each thread that benchmarks owns its own `Bench`; nothing in
//! here is shared between threads.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crate::barrier;
use crate::clock::Stopwatch;
use crate::error::{BenchError, BenchResult};
use crate::reporter::TableReporter;
use crate::sample::SampleLog;
use crate::section::Section;

/// Stopwatch, sample log and output stream bundled together.
#[derive(Debug)]
pub struct Bench<W = Stdout> {
    stopwatch: Stopwatch,
    log: SampleLog,
    reporter: TableReporter,
    out: W,
}

impl Bench<Stdout> {
    /// Create a context that prints to standard output.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for Bench<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Bench<W> {
    /// Create a context that prints to `out`.
    pub fn with_writer(out: W) -> Self {
        Self {
            stopwatch: Stopwatch::new(),
            log: SampleLog::new(),
            reporter: TableReporter::new(),
            out,
        }
    }

    /// Start (or restart) the stopwatch.
    #[inline]
    pub fn start(&mut self) {
        self.stopwatch.start();
    }

    /// Stop the stopwatch and record the span under `label`.
    #[inline]
    pub fn stop_and_record(&mut self, label: impl Into<String>) {
        self.stopwatch.stop();
        self.log.record(label, self.stopwatch.elapsed());
    }

    /// Time `f`, keep its result alive past the barrier, and record it.
    ///
    /// The result is returned so callers may keep using it; discarding it
    /// does not let the compiler drop the computation.
    #[inline]
    pub fn measure<R, F>(&mut self, label: impl Into<String>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.stopwatch.start();
        let result = f();
        barrier::escape(&result);
        self.stopwatch.stop();
        self.log.record(label, self.stopwatch.elapsed());
        result
    }

    /// Time a statement-like closure without applying the barrier.
    ///
    /// Suitable when `f` already has observable side effects.
    #[inline]
    pub fn measure_expr<F>(&mut self, label: impl Into<String>, f: F)
    where
        F: FnOnce(),
    {
        self.stopwatch.start();
        f();
        self.stopwatch.stop();
        self.log.record(label, self.stopwatch.elapsed());
    }

    /// Record a duration measured elsewhere.
    pub fn record(&mut self, label: impl Into<String>, duration: Duration) {
        self.log.record(label, duration);
    }

    /// Print the sample log as a table and clear it.
    pub fn report(&mut self) -> BenchResult<()> {
        self.log
            .drain_and_render(&self.reporter, &mut self.out)
            .map_err(BenchError::io("rendering sample log"))
    }

    /// Open a named section that reports when it closes.
    pub fn section(&mut self, name: impl Into<String>) -> BenchResult<Section<'_, W>> {
        Section::open(self, name.into())
    }

    pub fn log(&self) -> &SampleLog {
        &self.log
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub(crate) fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consume the context and return its output stream.
    pub fn into_writer(self) -> W {
        self.out
    }
}
