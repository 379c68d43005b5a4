// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Named sections that bracket a span of benchmark code.
//!
//! Lifecycle: Open → Closed. Opening prints `--- BEGIN <name> ---`.
//! Closing renders and clears the sample log, then prints
//! `--- END <name> ---`. Closing happens exactly once, either through
//! [`Section::close`] or when the section is dropped, including on early
//! return and unwinding.

use std::io::Write;
use std::ops::{Deref, DerefMut};

use crate::bench::Bench;
use crate::error::{BenchError, BenchResult};

/// Section lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    /// Between BEGIN and END; measurements land in this section.
    Open,
    /// Terminal. The log has been flushed and END printed.
    Closed,
}

impl SectionState {
    /// Get the state name for log messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for SectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An open section over a [`Bench`].
///
/// Dereferences to the underlying `Bench`, so measurements are taken
/// through the section handle.
pub struct Section<'a, W: Write> {
    bench: &'a mut Bench<W>,
    name: String,
    state: SectionState,
}

impl<'a, W: Write> Section<'a, W> {
    pub(crate) fn open(bench: &'a mut Bench<W>, name: String) -> BenchResult<Self> {
        writeln!(bench.writer_mut(), "--- BEGIN {} ---", name)
            .map_err(BenchError::io("writing section header"))?;
        tracing::debug!(section = %name, "Section opened");

        Ok(Self {
            bench,
            name,
            state: SectionState::Open,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> SectionState {
        self.state
    }

    /// Close the section now and report any output error.
    pub fn close(mut self) -> BenchResult<()> {
        self.finish()
    }

    fn finish(&mut self) -> BenchResult<()> {
        if self.state == SectionState::Closed {
            return Ok(());
        }
        self.state = SectionState::Closed;

        // END is printed even if the table could not be written.
        let rendered = self.bench.report();
        let footer = writeln!(self.bench.writer_mut(), "--- END {} ---", self.name)
            .and_then(|()| self.bench.writer_mut().flush())
            .map_err(BenchError::io("writing section footer"));

        tracing::debug!(section = %self.name, "Section closed");
        rendered.and(footer)
    }
}

impl<W: Write> Deref for Section<'_, W> {
    type Target = Bench<W>;

    fn deref(&self) -> &Self::Target {
        &*self.bench
    }
}

impl<W: Write> DerefMut for Section<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.bench
    }
}

impl<W: Write> Drop for Section<'_, W> {
    fn drop(&mut self) {
        if let Err(e) = self.finish() {
            tracing::error!(section = %self.name, error = %e, "Failed to close section");
        }
    }
}

impl<W: Write> std::fmt::Debug for Section<'_, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Section")
            .field("name", &self.name)
            .field("state", &self.state)
            .finish()
    }
}
