// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Timing samples and the ordered log that collects them.

use std::io::{self, Write};
use std::time::Duration;

use crate::clock::{Milliseconds, Nanoseconds, Seconds, TimeUnit};
use crate::reporter::TableReporter;

/// One recorded measurement, already formatted for display.
///
/// Each numeric field is truncated independently from the same duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingSample {
    nanoseconds: String,
    milliseconds: String,
    seconds: String,
    message: String,
}

impl TimingSample {
    /// Build a sample from a label and a raw duration.
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            nanoseconds: Nanoseconds::truncate(duration).to_string(),
            milliseconds: Milliseconds::truncate(duration).to_string(),
            seconds: Seconds::truncate(duration).to_string(),
            message: message.into(),
        }
    }

    pub fn nanoseconds(&self) -> &str {
        &self.nanoseconds
    }

    pub fn milliseconds(&self) -> &str {
        &self.milliseconds
    }

    pub fn seconds(&self) -> &str {
        &self.seconds
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The three time columns in display order.
    pub(crate) fn time_columns(&self) -> [&str; 3] {
        [
            self.nanoseconds.as_str(),
            self.milliseconds.as_str(),
            self.seconds.as_str(),
        ]
    }
}

/// Ordered, unbounded collection of timing samples.
///
/// Insertion order is preserved through rendering. The log is emptied only
/// by [`SampleLog::drain_and_render`].
#[derive(Debug, Default, Clone)]
pub struct SampleLog {
    samples: Vec<TimingSample>,
}

impl SampleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample for `duration` under `label`.
    pub fn record(&mut self, label: impl Into<String>, duration: Duration) {
        let sample = TimingSample::new(label, duration);
        tracing::trace!(
            label = %sample.message(),
            ns = %sample.nanoseconds(),
            "Recorded timing sample"
        );
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TimingSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimingSample> {
        self.samples.iter()
    }

    /// Render every sample as a table and leave the log empty.
    ///
    /// The samples are taken out before writing, so the log is empty on
    /// return even if `out` fails.
    pub fn drain_and_render<W: Write + ?Sized>(
        &mut self,
        reporter: &TableReporter,
        out: &mut W,
    ) -> io::Result<()> {
        let samples = std::mem::take(&mut self.samples);
        tracing::debug!(count = samples.len(), "Rendering sample log");
        reporter.render(&samples, out)
    }
}

impl<'a> IntoIterator for &'a SampleLog {
    type Item = &'a TimingSample;
    type IntoIter = std::slice::Iter<'a, TimingSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
