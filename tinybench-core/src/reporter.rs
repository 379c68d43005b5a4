// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Column-aligned table rendering for timing samples.
//!
//! Output format:
//!
//! ```text
//! time (ns) | time (ms) | time (s) | message
//! 5123456   | 5         | 0        | sleep 5ms
//! ```
//!
//! The three time columns are left-justified and space-padded to the widest
//! cell in the column (header included). The message column is never padded.

use std::io::{self, Write};

use crate::sample::TimingSample;

/// Renders timing samples as an aligned text table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableReporter;

impl TableReporter {
    /// Fixed column headers, in display order.
    pub const HEADERS: [&'static str; 4] = ["time (ns)", "time (ms)", "time (s)", "message"];

    /// Column separator.
    pub const SEPARATOR: &'static str = " | ";

    pub fn new() -> Self {
        Self
    }

    /// Display widths of the ns, ms and s columns.
    pub fn column_widths(&self, samples: &[TimingSample]) -> [usize; 3] {
        let mut widths = [
            Self::HEADERS[0].len(),
            Self::HEADERS[1].len(),
            Self::HEADERS[2].len(),
        ];

        for sample in samples {
            for (width, cell) in widths.iter_mut().zip(sample.time_columns()) {
                *width = (*width).max(cell.len());
            }
        }

        widths
    }

    /// Write the header row and one row per sample, in order.
    pub fn render<W: Write + ?Sized>(&self, samples: &[TimingSample], out: &mut W) -> io::Result<()> {
        let widths = self.column_widths(samples);

        Self::write_row(
            out,
            &widths,
            [Self::HEADERS[0], Self::HEADERS[1], Self::HEADERS[2]],
            Self::HEADERS[3],
        )?;

        for sample in samples {
            Self::write_row(out, &widths, sample.time_columns(), sample.message())?;
        }

        out.flush()
    }

    /// Render into an owned string.
    pub fn render_to_string(&self, samples: &[TimingSample]) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(samples, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn write_row<W: Write + ?Sized>(
        out: &mut W,
        widths: &[usize; 3],
        cells: [&str; 3],
        message: &str,
    ) -> io::Result<()> {
        for (cell, &width) in cells.iter().zip(widths) {
            write!(out, "{:<width$}{}", cell, Self::SEPARATOR, width = width)?;
        }
        writeln!(out, "{}", message)
    }
}
