// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Built-in workloads measured by `tinybench run`.
//!
//! Input data is prepared outside the timing window; only the operation
//! itself is measured. Results go through the barrier so the work stays.

use std::io::Write;
use std::thread;
use std::time::Duration;

use tinybench_core::{escape, Bench, WorkloadConfig, WorkloadKind};

/// Stride used to touch freshly allocated pages.
const PAGE_STRIDE: usize = 4096;

/// Measure `workload` `repeat` times into the bench's log.
pub fn run<W: Write>(bench: &mut Bench<W>, workload: &WorkloadConfig) {
    let repeat = workload.repeat.value();

    for i in 0..repeat {
        let label = if repeat > 1 {
            format!("{} #{}", workload.label, i + 1)
        } else {
            workload.label.clone()
        };

        measure_once(bench, label, workload.kind);
    }

    tracing::debug!(label = %workload.label, repeat, "Workload finished");
}

fn measure_once<W: Write>(bench: &mut Bench<W>, label: String, kind: WorkloadKind) {
    match kind {
        WorkloadKind::Sleep { millis } => {
            bench.measure_expr(label, || thread::sleep(Duration::from_millis(millis)));
        }
        WorkloadKind::Spin { iterations } => {
            bench.measure(label, || spin(iterations));
        }
        WorkloadKind::Sort { len } => {
            let mut data = pseudo_random(len as usize);
            bench.measure(label, move || {
                data.sort_unstable();
                data
            });
        }
        WorkloadKind::Alloc { bytes } => {
            bench.measure(label, || touch_alloc(bytes as usize));
        }
        WorkloadKind::Format { count } => {
            bench.measure(label, || format_strings(count));
        }
    }
}

fn spin(iterations: u64) -> u64 {
    let mut acc = 0u64;
    for i in 0..iterations {
        acc = acc.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(i);
    }
    acc
}

fn touch_alloc(bytes: usize) -> Vec<u8> {
    let mut buf = vec![0u8; bytes];
    for b in buf.iter_mut().step_by(PAGE_STRIDE) {
        *b = 1;
    }
    escape(buf.as_slice());
    buf
}

fn format_strings(count: u64) -> usize {
    (0..count).map(|i| format!("item-{:08}", i)).map(|s| s.len()).sum()
}

/// Deterministic xorshift64 sequence.
fn pseudo_random(len: usize) -> Vec<u64> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}
