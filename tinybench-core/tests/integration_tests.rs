// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! End-to-end tests for tinybench.
//!
//! These tests drive the public API the way a benchmark program would and
//! check the exact console output.

use std::io::Write;
use std::thread;
use std::time::Duration;

use tempfile::TempDir;
use tinybench_core::{
    escape, Bench, BenchError, ConfigLoader, Milliseconds, SampleLog, Stopwatch, TableReporter,
    TimingSample, WorkloadKind,
};

const HEADER_ROW: &str = "time (ns) | time (ms) | time (s) | message";

fn output(bench: Bench<Vec<u8>>) -> String {
    String::from_utf8(bench.into_writer()).expect("output is UTF-8")
}

/// Split a rendered row back into its four cells.
fn cells(row: &str) -> Vec<&str> {
    row.splitn(4, TableReporter::SEPARATOR)
        .map(|c| c.trim_end())
        .collect()
}

#[test]
fn test_fields_are_independent_truncations() {
    let durations = [
        Duration::ZERO,
        Duration::from_nanos(1),
        Duration::from_nanos(999_999),
        Duration::from_nanos(1_000_000),
        Duration::new(0, 999_999_999),
        Duration::new(59, 999_999_999),
        Duration::new(3_600, 1),
    ];

    for d in durations {
        let sample = TimingSample::new("d", d);
        let ns: u128 = sample.nanoseconds().parse().unwrap();
        let ms: u128 = sample.milliseconds().parse().unwrap();
        let s: u64 = sample.seconds().parse().unwrap();

        assert_eq!(ns, d.as_nanos());
        assert_eq!(ms, d.as_millis());
        assert_eq!(s, d.as_secs());
        assert!(ns >= ms * 1_000_000);
        assert!(ms >= u128::from(s) * 1_000);
    }
}

#[test]
fn test_log_empty_after_render() {
    let reporter = TableReporter::new();
    for count in [0usize, 1, 100] {
        let mut log = SampleLog::new();
        for i in 0..count {
            log.record("sample", Duration::from_nanos(i as u64));
        }
        let mut sink = Vec::new();
        log.drain_and_render(&reporter, &mut sink).unwrap();
        assert!(log.is_empty(), "log not empty after rendering {} samples", count);
    }
}

#[test]
fn test_column_widths() {
    let mut bench = Bench::with_writer(Vec::new());
    bench.record("x", Duration::from_nanos(42));
    bench.record("a very long message", Duration::new(123, 456));
    bench.report().unwrap();

    let text = output(bench);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);

    // Every row places its separators at the same offsets.
    let offsets: Vec<Vec<usize>> = lines
        .iter()
        .map(|l| l.match_indices(" | ").map(|(i, _)| i).take(3).collect())
        .collect();
    assert!(offsets.windows(2).all(|w| w[0] == w[1]));

    // ns column is as wide as "123000000456".
    assert_eq!(offsets[0][0], "123000000456".len());
    // ms and s columns stay at header width.
    assert_eq!(offsets[0][1] - offsets[0][0] - 3, "time (ms)".len());
    assert_eq!(offsets[0][2] - offsets[0][1] - 3, "time (s)".len());

    // Message column is never padded.
    assert!(lines[1].ends_with(" | x"));
    assert!(lines[2].ends_with(" | a very long message"));
}

#[test]
fn test_order_preserved() {
    let mut bench = Bench::with_writer(Vec::new());
    bench.record("first", Duration::from_secs(2));
    bench.record("second", Duration::from_nanos(1));
    bench.record("third", Duration::from_millis(500));
    bench.report().unwrap();

    let text = output(bench);
    let messages: Vec<_> = text.lines().skip(1).map(|l| cells(l)[3]).collect();
    assert_eq!(messages, ["first", "second", "third"]);
}

#[test]
fn test_section_round_trip() {
    let mut bench = Bench::with_writer(Vec::new());
    {
        let mut section = bench.section("bench1").unwrap();
        section.measure("vec", || vec![0u8; 1024]);
        section.measure_expr("noop", || {});
    }

    let text = output(bench);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"--- BEGIN bench1 ---"));
    assert_eq!(lines[1], HEADER_ROW);
    assert_eq!(cells(lines[2])[3], "vec");
    assert_eq!(cells(lines[3])[3], "noop");
    assert_eq!(lines.last(), Some(&"--- END bench1 ---"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_section_without_measurements() {
    let mut bench = Bench::with_writer(Vec::new());
    drop(bench.section("bench1").unwrap());

    assert_eq!(
        output(bench),
        format!("--- BEGIN bench1 ---\n{}\n--- END bench1 ---\n", HEADER_ROW)
    );
}

#[test]
fn test_section_closes_on_panic() {
    let mut bench = Bench::with_writer(Vec::new());
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut section = bench.section("unwind").unwrap();
        section.record("before panic", Duration::from_nanos(5));
        panic!("benchmark body failed");
    }));
    assert!(result.is_err());
    assert!(bench.log().is_empty());

    let text = output(bench);
    assert!(text.contains(" | before panic\n"));
    assert!(text.ends_with("--- END unwind ---\n"));
}

#[test]
fn test_nested_sections_flush_at_inner_exit() {
    let mut bench = Bench::with_writer(Vec::new());
    {
        let mut outer = bench.section("outer").unwrap();
        outer.record("outer-1", Duration::from_nanos(1));
        {
            let mut inner = outer.section("inner").unwrap();
            inner.record("inner-1", Duration::from_nanos(2));
        }
        outer.record("outer-2", Duration::from_nanos(3));
    }

    let text = output(bench);
    let inner_block = text
        .split("--- BEGIN inner ---")
        .nth(1)
        .and_then(|rest| rest.split("--- END inner ---").next())
        .unwrap();
    assert!(inner_block.contains(" | outer-1"));
    assert!(inner_block.contains(" | inner-1"));

    let after_inner = text.split("--- END inner ---").nth(1).unwrap();
    assert!(after_inner.contains(" | outer-2"));
    assert!(after_inner.ends_with("--- END outer ---\n"));
}

#[test]
fn test_end_to_end_sleep_within_tolerance() {
    const SLEEP_MS: u64 = 50;
    // Generous upper bound for loaded CI machines.
    const TOLERANCE_MS: u64 = 250;

    let mut sw = Stopwatch::new();
    let mut bench = Bench::with_writer(Vec::new());

    sw.start();
    thread::sleep(Duration::from_millis(SLEEP_MS));
    sw.stop();
    bench.record("work", sw.elapsed());

    assert_eq!(sw.to_unit::<Milliseconds>(), sw.to_ms());
    bench.report().unwrap();

    let text = output(bench);
    let row = text.lines().nth(1).unwrap();
    let row_cells = cells(row);
    assert_eq!(row_cells[3], "work");

    let ms: u64 = row_cells[1].parse().unwrap();
    assert!(
        (SLEEP_MS..=SLEEP_MS + TOLERANCE_MS).contains(&ms),
        "measured {}ms for a {}ms sleep",
        ms,
        SLEEP_MS
    );
}

#[test]
fn test_barrier_keeps_measured_work() {
    let mut bench = Bench::with_writer(Vec::new());
    bench.start();
    let mut acc = 0u64;
    for i in 0..10_000u64 {
        acc = acc.wrapping_mul(31).wrapping_add(i);
    }
    escape(&acc);
    bench.stop_and_record("hash loop");

    assert_eq!(bench.log().len(), 1);
    assert_eq!(bench.log().samples()[0].message(), "hash loop");
}

#[test]
fn test_zero_sample_render() {
    let mut bench = Bench::with_writer(Vec::new());
    bench.report().unwrap();
    assert!(bench.log().is_empty());
    assert_eq!(output(bench), format!("{}\n", HEADER_ROW));
}

#[test]
fn test_labels_accepted_verbatim() {
    let mut bench = Bench::with_writer(Vec::new());
    bench.record("", Duration::from_nanos(1));
    bench.record("pipes | inside", Duration::from_nanos(2));
    bench.report().unwrap();

    let text = output(bench);
    let lines: Vec<_> = text.lines().collect();
    assert!(lines[1].ends_with(" | "));
    assert!(lines[2].ends_with(" | pipes | inside"));
}

#[test]
fn test_load_plan_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let plan_path = temp_dir.path().join("tinybench.yaml");

    let mut file = std::fs::File::create(&plan_path).expect("Failed to create plan");
    writeln!(
        file,
        r#"
suites:
  - name: alloc
    workloads:
      - kind: alloc
        bytes: 65536
        repeat: 2
"#
    )
    .expect("Failed to write plan");

    let config = ConfigLoader::load_file(&plan_path).unwrap();
    let suite = config.suite("alloc").unwrap();
    assert_eq!(suite.workloads[0].kind, WorkloadKind::Alloc { bytes: 65536 });
    assert_eq!(suite.workloads[0].repeat.value(), 2);
}

#[test]
fn test_missing_plan_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = ConfigLoader::load_file(temp_dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(BenchError::ConfigNotFound { .. })));
}
