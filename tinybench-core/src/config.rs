// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML benchmark plan parser with strict schema validation.
//!
//! A plan lists suites; each suite becomes one section in the output and
//! holds the workloads measured inside it. Any invalid field results in a
//! HardValidationError and nothing is run.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult, HardValidationError};
use crate::types::{RepeatCount, SuiteName};

/// Longest permitted sleep workload: 60 seconds.
const MAX_SLEEP_MILLIS: u64 = 60_000;
/// Most loop iterations a spin workload may request.
const MAX_SPIN_ITERATIONS: u64 = 10_000_000_000;
/// Largest vector a sort workload may build.
const MAX_SORT_LEN: u64 = 100_000_000;
/// Largest single allocation: 1 GiB.
const MAX_ALLOC_BYTES: u64 = 1024 * 1024 * 1024;
/// Most strings a format workload may build.
const MAX_FORMAT_COUNT: u64 = 10_000_000;

/// Raw workload entry as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWorkloadConfig {
    kind: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default = "default_repeat")]
    repeat: u32,
    #[serde(default)]
    millis: Option<u64>,
    #[serde(default)]
    iterations: Option<u64>,
    #[serde(default)]
    len: Option<u64>,
    #[serde(default)]
    bytes: Option<u64>,
    #[serde(default)]
    count: Option<u64>,
}

fn default_repeat() -> u32 {
    1
}

/// Raw suite entry.
#[derive(Debug, Deserialize)]
struct RawSuiteConfig {
    name: String,
    #[serde(default)]
    workloads: Vec<RawWorkloadConfig>,
}

/// Raw root configuration file.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    output: OutputTarget,
    #[serde(default)]
    suites: Vec<RawSuiteConfig>,
}

/// Console stream the tables are printed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "stdout"),
            OutputTarget::Stderr => write!(f, "stderr"),
        }
    }
}

/// Built-in workload to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkloadKind {
    /// Block the thread for a fixed time.
    Sleep { millis: u64 },
    /// Busy arithmetic loop.
    Spin { iterations: u64 },
    /// Sort a pseudo-random vector of `len` integers.
    Sort { len: u64 },
    /// Allocate and touch a zeroed buffer.
    Alloc { bytes: u64 },
    /// Build `count` formatted strings.
    Format { count: u64 },
}

impl WorkloadKind {
    /// Short description, used as the label when none is configured.
    pub fn describe(&self) -> String {
        match self {
            WorkloadKind::Sleep { millis } => format!("sleep({}ms)", millis),
            WorkloadKind::Spin { iterations } => format!("spin({})", iterations),
            WorkloadKind::Sort { len } => format!("sort({})", len),
            WorkloadKind::Alloc { bytes } => format!("alloc({}B)", bytes),
            WorkloadKind::Format { count } => format!("format({})", count),
        }
    }

    /// Name of the single plan field this kind takes.
    pub const fn parameter(&self) -> &'static str {
        match self {
            WorkloadKind::Sleep { .. } => "millis",
            WorkloadKind::Spin { .. } => "iterations",
            WorkloadKind::Sort { .. } => "len",
            WorkloadKind::Alloc { .. } => "bytes",
            WorkloadKind::Format { .. } => "count",
        }
    }
}

/// Validated workload configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    pub label: String,
    pub kind: WorkloadKind,
    pub repeat: RepeatCount,
}

/// Validated suite configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub name: SuiteName,
    pub workloads: Vec<WorkloadConfig>,
}

/// Complete validated plan.
#[derive(Debug, Clone)]
pub struct Config {
    pub output: OutputTarget,
    pub suites: Vec<SuiteConfig>,
}

impl Config {
    /// Look up a suite by name.
    pub fn suite(&self, name: &str) -> Option<&SuiteConfig> {
        self.suites.iter().find(|s| s.name.as_str() == name)
    }
}

/// Plan loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a plan from a YAML file.
    /// Returns HardValidationError for any invalid fields.
    pub fn load_file(path: impl AsRef<Path>) -> BenchResult<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BenchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(BenchError::io("reading config file"))?;

        Self::load_string(&content)
    }

    /// Load and validate a plan from a YAML string.
    pub fn load_string(content: &str) -> BenchResult<Config> {
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| BenchError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?;

        Self::validate(raw)
    }

    /// Validate raw configuration and convert to validated types.
    fn validate(raw: RawConfig) -> BenchResult<Config> {
        if raw.suites.is_empty() {
            return Err(HardValidationError::SchemaValidation {
                message: "At least one suite must be defined".to_string(),
            }
            .into());
        }

        let mut suites = Vec::with_capacity(raw.suites.len());
        let mut seen_names = HashSet::new();

        for raw_suite in raw.suites {
            let suite = Self::validate_suite(raw_suite)?;

            if !seen_names.insert(suite.name.clone()) {
                return Err(HardValidationError::DuplicateSuiteName {
                    name: suite.name.to_string(),
                }
                .into());
            }

            suites.push(suite);
        }

        tracing::debug!(suites = suites.len(), output = %raw.output, "Validated benchmark plan");

        Ok(Config {
            output: raw.output,
            suites,
        })
    }

    /// Validate a single suite and its workloads.
    fn validate_suite(raw: RawSuiteConfig) -> BenchResult<SuiteConfig> {
        let name = SuiteName::new(raw.name)?;

        if raw.workloads.is_empty() {
            return Err(HardValidationError::MissingRequiredField {
                field: "workloads",
                context: format!("suite '{}'", name),
            }
            .into());
        }

        let workloads = raw
            .workloads
            .into_iter()
            .enumerate()
            .map(|(index, w)| Self::validate_workload(w, &name, index))
            .collect::<BenchResult<Vec<_>>>()?;

        Ok(SuiteConfig { name, workloads })
    }

    /// Validate a single workload entry.
    fn validate_workload(
        raw: RawWorkloadConfig,
        suite: &SuiteName,
        index: usize,
    ) -> BenchResult<WorkloadConfig> {
        let context = format!("workload {} of suite '{}'", index, suite);

        let kind = match raw.kind.as_str() {
            "sleep" => WorkloadKind::Sleep {
                millis: Self::bounded(raw.millis, "millis", &context, 0, MAX_SLEEP_MILLIS)?,
            },
            "spin" => WorkloadKind::Spin {
                iterations: Self::bounded(
                    raw.iterations,
                    "iterations",
                    &context,
                    1,
                    MAX_SPIN_ITERATIONS,
                )?,
            },
            "sort" => WorkloadKind::Sort {
                len: Self::bounded(raw.len, "len", &context, 1, MAX_SORT_LEN)?,
            },
            "alloc" => WorkloadKind::Alloc {
                bytes: Self::bounded(raw.bytes, "bytes", &context, 1, MAX_ALLOC_BYTES)?,
            },
            "format" => WorkloadKind::Format {
                count: Self::bounded(raw.count, "count", &context, 1, MAX_FORMAT_COUNT)?,
            },
            other => {
                return Err(HardValidationError::InvalidFieldValue {
                    field: "kind",
                    value: other.to_string(),
                    reason: "Must be one of: sleep, spin, sort, alloc, format".to_string(),
                }
                .into());
            }
        };

        // Parameters of other kinds are rejected, not ignored.
        let params = [
            ("millis", raw.millis),
            ("iterations", raw.iterations),
            ("len", raw.len),
            ("bytes", raw.bytes),
            ("count", raw.count),
        ];
        if let Some((field, value)) = params
            .into_iter()
            .filter(|(field, _)| *field != kind.parameter())
            .find_map(|(field, value)| value.map(|v| (field, v)))
        {
            return Err(HardValidationError::InvalidFieldValue {
                field,
                value: value.to_string(),
                reason: format!("Not a parameter of '{}' workloads in {}", raw.kind, context),
            }
            .into());
        }

        let repeat = RepeatCount::new(raw.repeat)?;
        let label = raw.label.unwrap_or_else(|| kind.describe());

        Ok(WorkloadConfig {
            label,
            kind,
            repeat,
        })
    }

    /// Require `value` and check it lies in `min..=max`.
    fn bounded(
        value: Option<u64>,
        field: &'static str,
        context: &str,
        min: u64,
        max: u64,
    ) -> Result<u64, HardValidationError> {
        let value = value.ok_or_else(|| HardValidationError::MissingRequiredField {
            field,
            context: context.to_string(),
        })?;

        if value < min || value > max {
            return Err(HardValidationError::InvalidFieldValue {
                field,
                value: value.to_string(),
                reason: format!("Must be between {} and {}", min, max),
            });
        }

        Ok(value)
    }
}
