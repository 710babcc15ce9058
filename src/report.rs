// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::benchmark::BenchmarkReport;
use crate::benchmark::Pipeline;
use crate::benchmark::PipelineResult;
use crate::config::OutputFormat;
use crate::error::PhonebenchError;
use crate::timer::Phase;
use crate::timer::format_duration;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::time::Duration;

/// One line of `--format json` output.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JsonLine {
  pub pipeline: Pipeline,
  pub matches_found: usize,
  pub total_queries: usize,
  pub sort_succeeded: bool,
  pub total_ms: u64,
  pub phases_ms: BTreeMap<Phase, u64>,
}

impl From<&PipelineResult> for JsonLine {
  fn from(result: &PipelineResult) -> Self {
    JsonLine {
      pipeline: result.pipeline,
      matches_found: result.matches_found,
      total_queries: result.total_queries,
      sort_succeeded: result.sort_succeeded,
      total_ms: millis(result.total()),
      phases_ms: result
        .phases
        .iter()
        .map(|(phase, d)| (*phase, millis(*d)))
        .collect(),
    }
  }
}

fn millis(d: Duration) -> u64 {
  u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Writes `report` to `out` in the chosen format.
pub fn render<W: Write>(
  report: &BenchmarkReport,
  format: OutputFormat,
  out: &mut W,
) -> Result<(), PhonebenchError> {
  match format {
    OutputFormat::Text => render_text(report, out)?,
    OutputFormat::Json => render_json(report, out)?,
  }
  Ok(())
}

/// Human-readable report, one block per pipeline separated by blank lines.
pub fn render_text<W: Write>(report: &BenchmarkReport, out: &mut W) -> std::io::Result<()> {
  for (i, result) in report.results.iter().enumerate() {
    if i > 0 {
      writeln!(out)?;
    }
    write_pipeline(result, out)?;
  }
  Ok(())
}

fn write_pipeline<W: Write>(result: &PipelineResult, out: &mut W) -> std::io::Result<()> {
  writeln!(out, "Start searching ({})...", result.pipeline)?;
  writeln!(
    out,
    "Found {} / {} entries. Time taken: {}",
    result.matches_found,
    result.total_queries,
    format_duration(result.total())
  )?;

  match result.pipeline {
    Pipeline::LinearSearch => {}
    Pipeline::BubbleSortJumpSearch | Pipeline::QuickSortBinarySearch => {
      let marker = if result.sort_succeeded {
        ""
      } else {
        " - STOPPED, moved to linear search"
      };
      writeln!(
        out,
        "Sorting time: {}{}",
        format_duration(result.phase(Phase::Sort)),
        marker
      )?;
      writeln!(
        out,
        "Searching time: {}",
        format_duration(result.phase(Phase::Search))
      )?;
    }
    Pipeline::HashTable => {
      writeln!(
        out,
        "Creating time: {}",
        format_duration(result.phase(Phase::Index))
      )?;
      writeln!(
        out,
        "Searching time: {}",
        format_duration(result.phase(Phase::Search))
      )?;
    }
  }

  Ok(())
}

/// JSON lines, one object per pipeline.
pub fn render_json<W: Write>(report: &BenchmarkReport, out: &mut W) -> Result<(), PhonebenchError> {
  for result in &report.results {
    let line = serde_json::to_string(&JsonLine::from(result))?;
    writeln!(out, "{}", line)?;
  }
  Ok(())
}
