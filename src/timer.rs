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
use crate::error::SortError;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use std::time::Instant;

/// A timed step of a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
  Sort,
  Index,
  Search,
}

impl fmt::Display for Phase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Phase::Sort => "sort",
      Phase::Index => "index",
      Phase::Search => "search",
    };
    f.write_str(name)
  }
}

/// Records how long each phase of one pipeline took.
///
/// Owned by the pipeline that is being measured; the clock is only read at
/// phase boundaries.
#[derive(Debug, Default, Clone)]
pub struct PhaseTimer {
  durations: BTreeMap<Phase, Duration>,
}

impl PhaseTimer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Runs `f`, recording its wall-clock duration under `phase`.
  ///
  /// Timing the same phase twice accumulates.
  pub fn time<T>(&mut self, phase: Phase, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    let elapsed = start.elapsed();
    *self.durations.entry(phase).or_default() += elapsed;
    tracing::debug!(%phase, ?elapsed, "Phase complete");
    out
  }

  pub fn get(&self, phase: Phase) -> Option<Duration> {
    self.durations.get(&phase).copied()
  }

  pub fn total(&self) -> Duration {
    self.durations.values().sum()
  }

  pub fn into_durations(self) -> BTreeMap<Phase, Duration> {
    self.durations
  }
}

/// The point in time after which a bounded sort must give up.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
  start: Instant,
  budget: Duration,
}

impl Deadline {
  /// Starts the clock now.
  pub fn start(budget: Duration) -> Self {
    Self::starting_at(Instant::now(), budget)
  }

  pub fn starting_at(start: Instant, budget: Duration) -> Self {
    Self { start, budget }
  }

  /// Budget of `factor` times the reference duration.
  pub fn budget_for(reference: Duration, factor: u32) -> Duration {
    reference.saturating_mul(factor)
  }

  /// Fails once the elapsed time is strictly over the budget.
  pub fn check(&self) -> Result<(), SortError> {
    let elapsed = self.start.elapsed();
    if elapsed > self.budget {
      return Err(SortError::Timeout {
        elapsed,
        budget: self.budget,
      });
    }
    Ok(())
  }
}

/// Formats a duration as `M min. S sec. MS ms.`.
pub fn format_duration(duration: Duration) -> String {
  let millis = duration.as_millis();
  let minutes = millis / 1000 / 60;
  let seconds = millis / 1000 % 60;
  let milliseconds = millis % 1000;
  format!("{minutes} min. {seconds} sec. {milliseconds} ms.")
}
