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
use crate::config::Config;
use crate::error::PhonebenchError;
use crate::input::load_inputs;
use crate::record::Record;
use crate::search::LookupIndex;
use crate::search::SearchStrategy;
use crate::search::count_found;
use crate::sort::BoundedSort;
use crate::sort::BubbleSort;
use crate::sort::QuickSort;
use crate::sort::SortOrder;
use crate::timer::Deadline;
use crate::timer::Phase;
use crate::timer::PhaseTimer;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Sorts get this many times the linear-search baseline before they give up.
pub const DEFAULT_BUDGET_FACTOR: u32 = 10;

/// The four lookup pipelines, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pipeline {
  LinearSearch,
  BubbleSortJumpSearch,
  QuickSortBinarySearch,
  HashTable,
}

impl Pipeline {
  pub const ALL: [Pipeline; 4] = [
    Pipeline::LinearSearch,
    Pipeline::BubbleSortJumpSearch,
    Pipeline::QuickSortBinarySearch,
    Pipeline::HashTable,
  ];

  pub fn title(&self) -> &'static str {
    match self {
      Pipeline::LinearSearch => "linear search",
      Pipeline::BubbleSortJumpSearch => "bubble sort + jump search",
      Pipeline::QuickSortBinarySearch => "quick sort + binary search",
      Pipeline::HashTable => "hash table",
    }
  }
}

impl fmt::Display for Pipeline {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.title())
  }
}

/// Outcome of running one pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
  pub pipeline: Pipeline,
  pub matches_found: usize,
  pub total_queries: usize,
  pub phases: BTreeMap<Phase, Duration>,
  /// False only when a sort ran out of budget and linear search was used.
  pub sort_succeeded: bool,
}

impl PipelineResult {
  /// Duration of `phase`, zero if the pipeline has no such phase.
  pub fn phase(&self, phase: Phase) -> Duration {
    self.phases.get(&phase).copied().unwrap_or_default()
  }

  pub fn total(&self) -> Duration {
    self.phases.values().sum()
  }
}

/// Results of all pipelines for one run.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
  /// Search time of the linear pipeline.
  pub reference: Duration,
  /// Time budget handed to each sort.
  pub budget: Duration,
  pub results: Vec<PipelineResult>,
}

impl BenchmarkReport {
  pub fn get(&self, pipeline: Pipeline) -> Option<&PipelineResult> {
    self.results.iter().find(|r| r.pipeline == pipeline)
  }
}

/// Runs the lookup pipelines over one directory and query list.
///
/// The directory is only ever borrowed; every sort works on its own copy.
#[derive(Debug, Clone)]
pub struct Benchmark<'a> {
  records: &'a [Record],
  queries: &'a [String],
  budget_factor: u32,
  order: SortOrder,
}

impl<'a> Benchmark<'a> {
  pub fn new(records: &'a [Record], queries: &'a [String]) -> Self {
    Self {
      records,
      queries,
      budget_factor: DEFAULT_BUDGET_FACTOR,
      order: SortOrder::Descending,
    }
  }

  pub fn budget_factor(mut self, factor: u32) -> Self {
    self.budget_factor = factor;
    self
  }

  /// Sort direction shared by both sort/search pairings.
  pub fn order(mut self, order: SortOrder) -> Self {
    self.order = order;
    self
  }

  /// Runs every pipeline in sequence.
  ///
  /// The linear pipeline goes first; its search time becomes the reference
  /// the sort budget is derived from.
  pub fn run(&self) -> BenchmarkReport {
    let span = tracing::info_span!(
      "run_benchmarks",
      records = self.records.len(),
      queries = self.queries.len()
    );
    let _enter = span.enter();

    tracing::info!("--- Starting Benchmark Pipelines ---");

    let linear = self.run_linear();
    let reference = linear.phase(Phase::Search);
    let budget = Deadline::budget_for(reference, self.budget_factor);
    tracing::info!(?reference, ?budget, factor = self.budget_factor, "Derived sort budget");

    let bubble = self.run_sorted(
      Pipeline::BubbleSortJumpSearch,
      &BubbleSort,
      SearchStrategy::Jump(self.order),
      budget,
    );
    let quick = self.run_sorted(
      Pipeline::QuickSortBinarySearch,
      &QuickSort,
      SearchStrategy::Binary(self.order),
      budget,
    );
    let hash = self.run_hash();

    tracing::info!("--- Benchmark run complete ---");

    BenchmarkReport {
      reference,
      budget,
      results: vec![linear, bubble, quick, hash],
    }
  }

  /// Plain linear scan over the unsorted directory.
  pub fn run_linear(&self) -> PipelineResult {
    let span = tracing::info_span!("pipeline", pipeline = %Pipeline::LinearSearch);
    let _enter = span.enter();

    let mut timer = PhaseTimer::new();
    let found = timer.time(Phase::Search, || {
      SearchStrategy::Linear.count_found(self.queries, self.records)
    });

    self.finish(Pipeline::LinearSearch, found, timer, true)
  }

  /// Sorts under `budget`, then searches the sorted copy with `search`.
  ///
  /// If the sort times out its output is dropped and the original directory
  /// is searched linearly instead.
  pub fn run_sorted(
    &self,
    pipeline: Pipeline,
    sorter: &dyn BoundedSort,
    search: SearchStrategy,
    budget: Duration,
  ) -> PipelineResult {
    let span = tracing::info_span!("pipeline", pipeline = %pipeline);
    let _enter = span.enter();

    let mut timer = PhaseTimer::new();
    let outcome = timer.time(Phase::Sort, || {
      sorter.sort(self.records, self.order, &Deadline::start(budget))
    });

    let (records, strategy, sort_succeeded) = match &outcome {
      Ok(sorted) => (sorted.as_slice(), search, true),
      Err(e) => {
        tracing::warn!(
          error = %e,
          sort = sorter.name(),
          "Sort stopped, moving to {}",
          SearchStrategy::Linear.name()
        );
        (self.records, SearchStrategy::Linear, false)
      }
    };

    let found = timer.time(Phase::Search, || {
      strategy.count_found(self.queries, records)
    });

    self.finish(pipeline, found, timer, sort_succeeded)
  }

  /// Builds the name index, then looks every query up in it.
  pub fn run_hash(&self) -> PipelineResult {
    let span = tracing::info_span!("pipeline", pipeline = %Pipeline::HashTable);
    let _enter = span.enter();

    let mut timer = PhaseTimer::new();
    let index = timer.time(Phase::Index, || LookupIndex::build(self.records));
    tracing::debug!(distinct_names = index.len(), "Lookup index built");

    let found = timer.time(Phase::Search, || {
      count_found(self.queries, |name| index.lookup(name))
    });

    self.finish(Pipeline::HashTable, found, timer, true)
  }

  fn finish(
    &self,
    pipeline: Pipeline,
    matches_found: usize,
    timer: PhaseTimer,
    sort_succeeded: bool,
  ) -> PipelineResult {
    tracing::info!(
      found = matches_found,
      total = self.queries.len(),
      elapsed = ?timer.total(),
      "Finished running pipeline: {}",
      pipeline
    );

    PipelineResult {
      pipeline,
      matches_found,
      total_queries: self.queries.len(),
      phases: timer.into_durations(),
      sort_succeeded,
    }
  }
}

/// Loads the configured inputs and runs every pipeline over them.
pub async fn run_benchmarks(config: &Config) -> Result<BenchmarkReport, PhonebenchError> {
  let inputs = load_inputs(&config.directory, &config.queries).await?;

  tracing::info!(
    directory = %config.directory.display(),
    queries = %config.queries.display(),
    records = inputs.records.len(),
    "Loaded benchmark inputs"
  );

  let report = Benchmark::new(&inputs.records, &inputs.queries)
    .budget_factor(config.budget_factor)
    .run();

  Ok(report)
}
