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

//! # Phonebench
//!
//! `phonebench` compares four ways of looking names up in a phone directory:
//! a linear scan, bubble sort followed by jump search, quicksort followed by
//! binary search, and a hash table.
//!
//! Sorts run under a time budget derived from the linear-search time. A sort
//! that runs out of budget is abandoned and its pipeline falls back to a
//! linear scan of the unsorted directory; the report marks that pipeline as
//! stopped.
//!
//! ## Core Modules
//!
//! * [`record`]: Parses `<identifier> <name>` directory lines into [`record::Record`]s.
//! * [`search`]: Linear, jump and binary search, plus the hash-table [`search::LookupIndex`].
//! * [`sort`]: Bubble sort and quicksort behind the [`sort::BoundedSort`] trait.
//! * [`benchmark`]: Runs the pipelines and collects a [`benchmark::BenchmarkReport`].
//! * [`timer`]: The per-pipeline [`timer::PhaseTimer`] and the sort [`timer::Deadline`].
//! * [`report`]: Text and JSON-lines rendering of a report.
//! * [`input`]: Reads the directory and query files.
//! * [`generator`]: Writes synthetic directory and query files.
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`config`]: Layers defaults, config file, environment and CLI flags into a `Config`.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod benchmark;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod input;
pub mod logging;
pub mod record;
pub mod report;
pub mod search;
pub mod sort;
pub mod timer;
