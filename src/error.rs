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
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Top-level error enum for the phonebench library.
#[derive(Error, Debug)]
pub enum PhonebenchError {
  #[error("Invalid directory listing")]
  Record(#[from] RecordError),

  #[error("Configuration error")]
  Config(#[from] ConfigError),

  #[error("Failed to load benchmark input")]
  Input(#[from] InputError),

  #[error("Data generation failed")]
  Generate(#[from] GenerateError),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON serialization/deserialization error: {0}")]
  Json(#[from] serde_json::Error),
}

/// Errors raised while parsing directory lines (src/record.rs).
#[derive(Error, Debug)]
pub enum RecordError {
  #[error("Line {line_number} is empty; expected `<identifier> <name>`")]
  EmptyLine { line_number: usize },

  #[error("Line {line_number} does not start with a numeric identifier: {line:?}")]
  Malformed {
    line_number: usize,
    line: String,
    #[source]
    source: std::num::ParseIntError,
  },
}

/// Errors raised by the time-bounded sorts (src/sort.rs).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
  #[error("Sorting took too long: {elapsed:?} elapsed, budget was {budget:?}")]
  Timeout { elapsed: Duration, budget: Duration },
}

/// Errors related to configuration resolution (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Failed to resolve configuration")]
  Extract(#[from] Box<figment::Error>),

  #[error("Directory and query paths must not be empty")]
  EmptyPath,
}

impl From<figment::Error> for ConfigError {
  fn from(err: figment::Error) -> Self {
    ConfigError::Extract(Box::new(err))
  }
}

/// Errors related to reading the benchmark inputs (src/input.rs).
#[derive(Error, Debug)]
pub enum InputError {
  #[error("Failed to read {what}: {path}")]
  Read {
    what: &'static str,
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Errors related to synthetic data generation (src/generator.rs).
#[derive(Error, Debug)]
pub enum GenerateError {
  #[error("Hit ratio must be within [0, 1], got {0}")]
  HitRatio(f64),

  #[error("Failed to create output directory: {path}")]
  CreateDir {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to write {path}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
