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

//! Synthetic directory and query files.
//!
//! Directory names are drawn from [`FIRST_NAMES`] x [`LAST_NAMES`], so larger
//! directories contain duplicate names. Misses pair a first name with one of
//! [`MISSING_LAST_NAMES`], which never appears in a directory.

use crate::error::GenerateError;
use crate::error::PhonebenchError;
use crate::record::Record;
use rand::Rng;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;
use std::fs;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

pub const DIRECTORY_FILE: &str = "directory.txt";
pub const QUERIES_FILE: &str = "find.txt";

pub const FIRST_NAMES: &[&str] = &[
  "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi", "Ivan", "Judy", "Mallory",
  "Niaj", "Olivia", "Peggy", "Rupert", "Sybil", "Trent", "Victor", "Walter", "Yasmin",
];

pub const LAST_NAMES: &[&str] = &[
  "Anderson", "Brown", "Clark", "Davis", "Evans", "Fischer", "Garcia", "Hughes", "Ito", "Jensen",
  "Kowalski", "Lopez", "Moreau", "Nakamura", "Okafor", "Petrov", "Quinn", "Rossi", "Schmidt",
  "Tanaka",
];

pub const MISSING_LAST_NAMES: &[&str] = &["Nowhere", "Unlisted", "Absent", "Ghost", "Missing"];

/// Shape of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateSpec {
  pub entries: usize,
  pub queries: usize,
  /// Fraction of queries that name a directory entry.
  pub hit_ratio: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
  pub directory: Vec<Record>,
  pub queries: Vec<String>,
}

/// Draws a random 64-bit seed.
pub fn generate_seed() -> u64 {
  let mut rng = rand::rng();
  rng.next_u64()
}

/// Builds a directory and query list from `rng`.
///
/// Exactly `round(queries * hit_ratio)` queries are hits, unless the
/// directory is empty, in which case every query misses.
pub fn generate<R: Rng>(spec: &GenerateSpec, rng: &mut R) -> Result<Dataset, GenerateError> {
  if !(0.0..=1.0).contains(&spec.hit_ratio) {
    return Err(GenerateError::HitRatio(spec.hit_ratio));
  }

  let directory: Vec<Record> = (0..spec.entries)
    .map(|_| {
      let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alice");
      let last = LAST_NAMES.choose(rng).copied().unwrap_or("Anderson");
      Record::new(rng.random_range(1_000_000..10_000_000), format!("{first} {last}"))
    })
    .collect();

  let hits = if directory.is_empty() {
    0
  } else {
    (spec.queries as f64 * spec.hit_ratio).round() as usize
  };

  let mut queries = Vec::with_capacity(spec.queries);
  for i in 0..spec.queries {
    let name = match directory.choose(rng) {
      Some(record) if i < hits => record.name.clone(),
      _ => {
        let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alice");
        let last = MISSING_LAST_NAMES.choose(rng).copied().unwrap_or("Nowhere");
        format!("{first} {last}")
      }
    };
    queries.push(name);
  }
  queries.shuffle(rng);

  Ok(Dataset { directory, queries })
}

/// Writes `directory.txt` and `find.txt` under `out_dir`, creating it if needed.
///
/// Returns the two paths written.
pub fn write_dataset(dataset: &Dataset, out_dir: &Path) -> Result<(PathBuf, PathBuf), GenerateError> {
  fs::create_dir_all(out_dir).map_err(|source| GenerateError::CreateDir {
    path: out_dir.to_path_buf(),
    source,
  })?;

  let directory_path = out_dir.join(DIRECTORY_FILE);
  write_lines(&directory_path, dataset.directory.iter())?;

  let queries_path = out_dir.join(QUERIES_FILE);
  write_lines(&queries_path, dataset.queries.iter())?;

  Ok((directory_path, queries_path))
}

/// Generates a dataset from `seed` and writes it under `out_dir`.
pub fn generate_into(
  spec: &GenerateSpec,
  seed: u64,
  out_dir: &Path,
) -> Result<(PathBuf, PathBuf), PhonebenchError> {
  let dataset = generate(spec, &mut StdRng::seed_from_u64(seed))?;
  Ok(write_dataset(&dataset, out_dir)?)
}

fn write_lines<I, T>(path: &Path, lines: I) -> Result<(), GenerateError>
where
  I: Iterator<Item = T>,
  T: std::fmt::Display,
{
  let write_err = |source| GenerateError::Write {
    path: path.to_path_buf(),
    source,
  };

  let file = fs::File::create(path).map_err(write_err)?;
  let mut writer = BufWriter::new(file);
  for line in lines {
    writeln!(writer, "{}", line).map_err(write_err)?;
  }
  writer.flush().map_err(write_err)
}
