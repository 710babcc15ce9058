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
use crate::error::InputError;
use crate::error::PhonebenchError;
use crate::record::Record;
use crate::record::parse_records;
use std::path::Path;

/// Parsed directory plus the raw query list.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
  pub records: Vec<Record>,
  pub queries: Vec<String>,
}

/// Reads a text file into its lines.
async fn read_lines(path: &Path, what: &'static str) -> Result<Vec<String>, InputError> {
  let content = tokio::fs::read_to_string(path)
    .await
    .map_err(|source| InputError::Read {
      what,
      path: path.to_path_buf(),
      source,
    })?;

  Ok(content.lines().map(str::to_string).collect())
}

/// Reads both input files, then parses the directory listing.
///
/// When both reads fail the directory error is the one reported. Any
/// malformed directory line aborts the load.
pub async fn load_inputs(directory: &Path, queries: &Path) -> Result<Inputs, PhonebenchError> {
  let (directory_lines, queries) = tokio::join!(
    read_lines(directory, "directory listing"),
    read_lines(queries, "query list"),
  );
  let directory_lines = directory_lines?;
  let queries = queries?;

  tracing::debug!(
    directory_lines = directory_lines.len(),
    queries = queries.len(),
    "Read input files"
  );

  let records = parse_records(&directory_lines)?;

  Ok(Inputs { records, queries })
}
