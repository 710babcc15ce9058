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
use crate::error::RecordError;
use std::fmt;

/// One directory entry: a numeric identifier and the name it is filed under.
///
/// Identifiers are payload only and need not be unique. The name is the
/// lookup key for every search strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
  pub id: i64,
  pub name: String,
}

impl Record {
  pub fn new(id: i64, name: impl Into<String>) -> Self {
    Self {
      id,
      name: name.into(),
    }
  }
}

impl fmt::Display for Record {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.id, self.name)
  }
}

/// Parses a single `<identifier> <name>` line.
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_record(line: &str, line_number: usize) -> Result<Record, RecordError> {
  let mut tokens = line.split_whitespace();

  let Some(first) = tokens.next() else {
    return Err(RecordError::EmptyLine { line_number });
  };

  let id = first
    .parse::<i64>()
    .map_err(|source| RecordError::Malformed {
      line_number,
      line: line.to_string(),
      source,
    })?;

  let name = tokens.collect::<Vec<_>>().join(" ");

  Ok(Record { id, name })
}

/// Parses every line of a directory listing, stopping at the first bad line.
pub fn parse_records<I, S>(lines: I) -> Result<Vec<Record>, RecordError>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  lines
    .into_iter()
    .enumerate()
    .map(|(idx, line)| parse_record(line.as_ref(), idx + 1))
    .collect()
}
