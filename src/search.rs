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
use crate::record::Record;
use crate::sort::SortOrder;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Returns the identifier of the first record named `name`.
pub fn linear_search(name: &str, records: &[Record]) -> Option<i64> {
  records.iter().find(|r| r.name == name).map(|r| r.id)
}

/// Jump search over records sorted in `order`.
///
/// Probes every `floor(sqrt(n))` records until it passes `name`, then walks
/// back through the last block.
pub fn jump_search(name: &str, records: &[Record], order: SortOrder) -> Option<i64> {
  if records.is_empty() {
    return None;
  }

  let last = records.len() - 1;
  let step = records.len().isqrt();
  let mut prev = 0;
  let mut curr = 0;

  while order.compare(&records[curr].name, name) == Ordering::Less {
    if curr == last {
      return None;
    }
    prev = curr;
    curr = (curr + step).min(last);
  }

  while order.compare(&records[curr].name, name) == Ordering::Greater {
    if curr == prev {
      return None;
    }
    curr -= 1;
  }

  (records[curr].name == name).then_some(records[curr].id)
}

/// Binary search over records sorted in `order`.
pub fn binary_search(name: &str, records: &[Record], order: SortOrder) -> Option<i64> {
  let mut low = 0;
  let mut high = records.len();

  while low < high {
    let mid = low + (high - low) / 2;
    match order.compare(&records[mid].name, name) {
      Ordering::Equal => return Some(records[mid].id),
      Ordering::Less => low = mid + 1,
      Ordering::Greater => high = mid,
    }
  }

  None
}

/// Name to identifier map. Later records overwrite earlier ones with the same
/// name.
#[derive(Debug, Default, Clone)]
pub struct LookupIndex {
  entries: HashMap<String, i64>,
}

impl LookupIndex {
  pub fn build(records: &[Record]) -> Self {
    let mut entries = HashMap::with_capacity(records.len());
    for record in records {
      entries.insert(record.name.clone(), record.id);
    }
    Self { entries }
  }

  pub fn lookup(&self, name: &str) -> Option<i64> {
    self.entries.get(name).copied()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// A lookup over a plain record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
  Linear,
  Jump(SortOrder),
  Binary(SortOrder),
}

impl SearchStrategy {
  pub fn name(&self) -> &'static str {
    match self {
      SearchStrategy::Linear => "linear search",
      SearchStrategy::Jump(_) => "jump search",
      SearchStrategy::Binary(_) => "binary search",
    }
  }

  pub fn find(&self, name: &str, records: &[Record]) -> Option<i64> {
    match *self {
      SearchStrategy::Linear => linear_search(name, records),
      SearchStrategy::Jump(order) => jump_search(name, records, order),
      SearchStrategy::Binary(order) => binary_search(name, records, order),
    }
  }

  /// Number of queries with at least one match. Repeated queries count again.
  pub fn count_found<S: AsRef<str>>(&self, queries: &[S], records: &[Record]) -> usize {
    count_found(queries, |name| self.find(name, records))
  }
}

/// Runs `lookup` for each query and counts the hits.
pub fn count_found<S, F>(queries: &[S], mut lookup: F) -> usize
where
  S: AsRef<str>,
  F: FnMut(&str) -> Option<i64>,
{
  queries
    .iter()
    .filter(|query| lookup(query.as_ref()).is_some())
    .count()
}
