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

//! Time-bounded sorts over a record collection.
//!
//! Both sorts copy their input and never touch the caller's slice, so a
//! timed-out sort leaves nothing behind for the caller to clean up. The
//! deadline is polled cooperatively: after every comparison for bubble sort,
//! once per partition step for quicksort.

use crate::error::SortError;
use crate::record::Record;
use crate::timer::Deadline;
use std::cmp::Ordering;

/// Direction a collection is sorted in, by name.
///
/// A sorted collection and the ordered search run over it must agree on this
/// value, so it is passed explicitly to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
  Ascending,
  #[default]
  Descending,
}

impl SortOrder {
  /// `Less` means `a` belongs before `b` in this order.
  pub fn compare(self, a: &str, b: &str) -> Ordering {
    match self {
      SortOrder::Ascending => a.cmp(b),
      SortOrder::Descending => b.cmp(a),
    }
  }

  /// True if `records` is ordered by name in this direction.
  pub fn is_sorted(self, records: &[Record]) -> bool {
    records
      .windows(2)
      .all(|pair| self.compare(&pair[0].name, &pair[1].name) != Ordering::Greater)
  }
}

/// A sorting algorithm that gives up once its deadline has passed.
pub trait BoundedSort {
  /// Human-readable name used in reports and logs.
  fn name(&self) -> &'static str;

  /// Returns a sorted copy of `records`, or a timeout error.
  fn sort(
    &self,
    records: &[Record],
    order: SortOrder,
    deadline: &Deadline,
  ) -> Result<Vec<Record>, SortError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl BoundedSort for BubbleSort {
  fn name(&self) -> &'static str {
    "bubble sort"
  }

  fn sort(
    &self,
    records: &[Record],
    order: SortOrder,
    deadline: &Deadline,
  ) -> Result<Vec<Record>, SortError> {
    let mut sorted = records.to_vec();
    let len = sorted.len();

    for pass in 0..len.saturating_sub(1) {
      let mut swapped = false;
      for j in 0..len - 1 - pass {
        if order.compare(&sorted[j].name, &sorted[j + 1].name) == Ordering::Greater {
          sorted.swap(j, j + 1);
          swapped = true;
        }
        deadline.check()?;
      }
      if !swapped {
        break;
      }
    }

    Ok(sorted)
  }
}

/// Three-way quicksort with the last element as pivot.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl BoundedSort for QuickSort {
  fn name(&self) -> &'static str {
    "quick sort"
  }

  fn sort(
    &self,
    records: &[Record],
    order: SortOrder,
    deadline: &Deadline,
  ) -> Result<Vec<Record>, SortError> {
    let mut sorted = records.to_vec();
    quick_sort_range(&mut sorted, order, deadline)?;
    Ok(sorted)
  }
}

/// Sorts `slice` in place.
///
/// Recurses into the smaller side of each partition and loops over the larger
/// one, so stack depth stays logarithmic even on already-sorted input.
fn quick_sort_range(
  mut slice: &mut [Record],
  order: SortOrder,
  deadline: &Deadline,
) -> Result<(), SortError> {
  loop {
    deadline.check()?;

    if slice.len() <= 1 {
      return Ok(());
    }

    let current = std::mem::take(&mut slice);
    let (before, after) = partition(current, order);
    let (head, rest) = current.split_at_mut(before);
    let tail_start = rest.len() - after;
    let tail = &mut rest[tail_start..];

    if head.len() <= tail.len() {
      quick_sort_range(head, order, deadline)?;
      slice = tail;
    } else {
      quick_sort_range(tail, order, deadline)?;
      slice = head;
    }
  }
}

/// Dutch-flag partition around the last element.
///
/// Returns the lengths of the leading "before pivot" run and the trailing
/// "after pivot" run; everything between them equals the pivot.
fn partition(slice: &mut [Record], order: SortOrder) -> (usize, usize) {
  let pivot = slice[slice.len() - 1].name.clone();
  let mut lt = 0;
  let mut i = 0;
  let mut gt = slice.len();

  while i < gt {
    match order.compare(&slice[i].name, &pivot) {
      Ordering::Less => {
        slice.swap(lt, i);
        lt += 1;
        i += 1;
      }
      Ordering::Greater => {
        gt -= 1;
        slice.swap(i, gt);
      }
      Ordering::Equal => i += 1,
    }
  }

  (lt, slice.len() - gt)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn names(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
  }

  #[test]
  fn partition_groups_around_pivot() {
    let mut records: Vec<Record> = ["b", "d", "a", "c", "c"]
      .iter()
      .enumerate()
      .map(|(i, n)| Record::new(i as i64, *n))
      .collect();

    let (before, after) = partition(&mut records, SortOrder::Descending);

    assert_eq!(before, 1);
    assert_eq!(after, 2);
    assert_eq!(records[0].name, "d");
    assert_eq!(names(&records[1..3]), vec!["c", "c"]);
  }
}
