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
use phonebench::error::SortError;
use phonebench::record::Record;
use phonebench::sort::BoundedSort;
use phonebench::sort::BubbleSort;
use phonebench::sort::QuickSort;
use phonebench::sort::SortOrder;
use phonebench::timer::Deadline;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use std::time::Instant;

const SORTS: [&dyn BoundedSort; 2] = [&BubbleSort, &QuickSort];

fn generous() -> Deadline {
  Deadline::start(Duration::from_secs(3600))
}

/// A deadline whose budget was used up before the sort started.
fn expired() -> Deadline {
  let start = Instant::now()
    .checked_sub(Duration::from_millis(10))
    .unwrap_or_else(Instant::now);
  Deadline::starting_at(start, Duration::ZERO)
}

fn random_records(seed: u64, len: usize) -> Vec<Record> {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..len)
    .map(|i| {
      let name: String = (0..rng.random_range(0..6))
        .map(|_| rng.random_range(b'a'..=b'h') as char)
        .collect();
      Record::new(i as i64, name)
    })
    .collect()
}

/// Multiset comparison: same records, any order.
fn same_content(a: &[Record], b: &[Record]) -> bool {
  let key = |r: &Record| (r.name.clone(), r.id);
  let mut a: Vec<_> = a.iter().map(key).collect();
  let mut b: Vec<_> = b.iter().map(key).collect();
  a.sort();
  b.sort();
  a == b
}

#[test]
fn test_sorts_produce_descending_permutation() {
  for sorter in SORTS {
    for (seed, len) in [(1, 0), (2, 1), (3, 2), (4, 17), (5, 300)] {
      let records = random_records(seed, len);
      let sorted = sorter
        .sort(&records, SortOrder::Descending, &generous())
        .unwrap();

      assert_eq!(sorted.len(), records.len(), "{} len {len}", sorter.name());
      assert!(
        SortOrder::Descending.is_sorted(&sorted),
        "{} len {len}",
        sorter.name()
      );
      assert!(same_content(&records, &sorted), "{} len {len}", sorter.name());
    }
  }
}

#[test]
fn test_sorts_produce_ascending_permutation() {
  for sorter in SORTS {
    let records = random_records(42, 250);
    let sorted = sorter
      .sort(&records, SortOrder::Ascending, &generous())
      .unwrap();

    assert!(SortOrder::Ascending.is_sorted(&sorted), "{}", sorter.name());
    assert!(same_content(&records, &sorted), "{}", sorter.name());
  }
}

#[test]
fn test_sorts_leave_input_untouched() {
  for sorter in SORTS {
    let records = random_records(7, 64);
    let before = records.clone();

    let _ = sorter.sort(&records, SortOrder::Descending, &generous());
    let _ = sorter.sort(&records, SortOrder::Descending, &expired());

    assert_eq!(records, before, "{}", sorter.name());
  }
}

#[test]
fn test_expired_deadline_times_out() {
  let records = random_records(9, 50);

  for sorter in SORTS {
    let err = sorter
      .sort(&records, SortOrder::Descending, &expired())
      .unwrap_err();
    assert!(
      matches!(err, SortError::Timeout { budget, .. } if budget == Duration::ZERO),
      "{}",
      sorter.name()
    );
  }
}

#[test]
fn test_quick_sort_checks_deadline_before_base_case() {
  let records = vec![Record::new(1, "solo")];
  let err = QuickSort.sort(&records, SortOrder::Descending, &expired());
  assert!(err.is_err());
}

#[test]
fn test_bubble_sort_trivial_input_never_checks_deadline() {
  // Nothing to compare, so there is no checkpoint to fail.
  let records = vec![Record::new(1, "solo")];
  let sorted = BubbleSort
    .sort(&records, SortOrder::Descending, &expired())
    .unwrap();
  assert_eq!(sorted, records);
}

#[test]
fn test_quick_sort_presorted_and_uniform_input() {
  let presorted: Vec<Record> = (0..3000)
    .map(|i| Record::new(i, format!("{:05}", 3000 - i)))
    .collect();
  let uniform: Vec<Record> = (0..5000).map(|i| Record::new(i, "Same Name")).collect();

  for records in [presorted, uniform] {
    let sorted = QuickSort
      .sort(&records, SortOrder::Descending, &generous())
      .unwrap();
    assert_eq!(sorted.len(), records.len());
    assert!(SortOrder::Descending.is_sorted(&sorted));
  }
}
