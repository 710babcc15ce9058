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
use phonebench::record::Record;
use phonebench::record::parse_records;
use phonebench::search::LookupIndex;
use phonebench::search::SearchStrategy;
use phonebench::search::binary_search;
use phonebench::search::jump_search;
use phonebench::search::linear_search;
use phonebench::sort::SortOrder;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sorted(mut records: Vec<Record>, order: SortOrder) -> Vec<Record> {
  records.sort_by(|a, b| order.compare(&a.name, &b.name));
  records
}

fn random_directory(rng: &mut StdRng, len: usize) -> Vec<Record> {
  (0..len)
    .map(|i| {
      // Small alphabet so duplicates are common.
      let name: String = (0..rng.random_range(1..4))
        .map(|_| rng.random_range(b'a'..=b'e') as char)
        .collect();
      Record::new(i as i64, name)
    })
    .collect()
}

fn random_queries(rng: &mut StdRng, len: usize) -> Vec<String> {
  (0..len)
    .map(|_| {
      (0..rng.random_range(1..4))
        .map(|_| rng.random_range(b'a'..=b'f') as char)
        .collect()
    })
    .collect()
}

#[test]
fn test_three_entry_directory_every_strategy() {
  let records = parse_records(["1 Alice", "2 Bob", "3 Carol"]).unwrap();
  let queries = vec!["Bob".to_string(), "Dave".to_string()];
  let desc = sorted(records.clone(), SortOrder::Descending);

  assert_eq!(SearchStrategy::Linear.count_found(&queries, &records), 1);
  assert_eq!(
    SearchStrategy::Jump(SortOrder::Descending).count_found(&queries, &desc),
    1
  );
  assert_eq!(
    SearchStrategy::Binary(SortOrder::Descending).count_found(&queries, &desc),
    1
  );

  let index = LookupIndex::build(&records);
  assert_eq!(index.lookup("Bob"), Some(2));
  assert_eq!(index.lookup("Dave"), None);
}

#[test]
fn test_empty_directory_finds_nothing() {
  let records: Vec<Record> = Vec::new();
  let queries = vec!["Alice".to_string(), "Bob".to_string()];

  for strategy in [
    SearchStrategy::Linear,
    SearchStrategy::Jump(SortOrder::Descending),
    SearchStrategy::Binary(SortOrder::Descending),
  ] {
    assert_eq!(strategy.count_found(&queries, &records), 0, "{}", strategy.name());
  }

  assert_eq!(jump_search("Alice", &records, SortOrder::Descending), None);
  assert!(LookupIndex::build(&records).is_empty());
}

#[test]
fn test_duplicate_names_linear_first_hash_last() {
  let records = parse_records(["1 Alice", "2 Alice"]).unwrap();

  assert_eq!(linear_search("Alice", &records), Some(1));
  assert_eq!(LookupIndex::build(&records).lookup("Alice"), Some(2));
}

#[test]
fn test_repeated_queries_are_counted_each_time() {
  let records = parse_records(["1 Alice", "2 Alice", "3 Bob"]).unwrap();
  let queries: Vec<String> = ["Alice", "Alice", "Zed", "Bob"]
    .iter()
    .map(|s| s.to_string())
    .collect();

  assert_eq!(SearchStrategy::Linear.count_found(&queries, &records), 3);
}

#[test]
fn test_jump_search_single_element() {
  let records = vec![Record::new(9, "Mia")];

  assert_eq!(jump_search("Mia", &records, SortOrder::Descending), Some(9));
  assert_eq!(jump_search("Abe", &records, SortOrder::Descending), None);
  assert_eq!(jump_search("Zoe", &records, SortOrder::Descending), None);
}

#[test]
fn test_jump_search_hits_block_boundaries() {
  // 16 records, step 4: probes land on 0, 4, 8, 12, 15.
  let records = sorted(
    (0..16)
      .map(|i| Record::new(i, format!("name{:02}", i)))
      .collect(),
    SortOrder::Descending,
  );

  for record in &records {
    assert_eq!(
      jump_search(&record.name, &records, SortOrder::Descending),
      Some(record.id),
      "lookup of {}",
      record.name
    );
  }
  assert_eq!(jump_search("name99", &records, SortOrder::Descending), None);
  assert_eq!(jump_search("aaaa", &records, SortOrder::Descending), None);
  assert_eq!(jump_search("name05x", &records, SortOrder::Descending), None);
}

#[test]
fn test_ordered_searches_agree_with_linear() {
  let mut rng = StdRng::seed_from_u64(0x5eed);

  for len in [0, 1, 2, 3, 10, 57, 200] {
    let records = random_directory(&mut rng, len);
    let queries = random_queries(&mut rng, 100);

    for order in [SortOrder::Descending, SortOrder::Ascending] {
      let ordered = sorted(records.clone(), order);

      for query in &queries {
        let expected = linear_search(query, &records).is_some();
        assert_eq!(
          jump_search(query, &ordered, order).is_some(),
          expected,
          "jump search, len {len}, {order:?}, query {query:?}"
        );
        assert_eq!(
          binary_search(query, &ordered, order).is_some(),
          expected,
          "binary search, len {len}, {order:?}, query {query:?}"
        );
      }
    }
  }
}

#[test]
fn test_ordered_search_with_mismatched_order_misses() {
  // Binary search that assumes ascending order over a descending collection.
  let records = sorted(
    parse_records(["1 Alice", "2 Bob", "3 Carol", "4 Dave", "5 Erin"]).unwrap(),
    SortOrder::Descending,
  );

  assert_eq!(binary_search("Alice", &records, SortOrder::Descending), Some(1));
  assert_eq!(binary_search("Alice", &records, SortOrder::Ascending), None);
}

#[test]
fn test_hash_lookup_agrees_with_linear_on_unique_names() {
  let records: Vec<Record> = (0..500)
    .map(|i| Record::new(i, format!("Person {i}")))
    .collect();
  let index = LookupIndex::build(&records);

  for i in (0..1000).step_by(7) {
    let name = format!("Person {i}");
    assert_eq!(index.lookup(&name), linear_search(&name, &records));
  }
}
