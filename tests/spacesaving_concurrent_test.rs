// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use frequent::spacesaving::ConcurrentSpaceSavingSketch;
use googletest::assert_that;
use googletest::prelude::ge;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn concurrent_updates_stay_bounded() {
    let sketch = ConcurrentSpaceSavingSketch::new(8).unwrap();
    std::thread::scope(|scope| {
        for t in 0..4u64 {
            let sketch = &sketch;
            scope.spawn(move || {
                let mut rng = StdRng::seed_from_u64(t);
                for _ in 0..25_000 {
                    sketch.update(rng.random_range(0..1000u64));
                }
            });
        }
    });
    assert_eq!(sketch.total_weight(), 100_000);
    assert!(sketch.num_tracked() <= 8);

    let rows = sketch.report_and_clear();
    assert!(rows.len() <= 8);
    for pair in rows.windows(2) {
        assert_that!(pair[0].estimate(), ge(pair[1].estimate()));
    }
    for row in &rows {
        assert_that!(row.estimate(), ge(row.lower_bound()));
    }
}

#[test]
fn concurrent_weighted_updates_accumulate() {
    let sketch = ConcurrentSpaceSavingSketch::new(4).unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let sketch = &sketch;
            scope.spawn(move || {
                for _ in 0..1000 {
                    sketch.update_with_count("hot", 10);
                    sketch.update("cold");
                }
            });
        }
    });
    assert_eq!(sketch.total_weight(), 44_000);
    let rows = sketch.report_and_clear();
    assert_eq!(*rows[0].item(), "hot");
    assert_eq!(rows[0].lower_bound(), 40_000);
}

// Capacity above the key space, so every interval is eviction free and the
// reported counts are exact. Because a drain is atomic with respect to
// updates, every update must then land in exactly one of the interleaved
// reports, and the per-key sums across all reports must equal what the
// writers actually observed.
#[test]
fn interleaved_reports_conserve_exact_counts() {
    const THREADS: u64 = 4;
    const UPDATES_PER_THREAD: usize = 50_000;
    const KEYS: usize = 16;

    let sketch = ConcurrentSpaceSavingSketch::new(64).unwrap();
    let mut reports = Vec::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let sketch = &sketch;
                scope.spawn(move || {
                    let mut rng = StdRng::seed_from_u64(100 + t);
                    let mut observed = [0i64; KEYS];
                    for _ in 0..UPDATES_PER_THREAD {
                        let key = rng.random_range(0..KEYS);
                        sketch.update(key);
                        observed[key] += 1;
                    }
                    observed
                })
            })
            .collect();

        for _ in 0..8 {
            reports.push(sketch.report_and_clear());
            std::thread::yield_now();
        }

        let mut expected = [0i64; KEYS];
        for handle in handles {
            let observed = handle.join().unwrap();
            for (key, count) in observed.iter().enumerate() {
                expected[key] += count;
            }
        }
        reports.push(sketch.report_and_clear());

        let mut reported = [0i64; KEYS];
        for report in &reports {
            for row in report {
                assert_eq!(row.estimate(), row.lower_bound());
                reported[*row.item()] += row.lower_bound();
            }
        }
        assert_eq!(reported, expected);
    });
}
