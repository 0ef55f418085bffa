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

//! Space-Saving sketch implementation.

use std::hash::Hash;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::spacesaving::counter_heap::CounterHeap;

/// Result row for a drained report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<T> {
    item: T,
    estimate: i64,
    lower_bound: i64,
}

impl<T> Row<T> {
    /// Returns the item value.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Returns the estimated frequency, an upper bound on the true count.
    pub fn estimate(&self) -> i64 {
        self.estimate
    }

    /// Returns the guaranteed minimum number of occurrences of the item
    /// since the sketch was constructed or last drained. Exact when the
    /// item's slot was never reassigned.
    pub fn lower_bound(&self) -> i64 {
        self.lower_bound
    }
}

/// Space-Saving sketch tracking the k most frequent items of a stream.
///
/// The sketch keeps at most `capacity` counters regardless of how many
/// distinct items the stream contains. An item already tracked has its count
/// increased in place; an unseen item either occupies a spare slot or takes
/// over the slot of the current minimum, inheriting its count as the new
/// counter's maximum possible overcount. For every tracked item the true
/// number of occurrences is therefore within `[lower_bound, estimate]`.
///
/// In highly skewed streams the lower bound is almost exact for the most
/// frequent items. For near-uniform streams, which have no frequent items,
/// the lower bounds degrade toward 1.
#[derive(Debug, Clone)]
pub struct SpaceSavingSketch<T> {
    capacity: usize,
    counters: CounterHeap<T>,
    total_weight: i64,
}

impl<T: Eq + Hash + Clone> SpaceSavingSketch<T> {
    /// Creates a sketch that tracks up to `capacity` items.
    ///
    /// Users should provide a somewhat larger capacity than is really
    /// required: the highest-rank slots tend to be noisy, and in particular
    /// the very last one is usually occupied effectively at random. To track
    /// 5 keys accurately, use a capacity of 10, and so forth.
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(
                Error::new(ErrorKind::ConfigInvalid, "capacity must be at least 1")
                    .with_context("capacity", capacity),
            );
        }
        Ok(Self {
            capacity,
            counters: CounterHeap::with_capacity(capacity),
            total_weight: 0,
        })
    }

    /// Returns the maximum number of tracked items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of distinct items currently tracked.
    pub fn num_tracked(&self) -> usize {
        self.counters.len()
    }

    /// Returns true if no items are tracked.
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Returns the total weight observed since construction or the last
    /// drain.
    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }

    /// Returns true if `item` is currently tracked.
    pub fn contains(&self, item: &T) -> bool {
        self.counters.get(item).is_some()
    }

    /// Returns the estimated frequency for an item, an upper bound on its
    /// true count. Untracked items report 0.
    pub fn estimate(&self, item: &T) -> i64 {
        self.counters
            .get(item)
            .map_or(0, |slot| self.counters.count(slot))
    }

    /// Returns the guaranteed minimum number of occurrences for an item.
    /// Untracked items report 0.
    pub fn lower_bound(&self, item: &T) -> i64 {
        self.counters
            .get(item)
            .map_or(0, |slot| self.counters.lower_bound(slot))
    }

    /// Observes a single occurrence of `item`.
    pub fn update(&mut self, item: T) {
        self.update_with_count(item, 1);
    }

    /// Observes `count` occurrences of `item` at once. Equivalent to, but
    /// much more efficient than, `count` calls to [`update`](Self::update).
    ///
    /// A count of zero is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `count` is negative.
    pub fn update_with_count(&mut self, item: T, count: i64) {
        if count == 0 {
            return;
        }
        assert!(count > 0, "count may not be negative");
        self.total_weight += count;
        if let Some(slot) = self.counters.get(&item) {
            self.counters.increase(slot, count);
            return;
        }
        if self.counters.len() < self.capacity {
            self.counters.push(item, count);
            return;
        }
        // Table is full and the item is unseen: the minimum counter is
        // evicted and its slot reused, charging the evicted count as the new
        // item's overcount.
        self.counters.replace_min(item, count);
    }

    /// Drains every tracked counter, ordered by estimated frequency
    /// descending, and resets the sketch to its freshly constructed state.
    ///
    /// The report covers the stream observed since construction or since the
    /// previous drain; the same report cannot be produced twice.
    pub fn report_and_clear(&mut self) -> Vec<Row<T>> {
        let mut rows = Vec::with_capacity(self.counters.len());
        // Popping the minimum repeatedly yields ascending counts.
        while let Some(counter) = self.counters.pop_min() {
            let estimate = counter.count();
            let lower_bound = counter.lower_bound();
            rows.push(Row {
                item: counter.into_item(),
                estimate,
                lower_bound,
            });
        }
        rows.reverse();
        self.counters.clear();
        self.total_weight = 0;
        rows
    }
}
