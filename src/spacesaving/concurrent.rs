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

//! Thread-safe wrapper around the Space-Saving sketch.

use std::hash::Hash;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::error::Error;
use crate::spacesaving::sketch::Row;
use crate::spacesaving::sketch::SpaceSavingSketch;

/// Space-Saving sketch shared by concurrent writers.
///
/// Every operation acquires one exclusive mutex for its entire duration, so
/// the combined effect of concurrent calls is equivalent to some sequential
/// interleaving of them. No operation blocks on anything but the mutex, and
/// the hold time is bounded by the heap repair (or the full drain for a
/// report), keeping contention predictable.
///
/// [`report_and_clear`](Self::report_and_clear) is atomic with respect to
/// concurrent updates: each update lands entirely in the report that covers
/// it, never split across two.
#[derive(Debug)]
pub struct ConcurrentSpaceSavingSketch<T> {
    inner: Mutex<SpaceSavingSketch<T>>,
}

impl<T: Eq + Hash + Clone> ConcurrentSpaceSavingSketch<T> {
    /// Creates a shared sketch that tracks up to `capacity` items.
    ///
    /// Returns [`crate::error::ErrorKind::ConfigInvalid`] if `capacity` is
    /// zero.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            inner: Mutex::new(SpaceSavingSketch::new(capacity)?),
        })
    }

    /// Observes a single occurrence of `item`.
    pub fn update(&self, item: T) {
        self.update_with_count(item, 1);
    }

    /// Observes `count` occurrences of `item` at once.
    ///
    /// A count of zero is a no-op and does not take the lock.
    ///
    /// # Panics
    ///
    /// Panics if `count` is negative. The check runs before the lock is
    /// taken, so a violating caller cannot poison the shared state.
    pub fn update_with_count(&self, item: T, count: i64) {
        if count == 0 {
            return;
        }
        assert!(count > 0, "count may not be negative");
        self.lock().update_with_count(item, count);
    }

    /// Drains every tracked counter, ordered by estimated frequency
    /// descending, and resets the sketch. See
    /// [`SpaceSavingSketch::report_and_clear`].
    pub fn report_and_clear(&self) -> Vec<Row<T>> {
        self.lock().report_and_clear()
    }

    /// Returns the maximum number of tracked items.
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Returns the number of distinct items currently tracked.
    pub fn num_tracked(&self) -> usize {
        self.lock().num_tracked()
    }

    /// Returns the total weight observed since construction or the last
    /// drain.
    pub fn total_weight(&self) -> i64 {
        self.lock().total_weight()
    }

    fn lock(&self) -> MutexGuard<'_, SpaceSavingSketch<T>> {
        // No panic can escape the core sketch while the lock is held: the
        // only panicking path is the negative-count precondition, checked
        // before locking. A poisoned mutex is therefore still consistent.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
