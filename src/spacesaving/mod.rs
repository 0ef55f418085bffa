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

//! Space-Saving sketch for tracking the top-k most frequent keys of a
//! stream.
//!
//! This module implements the Space-Saving algorithm of Metwally et al.
//! It tracks a bounded set of candidate heavy hitters and reports, for each
//! of them, a guaranteed lower bound on its true occurrence count.
//!
//! For background, see the paper:
//! "Efficient Computation of Frequent and Top-k Elements in Data Streams".
//!
//! # Usage
//!
//! ```rust
//! # use frequent::spacesaving::SpaceSavingSketch;
//! let mut sketch = SpaceSavingSketch::new(64).unwrap();
//! sketch.update_with_count("get", 3);
//! sketch.update("put");
//!
//! let rows = sketch.report_and_clear();
//! assert_eq!(*rows[0].item(), "get");
//! assert_eq!(rows[0].lower_bound(), 3);
//! assert!(sketch.is_empty());
//! ```
//!
//! # Concurrent ingestion
//!
//! ```rust
//! # use frequent::spacesaving::ConcurrentSpaceSavingSketch;
//! let sketch = ConcurrentSpaceSavingSketch::new(64).unwrap();
//! std::thread::scope(|scope| {
//!     for _ in 0..4 {
//!         scope.spawn(|| {
//!             for i in 0..1000 {
//!                 sketch.update(i % 10);
//!             }
//!         });
//!     }
//! });
//! assert_eq!(sketch.total_weight(), 4000);
//! ```

mod concurrent;
mod counter_heap;
mod sketch;

pub use self::concurrent::ConcurrentSpaceSavingSketch;
pub use self::sketch::Row;
pub use self::sketch::SpaceSavingSketch;
