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

//! Bounded-memory approximate top-k frequency estimation for data streams.
//!
//! This crate implements the Space-Saving algorithm of Metwally et al.,
//! which tracks a fixed number of candidate heavy hitters in O(k) memory and
//! guarantees a provable lower bound on each tracked key's true frequency,
//! no matter how many distinct keys the stream contains.
//!
//! The expected usage is to create a sketch, feed it every stream element
//! with [`update`](spacesaving::SpaceSavingSketch::update) or
//! [`update_with_count`](spacesaving::SpaceSavingSketch::update_with_count),
//! and periodically drain the results with
//! [`report_and_clear`](spacesaving::SpaceSavingSketch::report_and_clear).
//! For ingestion from multiple threads, wrap the same workflow in
//! [`ConcurrentSpaceSavingSketch`](spacesaving::ConcurrentSpaceSavingSketch).
//!
//! # Usage
//!
//! ```rust
//! use frequent::spacesaving::SpaceSavingSketch;
//!
//! let mut sketch = SpaceSavingSketch::new(2).unwrap();
//! for key in ["a", "b", "a", "b", "b", "c", "c", "c", "c"] {
//!     sketch.update(key);
//! }
//!
//! let rows = sketch.report_and_clear();
//! assert_eq!(*rows[0].item(), "c");
//! assert_eq!(rows[0].lower_bound(), 4);
//! assert_eq!(*rows[1].item(), "b");
//! assert_eq!(rows[1].lower_bound(), 3);
//! ```

pub mod error;
pub mod spacesaving;
