// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Gamut Core
//!
//! Comparator-driven closed ranges and their algebra. Every range carries
//! the comparator that orders it, so the same machinery serves integers,
//! floats, strings, timestamps, and any type with a custom order.
//!
//! ## Modules
//!
//! - `cmp`: The `Comparator` contract, the `Natural` order (with a total
//!   order for floats), and the `Reversed` adapter. Closures are
//!   comparators too.
//! - `math`: `Range<T, C>` with bound normalization, inclusive membership,
//!   `pick`/`unpick`/`any`/`all` filtering, `intersect`/`merge` algebra,
//!   text parsing and serde support. The `Bounded` trait lets other types
//!   (such as time cursors) reuse all of it.
//! - `algorithm`: Bulk helpers over slices of ranges: sortedness checks,
//!   lower bound search, coalescing, and n-way intersection.
//!
//! ## Usage
//!
//! ```rust
//! use gamut_core::{Bounded, Range};
//!
//! let a = Range::between(0, 5);
//! let b = Range::between(5, 10);
//!
//! assert_eq!(a.intersect(&b), Some(Range::between(5, 5)));
//! assert_eq!(a.merge(&b), Some(Range::between(0, 10)));
//! assert_eq!(Range::between(90, 100).pick([1, 99, 101]), vec![99]);
//! ```

pub mod algorithm;
pub mod cmp;
pub mod math;

pub use cmp::{Comparator, Natural, Reversed};
pub use math::parse::ParseRangeError;
pub use math::range::{Bounded, Range};
