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

//! # Range Primitives
//!
//! Closed ranges `[lower, upper]` over any type, ordered by an injected
//! comparator, and the algebra that combines them.
//!
//! ## Submodules
//!
//! - `range`: The `Range<T, C>` type and the `Bounded<T>` contract shared by
//!   everything that spans a closed interval. Construction normalizes the
//!   bounds; membership, filtering (`pick`/`unpick`/`any`/`all`),
//!   containment, conversions to/from `RangeInclusive`, `RangeBounds`, and
//!   a `{lower, upper}` serde representation.
//! - `algebra`: Intersection and merge of two (possibly absent) ranges with
//!   closed-interval semantics: touching ranges are connected.
//! - `parse`: `FromStr` for naturally ordered ranges (`[a, b]` and `a..=b`)
//!   together with `ParseRangeError`.

pub mod algebra;
pub mod parse;
pub mod range;
