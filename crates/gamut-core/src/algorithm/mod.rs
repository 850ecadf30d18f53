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

use crate::cmp::Comparator;
use crate::math::{algebra, range::Range};
use std::cmp::Ordering;

/// Checks whether the given ranges are sorted by lower bound and pairwise disjoint.
///
/// Touching ranges share a point and therefore are not disjoint.
#[inline]
pub fn is_sorted_and_disjoint<T, C>(ranges: &[Range<T, C>]) -> bool
where
    C: Comparator<T>,
{
    ranges
        .windows(2)
        .all(|w| w[0].comparer().compare(w[0].upper(), w[1].lower()) == Ordering::Less)
}

/// Binary search for the first range whose lower bound is `>= key`.
///
/// Returns `ranges.len()` if every range starts before `key`.
///
/// # Panics
///
/// In debug builds, this function will panic if `ranges` is not sorted
/// and disjoint.
#[inline]
pub fn lower_bound<T, C>(ranges: &[Range<T, C>], key: &T) -> usize
where
    C: Comparator<T>,
{
    debug_assert!(
        is_sorted_and_disjoint(ranges),
        "called `lower_bound` with ranges that are not sorted and disjoint"
    );

    ranges.partition_point(|r| r.comparer().compare(r.lower(), key) == Ordering::Less)
}

/// Merges every connected group of ranges, returning a sorted, disjoint cover.
///
/// Ranges that overlap or touch are folded together. The result is ordered
/// by lower bound.
///
/// # Examples
///
/// ```rust
/// # use gamut_core::{algorithm::coalesce, math::range::Range};
///
/// let merged = coalesce(vec![
///     Range::between(8, 10),
///     Range::between(0, 3),
///     Range::between(3, 5),
/// ]);
/// assert_eq!(merged, vec![Range::between(0, 5), Range::between(8, 10)]);
/// ```
pub fn coalesce<T, C>(mut ranges: Vec<Range<T, C>>) -> Vec<Range<T, C>>
where
    T: Clone,
    C: Comparator<T> + Clone,
{
    ranges.sort_by(|a, b| a.comparer().compare(a.lower(), b.lower()));

    let mut result: Vec<Range<T, C>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        let merged = result
            .last()
            .and_then(|last| algebra::merge(Some(last), Some(&range)));
        match merged {
            Some(merged) => {
                if let Some(last) = result.last_mut() {
                    *last = merged;
                }
            }
            None => result.push(range),
        }
    }
    result
}

/// Returns the range shared by every input, or `None` if there is none.
///
/// An empty input has no common range.
pub fn intersect_all<'a, T, C, I>(ranges: I) -> Option<Range<T, C>>
where
    T: Clone + 'a,
    C: Comparator<T> + Clone + 'a,
    I: IntoIterator<Item = &'a Range<T, C>>,
{
    let mut iter = ranges.into_iter();
    let first = iter.next()?.clone();
    iter.try_fold(first, |acc, r| algebra::intersect(Some(&acc), Some(r)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmp::{Natural, Reversed};

    type IntegerType = i64;

    fn r(l: IntegerType, u: IntegerType) -> Range<IntegerType> {
        Range::between(l, u)
    }

    #[test]
    fn test_is_sorted_and_disjoint_empty() {
        let v: Vec<Range<IntegerType>> = vec![];
        assert!(is_sorted_and_disjoint(&v));
    }

    #[test]
    fn test_is_sorted_and_disjoint_single() {
        assert!(is_sorted_and_disjoint(&[r(0, 10)]));
    }

    #[test]
    fn test_is_sorted_and_disjoint_multiple() {
        assert!(is_sorted_and_disjoint(&[r(0, 4), r(5, 10), r(11, 20)]));
    }

    #[test]
    fn test_is_sorted_and_disjoint_touching() {
        // Closed ranges that touch share a point.
        assert!(!is_sorted_and_disjoint(&[r(0, 5), r(5, 10)]));
    }

    #[test]
    fn test_is_sorted_and_disjoint_unsorted() {
        assert!(!is_sorted_and_disjoint(&[r(10, 20), r(0, 5)]));
    }

    #[test]
    fn test_lower_bound() {
        let v = vec![r(0, 4), r(5, 9), r(10, 20)];
        assert_eq!(lower_bound(&v, &-1), 0);
        assert_eq!(lower_bound(&v, &0), 0);
        assert_eq!(lower_bound(&v, &4), 1);
        assert_eq!(lower_bound(&v, &5), 1);
        assert_eq!(lower_bound(&v, &6), 2);
        assert_eq!(lower_bound(&v, &10), 2);
        assert_eq!(lower_bound(&v, &21), 3);
    }

    #[test]
    fn test_coalesce() {
        let merged = coalesce(vec![r(12, 15), r(0, 3), r(2, 6), r(6, 8), r(20, 21)]);
        assert_eq!(merged, vec![r(0, 8), r(12, 15), r(20, 21)]);
        assert!(is_sorted_and_disjoint(&merged));
    }

    #[test]
    fn test_coalesce_empty_and_single() {
        assert!(coalesce(Vec::<Range<IntegerType>>::new()).is_empty());
        assert_eq!(coalesce(vec![r(3, 1)]), vec![r(1, 3)]);
    }

    #[test]
    fn test_coalesce_nested() {
        let merged = coalesce(vec![r(0, 100), r(10, 20), r(30, 40)]);
        assert_eq!(merged, vec![r(0, 100)]);
    }

    #[test]
    fn test_coalesce_custom_order() {
        let desc = |l, u| Range::new(l, u, Reversed(Natural));
        let merged = coalesce(vec![desc(1, 3), desc(10, 7), desc(4, 3)]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].bounds(), (&10, &7));
        assert_eq!(merged[1].bounds(), (&4, &1));
    }

    #[test]
    fn test_intersect_all() {
        let v = vec![r(0, 10), r(2, 12), r(-5, 8)];
        assert_eq!(intersect_all(&v), Some(r(2, 8)));

        let v = vec![r(0, 10), r(2, 12), r(11, 20)];
        assert_eq!(intersect_all(&v), None);

        let v: Vec<Range<IntegerType>> = vec![];
        assert_eq!(intersect_all(&v), None);
    }
}
