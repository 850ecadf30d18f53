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

//! # Range Algebra
//!
//! Intersection and merge of two closed ranges. Both operations accept
//! optional operands so callers holding possibly-absent ranges do not have
//! to unwrap first; an absent operand follows the rules documented on each
//! function.
//!
//! The ordering always comes from the first operand. The second operand is
//! expected to agree with it on every pair of values that gets compared.
//!
//! Touching ranges (one ends exactly where the other starts) are connected:
//! they intersect in a single point and merge into one range.

use crate::cmp::Comparator;
use crate::math::range::{Bounded, Range};
use std::cmp::Ordering;

/// Returns the overlap of `a` and `b`.
///
/// Returns `None` if either operand is absent or if the ranges are disjoint.
///
/// # Examples
///
/// ```rust
/// # use gamut_core::math::{algebra, range::Range};
///
/// let a = Range::between(0, 5);
/// let b = Range::between(5, 10);
/// let c = Range::between(6, 10);
///
/// assert_eq!(algebra::intersect(Some(&a), Some(&b)), Some(Range::between(5, 5)));
/// assert_eq!(algebra::intersect(Some(&a), Some(&c)), None);
/// assert_eq!(algebra::intersect(Some(&a), None::<&Range<i32>>), None);
/// ```
pub fn intersect<T, A, B>(a: Option<&A>, b: Option<&B>) -> Option<Range<T, A::Cmp>>
where
    A: Bounded<T> + ?Sized,
    B: Bounded<T> + ?Sized,
    T: Clone,
    A::Cmp: Clone,
{
    let (a, b) = (a?, b?);
    let c = a.comparer();
    let (al, au) = a.bounds();
    let (bl, bu) = b.bounds();

    // On equal ends the end of the range that starts later wins.
    let (lower, upper) = match c.compare(al, bl) {
        Ordering::Equal => (al, c.min_of(bu, au)),
        Ordering::Less => {
            // a starts first; a gap after `au` means no overlap.
            if c.compare(au, bl) == Ordering::Less {
                return None;
            }
            (bl, c.min_of(bu, au))
        }
        Ordering::Greater => {
            if c.compare(bu, al) == Ordering::Less {
                return None;
            }
            (al, c.min_of(au, bu))
        }
    };

    Some(Range::from_bounds(lower.clone(), upper.clone(), c.clone()))
}

/// Returns the smallest range covering both `a` and `b`.
///
/// If `a` is absent the result is `b`, and if `b` is absent the result is
/// `a`. Returns `None` if both are absent or if a gap separates them.
///
/// # Examples
///
/// ```rust
/// # use gamut_core::math::{algebra, range::Range};
///
/// let a = Range::between(0, 5);
/// let b = Range::between(5, 10);
/// let c = Range::between(7, 10);
///
/// assert_eq!(algebra::merge(Some(&a), Some(&b)), Some(Range::between(0, 10)));
/// assert_eq!(algebra::merge(Some(&a), Some(&c)), None);
/// assert_eq!(algebra::merge(None::<&Range<i32>>, Some(&c)), Some(c));
/// ```
pub fn merge<T, A, B>(a: Option<&A>, b: Option<&B>) -> Option<Range<T, A::Cmp>>
where
    A: Bounded<T> + ?Sized,
    B: Bounded<T, Cmp = A::Cmp> + ?Sized,
    T: Clone,
    A::Cmp: Clone,
{
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        (Some(a), None) => return Some(to_range(a)),
        (None, Some(b)) => return Some(to_range(b)),
        (None, None) => return None,
    };

    let c = a.comparer();
    let (al, au) = a.bounds();
    let (bl, bu) = b.bounds();

    let (lower, upper) = match c.compare(al, bl) {
        Ordering::Equal => (al, c.max_of(bu, au)),
        Ordering::Less => {
            // a starts first; a gap after `au` cannot be bridged.
            if c.compare(au, bl) == Ordering::Less {
                return None;
            }
            (al, c.max_of(bu, au))
        }
        Ordering::Greater => {
            if c.compare(bu, al) == Ordering::Less {
                return None;
            }
            (bl, c.max_of(au, bu))
        }
    };

    Some(Range::from_bounds(lower.clone(), upper.clone(), c.clone()))
}

/// Copies the bounds of `r` as reported, without reordering them.
#[inline]
fn to_range<T, R>(r: &R) -> Range<T, R::Cmp>
where
    R: Bounded<T> + ?Sized,
    T: Clone,
    R::Cmp: Clone,
{
    let (lower, upper) = r.bounds();
    Range::from_bounds(lower.clone(), upper.clone(), r.comparer().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmp::{Natural, Reversed};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn r(lower: i64, upper: i64) -> Range<i64> {
        Range::between(lower, upper)
    }

    fn bounds_of(range: Option<Range<i64>>) -> Option<(i64, i64)> {
        range.map(Range::into_bounds)
    }

    #[test]
    fn test_intersect_equal_starts() {
        assert_eq!(bounds_of(intersect(Some(&r(0, 5)), Some(&r(0, 9)))), Some((0, 5)));
        assert_eq!(bounds_of(intersect(Some(&r(0, 9)), Some(&r(0, 5)))), Some((0, 5)));
        assert_eq!(bounds_of(intersect(Some(&r(0, 5)), Some(&r(0, 5)))), Some((0, 5)));
    }

    #[test]
    fn test_intersect_overlap() {
        // a starts first
        assert_eq!(bounds_of(intersect(Some(&r(0, 10)), Some(&r(5, 15)))), Some((5, 10)));
        // b starts first
        assert_eq!(bounds_of(intersect(Some(&r(5, 15)), Some(&r(0, 10)))), Some((5, 10)));
    }

    #[test]
    fn test_intersect_contained() {
        assert_eq!(bounds_of(intersect(Some(&r(0, 10)), Some(&r(2, 8)))), Some((2, 8)));
        assert_eq!(bounds_of(intersect(Some(&r(2, 8)), Some(&r(0, 10)))), Some((2, 8)));
    }

    #[test]
    fn test_intersect_touching() {
        assert_eq!(bounds_of(intersect(Some(&r(0, 5)), Some(&r(5, 10)))), Some((5, 5)));
        assert_eq!(bounds_of(intersect(Some(&r(5, 10)), Some(&r(0, 5)))), Some((5, 5)));
    }

    #[test]
    fn test_intersect_disjoint() {
        assert_eq!(intersect(Some(&r(0, 5)), Some(&r(6, 10))), None);
        assert_eq!(intersect(Some(&r(6, 10)), Some(&r(0, 5))), None);
    }

    #[test]
    fn test_intersect_absent() {
        let a = r(0, 5);
        assert_eq!(intersect(Some(&a), None::<&Range<i64>>), None);
        assert_eq!(intersect(None::<&Range<i64>>, Some(&a)), None);
        assert_eq!(intersect::<i64, Range<i64>, Range<i64>>(None, None), None);
    }

    #[test]
    fn test_intersect_uses_first_comparator() {
        let a = Range::new(10, 0, Reversed(Natural));
        let b = Range::new(5, -5, Reversed(Natural));
        let i = intersect(Some(&a), Some(&b)).unwrap();
        assert_eq!(i.bounds(), (&5, &0));
        assert_eq!(*i.comparer(), Reversed(Natural));
    }

    #[test]
    fn test_intersect_does_not_alias_inputs() {
        let a = Range::between(String::from("a"), String::from("m"));
        let b = Range::between(String::from("f"), String::from("z"));
        let i = a.intersect(&b).unwrap();
        drop(a);
        drop(b);
        assert_eq!(i.bounds(), (&String::from("f"), &String::from("m")));
    }

    #[test]
    fn test_merge_equal_starts() {
        assert_eq!(bounds_of(merge(Some(&r(0, 5)), Some(&r(0, 9)))), Some((0, 9)));
        assert_eq!(bounds_of(merge(Some(&r(0, 9)), Some(&r(0, 5)))), Some((0, 9)));
    }

    #[test]
    fn test_merge_overlap() {
        assert_eq!(bounds_of(merge(Some(&r(0, 10)), Some(&r(5, 15)))), Some((0, 15)));
        assert_eq!(bounds_of(merge(Some(&r(5, 15)), Some(&r(0, 10)))), Some((0, 15)));
    }

    #[test]
    fn test_merge_contained() {
        assert_eq!(bounds_of(merge(Some(&r(0, 10)), Some(&r(2, 8)))), Some((0, 10)));
        assert_eq!(bounds_of(merge(Some(&r(2, 8)), Some(&r(0, 10)))), Some((0, 10)));
    }

    #[test]
    fn test_merge_touching() {
        assert_eq!(bounds_of(merge(Some(&r(0, 5)), Some(&r(5, 10)))), Some((0, 10)));
        assert_eq!(bounds_of(merge(Some(&r(5, 10)), Some(&r(0, 5)))), Some((0, 10)));
    }

    #[test]
    fn test_merge_disjoint() {
        assert_eq!(merge(Some(&r(0, 5)), Some(&r(6, 10))), None);
        assert_eq!(merge(Some(&r(6, 10)), Some(&r(0, 5))), None);
    }

    #[test]
    fn test_merge_absent() {
        let a = r(0, 5);
        assert_eq!(bounds_of(merge(Some(&a), None::<&Range<i64>>)), Some((0, 5)));
        assert_eq!(bounds_of(merge(None::<&Range<i64>>, Some(&a))), Some((0, 5)));
        assert_eq!(merge::<i64, Range<i64>, Range<i64>>(None, None), None);
    }

    type NoneLast = fn(&Option<i64>, &Option<i64>) -> Ordering;

    fn none_last(a: &Option<i64>, b: &Option<i64>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => x.cmp(y),
        }
    }

    /// A range whose absent lower bound sorts after its upper bound.
    fn open_lower(upper: i64) -> Range<Option<i64>, NoneLast> {
        Range::from_bounds(None, Some(upper), none_last)
    }

    #[test]
    fn test_operands_with_descending_bounds() {
        let a = open_lower(5);
        let b = open_lower(9);

        let i = intersect(Some(&a), Some(&b)).unwrap();
        assert_eq!(i.bounds(), (&None, &Some(5)));
        let i = intersect(Some(&b), Some(&a)).unwrap();
        assert_eq!(i.bounds(), (&None, &Some(5)));

        let m = merge(Some(&a), Some(&b)).unwrap();
        assert_eq!(m.bounds(), (&None, &Some(9)));
        let m = merge(Some(&b), Some(&a)).unwrap();
        assert_eq!(m.bounds(), (&None, &Some(9)));
    }

    #[test]
    fn test_merge_with_absent_copies_bounds_verbatim() {
        let a = open_lower(5);
        let m = merge(Some(&a), None::<&Range<Option<i64>, NoneLast>>).unwrap();
        assert_eq!(m.bounds(), a.bounds());
        let m = merge(None::<&Range<Option<i64>, NoneLast>>, Some(&a)).unwrap();
        assert_eq!(m.bounds(), a.bounds());
    }

    #[test]
    fn test_methods_match_free_functions() {
        let a = r(0, 10);
        let b = r(4, 12);
        assert_eq!(a.intersect(&b), intersect(Some(&a), Some(&b)));
        assert_eq!(a.merge(&b), merge(Some(&a), Some(&b)));
    }

    #[test]
    fn test_commutativity_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let a = r(rng.random_range(-20..20), rng.random_range(-20..20));
            let b = r(rng.random_range(-20..20), rng.random_range(-20..20));

            let ab = intersect(Some(&a), Some(&b));
            let ba = intersect(Some(&b), Some(&a));
            assert_eq!(ab, ba, "intersect({a}, {b})");

            let ab = merge(Some(&a), Some(&b));
            let ba = merge(Some(&b), Some(&a));
            assert_eq!(ab, ba, "merge({a}, {b})");
        }
    }

    #[test]
    fn test_intersection_is_contained_in_both_random() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let a = r(rng.random_range(-20..20), rng.random_range(-20..20));
            let b = r(rng.random_range(-20..20), rng.random_range(-20..20));
            let point = rng.random_range(-25..25);

            match intersect(Some(&a), Some(&b)) {
                Some(i) => {
                    assert!(a.contains_range(&i) && b.contains_range(&i));
                    assert_eq!(i.contains(&point), a.contains(&point) && b.contains(&point));
                }
                None => assert!(!(a.contains(&point) && b.contains(&point))),
            }

            if let Some(m) = merge(Some(&a), Some(&b)) {
                assert!(m.contains_range(&a) && m.contains_range(&b));
            }
        }
    }
}
