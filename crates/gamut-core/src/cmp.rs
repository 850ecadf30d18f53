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

//! # Comparators
//!
//! Three-way ordering functions that drive every range in this crate.
//! A range never relies on `Ord` directly; it stores a `Comparator` and
//! asks it for the relative order of two values. This keeps custom
//! orderings (descending, by key, case-insensitive, ...) on equal footing
//! with the natural order.
//!
//! ## Contract
//!
//! A comparator must describe a total order for as long as a range uses
//! it: antisymmetric, transitive, and stable across repeated calls.
//!
//! ## Usage
//!
//! ```rust
//! use gamut_core::cmp::{Comparator, Natural, Reversed};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A three-way ordering over values of type `T`.
///
/// Implemented for every `Fn(&T, &T) -> Ordering`, so closures and plain
/// functions can be used wherever a comparator is expected.
pub trait Comparator<T: ?Sized> {
    /// Returns the ordering of `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns the smaller of two values, preferring `a` on ties.
    #[inline]
    fn min_of<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.compare(b, a) == Ordering::Less { b } else { a }
    }

    /// Returns the larger of two values, preferring `a` on ties.
    #[inline]
    fn max_of<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.compare(b, a) == Ordering::Greater { b } else { a }
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural order of a type.
///
/// Totally ordered types compare as usual. Values that `partial_cmp`
/// cannot order (floating point NaN) sort before everything else and
/// compare equal to each other, so ranges over floats still see a
/// total order.
///
/// # Examples
///
/// ```rust
/// # use gamut_core::cmp::{Comparator, Natural};
/// use std::cmp::Ordering;
///
/// assert_eq!(Natural.compare(&"a", &"b"), Ordering::Less);
/// assert_eq!(Natural.compare(&f64::NAN, &0.0), Ordering::Less);
/// assert_eq!(Natural.compare(&f64::NAN, &f64::NAN), Ordering::Equal);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: PartialOrd + ?Sized,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if let Some(ordering) = a.partial_cmp(b) {
            return ordering;
        }
        #[allow(clippy::eq_op)]
        let (a_nan, b_nan) = (a != a, b != b);
        match (a_nan, b_nan) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}

/// Inverts the order of the wrapped comparator.
///
/// # Examples
///
/// ```rust
/// # use gamut_core::cmp::{Comparator, Natural, Reversed};
/// use std::cmp::Ordering;
///
/// let desc = Reversed(Natural);
/// assert_eq!(desc.compare(&10, &1), Ordering::Less);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T, C> Comparator<T> for Reversed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_integers() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&2, &2), Ordering::Equal);
        assert_eq!(Natural.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn test_natural_strings() {
        assert_eq!(Natural.compare("apple", "banana"), Ordering::Less);
        assert_eq!(
            Natural.compare(&String::from("b"), &String::from("a")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_natural_nan_sorts_first() {
        assert_eq!(Natural.compare(&f64::NAN, &f64::NEG_INFINITY), Ordering::Less);
        assert_eq!(Natural.compare(&0.0_f32, &f32::NAN), Ordering::Greater);
        assert_eq!(Natural.compare(&f64::NAN, &f64::NAN), Ordering::Equal);
    }

    #[test]
    fn test_closure_comparator() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(by_abs.compare(&-5, &3), Ordering::Greater);
        assert_eq!(by_abs.compare(&-3, &3), Ordering::Equal);
    }

    #[test]
    fn test_fn_pointer_comparator() {
        fn by_len(a: &str, b: &str) -> Ordering {
            a.len().cmp(&b.len())
        }
        assert_eq!(by_len.compare("ab", "abc"), Ordering::Less);
    }

    #[test]
    fn test_reversed() {
        let desc = Reversed(Natural);
        assert_eq!(desc.compare(&1, &2), Ordering::Greater);
        assert_eq!(desc.compare(&2, &1), Ordering::Less);
        assert_eq!(desc.compare(&2, &2), Ordering::Equal);
    }

    #[test]
    fn test_min_max_prefer_first_on_ties() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(*by_abs.min_of(&-3, &3), -3);
        assert_eq!(*by_abs.max_of(&3, &-3), 3);
        assert_eq!(*Natural.min_of(&7, &2), 2);
        assert_eq!(*Natural.max_of(&7, &2), 7);
    }
}
