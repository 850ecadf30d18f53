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

use crate::cmp::{Comparator, Natural};
use crate::math::algebra;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::cmp::Ordering;

/// The shared contract of everything that spans a closed interval `[lower, upper]`.
///
/// An implementor only has to expose its bounds and its comparator. Membership
/// filtering and set algebra are provided on top of those two accessors, so
/// plain ranges and stateful cursors alike get `pick`, `unpick`, `intersect`
/// and `merge` for free.
///
/// Implementors may override [`Bounded::contains`]; every provided filter is
/// routed through it.
///
/// # Examples
///
/// ```rust
/// # use gamut_core::math::range::{Bounded, Range};
///
/// let r = Range::between(90, 100);
/// assert!(r.contains(&90));
/// assert_eq!(r.pick([1, 2, 99, 101]), vec![99]);
/// assert_eq!(r.unpick([1, 2, 99, 101]), vec![1, 2, 101]);
/// ```
pub trait Bounded<T> {
    /// The comparator that orders the bounds.
    type Cmp: Comparator<T>;

    /// Returns the lower and upper bound.
    fn bounds(&self) -> (&T, &T);

    /// Returns the comparator that orders the bounds.
    fn comparer(&self) -> &Self::Cmp;

    /// Returns `true` if `value` lies within `[lower, upper]`, both ends included.
    fn contains(&self, value: &T) -> bool {
        let (lower, upper) = self.bounds();
        let c = self.comparer();
        c.compare(value, lower) != Ordering::Less && c.compare(value, upper) != Ordering::Greater
    }

    /// Returns the values that lie within the range, in input order.
    ///
    /// Duplicates are kept: every occurrence that is in range is returned.
    fn pick<I>(&self, values: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        values
            .into_iter()
            .filter(|v| self.contains(Borrow::<T>::borrow(v)))
            .collect()
    }

    /// Returns the values that lie outside the range, in input order.
    ///
    /// A value is outside if it is below the lower bound or above the upper
    /// bound. Together with [`Bounded::pick`] this partitions the input.
    fn unpick<I>(&self, values: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        values
            .into_iter()
            .filter(|v| !self.contains(Borrow::<T>::borrow(v)))
            .collect()
    }

    /// Returns `true` if at least one value lies within the range.
    fn any<I>(&self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        values
            .into_iter()
            .any(|v| self.contains(Borrow::<T>::borrow(&v)))
    }

    /// Returns `true` if every value lies within the range.
    ///
    /// Vacuously `true` for an empty input.
    fn all<I>(&self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        values
            .into_iter()
            .all(|v| self.contains(Borrow::<T>::borrow(&v)))
    }

    /// Returns the overlap of `self` and `other`, ordered by `self`'s comparator.
    ///
    /// Touching ranges overlap in a single point. Returns `None` if the
    /// ranges are disjoint.
    fn intersect<B>(&self, other: &B) -> Option<Range<T, Self::Cmp>>
    where
        B: Bounded<T> + ?Sized,
        T: Clone,
        Self::Cmp: Clone,
    {
        algebra::intersect(Some(self), Some(other))
    }

    /// Returns the smallest range covering both `self` and `other`.
    ///
    /// Returns `None` if a gap separates the ranges, since no single closed
    /// range covers exactly their union.
    fn merge<B>(&self, other: &B) -> Option<Range<T, Self::Cmp>>
    where
        B: Bounded<T, Cmp = Self::Cmp> + ?Sized,
        T: Clone,
        Self::Cmp: Clone,
    {
        algebra::merge(Some(self), Some(other))
    }
}

/// A closed interval `[lower, upper]` ordered by an injected comparator.
///
/// Construction normalizes the bounds, so `lower <= upper` always holds under
/// the stored comparator. A `Range` never changes after construction; the set
/// operations return new values.
///
/// # Invariants
///
/// For ranges built with [`Range::new`], [`Range::between`], a conversion or
/// deserialization, `comparer.compare(&lower, &upper)` is never
/// `Ordering::Greater`. Results of `intersect` and `merge` carry operand bounds
/// as the operands report them.
///
/// # Examples
///
/// ```rust
/// # use gamut_core::math::range::Range;
///
/// let r = Range::between(100, 90);
/// assert_eq!(r.bounds(), (&90, &100));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T, C = Natural> {
    lower: T,
    upper: T,
    comparer: C,
}

impl<T, C> Range<T, C>
where
    C: Comparator<T>,
{
    /// Creates a new `Range`, swapping the bounds if they arrive in descending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_core::math::range::Range;
    ///
    /// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    /// let r = Range::new("long", "a", by_len);
    /// assert_eq!(r.bounds(), (&"a", &"long"));
    /// ```
    #[inline]
    pub fn new(lower: T, upper: T, comparer: C) -> Self {
        if comparer.compare(&lower, &upper) == Ordering::Greater {
            Self::new_unchecked(upper, lower, comparer)
        } else {
            Self::new_unchecked(lower, upper, comparer)
        }
    }

    /// Creates a new `Range` without normalizing the bounds in release builds.
    ///
    /// The caller must ensure `lower <= upper` under `comparer`.
    /// This function contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub(crate) fn new_unchecked(lower: T, upper: T, comparer: C) -> Self {
        debug_assert!(
            comparer.compare(&lower, &upper) != Ordering::Greater,
            "Invalid range: lower must not be greater than upper"
        );
        Self::from_bounds(lower, upper, comparer)
    }

    /// Creates a new `Range` from bounds taken verbatim from another range.
    ///
    /// Neither checks nor reorders. Implementors of [`Bounded`] may report
    /// bounds that are not ascending under their own comparer (an absent
    /// start under [`Option`] orderings that sort absence last), and set
    /// algebra has to carry those through unchanged.
    #[inline]
    pub(crate) fn from_bounds(lower: T, upper: T, comparer: C) -> Self {
        Self {
            lower,
            upper,
            comparer,
        }
    }

    /// Returns the lower and upper bound.
    #[inline]
    pub fn bounds(&self) -> (&T, &T) {
        (&self.lower, &self.upper)
    }

    /// Returns the lower bound.
    #[inline]
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// Returns the upper bound.
    #[inline]
    pub fn upper(&self) -> &T {
        &self.upper
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Consumes the range and returns its bounds.
    #[inline]
    pub fn into_bounds(self) -> (T, T) {
        (self.lower, self.upper)
    }

    /// Returns `true` if `value` lies within `[lower, upper]`, both ends included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_core::math::range::Range;
    ///
    /// let r = Range::between(90, 100);
    /// assert!(r.contains(&90));
    /// assert!(r.contains(&100));
    /// assert!(!r.contains(&89));
    /// assert!(!r.contains(&101));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        Bounded::contains(self, value)
    }

    /// Returns `true` if `other` lies entirely inside `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_core::math::range::Range;
    ///
    /// let outer = Range::between(0, 10);
    /// assert!(outer.contains_range(&Range::between(0, 10)));
    /// assert!(outer.contains_range(&Range::between(2, 8)));
    /// assert!(!outer.contains_range(&Range::between(5, 11)));
    /// ```
    #[inline]
    pub fn contains_range<B>(&self, other: &B) -> bool
    where
        B: Bounded<T> + ?Sized,
    {
        let (lower, upper) = other.bounds();
        self.comparer.compare(lower, &self.lower) != Ordering::Less
            && self.comparer.compare(upper, &self.upper) != Ordering::Greater
    }

    /// Returns `true` if the range holds a single point (`lower == upper`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_core::math::range::Range;
    ///
    /// assert!(Range::between(5, 5).is_degenerate());
    /// assert!(!Range::between(5, 6).is_degenerate());
    /// ```
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.comparer.compare(&self.lower, &self.upper) == Ordering::Equal
    }
}

impl<T> Range<T, Natural>
where
    T: PartialOrd,
{
    /// Creates a new `Range` ordered by the natural order of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_core::math::range::Range;
    ///
    /// let r = Range::between(90, 100);
    /// assert_eq!(r.bounds(), (&90, &100));
    /// ```
    #[inline]
    pub fn between(lower: T, upper: T) -> Self {
        Self::new(lower, upper, Natural)
    }
}

impl<T, C> Bounded<T> for Range<T, C>
where
    C: Comparator<T>,
{
    type Cmp = C;

    #[inline]
    fn bounds(&self) -> (&T, &T) {
        (&self.lower, &self.upper)
    }

    #[inline]
    fn comparer(&self) -> &C {
        &self.comparer
    }
}

impl<T, C> std::fmt::Debug for Range<T, C>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Range")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

impl<T, C> std::fmt::Display for Range<T, C>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

impl<T> std::ops::RangeBounds<T> for Range<T, Natural> {
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.lower)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.upper)
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for Range<T, Natural>
where
    T: PartialOrd,
{
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (lower, upper) = range.into_inner();
        Self::between(lower, upper)
    }
}

impl<T, C> From<Range<T, C>> for std::ops::RangeInclusive<T> {
    #[inline]
    fn from(range: Range<T, C>) -> Self {
        range.lower..=range.upper
    }
}

#[derive(Serialize)]
#[serde(rename = "Range")]
struct BoundsRef<'a, T> {
    lower: &'a T,
    upper: &'a T,
}

#[derive(Deserialize)]
#[serde(rename = "Range")]
struct BoundsOwned<T> {
    lower: T,
    upper: T,
}

impl<T, C> Serialize for Range<T, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BoundsRef {
            lower: &self.lower,
            upper: &self.upper,
        }
        .serialize(serializer)
    }
}

impl<'de, T, C> Deserialize<'de> for Range<T, C>
where
    T: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BoundsOwned::deserialize(deserializer)?;
        Ok(Self::new(raw.lower, raw.upper, C::default()))
    }
}
