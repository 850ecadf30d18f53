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

//! # Time Span Helpers
//!
//! Free functions that build time cursors from bounds, other ranges, or the
//! clock, and measure the length of a time window.

use crate::Timestamp;
use crate::clock::{Clock, SystemClock};
use crate::interval::{TimeInterval, TimeOption};
use chrono::TimeDelta;
use gamut_core::Bounded;

/// Creates a cursor over `[start, end]`; see [`TimeInterval::new`].
#[inline]
pub fn time<I>(start: Option<Timestamp>, end: Option<Timestamp>, options: I) -> TimeInterval
where
    I: IntoIterator<Item = TimeOption>,
{
    TimeInterval::new(start, end, options)
}

/// Creates a cursor over the bounds of any time range.
///
/// # Examples
///
/// ```rust
/// # use gamut_core::Bounded;
/// # use gamut_time::{interval::TimeInterval, span::interval};
/// use chrono::{TimeDelta, TimeZone, Utc};
///
/// let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let a = TimeInterval::new(Some(t0), Some(t0 + TimeDelta::hours(2)), []);
/// let b = TimeInterval::new(Some(t0 + TimeDelta::hours(1)), Some(t0 + TimeDelta::hours(5)), []);
///
/// let overlap = a.intersect(&b).unwrap();
/// let mut cursor = interval(&overlap, []);
/// assert_eq!(cursor.steps().count(), 2);
/// ```
#[inline]
pub fn interval<R, I>(range: &R, options: I) -> TimeInterval
where
    R: Bounded<Option<Timestamp>> + ?Sized,
    I: IntoIterator<Item = TimeOption>,
{
    let (start, end) = range.bounds();
    TimeInterval::new(*start, *end, options)
}

/// Creates a cursor from `start` to the current wall-clock instant.
///
/// Returns `None` if `start` is absent or lies in the future.
#[inline]
pub fn since(start: Option<Timestamp>) -> Option<TimeInterval> {
    since_with(&SystemClock, start)
}

/// Creates a cursor from `start` to `clock.now()`.
///
/// Returns `None` if `start` is absent or lies after `clock.now()`.
///
/// # Examples
///
/// ```rust
/// # use gamut_time::{clock::FixedClock, span::{duration, since_with}};
/// use chrono::{TimeDelta, TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// let clock = FixedClock(now);
///
/// let window = since_with(&clock, Some(now - TimeDelta::hours(1))).unwrap();
/// assert_eq!(duration(&window), TimeDelta::hours(1));
/// assert!(since_with(&clock, Some(now + TimeDelta::seconds(1))).is_none());
/// ```
pub fn since_with<C>(clock: &C, start: Option<Timestamp>) -> Option<TimeInterval>
where
    C: Clock + ?Sized,
{
    let start = start?;
    let now = clock.now();
    if start > now {
        return None;
    }
    Some(TimeInterval::new(Some(start), Some(now), []))
}

/// Returns `upper - lower` of a time range, or zero if a bound is absent.
#[inline]
pub fn duration<R>(range: &R) -> TimeDelta
where
    R: Bounded<Option<Timestamp>> + ?Sized,
{
    match range.bounds() {
        (Some(lower), Some(upper)) => upper.signed_duration_since(*lower),
        _ => TimeDelta::zero(),
    }
}
