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

use crate::Timestamp;
use gamut_core::cmp::Comparator;
use std::cmp::Ordering;

/// Orders optional timestamps.
///
/// Present instants compare chronologically. An absent instant compares
/// equal to another absent one and after every present instant, so an open
/// end sorts last.
///
/// # Examples
///
/// ```rust
/// # use gamut_core::Comparator;
/// # use gamut_time::order::TimeOrder;
/// use chrono::{TimeZone, Utc};
/// use std::cmp::Ordering;
///
/// let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(TimeOrder.compare(&Some(t), &None), Ordering::Less);
/// assert_eq!(TimeOrder.compare(&None, &None), Ordering::Equal);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct TimeOrder;

impl Comparator<Option<Timestamp>> for TimeOrder {
    #[inline]
    fn compare(&self, a: &Option<Timestamp>, b: &Option<Timestamp>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};

    #[test]
    fn test_present_instants_compare_chronologically() {
        let t = Utc.with_ymd_and_hms(2023, 7, 7, 8, 10, 0).unwrap();
        let later = t + TimeDelta::minutes(1);
        assert_eq!(TimeOrder.compare(&Some(t), &Some(later)), Ordering::Less);
        assert_eq!(TimeOrder.compare(&Some(later), &Some(t)), Ordering::Greater);
        assert_eq!(TimeOrder.compare(&Some(t), &Some(t)), Ordering::Equal);
    }

    #[test]
    fn test_absent_sorts_last() {
        let t = Utc.with_ymd_and_hms(2023, 7, 7, 8, 10, 0).unwrap();
        assert_eq!(TimeOrder.compare(&None, &Some(t)), Ordering::Greater);
        assert_eq!(TimeOrder.compare(&Some(t), &None), Ordering::Less);
        assert_eq!(TimeOrder.compare(&None, &None), Ordering::Equal);
    }
}
