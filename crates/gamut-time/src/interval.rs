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

//! # Time Interval Cursor
//!
//! A closed time span `[start, end]` with a cursor that walks it in fixed
//! steps. Either end may be absent, leaving that side unbounded.
//!
//! ## Motivation
//!
//! Batch jobs, backfills, and reports often walk a window of time hour by
//! hour (or minute by minute, or backwards). `TimeInterval` keeps the
//! window, the step, and the position together and tells the caller when
//! the last position inside the window has been reached.
//!
//! ## Highlights
//!
//! - Bounds given in descending order are swapped.
//! - The step defaults to one hour and may be zero or negative.
//! - `advance()` returns the position *before* the step and a flag that is
//!   `true` on the last position; the cursor never leaves the window.
//! - A zero step terminates on the very first call instead of spinning.
//! - `reset()` rewinds to the initial position; `steps()` drives the cursor
//!   as an `Iterator`.
//! - Implements `Bounded`, so `pick`, `unpick`, `intersect`, and `merge`
//!   from `gamut_core` apply directly.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use gamut_time::interval::{TimeInterval, TimeOption};
//!
//! let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let mut cursor = TimeInterval::new(
//!     Some(t0),
//!     Some(t0 + TimeDelta::hours(3)),
//!     [TimeOption::Step(TimeDelta::hours(1))],
//! );
//!
//! loop {
//!     let (current, end_of_interval) = cursor.advance();
//!     // process `current` ...
//!     # let _ = current;
//!     if end_of_interval {
//!         break;
//!     }
//! }
//! ```

use crate::Timestamp;
use crate::order::TimeOrder;
use chrono::TimeDelta;
use gamut_core::Bounded;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// The step used when none is configured: one hour.
#[inline]
pub fn default_step() -> TimeDelta {
    TimeDelta::hours(1)
}

/// A configuration option applied when constructing a [`TimeInterval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOption {
    /// The position the cursor starts from and rewinds to.
    ///
    /// Ignored if it lies strictly before the start or strictly after the end.
    InitialValue(Timestamp),
    /// The signed distance between two consecutive positions.
    Step(TimeDelta),
}

/// Sets the initial cursor position.
#[inline]
pub fn with_initial_value(value: Timestamp) -> TimeOption {
    TimeOption::InitialValue(value)
}

/// Sets the step between two positions.
#[inline]
pub fn with_interval(step: TimeDelta) -> TimeOption {
    TimeOption::Step(step)
}

/// The lifecycle of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// No position can be derived (no initial value and no start).
    Uninitialized,
    /// The cursor holds a position inside the window.
    Positioned,
    /// The next step would leave the window; the last position is kept.
    Exhausted,
}

/// A closed time window with a stepping cursor.
///
/// `advance` and `reset` mutate the cursor, so a `TimeInterval` belongs to a
/// single owner. Share it behind a lock if several tasks must drive it.
///
/// # Examples
///
/// ```rust
/// # use gamut_time::interval::{TimeInterval, TimeOption};
/// use chrono::{TimeDelta, TimeZone, Utc};
///
/// let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let mut cursor = TimeInterval::new(
///     Some(t0),
///     Some(t0 + TimeDelta::seconds(14)),
///     [TimeOption::Step(TimeDelta::seconds(3))],
/// );
///
/// let positions: Vec<_> = cursor.steps().map(|t| (t - t0).num_seconds()).collect();
/// assert_eq!(positions, vec![0, 3, 6, 9, 12]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInterval {
    start: Option<Timestamp>,
    end: Option<Timestamp>,
    initial: Option<Timestamp>,
    current: Option<Timestamp>,
    step: TimeDelta,
    exhausted: bool,
}

impl TimeInterval {
    /// Creates a new cursor over `[start, end]`.
    ///
    /// The bounds are swapped if both are present and `start` is after
    /// `end`. The initial position defaults to `start` and the step to one
    /// hour; `options` are applied in order and may override both. The
    /// cursor starts positioned on its initial value.
    pub fn new<I>(start: Option<Timestamp>, end: Option<Timestamp>, options: I) -> Self
    where
        I: IntoIterator<Item = TimeOption>,
    {
        let (start, end) = match (start, end) {
            (Some(s), Some(e)) if s > e => (Some(e), Some(s)),
            bounds => bounds,
        };

        let mut interval = Self {
            start,
            end,
            initial: start,
            current: None,
            step: default_step(),
            exhausted: false,
        };
        for option in options {
            interval.apply(option);
        }
        interval.reset();
        interval
    }

    /// Starts a builder for a cursor over `[start, end]`.
    #[inline]
    pub fn builder(start: Option<Timestamp>, end: Option<Timestamp>) -> TimeIntervalBuilder {
        TimeIntervalBuilder::new(start, end)
    }

    fn apply(&mut self, option: TimeOption) {
        match option {
            TimeOption::InitialValue(value) => {
                let before_start = self.start.is_some_and(|s| value < s);
                let after_end = self.end.is_some_and(|e| value > e);
                if before_start || after_end {
                    log::debug!(
                        "ignoring initial value {} outside of [{:?}, {:?}]",
                        value,
                        self.start,
                        self.end
                    );
                    return;
                }
                self.initial = Some(value);
            }
            TimeOption::Step(step) => self.step = step,
        }
    }

    /// Rewinds the cursor to its initial position, or to `start` if there is none.
    ///
    /// Clears exhaustion. A cursor without initial value and start stays
    /// uninitialized.
    #[inline]
    pub fn reset(&mut self) {
        self.current = self.initial.or(self.start);
        self.exhausted = false;
    }

    /// Returns the current position and moves the cursor one step.
    ///
    /// The returned position is the one *before* the step. The flag is `true`
    /// when the returned position is the last one: stepping further would
    /// leave the window, the step is zero, or no position exists at all. In
    /// that case the cursor does not move and keeps reporting the same
    /// position.
    pub fn advance(&mut self) -> (Option<Timestamp>, bool) {
        let Some(before) = self.current.or(self.initial).or(self.start) else {
            return self.exhaust(None);
        };
        if self.exhausted || self.step.is_zero() {
            return self.exhaust(Some(before));
        }

        let Some(next) = before.checked_add_signed(self.step) else {
            return self.exhaust(Some(before));
        };

        let leaves_window = if self.step > TimeDelta::zero() {
            self.end.is_some_and(|end| end < before || end < next)
        } else {
            self.start
                .is_some_and(|start| start > before || start > next)
        };
        if leaves_window {
            return self.exhaust(Some(before));
        }

        self.current = Some(next);
        (Some(before), false)
    }

    fn exhaust(&mut self, position: Option<Timestamp>) -> (Option<Timestamp>, bool) {
        if !self.exhausted {
            log::trace!("time interval exhausted at {:?}", position);
        }
        self.exhausted = true;
        self.current = position;
        (position, true)
    }

    /// Returns an iterator over the remaining positions, the last one included.
    ///
    /// An exhausted cursor yields nothing.
    #[inline]
    pub fn steps(&mut self) -> Steps<'_> {
        Steps {
            done: self.exhausted,
            interval: self,
        }
    }

    /// Returns the cursor's lifecycle state.
    #[inline]
    pub fn state(&self) -> CursorState {
        if self.exhausted {
            CursorState::Exhausted
        } else if self.current.is_some() {
            CursorState::Positioned
        } else {
            CursorState::Uninitialized
        }
    }

    /// Returns the start of the window.
    #[inline]
    pub fn start(&self) -> Option<Timestamp> {
        self.start
    }

    /// Returns the end of the window.
    #[inline]
    pub fn end(&self) -> Option<Timestamp> {
        self.end
    }

    /// Returns the position `reset` rewinds to.
    #[inline]
    pub fn initial(&self) -> Option<Timestamp> {
        self.initial
    }

    /// Returns the current position.
    #[inline]
    pub fn current(&self) -> Option<Timestamp> {
        self.current
    }

    /// Returns the step between two positions.
    #[inline]
    pub fn step(&self) -> TimeDelta {
        self.step
    }
}

impl Bounded<Option<Timestamp>> for TimeInterval {
    type Cmp = TimeOrder;

    #[inline]
    fn bounds(&self) -> (&Option<Timestamp>, &Option<Timestamp>) {
        (&self.start, &self.end)
    }

    #[inline]
    fn comparer(&self) -> &TimeOrder {
        &TimeOrder
    }

    /// Absent sides of the window are unbounded; an absent value is never contained.
    fn contains(&self, value: &Option<Timestamp>) -> bool {
        let Some(value) = value else {
            return false;
        };
        self.start.is_none_or(|start| *value >= start) && self.end.is_none_or(|end| *value <= end)
    }
}

/// Drives a [`TimeInterval`] as an iterator.
///
/// Yields every position returned by [`TimeInterval::advance`] up to and
/// including the last one.
#[derive(Debug)]
pub struct Steps<'a> {
    interval: &'a mut TimeInterval,
    done: bool,
}

impl Iterator for Steps<'_> {
    type Item = Timestamp;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let (current, end_of_interval) = self.interval.advance();
        self.done = end_of_interval || current.is_none();
        current
    }
}

impl FusedIterator for Steps<'_> {}

/// Collects options for a [`TimeInterval`].
///
/// # Examples
///
/// ```rust
/// # use gamut_time::interval::TimeInterval;
/// use chrono::{TimeDelta, TimeZone, Utc};
///
/// let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let cursor = TimeInterval::builder(Some(t0), Some(t0 + TimeDelta::days(1)))
///     .initial_value(t0 + TimeDelta::hours(6))
///     .step(TimeDelta::minutes(30))
///     .build();
///
/// assert_eq!(cursor.current(), Some(t0 + TimeDelta::hours(6)));
/// assert_eq!(cursor.step(), TimeDelta::minutes(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeIntervalBuilder {
    start: Option<Timestamp>,
    end: Option<Timestamp>,
    options: Vec<TimeOption>,
}

impl TimeIntervalBuilder {
    /// Starts a builder for the window `[start, end]` with no options.
    #[inline]
    pub fn new(start: Option<Timestamp>, end: Option<Timestamp>) -> Self {
        Self {
            start,
            end,
            options: Vec::new(),
        }
    }

    /// Sets the position the cursor starts from. Ignored if outside the window.
    #[inline]
    pub fn initial_value(mut self, value: Timestamp) -> Self {
        self.options.push(TimeOption::InitialValue(value));
        self
    }

    /// Sets the step added on every advance.
    #[inline]
    pub fn step(mut self, step: TimeDelta) -> Self {
        self.options.push(TimeOption::Step(step));
        self
    }

    /// Appends a raw [`TimeOption`].
    #[inline]
    pub fn option(mut self, option: TimeOption) -> Self {
        self.options.push(option);
        self
    }

    /// Builds the cursor, applying the options in the order they were given.
    #[inline]
    pub fn build(self) -> TimeInterval {
        TimeInterval::new(self.start, self.end, self.options)
    }
}

/// Serializable cursor settings, for example from a job definition.
///
/// ```rust
/// # use gamut_time::interval::TimeIntervalConfig;
/// let config: TimeIntervalConfig = serde_json::from_str(r#"{"step_secs": 900}"#).unwrap();
/// assert_eq!(config.step_secs, 900);
/// assert!(config.initial.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeIntervalConfig {
    /// Step in seconds; negative walks backwards.
    #[serde(default = "TimeIntervalConfig::default_step_secs")]
    pub step_secs: i64,
    /// Initial cursor position.
    #[serde(default)]
    pub initial: Option<Timestamp>,
}

impl TimeIntervalConfig {
    fn default_step_secs() -> i64 {
        default_step().num_seconds()
    }

    /// Converts the settings into cursor options.
    ///
    /// A step too large to represent is dropped and the default applies.
    pub fn options(&self) -> Vec<TimeOption> {
        let mut options = Vec::with_capacity(2);
        match TimeDelta::try_seconds(self.step_secs) {
            Some(step) => options.push(TimeOption::Step(step)),
            None => log::warn!("ignoring out of range step of {} seconds", self.step_secs),
        }
        if let Some(initial) = self.initial {
            options.push(TimeOption::InitialValue(initial));
        }
        options
    }
}

impl Default for TimeIntervalConfig {
    fn default() -> Self {
        Self {
            step_secs: Self::default_step_secs(),
            initial: None,
        }
    }
}
