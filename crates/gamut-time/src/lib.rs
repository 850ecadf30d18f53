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

//! # Gamut Time
//!
//! Closed time windows with a stepping cursor, built on the range algebra of
//! `gamut_core`.
//!
//! ## Modules
//!
//! - `order`: `TimeOrder`, the comparator for optional timestamps (an absent
//!   instant sorts last).
//! - `clock`: The `Clock` source of "now" with `SystemClock` and
//!   `FixedClock`.
//! - `interval`: `TimeInterval`, a `[start, end]` window with a cursor that
//!   walks it in fixed (possibly negative) steps, its options, builder, and
//!   serde configuration.
//! - `span`: Helpers: `time`, `interval`, `since`, `since_with`, `duration`.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use gamut_core::Bounded;
//! use gamut_time::{span::duration, time, with_initial_value, with_interval};
//!
//! let s = Utc.with_ymd_and_hms(2023, 7, 7, 8, 10, 0).unwrap();
//! let i = s + TimeDelta::minutes(10);
//! let options = [with_initial_value(i), with_interval(TimeDelta::minutes(1))];
//!
//! let t1 = time(Some(s), Some(s + TimeDelta::hours(1)), options);
//! let t2 = time(Some(s), Some(s - TimeDelta::hours(1)), options);
//!
//! let merged = t1.merge(&t2).unwrap();
//! assert_eq!(merged.bounds(), (&Some(s - TimeDelta::hours(1)), &Some(s + TimeDelta::hours(1))));
//! assert_eq!(duration(&merged), TimeDelta::hours(2));
//! ```

use chrono::{DateTime, Utc};

pub mod clock;
pub mod interval;
pub mod order;
pub mod span;

/// An instant on the UTC timeline.
pub type Timestamp = DateTime<Utc>;

pub use clock::{Clock, FixedClock, SystemClock};
pub use interval::{
    CursorState, Steps, TimeInterval, TimeIntervalBuilder, TimeIntervalConfig, TimeOption,
    with_initial_value, with_interval,
};
pub use order::TimeOrder;
pub use span::{duration, since, since_with, time};
