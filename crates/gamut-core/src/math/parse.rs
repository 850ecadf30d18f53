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

use crate::cmp::Natural;
use crate::math::range::Range;
use std::fmt::Display;
use std::str::FromStr;

/// Which end of a range failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundSide {
    Lower,
    Upper,
}

impl Display for BoundSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundSide::Lower => write!(f, "lower"),
            BoundSide::Upper => write!(f, "upper"),
        }
    }
}

/// Errors that can occur while parsing a `Range` from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRangeError {
    /// The input is neither `[lower, upper]` nor `lower..=upper`.
    MissingDelimiter,
    /// One of the bounds could not be parsed.
    InvalidBound { side: BoundSide, text: String },
}

impl Display for ParseRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseRangeError::MissingDelimiter => {
                write!(f, "expected `[lower, upper]` or `lower..=upper`")
            }
            ParseRangeError::InvalidBound { side, text } => {
                write!(f, "invalid {} bound: '{}'", side, text)
            }
        }
    }
}

impl std::error::Error for ParseRangeError {}

fn split_bounds(s: &str) -> Result<(&str, &str), ParseRangeError> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix('[') {
        return inner
            .strip_suffix(']')
            .and_then(|inner| inner.split_once(','))
            .ok_or(ParseRangeError::MissingDelimiter);
    }
    s.split_once("..=").ok_or(ParseRangeError::MissingDelimiter)
}

fn parse_bound<T: FromStr>(text: &str, side: BoundSide) -> Result<T, ParseRangeError> {
    let text = text.trim();
    text.parse().map_err(|_| ParseRangeError::InvalidBound {
        side,
        text: text.to_string(),
    })
}

/// Parses `[lower, upper]` or `lower..=upper` into a naturally ordered range.
///
/// Bounds given in descending order are swapped, just like [`Range::between`].
///
/// # Examples
///
/// ```rust
/// # use gamut_core::math::range::Range;
///
/// let r: Range<i32> = "[100, 90]".parse().unwrap();
/// assert_eq!(r.bounds(), (&90, &100));
///
/// let r: Range<f64> = "-1.5..=2".parse().unwrap();
/// assert_eq!(r.bounds(), (&-1.5, &2.0));
/// ```
impl<T> FromStr for Range<T, Natural>
where
    T: FromStr + PartialOrd,
{
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lower, upper) = split_bounds(s)?;
        let lower = parse_bound(lower, BoundSide::Lower)?;
        let upper = parse_bound(upper, BoundSide::Upper)?;
        Ok(Range::between(lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bracket_form() {
        let r: Range<i32> = "[90, 100]".parse().unwrap();
        assert_eq!(r.bounds(), (&90, &100));

        let r: Range<i32> = "  [ -3 ,4 ]  ".parse().unwrap();
        assert_eq!(r.bounds(), (&-3, &4));
    }

    #[test]
    fn test_parse_inclusive_form() {
        let r: Range<u8> = "1..=9".parse().unwrap();
        assert_eq!(r.bounds(), (&1, &9));
    }

    #[test]
    fn test_parse_normalizes() {
        let r: Range<i64> = "[10, -10]".parse().unwrap();
        assert_eq!(r.bounds(), (&-10, &10));
    }

    #[test]
    fn test_parse_strings() {
        let r: Range<String> = "[pear, apple]".parse().unwrap();
        assert_eq!(r.bounds(), (&"apple".to_string(), &"pear".to_string()));
    }

    #[test]
    fn test_display_round_trip() {
        let r = Range::between(-7, 12);
        let parsed: Range<i32> = r.to_string().parse().unwrap();
        assert_eq!(parsed, r);
    }

    #[test]
    fn test_parse_missing_delimiter() {
        assert_eq!(
            "1 2".parse::<Range<i32>>(),
            Err(ParseRangeError::MissingDelimiter)
        );
        assert_eq!(
            "[1, 2".parse::<Range<i32>>(),
            Err(ParseRangeError::MissingDelimiter)
        );
        assert_eq!(
            "[1 2]".parse::<Range<i32>>(),
            Err(ParseRangeError::MissingDelimiter)
        );
        assert_eq!("".parse::<Range<i32>>(), Err(ParseRangeError::MissingDelimiter));
    }

    #[test]
    fn test_parse_invalid_bound() {
        assert_eq!(
            "[x, 2]".parse::<Range<i32>>(),
            Err(ParseRangeError::InvalidBound {
                side: BoundSide::Lower,
                text: "x".to_string()
            })
        );
        assert_eq!(
            "1..=".parse::<Range<i32>>(),
            Err(ParseRangeError::InvalidBound {
                side: BoundSide::Upper,
                text: String::new()
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = ParseRangeError::InvalidBound {
            side: BoundSide::Upper,
            text: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid upper bound: 'abc'");
        assert_eq!(
            ParseRangeError::MissingDelimiter.to_string(),
            "expected `[lower, upper]` or `lower..=upper`"
        );
    }
}
