//! Two-dimensional point domain entity.
//!
//! A [`Point`] is an immutable pair of `i32` coordinates.  The plane is split
//! by the two axes into four quadrants, numbered counter-clockwise starting
//! with the region where both coordinates are positive:
//!
//! ```text
//!            y
//!            |
//!    Second  |  First
//!    (-, +)  |  (+, +)
//!  ----------+---------- x
//!    Third   |  Fourth
//!    (-, -)  |  (+, -)
//!            |
//! ```
//!
//! Points lying on either axis (the origin included) belong to no quadrant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of the canonical textual form `Point[x=<x>,y=<y>]`.
const CANONICAL_PREFIX: &str = "Point[";

/// Suffix of the canonical textual form.
const CANONICAL_SUFFIX: &str = "]";

/// The region of the plane a [`Point`] lies in.
///
/// The discriminant of each variant is its conventional quadrant number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Quadrant {
    /// On the x axis, the y axis, or the origin.
    None = 0,
    /// Positive x, positive y.
    First = 1,
    /// Negative x, positive y.
    Second = 2,
    /// Negative x, negative y.
    Third = 3,
    /// Positive x, negative y.
    Fourth = 4,
}

impl Quadrant {
    /// Returns the quadrant number in `0..=4`, where `0` means "no quadrant".
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns `true` for [`Quadrant::None`].
    pub fn is_on_axis(self) -> bool {
        self == Quadrant::None
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Errors returned when parsing a [`Point`] from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointParseError {
    /// The input was empty or only whitespace.
    #[error("cannot parse a point from empty input")]
    Empty,

    /// The input matched neither `Point[x=..,y=..]` nor `x,y`.
    #[error("malformed point: {0:?}")]
    Malformed(String),

    /// A coordinate was present but is not a valid `i32`.
    #[error("invalid {axis} coordinate: {value:?}")]
    InvalidCoordinate { axis: char, value: String },
}

/// An immutable point in two-dimensional integer space.
///
/// Equality and hashing are derived from both coordinates, so points can be
/// used as map keys or set members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a point at `(x, y)`.  Every pair of integers is valid.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Returns the y coordinate.
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Classifies the point into one of the four quadrants, or
    /// [`Quadrant::None`] when it lies on an axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use point_core::{Point, Quadrant};
    ///
    /// assert_eq!(Point::new(2, -1).quadrant(), Quadrant::Fourth);
    /// assert_eq!(Point::new(0, 0).quadrant().number(), 0);
    /// ```
    pub fn quadrant(&self) -> Quadrant {
        if self.x == 0 || self.y == 0 {
            return Quadrant::None;
        }
        match (self.x > 0, self.y > 0) {
            (true, true) => Quadrant::First,
            (false, true) => Quadrant::Second,
            (false, false) => Quadrant::Third,
            (true, false) => Quadrant::Fourth,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point[x={},y={}]", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = PointParseError;

    /// Parses either the canonical form `Point[x=2,y=-1]` or the short form
    /// `2,-1`.  Whitespace around the whole input and around each coordinate
    /// is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PointParseError::Empty);
        }

        let canonical = trimmed
            .strip_prefix(CANONICAL_PREFIX)
            .and_then(|rest| rest.strip_suffix(CANONICAL_SUFFIX));

        let (raw_x, raw_y) = match canonical {
            Some(body) => {
                let (x_part, y_part) = split_pair(body, trimmed)?;
                let x = x_part
                    .trim()
                    .strip_prefix("x=")
                    .ok_or_else(|| PointParseError::Malformed(trimmed.to_string()))?;
                let y = y_part
                    .trim()
                    .strip_prefix("y=")
                    .ok_or_else(|| PointParseError::Malformed(trimmed.to_string()))?;
                (x, y)
            }
            None => split_pair(trimmed, trimmed)?,
        };

        Ok(Self::new(
            parse_coordinate('x', raw_x)?,
            parse_coordinate('y', raw_y)?,
        ))
    }
}

/// Splits `body` at its single comma.
fn split_pair<'a>(body: &'a str, original: &str) -> Result<(&'a str, &'a str), PointParseError> {
    let (left, right) = body
        .split_once(',')
        .ok_or_else(|| PointParseError::Malformed(original.to_string()))?;
    if right.contains(',') {
        return Err(PointParseError::Malformed(original.to_string()));
    }
    Ok((left, right))
}

fn parse_coordinate(axis: char, raw: &str) -> Result<i32, PointParseError> {
    let value = raw.trim();
    value
        .parse::<i32>()
        .map_err(|_| PointParseError::InvalidCoordinate {
            axis,
            value: value.to_string(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
