//! # point-core
//!
//! Shared domain library for the point demo: an immutable two-dimensional
//! integer [`Point`] and the [`Quadrant`] it falls in.
//!
//! The crate has no dependencies on logging, configuration, or the
//! file system, so the classification rule can be tested in isolation.
//!
//! ```rust
//! use point_core::{Point, Quadrant};
//!
//! let p = Point::new(2, -1);
//! assert_eq!(p.quadrant(), Quadrant::Fourth);
//! assert_eq!(p.to_string(), "Point[x=2,y=-1]");
//! ```

pub mod domain;

// Re-export the domain types at the crate root so callers can write
// `point_core::Point` instead of `point_core::domain::point::Point`.
pub use domain::point::{Point, PointParseError, Quadrant};
