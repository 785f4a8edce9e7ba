//! Domain entities for the point demo.
//!
//! Pure value types with no I/O, logging, or configuration dependencies.
//! Everything here can be compiled and tested on any platform without setup.

/// Two-dimensional integer point and its quadrant classification.
///
/// See [`point::Point`] for the main type.
pub mod point;
