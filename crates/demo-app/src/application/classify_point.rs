//! ClassifyPoint use case: pairs a point with its quadrant and the message
//! that reports it.

use point_core::{Point, Quadrant};

/// Outcome of classifying one point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub point: Point,
    pub quadrant: Quadrant,
    /// `"<point> is in quadrant: <n>"`.
    pub message: String,
}

/// Classifies `point` and formats the report message.
///
/// ```rust
/// use demo_app::application::classify_point::classify;
/// use point_core::Point;
///
/// let c = classify(Point::new(2, -1));
/// assert_eq!(c.message, "Point[x=2,y=-1] is in quadrant: 4");
/// ```
pub fn classify(point: Point) -> Classification {
    let quadrant = point.quadrant();
    Classification {
        point,
        quadrant,
        message: format!("{point} is in quadrant: {quadrant}"),
    }
}
