use serde::{Serialize, Deserialize};

use crate::geo_2d::Point;

/// A straight line segment between two points.
/// Stroke colour and width are not part of the segment, they travel with the canvas config.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}
impl Segment {
    /// Create a new segment.
    pub fn new(start: Point, end: Point) -> Self {
        Segment{start, end}
    }

    /// Get the length of the segment.
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}
