mod point;
mod vector;
mod segment;

pub use point::Point;
pub use vector::GeoVector;
pub use segment::Segment;

/// Heading type (alias for f64).
/// Degrees measured from the positive x-axis. With y pointing down the canvas,
/// positive headings turn clockwise on screen.
pub type Heading = f64;
