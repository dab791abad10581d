use serde::{Serialize, Deserialize};

use crate::geo_2d::{GeoVector, Heading, Point, Segment};
use crate::koch;
use crate::request::CanvasCfg;
use crate::shapes::methods;

/// Heading of the right-hand side, from the bottom-right vertex up to the apex.
const RIGHT_SIDE_HEADING: Heading = -120.0;
/// Heading of the left-hand side, from the apex down to the bottom-left vertex.
const LEFT_SIDE_HEADING: Heading = 120.0;

/// Half Snowflake shape struct.
/// The two oblique sides of the snowflake, without the base.
/// Placed like the full snowflake so both line up on the canvas.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Method {
    #[serde(default = "Method::default_size")]
    size: f64,
}
impl Method {
    pub fn default_size() -> f64 {
        500.0
    }
}
impl Default for Method {
    fn default() -> Self {
        Method{
            size: Method::default_size(),
        }
    }
}

impl methods::ShapeMethodTrait for Method {
    fn get_shape_name(&self) -> &'static str {
        "Half Snowflake"
    }

    fn get_size(&self) -> f64 {
        self.size
    }

    fn start_position(&self, canvas: &CanvasCfg) -> Point {
        methods::centred_triangle_start(canvas, self.size)
    }

    fn assemble(&self, order: i32, start: Point) -> koch::ProcResult<Vec<Segment>> {
        assemble(order, self.size, start)
    }
}

/// `start` is the bottom-left vertex A. The bottom-right vertex B sits `size` to its right.
/// Draws B to the apex C, then C back to A. The base A-B is not drawn.
pub fn assemble(order: i32, size: f64, start: Point) -> koch::ProcResult<Vec<Segment>> {
    let mut segments = Vec::new();
    let bottom_right = start + GeoVector::new(size, 0.0);
    let (apex, _) = koch::koch_curve_into(order, size, bottom_right, RIGHT_SIDE_HEADING, &mut segments)?;
    koch::koch_curve_into(order, size, apex, LEFT_SIDE_HEADING, &mut segments)?;
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_b_and_ends_at_a() {
        let start = Point::new(150.0, 472.0);
        for order in 0..=4 {
            let segments = assemble(order, 500.0, start).unwrap();
            assert_eq!(segments.len(), 2 * 4usize.pow(order as u32));
            assert!(segments[0].start.distance(&Point::new(650.0, 472.0)) < 1e-9);
            assert!(segments.last().unwrap().end.distance(&start) < 1e-6);
        }
    }

    #[test]
    fn order_zero_apex() {
        let segments = assemble(0, 100.0, Point::zero()).unwrap();
        let apex = Point::new(50.0, -100.0 * 3f64.sqrt() / 2.0);
        assert!(segments[0].end.distance(&apex) < 1e-9);
        assert!(segments[1].start.distance(&apex) < 1e-9);
    }

    #[test]
    fn base_is_not_drawn() {
        let start = Point::new(0.0, 0.0);
        let segments = assemble(2, 90.0, start).unwrap();
        // Every emitted segment stays on or above the base line
        for segment in segments.iter() {
            assert!(segment.start.y <= 1e-9 && segment.end.y <= 1e-9);
        }
    }
}
