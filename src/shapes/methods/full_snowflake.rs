use serde::{Serialize, Deserialize};

use crate::geo_2d::{Heading, Point, Segment};
use crate::koch;
use crate::request::CanvasCfg;
use crate::shapes::methods;

/// Turn applied between consecutive sides.
const SIDE_TURN: Heading = -120.0;

/// Full Snowflake shape struct.
/// Three sides closing into an equilateral triangle outline, centred on the canvas.
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
        "Full Snowflake"
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

/// Draw three consecutive sides, turning -120 degrees after each.
pub fn assemble(order: i32, size: f64, start: Point) -> koch::ProcResult<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut pos = start;
    let mut heading: Heading = 0.0;
    for _ in 0..3 {
        (pos, heading) = koch::koch_curve_into(order, size, pos, heading, &mut segments)?;
        heading += SIDE_TURN;
    }
    Ok(segments)
}
