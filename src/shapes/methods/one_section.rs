use serde::{Serialize, Deserialize};

use crate::geo_2d::{Point, Segment};
use crate::koch;
use crate::request::CanvasCfg;
use crate::shapes::methods;

/// One Section shape struct.
/// The bare Koch edge, drawn left to right.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Method {
    #[serde(default = "Method::default_size")]
    size: f64,
    /// Pixels below the canvas middle for the base line.
    #[serde(default = "Method::default_baseline_offset")]
    baseline_offset: f64,
}
impl Method {
    pub fn default_size() -> f64 {
        600.0
    }
    pub fn default_baseline_offset() -> f64 {
        100.0
    }
}
impl Default for Method {
    fn default() -> Self {
        Method{
            size: Method::default_size(),
            baseline_offset: Method::default_baseline_offset(),
        }
    }
}

impl methods::ShapeMethodTrait for Method {
    fn get_shape_name(&self) -> &'static str {
        "One Section"
    }

    fn get_size(&self) -> f64 {
        self.size
    }

    fn start_position(&self, canvas: &CanvasCfg) -> Point {
        methods::baseline_start(canvas, self.size, self.baseline_offset)
    }

    fn assemble(&self, order: i32, start: Point) -> koch::ProcResult<Vec<Segment>> {
        assemble(order, self.size, start)
    }
}

/// Draw a single side at heading 0.
pub fn assemble(order: i32, size: f64, start: Point) -> koch::ProcResult<Vec<Segment>> {
    Ok(koch::koch_curve(order, size, start, 0.0)?.segments)
}
