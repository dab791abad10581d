/*!
 * Request selection.
 * Maps a request (`type` and optional `order`) onto a configured shape, places it
 * on the canvas and collects its segments into a `Drawing` for the renderer.
 */

mod proc_errors;
mod cfg;

use std::str::FromStr;

use itertools::Itertools;
use log::{debug, info};
use serde::{Serialize, Deserialize};
use strum::IntoEnumIterator;

use crate::geo_2d::{Point, Segment};
use crate::koch;
use crate::shapes::{ShapeKind, ShapeMethodTrait};

// Re-export errors
pub use proc_errors::{
    RequestError,
    ProcResult,
    invalid_arg,
};
// Re-export cfg handling
pub use cfg::{
    CanvasCfg,
    RenderCfg,
    ORDER_LIMIT,
};

/// A shape request, as it would arrive on the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    /// Requested shape name. `None` selects the full snowflake.
    pub shape_type: Option<String>,
    /// Recursion order override. `None` uses the config order.
    pub order: Option<i32>,
}
impl Request {
    /// Create a request for a shape name.
    pub fn new(shape_type: Option<&str>, order: Option<i32>) -> Self {
        Request{shape_type: shape_type.map(str::to_string), order}
    }

    /// Parse a request from a URL query string, e.g. `type=half_snowflake&order=3`.
    /// Percent-encoding is decoded. Unrelated keys are ignored, and the last
    /// occurrence of a repeated key wins.
    pub fn from_query(query: &str) -> ProcResult<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut request = Request::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "type" => request.shape_type = Some(value.into_owned()),
                "order" => match value.parse::<i32>() {
                    Ok(order) => request.order = Some(order),
                    Err(_) => invalid_arg(&format!("Order must be an integer, got \"{value}\""))?,
                },
                _ => {},
            }
        }
        Ok(request)
    }

    /// Resolve the requested shape.
    /// A missing `type` selects `full`, anything unrecognised is an `UnknownVariant` error.
    pub fn shape_kind(&self) -> ProcResult<ShapeKind> {
        let Some(name) = self.shape_type.as_deref() else {
            return Ok(ShapeKind::default());
        };
        ShapeKind::from_str(name).map_err(|_| {
            RequestError::UnknownVariant(format!(
                "\"{}\"\nAvailable types: {}",
                name,
                ShapeKind::iter().join(", "),
            ))
        })
    }

    /// Resolve the recursion order against the config, enforcing its cap.
    pub fn resolve_order(&self, cfg: &RenderCfg) -> ProcResult<i32> {
        let order = self.order.unwrap_or(cfg.order);
        if order < 0 {
            invalid_arg(&format!("Order must be non-negative, got {order}"))?;
        }
        if order as u32 > cfg.max_order {
            invalid_arg(&format!("Order {order} exceeds the maximum of {}", cfg.max_order))?;
        }
        Ok(order)
    }
}

/// Everything the renderer needs to draw one shape.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Drawing {
    pub shape: ShapeKind,
    pub order: i32,
    pub size: f64,
    pub start: Point,
    pub canvas: CanvasCfg,
    pub segments: Vec<Segment>,
}

/// Handle a shape request.
/// Returns a `ProcResult` with the `Drawing` or an `Err`.
pub fn handle_request(request: &Request, cfg: &RenderCfg) -> ProcResult<Drawing> {
    cfg.validate()?;
    let kind = request.shape_kind()?;
    let order = request.resolve_order(cfg)?;

    let method = cfg.shapes.choice(kind);
    let start = method.start_position(&cfg.canvas);
    info!("Generating {} (order {}, size {}) from {}...", method.get_shape_name(), order, method.get_size(), start);
    let per_side = koch::segment_count(order)?;
    debug!("Expecting {} segments per side", per_side);

    let segments = method.assemble(order, start)?;
    info!("Generated {} segments", segments.len());

    Ok(Drawing{
        shape: kind,
        order,
        size: method.get_size(),
        start,
        canvas: cfg.canvas.clone(),
        segments,
    })
}
