/*!
 * This is the shape methods module.
 * Adding new shapes should be done here.
 *
 * New shapes need:
 * - A struct implementing `ShapeMethodTrait`
 * - An enum variant containing that struct in `ShapeChoice`
 * - A name in `shapes::ShapeKind` and an entry in `shapes::ShapesCfg`
 *
 */

use enum_dispatch::enum_dispatch;

use crate::geo_2d::{Point, Segment};
use crate::koch;
use crate::request::CanvasCfg;

//
// ------------------------------------------------------------
// Code that requires modification to add a new shape
//      |
//      V
//

// Source files for the shapes
pub mod full_snowflake;
pub mod half_structure;
pub mod one_section;
pub mod half_snowflake;

/// Shape methods enum.
/// To add a new shape:
/// include it here,
/// add its name to `ShapeKind` and its cfg entry to `ShapesCfg`,
/// and implement the `ShapeMethodTrait` trait for it.
#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch(ShapeMethodTrait)]
pub enum ShapeChoice {
    /// Closed snowflake, three sides.
    FullSnowflake(full_snowflake::Method),
    /// Two consecutive sides from the base.
    HalfStructure(half_structure::Method),
    /// A single side.
    OneSection(one_section::Method),
    /// The two oblique sides, base omitted.
    HalfSnowflake(half_snowflake::Method),
}

//
// ------------------------------------------------------------
// Traits and helpers that don't need modification,
// but are references for adding a new shape
//      |
//      V
//

/// Shape method trait.
/// This trait must be implemented for all shapes.
#[enum_dispatch] // This is a macro that allows the enum to be used in a trait object-like way
pub trait ShapeMethodTrait {
    /// Get the display name of the shape.
    fn get_shape_name(&self) -> &'static str;

    /// Get the side length used for this shape.
    fn get_size(&self) -> f64;

    /// Get the start point that places the shape on the canvas.
    fn start_position(&self, canvas: &CanvasCfg) -> Point;

    /// Assemble the shape's segments at the given order, starting from `start`.
    /// Returns a `ProcResult` with the segments in drawing order, or the generator's `Err`.
    fn assemble(&self, order: i32, start: Point) -> koch::ProcResult<Vec<Segment>>;
}

/// Height of an equilateral triangle with side `size`.
pub fn triangle_height(size: f64) -> f64 {
    size * 3f64.sqrt() / 2.0
}

/// Bottom-left vertex of an equilateral triangle of side `size`,
/// horizontally centred and placed so its centroid sits at the canvas centre line.
pub fn centred_triangle_start(canvas: &CanvasCfg, size: f64) -> Point {
    let h = triangle_height(size);
    Point::new(
        (canvas.width as f64 - size) / 2.0,
        (canvas.height as f64 - h) / 2.0 + h * 2.0 / 3.0,
    )
}

/// Left end of a horizontal baseline of length `size`,
/// centred horizontally and `offset` pixels below the canvas middle (whole pixels).
pub fn baseline_start(canvas: &CanvasCfg, size: f64, offset: f64) -> Point {
    Point::new(
        ((canvas.width as f64 - size) / 2.0).floor(),
        (canvas.height as f64 / 2.0).floor() + offset,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_triangle_on_default_canvas() {
        let canvas = CanvasCfg::default();
        let start = centred_triangle_start(&canvas, 500.0);
        let h = 500.0 * 3f64.sqrt() / 2.0;
        assert_eq!(start.x, 150.0);
        assert!((start.y - ((800.0 - h) / 2.0 + h * 2.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn baseline_on_default_canvas() {
        let canvas = CanvasCfg::default();
        assert_eq!(baseline_start(&canvas, 500.0, 100.0), Point::new(150.0, 500.0));
        assert_eq!(baseline_start(&canvas, 600.0, 100.0), Point::new(100.0, 500.0));
    }

    #[test]
    fn baseline_floors_odd_sizes() {
        let canvas = CanvasCfg{width: 801, height: 799, ..CanvasCfg::default()};
        assert_eq!(baseline_start(&canvas, 500.0, 100.0), Point::new(150.0, 499.0));
    }
}
