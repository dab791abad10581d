/*!
 * Koch curve generator.
 *
 * A side of order `n` is four sides of order `n - 1` at a third of the length,
 * turned by +0, +60, -120 and +60 degrees. Order 0 is a single straight segment.
 * The heading is threaded through the recursion as a return value.
 */

mod proc_errors;

use crate::geo_2d::{Heading, Point, Segment};

// Re-export errors
pub use proc_errors::{
    KochError,
    ProcResult,
    invalid_arg,
};

/// Heading changes applied before each of the four sub-curves.
const TURNS: [Heading; 4] = [0.0, 60.0, -120.0, 60.0];

/// One generated Koch curve.
/// Contains the emitted segments in drawing order, and where the pen ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct KochCurve {
    pub segments: Vec<Segment>,
    pub end: Point,
    pub end_heading: Heading,
}

/// Number of base segments a curve of `order` emits (`4^order`).
/// Errors if the order is negative or the count does not fit in a `usize`.
pub fn segment_count(order: i32) -> ProcResult<usize> {
    let order = check_order(order)?;
    match 4usize.checked_pow(order) {
        Some(count) => Ok(count),
        None => invalid_arg(&format!("Order {order} emits more segments than can be addressed")),
    }
}

/// Generate one Koch curve.
/// Starts at `start` facing `heading` (degrees), and covers `size` units of straight-line distance.
/// Returns a `ProcResult` with the `KochCurve` or an `Err` for a negative order,
/// a negative or non-finite size, or a non-finite heading/start.
pub fn koch_curve(order: i32, size: f64, start: Point, heading: Heading) -> ProcResult<KochCurve> {
    let mut segments = Vec::new();
    let (end, end_heading) = koch_curve_into(order, size, start, heading, &mut segments)?;
    Ok(KochCurve{segments, end, end_heading})
}

/// Generate one Koch curve, appending its segments to `segments`.
/// Used by the shape assemblers to chain several sides into one buffer.
/// Returns the end point and end heading.
pub fn koch_curve_into(
    order: i32,
    size: f64,
    start: Point,
    heading: Heading,
    segments: &mut Vec<Segment>,
) -> ProcResult<(Point, Heading)> {
    let order = check_order(order)?;
    if !size.is_finite() || size < 0.0 {
        invalid_arg(&format!("Size must be finite and non-negative, got {size}"))?;
    }
    if !heading.is_finite() {
        invalid_arg(&format!("Heading must be finite, got {heading}"))?;
    }
    if !start.is_finite() {
        invalid_arg(&format!("Start point must be finite, got {start}"))?;
    }

    Ok(recurse(order, size, start, heading, segments))
}

fn check_order(order: i32) -> ProcResult<u32> {
    match u32::try_from(order) {
        Ok(order) => Ok(order),
        Err(_) => invalid_arg(&format!("Order must be non-negative, got {order}")),
    }
}

fn recurse(order: u32, size: f64, start: Point, heading: Heading, segments: &mut Vec<Segment>) -> (Point, Heading) {
    if order == 0 {
        let end = start.step(size, heading);
        segments.push(Segment::new(start, end));
        return (end, heading);
    }

    let size = size / 3.0;
    let mut pos = start;
    let mut heading = heading;
    for turn in TURNS {
        (pos, heading) = recurse(order - 1, size, pos, heading + turn, segments);
    }
    (pos, heading)
}
