use std::ops::{
    Add,
    Sub,
};
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_2d::{GeoVector, Heading};

/// A point on the canvas plane, in pixel space.
/// Has basic math support for adding vectors and taking differences.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point{x, y}
    }

    /// Create a new zero point.
    pub fn zero() -> Self {
        Point{x: 0.0, y: 0.0}
    }

    /// Get the distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        (*other - *self).norm()
    }

    /// Move `length` units along `heading` (degrees) and return the new point.
    pub fn step(&self, length: f64, heading: Heading) -> Point {
        *self + GeoVector::from_polar(length, heading)
    }

    /// Check that both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}
impl Add<GeoVector> for Point {
    type Output = Self;

    fn add(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub<Point> for Point {
    type Output = GeoVector;

    fn sub(self, rhs: Self) -> GeoVector {
        GeoVector{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
