use crate::geo_2d::Heading;

/// A displacement on the canvas plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoVector {
    pub x: f64,
    pub y: f64,
}
impl GeoVector {
    /// Create a new vector.
    pub fn new(x: f64, y: f64) -> Self {
        GeoVector{x, y}
    }

    /// Create a vector of `length` pointing along `heading` (degrees).
    pub fn from_polar(length: f64, heading: Heading) -> Self {
        let radians = heading.to_radians();
        GeoVector{
            x: length * radians.cos(),
            y: length * radians.sin(),
        }
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_keeps_length() {
        for heading in [-120.0, -60.0, 0.0, 60.0, 120.0] {
            let v = GeoVector::from_polar(5.0, heading);
            assert!((v.norm() - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn sixty_degrees() {
        let v = GeoVector::from_polar(100.0, 60.0);
        assert!((v.x - 50.0).abs() < 1e-9);
        assert!((v.y - 86.602_540_378_443_86).abs() < 1e-9);
    }
}
