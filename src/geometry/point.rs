use crate::math::Point3;

/// A single position with two or three coordinates.
///
/// The Z coordinate is optional; a point without it is 2D and is treated
/// as lying on `z = 0` wherever a 3D position is required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    z: Option<f64>,
}

impl Point {
    /// Creates a 2D point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Creates a 3D point.
    #[must_use]
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Returns the X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the Z coordinate, or `None` for a 2D point.
    #[must_use]
    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// Returns `true` if the point carries a Z coordinate.
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.z.is_some()
    }

    /// Converts to a 3D position, using `0.0` for a missing Z.
    #[must_use]
    pub fn to_point3(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z.unwrap_or(0.0))
    }
}
