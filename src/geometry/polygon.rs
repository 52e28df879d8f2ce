use crate::error::{GeometryError, Result};

use super::{LineString, Point};

/// A planar region bounded by an exterior ring and optional interior rings (holes).
///
/// Every non-empty ring is explicitly closed: its last point repeats the
/// first, so a ring holds at least four points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    exterior: LineString,
    interiors: Vec<LineString>,
}

impl Polygon {
    /// Creates a polygon from its rings.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty ring is not closed or has fewer
    /// than four points.
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Result<Self> {
        check_ring(&exterior, "exterior")?;
        for ring in &interiors {
            check_ring(ring, "interior")?;
        }
        Ok(Self {
            exterior,
            interiors,
        })
    }

    /// Creates a polygon without holes from the points of its exterior ring.
    ///
    /// # Errors
    ///
    /// Returns an error if the ring is invalid.
    pub fn from_exterior(points: Vec<Point>) -> Result<Self> {
        Self::new(LineString::new(points)?, Vec::new())
    }

    /// Returns the outer boundary.
    #[must_use]
    pub fn exterior_ring(&self) -> &LineString {
        &self.exterior
    }

    /// Returns the number of holes.
    #[must_use]
    pub fn num_interior_rings(&self) -> usize {
        self.interiors.len()
    }

    /// Returns the `n`-th hole, if any.
    #[must_use]
    pub fn interior_ring_n(&self, n: usize) -> Option<&LineString> {
        self.interiors.get(n)
    }

    /// Adds a hole.
    ///
    /// # Errors
    ///
    /// Returns an error if the ring is invalid.
    pub fn add_interior_ring(&mut self, ring: LineString) -> Result<()> {
        check_ring(&ring, "interior")?;
        self.interiors.push(ring);
        Ok(())
    }

    /// Returns `true` if the exterior ring is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// Returns `true` if the exterior ring carries Z coordinates.
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.exterior.is_3d()
    }
}

fn check_ring(ring: &LineString, role: &str) -> Result<()> {
    if ring.is_empty() {
        return Ok(());
    }
    if ring.num_points() < 4 {
        return Err(GeometryError::InvalidRing(format!(
            "{role} ring has {} points, at least 4 required",
            ring.num_points()
        ))
        .into());
    }
    if !ring.is_closed() {
        return Err(GeometryError::InvalidRing(format!("{role} ring is not closed")).into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SfobjError;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
        ]
    }

    #[test]
    fn square_polygon() {
        let poly = Polygon::from_exterior(square()).unwrap();
        assert_eq!(poly.exterior_ring().num_points(), 5);
        assert_eq!(poly.num_interior_rings(), 0);
    }

    #[test]
    fn open_ring_is_rejected() {
        let mut pts = square();
        pts.pop();
        let err = Polygon::from_exterior(pts).unwrap_err();
        assert!(matches!(
            err,
            SfobjError::Geometry(GeometryError::InvalidRing(_))
        ));
    }

    #[test]
    fn short_ring_is_rejected() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ];
        assert!(Polygon::from_exterior(pts).is_err());
    }

    #[test]
    fn invalid_hole_leaves_polygon_unchanged() {
        let mut poly = Polygon::from_exterior(square()).unwrap();
        let hole = LineString::new(vec![Point::new(0.2, 0.2), Point::new(0.4, 0.2)]).unwrap();
        assert!(poly.add_interior_ring(hole).is_err());
        assert_eq!(poly.num_interior_rings(), 0);
    }
}
