use crate::error::{GeometryError, Result};

use super::Point;

/// An ordered sequence of points joined by straight segments.
///
/// A line string is either empty or holds at least two points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    /// Creates a line string from its points.
    ///
    /// # Errors
    ///
    /// Returns an error if exactly one point is given.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() == 1 {
            return Err(GeometryError::Degenerate("line string with a single point".into()).into());
        }
        Ok(Self { points })
    }

    /// Creates an empty line string.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the `n`-th point, if any.
    #[must_use]
    pub fn point_n(&self, n: usize) -> Option<&Point> {
        self.points.get(n)
    }

    /// Returns the points in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns `true` if the line string has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the points carry Z coordinates.
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.points.first().is_some_and(Point::is_3d)
    }

    /// Returns `true` if the first and last points coincide exactly.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SfobjError;

    #[test]
    fn single_point_is_rejected() {
        let err = LineString::new(vec![Point::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            SfobjError::Geometry(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn empty_is_allowed() {
        let ls = LineString::new(Vec::new()).unwrap();
        assert!(ls.is_empty());
        assert!(!ls.is_closed());
    }

    #[test]
    fn closed_ring() {
        let ls = LineString::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ])
        .unwrap();
        assert!(ls.is_closed());
        assert_eq!(ls.num_points(), 3);
        assert_eq!(ls.point_n(1), Some(&Point::new(1.0, 0.0)));
        assert_eq!(ls.point_n(3), None);
    }
}
