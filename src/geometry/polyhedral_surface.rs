use super::Polygon;

/// A surface made of polygonal patches sharing boundary segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyhedralSurface {
    polygons: Vec<Polygon>,
}

impl PolyhedralSurface {
    /// Creates a surface from its polygons.
    #[must_use]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Returns the number of polygons.
    #[must_use]
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// Returns the `n`-th polygon, if any.
    #[must_use]
    pub fn polygon_n(&self, n: usize) -> Option<&Polygon> {
        self.polygons.get(n)
    }

    /// Returns the polygons in order.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Appends a polygon.
    pub fn push(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Returns `true` if the surface has no polygons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
