use super::Point;

/// A triangle given by its three corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    /// Creates a triangle from its corners.
    #[must_use]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the `i`-th corner; `i` wraps around, so `vertex(3)` is `vertex(0)`.
    #[must_use]
    pub fn vertex(&self, i: usize) -> &Point {
        &self.vertices[i % 3]
    }

    /// Returns the three corners.
    #[must_use]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    /// Returns `true` if the corners carry Z coordinates.
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.vertices[0].is_3d()
    }
}
