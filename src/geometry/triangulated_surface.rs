use super::Triangle;

/// A surface made only of triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangulatedSurface {
    triangles: Vec<Triangle>,
}

impl TriangulatedSurface {
    /// Creates a surface from its triangles.
    #[must_use]
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the `n`-th triangle, if any.
    #[must_use]
    pub fn triangle_n(&self, n: usize) -> Option<&Triangle> {
        self.triangles.get(n)
    }

    /// Returns the triangles in order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Appends a triangle.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Returns `true` if the surface has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
