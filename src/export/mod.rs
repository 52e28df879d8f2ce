//! Export of geometry trees to indexed meshes.
//!
//! Exporting is two steps: [`Flatten`] walks a geometry tree and collects a
//! [`FlattenedMesh`], then the mesh is written out as OBJ text by the
//! functions in [`obj`].

mod flatten;
pub mod obj;

pub use flatten::Flatten;
pub use obj::{save, save_to_buffer, save_to_file, save_to_string, BufferWrite};

use crate::geometry::Point;
use crate::math::Point3;

/// A flat vertex buffer plus index lists, produced by one traversal.
///
/// All indices are 1-based positions in `vertices`. Indices are handed out
/// in visiting order and never reused: coincident coordinates of unrelated
/// features get separate vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedMesh {
    /// Vertex positions; 2D inputs lie on `z = 0`.
    pub vertices: Vec<Point3>,
    /// Standalone point features, one index each.
    pub points: Vec<usize>,
    /// Open polylines, at least two indices each.
    pub lines: Vec<Vec<usize>>,
    /// Closed faces, at least three indices each.
    pub faces: Vec<Vec<usize>>,
}

impl FlattenedMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex and returns its 1-based index.
    pub fn push_vertex(&mut self, point: &Point) -> usize {
        self.vertices.push(point.to_point3());
        self.vertices.len()
    }

    /// Appends every point as a new vertex and returns the index run.
    pub fn push_vertices<'a>(&mut self, points: impl IntoIterator<Item = &'a Point>) -> Vec<usize> {
        points.into_iter().map(|p| self.push_vertex(p)).collect()
    }

    /// Returns the number of collected vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no vertex was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn indices_are_one_based_and_monotonic() {
        let mut mesh = FlattenedMesh::new();
        assert_eq!(mesh.push_vertex(&Point::new(0.0, 0.0)), 1);
        let run = mesh.push_vertices(&[Point::new(1.0, 0.0), Point::new(1.0, 1.0)]);
        assert_eq!(run, vec![2, 3]);
        assert_eq!(mesh.num_vertices(), 3);
    }

    #[test]
    fn coincident_points_are_not_merged() {
        let mut mesh = FlattenedMesh::new();
        let p = Point::new_3d(1.0, 2.0, 3.0);
        assert_eq!(mesh.push_vertex(&p), 1);
        assert_eq!(mesh.push_vertex(&p), 2);
        assert_relative_eq!(mesh.vertices[1].z, 3.0);
    }
}
