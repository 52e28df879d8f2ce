use tracing::{debug, trace, warn};

use crate::error::{ExportError, Result};
use crate::geometry::{Geometry, Polygon, PolyhedralSurface, Triangle};

use super::FlattenedMesh;

/// Pending work while walking a geometry tree.
enum Node<'a> {
    Geometry(&'a Geometry),
    Polygon(&'a Polygon),
    Triangle(&'a Triangle),
}

/// Flattens a geometry tree into a [`FlattenedMesh`].
///
/// The tree is visited depth-first, left to right. Each kind decomposes as
/// follows:
///
/// - `Point`: one vertex and one point feature.
/// - `LineString`: one vertex per point and one line feature.
/// - `Triangle`: three vertices and one face.
/// - `Polygon`: one vertex per exterior ring point, without the closing
///   duplicate, and one face. Interior rings are not exported.
/// - `PolyhedralSurface` / `TriangulatedSurface`: their patches, in order.
/// - `Solid`: the patches of its exterior shell. Interior shells are not
///   exported.
/// - collections: their members, in order.
///
/// Empty geometries contribute nothing. The walk keeps its own stack, so
/// deeply nested input does not grow the call stack.
pub struct Flatten<'a> {
    geometry: &'a Geometry,
}

impl<'a> Flatten<'a> {
    /// Creates a new `Flatten` operation.
    #[must_use]
    pub fn new(geometry: &'a Geometry) -> Self {
        Self { geometry }
    }

    /// Executes the traversal, returning the collected mesh.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnsupportedGeometryKind`] if the tree contains a
    /// geometry that has no mesh representation. No partial mesh is returned.
    pub fn execute(&self) -> Result<FlattenedMesh> {
        let mut mesh = FlattenedMesh::new();
        let mut stack = vec![Node::Geometry(self.geometry)];

        while let Some(node) = stack.pop() {
            match node {
                Node::Geometry(geometry) => visit(geometry, &mut mesh, &mut stack)?,
                Node::Polygon(polygon) => emit_polygon(polygon, &mut mesh),
                Node::Triangle(triangle) => emit_triangle(triangle, &mut mesh),
            }
        }

        debug!(
            root = self.geometry.geometry_type_name(),
            vertices = mesh.vertices.len(),
            points = mesh.points.len(),
            lines = mesh.lines.len(),
            faces = mesh.faces.len(),
            "flattened geometry"
        );
        Ok(mesh)
    }
}

fn visit<'a>(
    geometry: &'a Geometry,
    mesh: &mut FlattenedMesh,
    stack: &mut Vec<Node<'a>>,
) -> Result<()> {
    trace!(kind = geometry.geometry_type_name(), "visiting");

    match geometry {
        Geometry::Point(point) => {
            let index = mesh.push_vertex(point);
            mesh.points.push(index);
        }
        Geometry::LineString(line_string) => {
            if !line_string.is_empty() {
                let line = mesh.push_vertices(line_string.points());
                mesh.lines.push(line);
            }
        }
        Geometry::Triangle(triangle) => emit_triangle(triangle, mesh),
        Geometry::Polygon(polygon) => emit_polygon(polygon, mesh),
        Geometry::TriangulatedSurface(surface) => {
            stack.extend(surface.triangles().iter().rev().map(Node::Triangle));
        }
        Geometry::PolyhedralSurface(surface) => push_shell(surface, stack),
        Geometry::Solid(solid) => {
            if solid.num_interior_shells() > 0 {
                debug!(
                    count = solid.num_interior_shells(),
                    "skipping interior shells of solid"
                );
            }
            push_shell(solid.exterior_shell(), stack);
        }
        Geometry::MultiPoint(collection) => push_members(collection.members(), stack),
        Geometry::MultiLineString(collection) => push_members(collection.members(), stack),
        Geometry::MultiPolygon(collection) => push_members(collection.members(), stack),
        Geometry::MultiSolid(collection) => push_members(collection.members(), stack),
        Geometry::GeometryCollection(collection) => push_members(collection.members(), stack),
        Geometry::NurbsCurve(_) => {
            let kind = geometry.geometry_type_name();
            warn!(kind, "geometry type has no mesh representation");
            return Err(ExportError::UnsupportedGeometryKind(kind).into());
        }
    }
    Ok(())
}

fn push_members<'a>(members: &'a [Geometry], stack: &mut Vec<Node<'a>>) {
    stack.extend(members.iter().rev().map(Node::Geometry));
}

fn push_shell<'a>(shell: &'a PolyhedralSurface, stack: &mut Vec<Node<'a>>) {
    stack.extend(shell.polygons().iter().rev().map(Node::Polygon));
}

fn emit_triangle(triangle: &Triangle, mesh: &mut FlattenedMesh) {
    let face = mesh.push_vertices(triangle.vertices());
    mesh.faces.push(face);
}

fn emit_polygon(polygon: &Polygon, mesh: &mut FlattenedMesh) {
    let ring = polygon.exterior_ring().points();
    // Rings are closed; the last point repeats the first.
    let Some((_, open_ring)) = ring.split_last() else {
        return;
    };
    if polygon.num_interior_rings() > 0 {
        debug!(
            count = polygon.num_interior_rings(),
            "skipping interior rings of polygon"
        );
    }
    let face = mesh.push_vertices(open_ring);
    mesh.faces.push(face);
}
