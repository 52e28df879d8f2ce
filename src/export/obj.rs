//! Wavefront OBJ output.
//!
//! Only the position and element records are produced:
//!
//! ```text
//! v <x> <y> <z>          one per vertex
//! p <i>                  one per point feature
//! l <i1> <i2> ... <ik>   one per line feature
//! f <i1> <i2> ... <ik>   one per face
//! ```
//!
//! Records come in that order, each terminated by `\n`. Indices are
//! 1-based. There is no header and no comment line.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{ExportError, Result};
use crate::geometry::Geometry;

use super::{Flatten, FlattenedMesh};

impl FlattenedMesh {
    /// Writes the mesh as OBJ records.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_obj<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        for v in &self.vertices {
            writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for index in &self.points {
            writeln!(out, "p {index}")?;
        }
        for line in &self.lines {
            write_element(out, 'l', line)?;
        }
        for face in &self.faces {
            write_element(out, 'f', face)?;
        }
        Ok(())
    }

    /// Returns the mesh as OBJ text.
    ///
    /// # Errors
    ///
    /// Returns an error if formatting fails.
    pub fn to_obj_string(&self) -> Result<String> {
        let mut bytes = Vec::new();
        self.write_obj(&mut bytes)?;
        let text = String::from_utf8(bytes).map_err(io::Error::other)?;
        Ok(text)
    }
}

fn write_element<W: Write + ?Sized>(out: &mut W, tag: char, indices: &[usize]) -> io::Result<()> {
    write!(out, "{tag}")?;
    for index in indices {
        write!(out, " {index}")?;
    }
    writeln!(out)
}

/// Outcome of [`save_to_buffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferWrite {
    /// This many bytes were copied to the start of the buffer.
    Written(usize),
    /// The buffer was too small and was left untouched.
    TooSmall { required: usize },
}

impl BufferWrite {
    /// Returns the size of the OBJ text, whether it was written or not.
    #[must_use]
    pub fn size(self) -> usize {
        match self {
            Self::Written(n) | Self::TooSmall { required: n } => n,
        }
    }
}

/// Exports `geometry` as OBJ to an open stream.
///
/// The stream is neither flushed nor closed.
///
/// # Errors
///
/// Returns an error if the geometry cannot be exported or writing fails.
pub fn save<W: Write + ?Sized>(geometry: &Geometry, out: &mut W) -> Result<()> {
    Flatten::new(geometry).execute()?.write_obj(out)
}

/// Exports `geometry` as OBJ to a file, creating or truncating it.
///
/// The geometry is flattened before the file is opened, so a geometry that
/// cannot be exported leaves the file system untouched.
///
/// # Errors
///
/// Returns [`ExportError::OpenFile`] if the file cannot be opened for
/// writing, or another error if flattening or writing fails.
pub fn save_to_file(geometry: &Geometry, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mesh = Flatten::new(geometry).execute()?;

    let file = File::create(path).map_err(|source| ExportError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    mesh.write_obj(&mut writer)?;
    writer.flush()?;

    debug!(path = %path.display(), vertices = mesh.num_vertices(), "wrote OBJ file");
    Ok(())
}

/// Exports `geometry` as an OBJ string.
///
/// # Errors
///
/// Returns an error if the geometry cannot be exported.
pub fn save_to_string(geometry: &Geometry) -> Result<String> {
    Flatten::new(geometry).execute()?.to_obj_string()
}

/// Exports `geometry` as OBJ into a caller-supplied buffer.
///
/// If the buffer cannot hold the whole text, nothing is written and
/// [`BufferWrite::TooSmall`] reports the size needed; the caller is
/// expected to retry with a larger buffer.
///
/// # Errors
///
/// Returns an error if the geometry cannot be exported.
pub fn save_to_buffer(geometry: &Geometry, buffer: &mut [u8]) -> Result<BufferWrite> {
    let text = save_to_string(geometry)?;
    let bytes = text.as_bytes();

    if buffer.len() < bytes.len() {
        debug!(
            required = bytes.len(),
            available = buffer.len(),
            "OBJ buffer too small"
        );
        return Ok(BufferWrite::TooSmall {
            required: bytes.len(),
        });
    }
    buffer[..bytes.len()].copy_from_slice(bytes);
    Ok(BufferWrite::Written(bytes.len()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SfobjError;
    use crate::geometry::{
        GeometryCollection, LineString, MultiSolid, NurbsCurve, Point, Polygon, PolyhedralSurface,
        Solid, Triangle,
    };

    fn obj(geometry: impl Into<Geometry>) -> String {
        save_to_string(&geometry.into()).unwrap()
    }

    fn square() -> Polygon {
        Polygon::from_exterior(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
        ])
        .unwrap()
    }

    fn nurbs() -> NurbsCurve {
        NurbsCurve::clamped_uniform(
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 0.0),
            ],
            2,
        )
        .unwrap()
    }

    #[test]
    fn point_2d() {
        assert_eq!(obj(Point::new(1.0, 2.0)), "v 1 2 0\np 1\n");
    }

    #[test]
    fn point_3d_with_fractions() {
        assert_eq!(obj(Point::new_3d(0.5, -1.25, 3.0)), "v 0.5 -1.25 3\np 1\n");
    }

    #[test]
    fn line_string() {
        let ls = LineString::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(obj(ls), "v 0 0 0\nv 1 0 0\nv 1 1 0\nl 1 2 3\n");
    }

    #[test]
    fn triangle() {
        let tri = Triangle::new(
            Point::new_3d(0.0, 0.0, 1.0),
            Point::new_3d(1.0, 0.0, 1.0),
            Point::new_3d(0.0, 1.0, 1.0),
        );
        assert_eq!(obj(tri), "v 0 0 1\nv 1 0 1\nv 0 1 1\nf 1 2 3\n");
    }

    #[test]
    fn closed_triangle_ring_polygon() {
        let poly = Polygon::from_exterior(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(obj(poly), "v 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\n");
    }

    #[test]
    fn solid_with_cavity_matches_exterior_shell() {
        let exterior = PolyhedralSurface::new(vec![square()]);
        let hole = PolyhedralSurface::new(vec![Polygon::from_exterior(vec![
            Point::new(0.25, 0.25),
            Point::new(0.75, 0.25),
            Point::new(0.75, 0.75),
            Point::new(0.25, 0.25),
        ])
        .unwrap()]);
        let solid = Solid::with_interior_shells(exterior.clone(), vec![hole]);

        assert_eq!(obj(solid), obj(exterior));
    }

    #[test]
    fn heterogeneous_collection_shares_index_space() {
        let mut gc = GeometryCollection::new();
        gc.push(Point::new(0.0, 0.0)).unwrap();
        gc.push(LineString::new(vec![Point::new(1.0, 0.0), Point::new(1.0, 1.0)]).unwrap())
            .unwrap();

        assert_eq!(obj(gc), "v 0 0 0\nv 1 0 0\nv 1 1 0\np 1\nl 2 3\n");
    }

    #[test]
    fn record_order_is_vertices_points_lines_faces() {
        let mut gc = GeometryCollection::new();
        gc.push(square()).unwrap();
        gc.push(LineString::new(vec![Point::new(5.0, 5.0), Point::new(6.0, 6.0)]).unwrap())
            .unwrap();
        gc.push(Point::new(9.0, 9.0)).unwrap();

        let text = obj(gc);
        let tags: Vec<&str> = text
            .lines()
            .map(|line| line.split(' ').next().unwrap())
            .collect();
        assert_eq!(tags, vec!["v", "v", "v", "v", "v", "v", "v", "p", "l", "f"]);
        assert!(text.ends_with("p 7\nl 5 6\nf 1 2 3 4\n"));
    }

    #[test]
    fn vertex_count_follows_decomposition() {
        // 4 from the square (closing point dropped) + 1 point.
        let mut ms = MultiSolid::new();
        ms.push(Solid::new(PolyhedralSurface::new(vec![square()])))
            .unwrap();
        let mut gc = GeometryCollection::new();
        gc.push(ms).unwrap();
        gc.push(Point::new(2.0, 2.0)).unwrap();

        let text = obj(gc);
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 5);
    }

    #[test]
    fn empty_collection_writes_nothing() {
        assert_eq!(obj(GeometryCollection::new()), "");
    }

    #[test]
    fn save_to_stream_appends() {
        let mut out = b"# header\n".to_vec();
        save(&Point::new(1.0, 1.0).into(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "# header\nv 1 1 0\np 1\n");
    }

    #[test]
    fn unsupported_kind_writes_nothing_to_stream() {
        let mut gc = GeometryCollection::new();
        gc.push(Point::new(0.0, 0.0)).unwrap();
        gc.push(nurbs()).unwrap();

        let mut out = Vec::new();
        let err = save(&gc.into(), &mut out).unwrap_err();
        assert!(matches!(
            err,
            SfobjError::Export(ExportError::UnsupportedGeometryKind(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn buffer_too_small_is_left_untouched() {
        let geometry = Geometry::from(Point::new(1.0, 2.0));
        let expected = "v 1 2 0\np 1\n";

        let mut empty: [u8; 0] = [];
        let outcome = save_to_buffer(&geometry, &mut empty).unwrap();
        assert_eq!(
            outcome,
            BufferWrite::TooSmall {
                required: expected.len()
            }
        );

        let mut short = vec![b'#'; expected.len() - 1];
        let outcome = save_to_buffer(&geometry, &mut short).unwrap();
        assert_eq!(outcome.size(), expected.len());
        assert!(short.iter().all(|&b| b == b'#'));
    }

    #[test]
    fn buffer_of_exact_size_is_filled() {
        let geometry = Geometry::from(Point::new(1.0, 2.0));
        let required = save_to_buffer(&geometry, &mut []).unwrap().size();

        let mut buffer = vec![0_u8; required];
        let outcome = save_to_buffer(&geometry, &mut buffer).unwrap();
        assert_eq!(outcome, BufferWrite::Written(required));
        assert_eq!(buffer, b"v 1 2 0\np 1\n");
    }

    #[test]
    fn larger_buffer_keeps_its_tail() {
        let geometry = Geometry::from(Point::new(1.0, 2.0));
        let mut buffer = vec![b'x'; 32];
        let outcome = save_to_buffer(&geometry, &mut buffer).unwrap();
        assert_eq!(outcome, BufferWrite::Written(12));
        assert_eq!(&buffer[..12], b"v 1 2 0\np 1\n");
        assert!(buffer[12..].iter().all(|&b| b == b'x'));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.obj");

        save_to_file(&square().into(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, obj(square()));
    }

    #[test]
    fn unopenable_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.obj");

        let err = save_to_file(&square().into(), &path).unwrap_err();
        match err {
            SfobjError::Export(ExportError::OpenFile { path: reported, .. }) => {
                assert_eq!(reported, path);
            }
            other => panic!("expected OpenFile, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_kind_does_not_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.obj");

        assert!(save_to_file(&nurbs().into(), &path).is_err());
        assert!(!path.exists());
    }
}
