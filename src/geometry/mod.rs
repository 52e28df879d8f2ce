//! Simple-feature geometry model.
//!
//! Geometries form a tree: collections own their members, surfaces own
//! their patches and solids own their shells. The tree is read-only while
//! it is being exported.

mod collection;
mod line_string;
mod nurbs;
mod point;
mod polygon;
mod polyhedral_surface;
mod solid;
mod triangle;
mod triangulated_surface;

use std::fmt;

pub use collection::{
    AnyGeometry, Collection, GeometryCollection, LineStrings, Membership, MultiLineString,
    MultiPoint, MultiPolygon, MultiSolid, Points, Polygons, Solids,
};
pub use line_string::LineString;
pub use nurbs::NurbsCurve;
pub use point::Point;
pub use polygon::Polygon;
pub use polyhedral_surface::PolyhedralSurface;
pub use solid::Solid;
pub use triangle::Triangle;
pub use triangulated_surface::TriangulatedSurface;

/// Discriminant of a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    PolyhedralSurface,
    TriangulatedSurface,
    Triangle,
    Solid,
    MultiSolid,
    NurbsCurve,
}

impl GeometryType {
    /// Returns the type name, e.g. `"MultiSolid"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
            Self::PolyhedralSurface => "PolyhedralSurface",
            Self::TriangulatedSurface => "TriangulatedSurface",
            Self::Triangle => "Triangle",
            Self::Solid => "Solid",
            Self::MultiSolid => "MultiSolid",
            Self::NurbsCurve => "NURBSCurve",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any geometry of the model.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    Triangle(Triangle),
    PolyhedralSurface(PolyhedralSurface),
    TriangulatedSurface(TriangulatedSurface),
    Solid(Solid),
    NurbsCurve(NurbsCurve),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    MultiSolid(MultiSolid),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Returns the discriminant of the geometry.
    #[must_use]
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::LineString(_) => GeometryType::LineString,
            Self::Polygon(_) => GeometryType::Polygon,
            Self::Triangle(_) => GeometryType::Triangle,
            Self::PolyhedralSurface(_) => GeometryType::PolyhedralSurface,
            Self::TriangulatedSurface(_) => GeometryType::TriangulatedSurface,
            Self::Solid(_) => GeometryType::Solid,
            Self::NurbsCurve(_) => GeometryType::NurbsCurve,
            Self::MultiPoint(_) => GeometryType::MultiPoint,
            Self::MultiLineString(_) => GeometryType::MultiLineString,
            Self::MultiPolygon(_) => GeometryType::MultiPolygon,
            Self::MultiSolid(_) => GeometryType::MultiSolid,
            Self::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Returns the type name, e.g. `"Polygon"`.
    #[must_use]
    pub fn geometry_type_name(&self) -> &'static str {
        self.geometry_type().name()
    }

    /// Returns `true` if the geometry holds no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Point(_) | Self::Triangle(_) | Self::NurbsCurve(_) => false,
            Self::LineString(g) => g.is_empty(),
            Self::Polygon(g) => g.is_empty(),
            Self::PolyhedralSurface(g) => g.is_empty(),
            Self::TriangulatedSurface(g) => g.is_empty(),
            Self::Solid(g) => g.is_empty(),
            Self::MultiPoint(g) => g.is_empty(),
            Self::MultiLineString(g) => g.is_empty(),
            Self::MultiPolygon(g) => g.is_empty(),
            Self::MultiSolid(g) => g.is_empty(),
            Self::GeometryCollection(g) => g.is_empty(),
        }
    }

    /// Returns `true` if the geometry carries Z coordinates.
    #[must_use]
    pub fn is_3d(&self) -> bool {
        match self {
            Self::Point(g) => g.is_3d(),
            Self::LineString(g) => g.is_3d(),
            Self::Polygon(g) => g.is_3d(),
            Self::Triangle(g) => g.is_3d(),
            Self::PolyhedralSurface(g) => g.polygons().first().is_some_and(Polygon::is_3d),
            Self::TriangulatedSurface(g) => g.triangles().first().is_some_and(Triangle::is_3d),
            Self::Solid(g) => g
                .exterior_shell()
                .polygons()
                .first()
                .is_some_and(Polygon::is_3d),
            Self::NurbsCurve(g) => g.is_3d(),
            Self::MultiPoint(g) => g.is_3d(),
            Self::MultiLineString(g) => g.is_3d(),
            Self::MultiPolygon(g) => g.is_3d(),
            Self::MultiSolid(g) => g.is_3d(),
            Self::GeometryCollection(g) => g.is_3d(),
        }
    }
}

macro_rules! impl_from_kind {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for Geometry {
                fn from(g: $kind) -> Self {
                    Self::$kind(g)
                }
            }
        )*
    };
}

impl_from_kind!(
    Point,
    LineString,
    Polygon,
    Triangle,
    PolyhedralSurface,
    TriangulatedSurface,
    Solid,
    NurbsCurve,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    MultiSolid,
    GeometryCollection,
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(Geometry::from(Point::new(0.0, 0.0)).geometry_type_name(), "Point");
        assert_eq!(GeometryType::NurbsCurve.to_string(), "NURBSCurve");
        assert_eq!(
            Geometry::from(MultiSolid::new()).geometry_type(),
            GeometryType::MultiSolid
        );
    }

    #[test]
    fn emptiness() {
        assert!(Geometry::from(LineString::empty()).is_empty());
        assert!(Geometry::from(GeometryCollection::new()).is_empty());
        assert!(!Geometry::from(Point::new(0.0, 0.0)).is_empty());
    }

    #[test]
    fn dimension_follows_first_member() {
        let mut gc = GeometryCollection::new();
        gc.push(Point::new_3d(0.0, 0.0, 1.0)).unwrap();
        gc.push(Point::new(1.0, 1.0)).unwrap();
        assert!(Geometry::from(gc).is_3d());
        assert!(!Geometry::from(Point::new(1.0, 1.0)).is_3d());
    }
}
