use std::fmt;
use std::marker::PhantomData;

use crate::error::{GeometryError, Result};

use super::{Geometry, GeometryType, LineString, Point, Polygon, Solid};

/// Decides which geometries a [`Collection`] may hold.
pub trait Membership {
    /// The geometry type of the collection itself.
    const COLLECTION: GeometryType;

    /// Returns `true` if `geometry` may be stored in the collection.
    fn allows(geometry: &Geometry) -> bool;
}

/// Admits any geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnyGeometry;

/// Admits points only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Points;

/// Admits line strings only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineStrings;

/// Admits polygons only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Polygons;

/// Admits solids only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Solids;

impl Membership for AnyGeometry {
    const COLLECTION: GeometryType = GeometryType::GeometryCollection;

    fn allows(_geometry: &Geometry) -> bool {
        true
    }
}

impl Membership for Points {
    const COLLECTION: GeometryType = GeometryType::MultiPoint;

    fn allows(geometry: &Geometry) -> bool {
        matches!(geometry, Geometry::Point(_))
    }
}

impl Membership for LineStrings {
    const COLLECTION: GeometryType = GeometryType::MultiLineString;

    fn allows(geometry: &Geometry) -> bool {
        matches!(geometry, Geometry::LineString(_))
    }
}

impl Membership for Polygons {
    const COLLECTION: GeometryType = GeometryType::MultiPolygon;

    fn allows(geometry: &Geometry) -> bool {
        matches!(geometry, Geometry::Polygon(_))
    }
}

impl Membership for Solids {
    const COLLECTION: GeometryType = GeometryType::MultiSolid;

    fn allows(geometry: &Geometry) -> bool {
        matches!(geometry, Geometry::Solid(_))
    }
}

/// A heterogeneous collection of geometries.
pub type GeometryCollection = Collection<AnyGeometry>;
/// A collection of points.
pub type MultiPoint = Collection<Points>;
/// A collection of line strings.
pub type MultiLineString = Collection<LineStrings>;
/// A collection of polygons.
pub type MultiPolygon = Collection<Polygons>;
/// A collection of solids.
pub type MultiSolid = Collection<Solids>;

/// An ordered collection owning its members.
///
/// Every member satisfies `M::allows`. The check runs on every mutation
/// (construction, append, insert, assignment); a rejected geometry leaves
/// the collection untouched. Cloning deep-copies all members.
pub struct Collection<M> {
    members: Vec<Geometry>,
    membership: PhantomData<M>,
}

impl<M: Membership> Collection<M> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            membership: PhantomData,
        }
    }

    /// Creates a collection from a list of members.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TypeConstraintViolation`] on the first member
    /// the collection does not admit.
    pub fn from_members(members: Vec<Geometry>) -> Result<Self> {
        for member in &members {
            check::<M>(member)?;
        }
        Ok(Self {
            members,
            membership: PhantomData,
        })
    }

    /// Appends a member.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TypeConstraintViolation`] if the collection
    /// does not admit `geometry`.
    pub fn push(&mut self, geometry: impl Into<Geometry>) -> Result<()> {
        let geometry = geometry.into();
        check::<M>(&geometry)?;
        self.members.push(geometry);
        Ok(())
    }

    /// Inserts a member at `index`, shifting later members back.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection does not admit `geometry` or if
    /// `index` is past the end.
    pub fn insert(&mut self, index: usize, geometry: impl Into<Geometry>) -> Result<()> {
        let geometry = geometry.into();
        check::<M>(&geometry)?;
        if index > self.members.len() {
            return Err(GeometryError::IndexOutOfRange {
                index,
                len: self.members.len(),
            }
            .into());
        }
        self.members.insert(index, geometry);
        Ok(())
    }

    /// Replaces all members.
    ///
    /// The replacement is validated in full before it is swapped in, so on
    /// error the current members are kept.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TypeConstraintViolation`] if any new member
    /// is not admitted.
    pub fn set_members(&mut self, members: Vec<Geometry>) -> Result<()> {
        let mut replacement = Self::from_members(members)?;
        std::mem::swap(self, &mut replacement);
        Ok(())
    }

    /// Replaces all members with deep copies of the members of `other`.
    ///
    /// `other` may be a collection of any kind; its members are checked
    /// against this collection's membership.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TypeConstraintViolation`] if a member of
    /// `other` is not admitted; `self` is then unchanged.
    pub fn assign<N: Membership>(&mut self, other: &Collection<N>) -> Result<()> {
        self.set_members(other.members.clone())
    }

    /// Returns the geometry type of the collection.
    #[must_use]
    pub fn geometry_type(&self) -> GeometryType {
        M::COLLECTION
    }
}

impl<M> Collection<M> {
    /// Returns the number of members.
    #[must_use]
    pub fn num_geometries(&self) -> usize {
        self.members.len()
    }

    /// Returns the `n`-th member, if any.
    #[must_use]
    pub fn geometry_n(&self, n: usize) -> Option<&Geometry> {
        self.members.get(n)
    }

    /// Returns the members in order.
    #[must_use]
    pub fn members(&self) -> &[Geometry] {
        &self.members
    }

    /// Iterates over the members in order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
        self.members.iter()
    }

    /// Consumes the collection, returning its members.
    #[must_use]
    pub fn into_members(self) -> Vec<Geometry> {
        self.members
    }

    /// Returns `true` if the collection has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if the first member carries Z coordinates.
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.members.first().is_some_and(Geometry::is_3d)
    }
}

fn check<M: Membership>(geometry: &Geometry) -> Result<()> {
    if M::allows(geometry) {
        Ok(())
    } else {
        Err(GeometryError::TypeConstraintViolation {
            collection: M::COLLECTION.name(),
            found: geometry.geometry_type_name(),
        }
        .into())
    }
}

impl<M: Membership> Default for Collection<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for Collection<M> {
    fn clone(&self) -> Self {
        Self {
            members: self.members.clone(),
            membership: PhantomData,
        }
    }
}

impl<M> PartialEq for Collection<M> {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<M: Membership> fmt::Debug for Collection<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(M::COLLECTION.name())
            .field("members", &self.members)
            .finish()
    }
}

impl<'a, M> IntoIterator for &'a Collection<M> {
    type Item = &'a Geometry;
    type IntoIter = std::slice::Iter<'a, Geometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl MultiPoint {
    /// Returns the `n`-th point, if any.
    #[must_use]
    pub fn point_n(&self, n: usize) -> Option<&Point> {
        match self.members.get(n)? {
            Geometry::Point(p) => Some(p),
            _ => None,
        }
    }
}

impl MultiLineString {
    /// Returns the `n`-th line string, if any.
    #[must_use]
    pub fn line_string_n(&self, n: usize) -> Option<&LineString> {
        match self.members.get(n)? {
            Geometry::LineString(ls) => Some(ls),
            _ => None,
        }
    }
}

impl MultiPolygon {
    /// Returns the `n`-th polygon, if any.
    #[must_use]
    pub fn polygon_n(&self, n: usize) -> Option<&Polygon> {
        match self.members.get(n)? {
            Geometry::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

impl MultiSolid {
    /// Returns the `n`-th solid, if any.
    #[must_use]
    pub fn solid_n(&self, n: usize) -> Option<&Solid> {
        match self.members.get(n)? {
            Geometry::Solid(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(points: Vec<Point>) -> Self {
        Self {
            members: points.into_iter().map(Geometry::Point).collect(),
            membership: PhantomData,
        }
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(line_strings: Vec<LineString>) -> Self {
        Self {
            members: line_strings.into_iter().map(Geometry::LineString).collect(),
            membership: PhantomData,
        }
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self {
            members: polygons.into_iter().map(Geometry::Polygon).collect(),
            membership: PhantomData,
        }
    }
}

impl From<Vec<Solid>> for MultiSolid {
    fn from(solids: Vec<Solid>) -> Self {
        Self {
            members: solids.into_iter().map(Geometry::Solid).collect(),
            membership: PhantomData,
        }
    }
}
