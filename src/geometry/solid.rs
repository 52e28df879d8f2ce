use super::PolyhedralSurface;

/// A bounded volume enclosed by shells.
///
/// There is exactly one exterior shell; interior shells describe cavities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    exterior: PolyhedralSurface,
    interiors: Vec<PolyhedralSurface>,
}

impl Solid {
    /// Creates a solid from its exterior shell, without cavities.
    #[must_use]
    pub fn new(exterior: PolyhedralSurface) -> Self {
        Self {
            exterior,
            interiors: Vec::new(),
        }
    }

    /// Creates a solid from its exterior shell and its cavities.
    #[must_use]
    pub fn with_interior_shells(
        exterior: PolyhedralSurface,
        interiors: Vec<PolyhedralSurface>,
    ) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Returns the outer boundary.
    #[must_use]
    pub fn exterior_shell(&self) -> &PolyhedralSurface {
        &self.exterior
    }

    /// Returns the number of cavities.
    #[must_use]
    pub fn num_interior_shells(&self) -> usize {
        self.interiors.len()
    }

    /// Returns the `n`-th cavity, if any.
    #[must_use]
    pub fn interior_shell_n(&self, n: usize) -> Option<&PolyhedralSurface> {
        self.interiors.get(n)
    }

    /// Adds a cavity.
    pub fn add_interior_shell(&mut self, shell: PolyhedralSurface) {
        self.interiors.push(shell);
    }

    /// Returns `true` if the exterior shell has no patches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }
}
