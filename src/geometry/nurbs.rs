use crate::error::{GeometryError, Result};

use super::Point;

/// A non-uniform rational B-spline curve.
///
/// Only the defining data is stored; the curve is never evaluated here.
#[derive(Debug, Clone, PartialEq)]
pub struct NurbsCurve {
    control_points: Vec<Point>,
    weights: Vec<f64>,
    degree: usize,
    knots: Vec<f64>,
}

impl NurbsCurve {
    /// Creates a new NURBS curve.
    ///
    /// # Arguments
    ///
    /// * `control_points` - At least `degree + 1` control points
    /// * `weights` - One positive weight per control point
    /// * `degree` - Polynomial degree (at least 1)
    /// * `knots` - Non-decreasing knot vector of length `control_points + degree + 1`
    ///
    /// # Errors
    ///
    /// Returns an error if any of the constraints above is violated.
    pub fn new(
        control_points: Vec<Point>,
        weights: Vec<f64>,
        degree: usize,
        knots: Vec<f64>,
    ) -> Result<Self> {
        if degree == 0 {
            return Err(GeometryError::InvalidNurbs("degree must be at least 1".into()).into());
        }
        if control_points.len() <= degree {
            return Err(GeometryError::InvalidNurbs(format!(
                "degree {degree} needs at least {} control points, got {}",
                degree + 1,
                control_points.len()
            ))
            .into());
        }
        if weights.len() != control_points.len() {
            return Err(GeometryError::InvalidNurbs(format!(
                "{} weights for {} control points",
                weights.len(),
                control_points.len()
            ))
            .into());
        }
        if weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(GeometryError::InvalidNurbs("weights must be positive".into()).into());
        }
        let expected_knots = control_points.len() + degree + 1;
        if knots.len() != expected_knots {
            return Err(GeometryError::InvalidNurbs(format!(
                "expected {expected_knots} knots, got {}",
                knots.len()
            ))
            .into());
        }
        if knots.iter().any(|k| !k.is_finite()) {
            return Err(GeometryError::InvalidNurbs("knots must be finite".into()).into());
        }
        if knots.windows(2).any(|w| w[1] < w[0]) {
            return Err(
                GeometryError::InvalidNurbs("knot vector must be non-decreasing".into()).into(),
            );
        }
        Ok(Self {
            control_points,
            weights,
            degree,
            knots,
        })
    }

    /// Creates a non-rational curve with unit weights and a clamped uniform knot vector.
    ///
    /// # Errors
    ///
    /// Returns an error if `degree` is zero or there are not enough control
    /// points for it.
    #[allow(clippy::cast_precision_loss)]
    pub fn clamped_uniform(control_points: Vec<Point>, degree: usize) -> Result<Self> {
        let n = control_points.len();
        if degree == 0 || degree >= n {
            return Err(GeometryError::InvalidNurbs(format!(
                "degree {degree} is not valid for {n} control points"
            ))
            .into());
        }
        let spans = n - degree;
        let mut knots = Vec::with_capacity(n + degree + 1);
        knots.extend(std::iter::repeat_n(0.0, degree + 1));
        for i in 1..spans {
            knots.push(i as f64 / spans as f64);
        }
        knots.extend(std::iter::repeat_n(1.0, degree + 1));
        Self::new(control_points, vec![1.0; n], degree, knots)
    }

    /// Returns the control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    /// Returns one weight per control point.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the polynomial degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the knot vector.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Returns `true` if the control points carry Z coordinates.
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.control_points.first().is_some_and(Point::is_3d)
    }
}
