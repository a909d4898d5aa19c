//! Parameters for quadification.

use crate::float_types::{DIAGONAL_ANGLE_DEGREES, MAX_QUAD_ANGLE_DEGREES, Real, deg_to_rad};

/// Thresholds steering which triangle pairs become quads.
///
/// The defaults are the values cloth meshes have always been quadified with;
/// [`Quadifier::new`](crate::Quadifier::new) uses them unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadifierParams {
    /// Angle in degrees. A triangle nominates its longest edge as a diagonal when
    /// the angle opposite it has a cosine below `cos(diagonal_angle_degrees)`.
    /// Default: 85
    pub diagonal_angle_degrees: Real,

    /// Largest |cos| of any interior angle a merged quad may have.
    /// Default: sin(60°) ≈ 0.866
    pub max_quad_cosine: Real,
}

impl Default for QuadifierParams {
    fn default() -> Self {
        Self {
            diagonal_angle_degrees: DIAGONAL_ANGLE_DEGREES,
            max_quad_cosine: deg_to_rad(MAX_QUAD_ANGLE_DEGREES).sin(),
        }
    }
}

impl QuadifierParams {
    /// Set the apex angle used to nominate diagonals.
    #[must_use]
    pub const fn with_diagonal_angle_degrees(mut self, degrees: Real) -> Self {
        self.diagonal_angle_degrees = degrees;
        self
    }

    /// Set the quad quality cutoff.
    #[must_use]
    pub const fn with_max_quad_cosine(mut self, cosine: Real) -> Self {
        self.max_quad_cosine = cosine;
        self
    }

    /// Cosine a triangle's apex angle must stay below.
    pub fn right_angle_cosine(&self) -> Real {
        deg_to_rad(self.diagonal_angle_degrees).cos()
    }
}
