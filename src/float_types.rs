// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Quadification thresholds
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// A triangle's longest edge is a diagonal candidate when the cosine of the
/// angle opposite it is below `cos(DIAGONAL_ANGLE_DEGREES)`.
pub const DIAGONAL_ANGLE_DEGREES: Real = 85.0;

/// Interior angle (degrees) whose sine caps the worst |cos| a merged quad may have.
pub const MAX_QUAD_ANGLE_DEGREES: Real = 60.0;

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: Real) -> Real {
    degrees * (PI / 180.0)
}
