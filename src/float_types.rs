// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used for float comparisons across the crate.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used for float comparisons across the crate.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-9;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// Degrees in a full turn.
pub const FULL_TURN_DEG: Real = 360.0;

/// Degrees in a half turn, the largest step a naive shortest-path
/// rotation can represent without reversing apparent direction.
pub const HALF_TURN_DEG: Real = 180.0;
