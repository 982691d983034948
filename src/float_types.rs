//! Scalar type selection and the shared comparison tolerance.

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used by every on-plane comparison in the crate.
///
/// A point whose signed distance to a plane is within `EPSILON` is treated
/// as lying exactly on that plane, both while splitting faces during
/// construction and while classifying query points.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used by every on-plane comparison in the crate.
///
/// A point whose signed distance to a plane is within `EPSILON` is treated
/// as lying exactly on that plane, both while splitting faces during
/// construction and while classifying query points.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-5;
