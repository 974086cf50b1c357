//! Scalar helpers: angle conversion, wrapping and clamping.

use std::f64::consts::{PI, TAU};

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f64 = PI / 180.0;

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    (PI * degrees) / 180.0
}

#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Remainder that takes the sign of the divisor, so `modulo(-1.0, 4.0) == 3.0`.
#[inline]
pub fn modulo(n: f64, divisor: f64) -> f64 {
    ((n % divisor) + divisor) % divisor
}

/// Wraps an angle in radians into `[0, 2π)`.
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    modulo(angle, TAU)
}

/// Clamps `v` into `[min, max]`. A NaN `v` comes out as `min`.
#[inline]
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    max.min(min.max(v))
}

#[inline]
pub fn clamp01(v: f64) -> f64 {
    clamp(v, 0.0, 1.0)
}
