//! Vector math foundation for 3D rendering and game logic.
//!
//! This crate provides the small floating-point vector value types shared by the
//! engine's rendering pipeline, camera system, scene data, and scripting
//! marshalling layer. Every type is plain copyable data with a guaranteed C
//! layout, so values flow between CPU code, GPU buffers, and the managed
//! scripting boundary without any translation step.
//!
//! # Types
//! - [`Vec3`]: the primary 3-component vector (positions, directions, scales,
//!   RGB color channels) with the full geometric operation set
//! - [`Vec2`]: 2-component companion (screen positions, texture coordinates)
//! - [`Vec4`]: 4-component companion (homogeneous coordinates, RGBA colors)
//!
//! # Conventions
//! - Left-handed coordinates, Y-up, Z-forward
//! - Angles in radians throughout; [`deg_to_rad`]/[`rad_to_deg`] bridge
//!   degree-based callers
//! - Division by zero follows IEEE-754 (±∞/NaN); normalization and angle
//!   operations instead guard near-zero inputs and degrade to zero
//! - Equality is tolerance-based (see [`Vec3::EPSILON`]), never bit-exact
//!
//! # Layout
//! All vector types are `#[repr(C)]` and implement [`bytemuck::Pod`], so
//! slices of them cast directly to `[f32]` or raw bytes for vertex upload and
//! interop marshalling.

#![warn(missing_docs)]

pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Converts degrees to radians.
///
/// # Example
/// ```
/// use engine_math::deg_to_rad;
///
/// assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
/// ```
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Converts radians to degrees.
///
/// # Example
/// ```
/// use engine_math::rad_to_deg;
///
/// assert!((rad_to_deg(std::f32::consts::PI) - 180.0).abs() < 1e-4);
/// ```
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn degree_radian_conversions_invert() {
        for deg in [0.0, 45.0, 90.0, 180.0, 270.0, -30.0] {
            assert!((rad_to_deg(deg_to_rad(deg)) - deg).abs() < 1e-3);
        }
        assert!((deg_to_rad(90.0) - PI / 2.0).abs() < 1e-6);
    }
}
