//! 3-component vector type and operations.
//!
//! This module defines [`Vec3`], the workhorse value type of the engine: positions,
//! directions, scales, and color channels all travel as `Vec3`. The type is plain
//! data with a guaranteed C layout, so the same value can be handed to a GPU vertex
//! buffer, stored in scene data, or passed across the scripting boundary without
//! translation.
//!
//! # Conventions
//!
//! - Coordinate system is left-handed, Y-up, Z-forward: `RIGHT` is +X, `UP` is +Y,
//!   `FORWARD` is +Z.
//! - All angles are in radians. Use [`crate::deg_to_rad`] for degree-based callers.
//! - Division follows IEEE-754: dividing by zero produces ±∞ or NaN rather than
//!   an error. Normalization and angle operations guard near-zero inputs and
//!   degrade to the zero vector / zero angle instead.

use crate::vec2::Vec2;
use crate::vec4::Vec4;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 3-component `f32` vector.
///
/// Layout is `#[repr(C)]` with fields in x, y, z order and no padding
/// (12 bytes total), so slices of `Vec3` can be cast directly to `[f32]`
/// or bytes for buffer upload and interop marshalling.
///
/// Equality is tolerance-based, not bit-exact: two vectors compare equal when
/// they are closer than [`Vec3::EPSILON`] (aggregate distance). Because of this
/// the type deliberately implements neither `Eq` nor `Hash`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// Component along the X (right) axis.
    pub x: f32,
    /// Component along the Y (up) axis.
    pub y: f32,
    /// Component along the Z (forward) axis.
    pub z: f32,
}

impl Vec3 {
    /// Tolerance used by equality and angle comparisons.
    pub const EPSILON: f32 = 1e-5;

    /// Squared-magnitude guard below which a vector is treated as zero-length
    /// by normalization and angle operations.
    pub const EPSILON_NORMAL_SQRT: f32 = 1e-15;

    /// The zero vector, `(0, 0, 0)`.
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    /// All components one, `(1, 1, 1)`.
    pub const ONE: Vec3 = Vec3::splat(1.0);
    /// Unit vector along +X, `(1, 0, 0)`.
    pub const RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    /// Unit vector along -X, `(-1, 0, 0)`.
    pub const LEFT: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
    /// Unit vector along +Y, `(0, 1, 0)`.
    pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    /// Unit vector along -Y, `(0, -1, 0)`.
    pub const DOWN: Vec3 = Vec3::new(0.0, -1.0, 0.0);
    /// Unit vector along +Z, `(0, 0, 1)`.
    pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    /// Unit vector along -Z, `(0, 0, -1)`.
    pub const BACK: Vec3 = Vec3::new(0.0, 0.0, -1.0);
    /// All components positive infinity.
    pub const POSITIVE_INFINITY: Vec3 = Vec3::splat(f32::INFINITY);
    /// All components negative infinity.
    pub const NEGATIVE_INFINITY: Vec3 = Vec3::splat(f32::NEG_INFINITY);

    /// Creates a vector from three components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    /// Broadcasts one scalar to all three components.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Vec3::new(value, value, value)
    }

    /// Copies the first three elements of a slice.
    ///
    /// # Panics
    /// Panics if the slice holds fewer than 3 elements.
    #[inline]
    pub fn from_slice(slice: &[f32]) -> Self {
        Vec3::new(slice[0], slice[1], slice[2])
    }

    /// Overwrites all three components in place.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Returns the components as an array in x, y, z order.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length of the vector.
    ///
    /// # Example
    /// ```
    /// use engine_math::Vec3;
    ///
    /// assert_eq!(Vec3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    /// Squared length of the vector.
    ///
    /// Cheaper than [`magnitude`](Self::magnitude); prefer it for comparing
    /// lengths against each other or against a squared threshold.
    #[inline]
    pub fn sqr_magnitude(self) -> f32 {
        self.dot(self)
    }

    /// Returns this vector scaled to unit length.
    ///
    /// Inputs with squared magnitude below [`Vec3::EPSILON_NORMAL_SQRT`] return
    /// the zero vector exactly, never NaN or infinity.
    #[inline]
    pub fn normalized(self) -> Self {
        let sqr = self.sqr_magnitude();
        if sqr < Self::EPSILON_NORMAL_SQRT {
            Vec3::ZERO
        } else {
            self / sqr.sqrt()
        }
    }

    /// Scales this vector to unit length in place, with the same zero-length
    /// rule as [`normalized`](Self::normalized).
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns `true` when the two vectors are closer than [`Vec3::EPSILON`].
    ///
    /// This is the comparison behind `==`.
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        (self - other).sqr_magnitude() < Self::EPSILON * Self::EPSILON
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-hand-rule cross product; `a.cross(b) == -(b.cross(a))`.
    ///
    /// # Example
    /// ```
    /// use engine_math::Vec3;
    ///
    /// assert_eq!(Vec3::RIGHT.cross(Vec3::UP), Vec3::FORWARD);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).magnitude()
    }

    /// Unsigned angle in radians between this vector and `to`, in `[0, π]`.
    ///
    /// Returns `0.0` when either input is effectively zero-length.
    pub fn angle(self, to: Self) -> f32 {
        let denom = (self.sqr_magnitude() * to.sqr_magnitude()).sqrt();
        if denom < Self::EPSILON_NORMAL_SQRT {
            return 0.0;
        }
        (self.dot(to) / denom).clamp(-1.0, 1.0).acos()
    }

    /// Signed angle in radians between this vector and `to`, in `[-π, π]`.
    ///
    /// The sign is taken from the orientation of the rotation around `axis`:
    /// positive when the cross product of the operands points along `axis`.
    pub fn signed_angle(self, to: Self, axis: Self) -> f32 {
        let unsigned = self.angle(to);
        if axis.dot(self.cross(to)) < 0.0 {
            -unsigned
        } else {
            unsigned
        }
    }

    /// Linear interpolation between two vectors with `t` clamped to `[0, 1]`.
    ///
    /// # Example
    /// ```
    /// use engine_math::Vec3;
    ///
    /// let halfway = Vec3::ZERO.lerp(Vec3::new(10.0, 0.0, 0.0), 0.5);
    /// assert_eq!(halfway, Vec3::new(5.0, 0.0, 0.0));
    /// ```
    #[inline]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        self.lerp_unclamped(to, t.clamp(0.0, 1.0))
    }

    /// Linear interpolation without clamping `t`; values outside `[0, 1]`
    /// extrapolate along the line through the two points.
    #[inline]
    pub fn lerp_unclamped(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }

    /// Spherical interpolation with `t` clamped to `[0, 1]`.
    ///
    /// The direction travels along the great-circle arc between the two
    /// directions while the magnitude interpolates linearly. Near-colinear or
    /// effectively zero-length inputs fall back to [`lerp`](Self::lerp).
    #[inline]
    pub fn slerp(self, to: Self, t: f32) -> Self {
        self.slerp_unclamped(to, t.clamp(0.0, 1.0))
    }

    /// Spherical interpolation without clamping `t`.
    ///
    /// Same degenerate-input rules as [`slerp`](Self::slerp).
    pub fn slerp_unclamped(self, to: Self, t: f32) -> Self {
        let from_sqr = self.sqr_magnitude();
        let to_sqr = to.sqr_magnitude();
        if from_sqr < Self::EPSILON_NORMAL_SQRT || to_sqr < Self::EPSILON_NORMAL_SQRT {
            return self.lerp_unclamped(to, t);
        }
        let from_mag = from_sqr.sqrt();
        let to_mag = to_sqr.sqrt();
        let from_dir = self / from_mag;
        let to_dir = to / to_mag;
        let cos_theta = from_dir.dot(to_dir).clamp(-1.0, 1.0);
        // sin(θ) vanishes for both aligned and opposite directions; the arc is
        // ill-defined there so the straight line takes over.
        if cos_theta.abs() > 1.0 - Self::EPSILON {
            return self.lerp_unclamped(to, t);
        }
        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        let dir = from_dir * (((1.0 - t) * theta).sin() / sin_theta)
            + to_dir * ((t * theta).sin() / sin_theta);
        dir * (from_mag + (to_mag - from_mag) * t)
    }

    /// Steps from this point toward `target` by at most `max_distance_delta`.
    ///
    /// Returns `target` exactly once it is within range. A negative delta steps
    /// away from the target.
    pub fn move_towards(self, target: Self, max_distance_delta: f32) -> Self {
        let delta = target - self;
        let sqr = delta.sqr_magnitude();
        if sqr == 0.0
            || (max_distance_delta >= 0.0 && sqr <= max_distance_delta * max_distance_delta)
        {
            return target;
        }
        self + delta / sqr.sqrt() * max_distance_delta
    }

    /// Rotates this vector toward `target`, turning by at most
    /// `max_radians_delta` and changing magnitude by at most
    /// `max_magnitude_delta`.
    ///
    /// When either operand is effectively zero-length there is no direction to
    /// rotate, and the result steps straight toward the target instead.
    pub fn rotate_towards(
        self,
        target: Self,
        max_radians_delta: f32,
        max_magnitude_delta: f32,
    ) -> Self {
        let from_mag = self.magnitude();
        let to_mag = target.magnitude();
        if from_mag <= Self::EPSILON || to_mag <= Self::EPSILON {
            return self.move_towards(target, max_magnitude_delta);
        }

        let diff = to_mag - from_mag;
        let mag = if diff.abs() <= max_magnitude_delta {
            to_mag
        } else {
            from_mag + diff.signum() * max_magnitude_delta
        };

        let from_dir = self / from_mag;
        let to_dir = target / to_mag;
        let angle = from_dir.angle(to_dir);
        if angle <= max_radians_delta {
            return to_dir * mag;
        }
        from_dir.slerp_unclamped(to_dir, max_radians_delta / angle) * mag
    }

    /// Returns this vector with its magnitude clamped to `max_length`.
    ///
    /// Vectors already within the limit are returned unchanged, bit for bit.
    pub fn clamp_magnitude(self, max_length: f32) -> Self {
        let sqr = self.sqr_magnitude();
        if sqr > max_length * max_length {
            self / sqr.sqrt() * max_length
        } else {
            self
        }
    }

    /// Projects this vector onto `on_normal`.
    ///
    /// Returns the zero vector when `on_normal` is effectively zero-length.
    pub fn project(self, on_normal: Self) -> Self {
        let sqr = on_normal.sqr_magnitude();
        if sqr < Self::EPSILON_NORMAL_SQRT {
            Vec3::ZERO
        } else {
            on_normal * (self.dot(on_normal) / sqr)
        }
    }

    /// Projects this vector onto the plane through the origin whose normal is
    /// `plane_normal`.
    #[inline]
    pub fn project_on_plane(self, plane_normal: Self) -> Self {
        self - self.project(plane_normal)
    }

    /// Reflects this vector off the plane defined by `normal`.
    ///
    /// `normal` is assumed to be unit length by the caller.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Returns an arbitrary vector orthogonal to `normal`.
    ///
    /// The result is unnormalized and not unique, but deterministic for a
    /// given input. The axis pairing is chosen away from the dominant
    /// component so the result never collapses to zero for non-zero input.
    pub fn orthogonal(normal: Self) -> Self {
        if normal.z.abs() < normal.x.abs() {
            Vec3::new(normal.y, -normal.x, 0.0)
        } else {
            Vec3::new(0.0, -normal.z, normal.y)
        }
    }

    /// Builds an orthonormal basis in place.
    ///
    /// `normal` is normalized; `tangent` is made orthogonal to `normal` and
    /// normalized (replaced by an arbitrary orthogonal direction when it is
    /// colinear with `normal`); `binormal` is overwritten with their cross
    /// product, which is already unit length.
    pub fn ortho_normalize(normal: &mut Vec3, tangent: &mut Vec3, binormal: &mut Vec3) {
        *normal = normal.normalized();
        let mut t = *tangent - tangent.project(*normal);
        if t.sqr_magnitude() < Self::EPSILON_NORMAL_SQRT {
            t = Vec3::orthogonal(*normal);
        }
        *tangent = t.normalized();
        *binormal = normal.cross(*tangent);
    }

    /// Component-wise minimum of two vectors.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Vec3::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum of two vectors.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Vec3::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Drops the z component, narrowing to a [`Vec2`].
    #[inline]
    pub const fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Appends a fourth component, widening to a [`Vec4`].
    ///
    /// Pass `0.0` for directions and `1.0` for positions when the result feeds
    /// a homogeneous transform.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

/// Tolerance-based equality: see [`Vec3::approx_eq`].
impl PartialEq for Vec3 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(*other)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(values: [f32; 3]) -> Self {
        Vec3::new(values[0], values[1], values[2])
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(vec: Vec3) -> Self {
        vec.to_array()
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    #[inline]
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Vec3::new(x, y, z)
    }
}

/// Narrowing conversion; drops the w component.
impl From<Vec4> for Vec3 {
    #[inline]
    fn from(vec: Vec4) -> Self {
        vec.truncate()
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Add<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, scalar: f32) -> Self {
        Vec3::new(self.x + scalar, self.y + scalar, self.z + scalar)
    }
}

impl Add<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn add(self, vec: Vec3) -> Vec3 {
        vec + self
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Sub<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, scalar: f32) -> Self {
        Vec3::new(self.x - scalar, self.y - scalar, self.z - scalar)
    }
}

impl Sub<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn sub(self, vec: Vec3) -> Vec3 {
        Vec3::new(self - vec.x, self - vec.y, self - vec.z)
    }
}

/// Component-wise multiply (non-uniform scale).
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Vec3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, vec: Vec3) -> Vec3 {
        vec * self
    }
}

/// Component-wise divide. Zero components follow IEEE-754 (±∞/NaN).
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, other: Self) -> Self {
        Vec3::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }
}

/// Scalar divide. A zero divisor follows IEEE-754 (±∞/NaN).
impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f32) -> Self {
        Vec3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// Divides a scalar by each component.
impl Div<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn div(self, vec: Vec3) -> Vec3 {
        Vec3::new(self / vec.x, self / vec.y, self / vec.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<f32> for Vec3 {
    #[inline]
    fn add_assign(&mut self, scalar: f32) {
        *self = *self + scalar;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl SubAssign<f32> for Vec3 {
    #[inline]
    fn sub_assign(&mut self, scalar: f32) {
        *self = *self - scalar;
    }
}

impl MulAssign for Vec3 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl DivAssign for Vec3 {
    #[inline]
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

impl DivAssign<f32> for Vec3 {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}
