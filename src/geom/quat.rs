use core::ops::Mul;

use super::Vec3;
use crate::F32;

/// A quaternion of deterministic floats, `x i + y j + z k + w`.
///
/// Rotations expect a unit quaternion (a versor); [`normalize`](Quat::normalize)
/// produces one from anything non-zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    pub x: F32,
    pub y: F32,
    pub z: F32,
    pub w: F32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self {
        x: F32::ZERO,
        y: F32::ZERO,
        z: F32::ZERO,
        w: F32::ONE,
    };

    pub const fn new(x: F32, y: F32, z: F32, w: F32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians around `axis`. The axis is expected to
    /// be unit length; it is not normalized here.
    pub fn from_axis_angle(axis: Vec3, angle: F32) -> Self {
        let half = angle * F32::HALF;
        let s = half.sin();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half.cos(),
        }
    }

    pub fn dot(self, other: Self) -> F32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length_squared(self) -> F32 {
        self.dot(self)
    }

    pub fn length(self) -> F32 {
        self.length_squared().sqrt()
    }

    /// Scales to unit length, which makes the result a versor. Zero-length
    /// input falls back to the identity.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_zero() {
            return Self::IDENTITY;
        }
        Self {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
            w: self.w / len,
        }
    }

    /// The rotational inverse of a versor.
    pub fn conjugate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    fn vector(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Rotates a vector by this versor, through the expanded
    /// `v + 2 w (q x v) + 2 (q x (q x v))` form — two cross products
    /// instead of two quaternion products.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let u = self.vector();
        let t = u.cross(v) * F32::TWO;
        v + t * self.w + u.cross(t)
    }

    /// Recovers the axis and angle. A near-identity rotation has no
    /// meaningful axis; the x axis is returned as the conventional stand-in.
    pub fn to_axis_angle(self) -> (Vec3, F32) {
        let angle = F32::TWO * self.w.clamp(F32::NEG_ONE, F32::ONE).acos();
        let s = (F32::ONE - self.w * self.w).sqrt();
        if s < F32::CALC_EPSILON {
            (Vec3::X, angle)
        } else {
            (self.vector() / s, angle)
        }
    }
}

impl Mul for Quat {
    type Output = Self;

    /// Hamilton product; `a * b` applies `b` first, then `a`.
    fn mul(self, rhs: Self) -> Self {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}
