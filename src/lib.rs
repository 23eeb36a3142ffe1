//! Deterministic software implementation of IEEE-754 binary32 arithmetic.
//!
//! This crate provides [`F32`], a 32-bit float evaluated entirely in integer
//! arithmetic, plus a math library (sqrt, exp/log/pow, trigonometry) and a
//! small geometry layer built on top of it. Every operation produces
//! bit-identical results across platforms for identical bit-pattern inputs,
//! which is what lockstep-networked simulations need: the hardware FPU's
//! platform-specific rounding, denormal handling and transcendental
//! approximations never influence a returned value.
//!
//! The host float type appears in exactly two places: reinterpreting raw
//! bits at the API boundary ([`F32::from_float`]/[`F32::to_float`]) and the
//! `Display` implementation, which defers to the host formatter for
//! diagnostics only.
//!
//! ```
//! use detf32::F32;
//!
//! let a = F32::from_float(1.5);
//! let b = F32::from_raw(0x4000_0000); // 2.0
//! assert_eq!((a * b).to_raw(), 0x4040_0000); // 3.0, on every platform
//! ```

mod cmp;
mod constant;
mod constructor;
mod format;
mod getter;
mod math;
mod ops;
mod util;

pub mod geom;

pub use geom::{Quat, Vec3};

/// A software IEEE-754 binary32 value.
///
/// The single field is the raw word: bit 31 sign, bits 30..23 biased
/// exponent, bits 22..0 mantissa. Values are immutable; every operation
/// returns a new `F32`.
#[derive(Clone, Copy, Default)]
pub struct F32 {
    v: u32,
}

#[cfg(feature = "serde")]
impl serde::Serialize for F32 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.v)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for F32 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(F32::from_raw)
    }
}
