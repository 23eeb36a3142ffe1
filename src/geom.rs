//! Geometry types composed on the deterministic float.
//!
//! Thin, mechanical layers over [`F32`](crate::F32): every component
//! operation routes through the softfloat core, so vector and quaternion
//! math inherits its bit-exactness.

mod quat;
mod vec3;

pub use quat::Quat;
pub use vec3::Vec3;
