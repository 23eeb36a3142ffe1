use core::ops::Mul;

use either::Either;

use crate::constant::{BIAS, HIDDEN_BIT, SIG_WIDTH};
use crate::util::{self, decode_sig};
use crate::F32;

impl Mul for F32 {
    type Output = F32;

    fn mul(self, other: F32) -> F32 {
        mul_impl(self, other)
    }
}

/// Softfloat multiplication: 24x24-bit magnitudes multiplied in 64 bits,
/// truncating shift back down, one renormalization step. The result sign is
/// the XOR of the operand signs throughout, including zeros.
pub(crate) fn mul_impl(x: F32, y: F32) -> F32 {
    let sign = x.sign() ^ y.sign();

    if x.is_nan() || y.is_nan() {
        return F32::NAN;
    }
    if x.is_infinity() || y.is_infinity() {
        // Infinity times zero has no meaningful magnitude.
        return if x.is_zero() || y.is_zero() {
            F32::NAN
        } else {
            util::infinity(sign)
        };
    }

    let (ex, mx) = match decode_sig(sign, x) {
        Either::Left(zero) => return zero,
        Either::Right(pair) => pair,
    };
    let (ey, my) = match decode_sig(sign, y) {
        Either::Left(zero) => return zero,
        Either::Right(pair) => pair,
    };

    /*
      The product of two 24-bit significands occupies 47 or 48 bits:

          1.x * 1.y in [1, 4)

      Shifting down by 23 leaves [2^23, 2^25); the upper half of that range
      carries one extra integer bit, paid back with a single shift.
    */
    let product = mx as u64 * my as u64;
    let mut exp = ex + ey - BIAS;
    let mut sig = (product >> SIG_WIDTH) as u32;
    if sig >= HIDDEN_BIT << 1 {
        sig >>= 1;
        exp += 1;
    }

    util::pack(sign, exp, sig)
}
