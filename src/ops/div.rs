use core::ops::Div;

use either::Either;

use crate::constant::{BIAS, SIG_WIDTH};
use crate::util::{self, decode_sig};
use crate::F32;

impl Div for F32 {
    type Output = F32;

    fn div(self, other: F32) -> F32 {
        div_impl(self, other)
    }
}

/// Softfloat division: the dividend significand is shifted up and divided by
/// the divisor significand as 64-bit integers, truncating toward zero.
pub(crate) fn div_impl(x: F32, y: F32) -> F32 {
    let sign = x.sign() ^ y.sign();

    if x.is_nan() || y.is_nan() {
        return F32::NAN;
    }
    if x.is_infinity() {
        return if y.is_infinity() {
            F32::NAN
        } else {
            util::infinity(sign)
        };
    }
    if y.is_infinity() {
        return util::zero(sign);
    }
    if y.is_zero() {
        return if x.is_zero() {
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

    // Pick the dividend shift so the truncating quotient always lands with
    // its leading bit in the hidden-bit position: one extra bit when the
    // dividend significand is the smaller of the two.
    let (shift, adjust) = if mx < my {
        (SIG_WIDTH + 1, -1)
    } else {
        (SIG_WIDTH, 0)
    };
    let quotient = ((mx as u64) << shift) / my as u64;
    let exp = ex - ey + BIAS + adjust;

    util::pack(sign, exp, quotient as u32)
}
