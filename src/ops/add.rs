use core::ops::Add;

use crate::constant::GUARD;
use crate::util;
use crate::F32;

impl Add for F32 {
    type Output = F32;

    fn add(self, other: F32) -> F32 {
        add_impl(self, other)
    }
}

/// Softfloat addition over signed guard-shifted mantissas.
///
/// The rounding behavior is truncation of the guard-shifted sum: mantissas
/// are pre-shifted left by [`GUARD`] bits, aligned with an arithmetic right
/// shift, summed, renormalized, and reassembled by dropping the guard bits.
/// There is no round-to-even tie-break; that asymmetry is part of the
/// operation's defined output and must not be "fixed".
pub(crate) fn add_impl(x: F32, y: F32) -> F32 {
    if x.is_nan() || y.is_nan() {
        return F32::NAN;
    }
    if x.is_infinity() {
        // Same-signed infinities pass through; opposite signs cancel to NaN.
        return if y.is_infinity() && x.sign() != y.sign() {
            F32::NAN
        } else {
            x
        };
    }
    if y.is_infinity() {
        return y;
    }

    // Zero + zero resolves by the IEEE sign table: -0 only when both
    // operands are -0, which is exactly the AND of the raw words.
    if x.is_zero() && y.is_zero() {
        return F32::from_raw(x.to_raw() & y.to_raw());
    }

    // Order so `big` carries the larger effective exponent; beyond a gap of
    // 25 the smaller operand sits entirely below the guard bits.
    let (big, small) = if y.eff_exp() > x.eff_exp() { (y, x) } else { (x, y) };
    let gap = big.eff_exp() - small.eff_exp();
    if gap > 25 {
        return big;
    }

    let mb = big.signed_sig() << GUARD;
    let ms = (small.signed_sig() << GUARD) >> gap;
    let sum = mb + ms;
    if sum == 0 {
        return F32::ZERO;
    }

    let sign = sum < 0;
    let mag = sum.unsigned_abs();

    // Renormalize: bring the leading bit to position 23 + GUARD, adjusting
    // the exponent by how far it moved.
    let top = 31 - mag.leading_zeros() as i32;
    let lead = (23 + GUARD) as i32;
    let exp = big.eff_exp() + top - lead;
    let sig = if top >= lead {
        mag >> (top - lead) as u32
    } else {
        mag << (lead - top) as u32
    };

    util::pack(sign, exp, sig >> GUARD)
}
