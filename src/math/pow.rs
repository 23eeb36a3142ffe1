use crate::constant::{BIAS, SIG_WIDTH};
use crate::F32;

/// True when `y` holds an integral value (infinities excluded).
fn is_integer(y: F32) -> bool {
    y.is_finite() && y == y.trunc()
}

/// Parity of an integral `y`. Everything at or above 2^24 is even, since
/// the mantissa has run out of odd bits by then.
fn is_odd_integer(y: F32) -> bool {
    if y.biased_exp() as i32 - BIAS >= SIG_WIDTH as i32 + 1 {
        return false;
    }
    y.abs().to_i32() & 1 == 1
}

impl F32 {
    /// `self` raised to `y`, as `exp2(y * log2(|self|))` with the sign
    /// restored from the exponent's parity for negative bases.
    ///
    /// The edge-case ladder comes first and in this order: an exponent of
    /// zero and a base of one win even over NaN operands.
    pub fn pow(self, y: F32) -> F32 {
        if y.is_zero() {
            return F32::ONE;
        }
        if self == F32::ONE {
            return F32::ONE;
        }
        if self.is_nan() || y.is_nan() {
            return F32::NAN;
        }

        if y.is_infinity() {
            let ax = self.abs();
            if ax == F32::ONE {
                // pow(-1, +-inf) = 1
                return F32::ONE;
            }
            // Growing bases follow +inf exponents, shrinking ones invert.
            return if (ax > F32::ONE) == y.is_positive_infinity() {
                F32::INFINITY
            } else {
                F32::ZERO
            };
        }

        if self.is_zero() {
            return if y.sign() { F32::INFINITY } else { F32::ZERO };
        }

        let y_int = is_integer(y);
        let negate = self.sign() && is_odd_integer(y);

        if self.is_infinity() {
            let mag = if y.sign() { F32::ZERO } else { F32::INFINITY };
            return if negate { -mag } else { mag };
        }
        if self.sign() && !y_int {
            // Negative base with a fractional exponent has no real value.
            return F32::NAN;
        }

        let r = (y * self.abs().log2()).exp2();
        if negate {
            -r
        } else {
            r
        }
    }
}
