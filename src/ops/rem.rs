use crate::constant::SIGN_BIT;
use crate::F32;

impl F32 {
    /// Fused modulo: `x - trunc(x/y) * y`, carrying the sign of `x`.
    ///
    /// NaN when either operand is NaN, when `y` is zero, or when `x` is
    /// infinite. A finite `x` against an infinite `y` passes through
    /// unchanged (the quotient is zero).
    pub fn fmod(self, y: F32) -> F32 {
        self.rem_quotient(y).0
    }

    /// Modulo and the truncated quotient it used, as an `i32`.
    ///
    /// The quotient conversion follows the usual truncating integer
    /// conversion, so quotients beyond i32 range wrap per the shift.
    pub fn rem_quotient(self, y: F32) -> (F32, i32) {
        if self.is_nan() || y.is_nan() || y.is_zero() || self.is_infinity() {
            return (F32::NAN, 0);
        }
        if y.is_infinity() {
            return (self, 0);
        }
        let q = (self / y).trunc();
        let r = self - q * y;
        let r = if r.is_zero() {
            // An exact multiple keeps the dividend's sign.
            F32::from_raw(self.v & SIGN_BIT)
        } else {
            r
        };
        (r, q.to_i32())
    }
}
