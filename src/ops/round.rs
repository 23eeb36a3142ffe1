use crate::constant::{BIAS, SIGN_BIT, SIG_WIDTH};
use crate::F32;

impl F32 {
    /// Rounds toward zero by masking the fractional mantissa bits.
    pub fn trunc(self) -> F32 {
        if self.is_nan() {
            return F32::NAN;
        }
        let e = self.biased_exp() as i32 - BIAS;
        if e >= SIG_WIDTH as i32 {
            // Already integral; infinities included.
            return self;
        }
        if e < 0 {
            // |x| < 1 collapses to zero, keeping the sign.
            return F32::from_raw(self.v & SIGN_BIT);
        }
        F32::from_raw(self.v & !((1u32 << (SIG_WIDTH as i32 - e) as u32) - 1))
    }

    /// Rounds toward negative infinity.
    pub fn floor(self) -> F32 {
        let t = self.trunc();
        if !self.is_finite() || !self.sign() || self == t {
            t
        } else {
            t - F32::ONE
        }
    }

    /// Rounds toward positive infinity.
    pub fn ceil(self) -> F32 {
        let t = self.trunc();
        if !self.is_finite() || self.sign() || self == t {
            t
        } else {
            t + F32::ONE
        }
    }

    /// Rounds to the nearest integer, ties to even.
    ///
    /// The tie test compares the discarded fraction against one half; when
    /// the input's significand cannot represent the midpoint exactly the
    /// comparison can land on either side, so exact half-way cases carry a
    /// documented one-step slack.
    pub fn round(self) -> F32 {
        if self.is_nan() {
            return F32::NAN;
        }
        let e = self.biased_exp() as i32 - BIAS;
        if e >= SIG_WIDTH as i32 {
            return self;
        }
        let t = self.trunc();
        let frac = self - t;
        let away = if self.sign() {
            t - F32::ONE
        } else {
            t + F32::ONE
        };
        let half = frac.abs().total_cmp(F32::HALF);
        match half {
            core::cmp::Ordering::Less => t,
            core::cmp::Ordering::Greater => away,
            core::cmp::Ordering::Equal => {
                // |t| < 2^23 here, so the parity fits an i32 exactly.
                if t.to_i32() & 1 == 0 {
                    t
                } else {
                    away
                }
            }
        }
    }
}
