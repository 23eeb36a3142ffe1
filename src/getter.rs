use crate::constant::{HIDDEN_BIT, SIGN_BIT, SIG_MASK, SIG_WIDTH};
use crate::F32;

impl F32 {
    pub(crate) const fn sign(self) -> bool {
        self.v & SIGN_BIT != 0
    }

    pub(crate) const fn biased_exp(self) -> u32 {
        (self.v >> SIG_WIDTH) & 0xFF
    }

    pub(crate) const fn sig(self) -> u32 {
        self.v & SIG_MASK
    }

    /// Biased exponent with subnormals promoted to 1, the exponent their
    /// mantissa is actually scaled by.
    pub(crate) const fn eff_exp(self) -> i32 {
        let e = self.biased_exp();
        if e == 0 {
            1
        } else {
            e as i32
        }
    }

    /// Mantissa as a signed integer, implicit bit restored for normals.
    /// Subnormal and zero mantissas are taken as-is.
    pub(crate) const fn signed_sig(self) -> i32 {
        let mag = if self.biased_exp() == 0 {
            self.sig()
        } else {
            HIDDEN_BIT | self.sig()
        };
        if self.sign() {
            -(mag as i32)
        } else {
            mag as i32
        }
    }
}
