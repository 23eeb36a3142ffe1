use core::fmt;

use crate::constant::{ABS_MASK, EXP_MASK, SIGN_BIT};
use crate::F32;

impl F32 {
    pub const fn is_nan(self) -> bool {
        self.v & ABS_MASK > EXP_MASK
    }

    /// Infinity of either sign.
    pub const fn is_infinity(self) -> bool {
        self.v & ABS_MASK == EXP_MASK
    }

    pub const fn is_positive_infinity(self) -> bool {
        self.v == F32::INFINITY.v
    }

    pub const fn is_negative_infinity(self) -> bool {
        self.v == F32::NEG_INFINITY.v
    }

    /// Zero of either sign.
    pub const fn is_zero(self) -> bool {
        self.v & ABS_MASK == 0
    }

    pub const fn is_subnormal(self) -> bool {
        self.biased_exp() == 0 && self.sig() != 0
    }

    pub const fn is_finite(self) -> bool {
        self.v & EXP_MASK != EXP_MASK
    }

    /// Sign bit clear. True for +0 and +∞ as well.
    pub const fn is_positive(self) -> bool {
        self.v & SIGN_BIT == 0
    }

    /// Sign bit set, -0 included.
    pub const fn is_negative(self) -> bool {
        self.v & SIGN_BIT != 0
    }
}

// Printing defers to the host formatter. This is the one sanctioned use of
// the host float path besides raw reinterpretation, and it never feeds back
// into arithmetic.
impl fmt::Display for F32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_float(), f)
    }
}

impl fmt::Debug for F32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F32({:#010x} ~ {})", self.v, self.to_float())
    }
}
