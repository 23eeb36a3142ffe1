use core::ops::Sub;

use crate::ops::add::add_impl;
use crate::F32;

impl Sub for F32 {
    type Output = F32;

    /// `a - b` is `a + (-b)`; negation is a sign-bit flip, so subtraction
    /// inherits every property of addition.
    fn sub(self, other: F32) -> F32 {
        add_impl(self, -other)
    }
}

#[cfg(test)]
mod test {
    use crate::F32;

    fn f(x: f32) -> F32 {
        F32::from_float(x)
    }

    #[test]
    fn exact_differences() {
        assert_eq!((f(3.0) - f(2.0)).to_float(), 1.0);
        assert_eq!((f(2.0) - f(3.0)).to_float(), -1.0);
        assert_eq!((f(-1.5) - f(-1.5)).to_raw(), 0);
        assert_eq!((f(0.75) - f(1.5)).to_float(), -0.75);
    }

    #[test]
    fn self_difference_is_positive_zero() {
        for raw in [0x3F80_0000u32, 0xC2F6_E979, 0x0000_0001, 0x7F7F_FFFF] {
            let x = F32::from_raw(raw);
            assert_eq!((x - x).to_raw(), 0);
        }
    }

    #[test]
    fn infinities() {
        assert_eq!((F32::INFINITY - F32::NEG_INFINITY).to_raw(), 0x7F80_0000);
        assert_eq!((F32::INFINITY - F32::INFINITY).to_raw(), 0xFFC0_0000);
        assert_eq!((f(1.0) - F32::INFINITY).to_raw(), 0xFF80_0000);
    }

    #[test]
    fn nan_propagates() {
        assert!((F32::NAN - f(1.0)).is_nan());
        assert!((f(1.0) - F32::NAN).is_nan());
    }
}
