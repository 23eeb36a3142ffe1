use crate::util;
use crate::F32;

// Four-interval reduction tables: atan of 0.5, 1, 1.5 and infinity, each as
// a head and a tail word.
const ATAN_HI: [F32; 4] = [
    F32::from_float(4.636_476_039_9e-1),
    F32::from_float(7.853_981_256_5e-1),
    F32::from_float(9.827_936_887_7e-1),
    F32::from_float(1.570_796_251_3),
];
const ATAN_LO: [F32; 4] = [
    F32::from_float(5.012_158_244_0e-9),
    F32::from_float(3.774_894_707_9e-8),
    F32::from_float(3.447_321_717_0e-8),
    F32::from_float(7.549_789_415_9e-8),
];
const AT: [F32; 11] = [
    F32::from_float(3.333_333_432_7e-1),
    F32::from_float(-2.000_000_029_8e-1),
    F32::from_float(1.428_571_492_4e-1),
    F32::from_float(-1.111_111_044_9e-1),
    F32::from_float(9.090_887_010_1e-2),
    F32::from_float(-7.691_875_845_2e-2),
    F32::from_float(6.661_073_118_4e-2),
    F32::from_float(-5.833_570_286_6e-2),
    F32::from_float(4.976_877_942_7e-2),
    F32::from_float(-3.653_157_129_9e-2),
    F32::from_float(1.628_581_993_3e-2),
];

// pi with its tail, for the atan2 quadrant folds.
const PI_HI: F32 = F32::from_float(3.141_592_741_0);
const PI_LO: F32 = F32::from_float(-8.742_277_657_3e-8);

impl F32 {
    /// Arc tangent into (-pi/2, pi/2).
    ///
    /// Values above 1 route through `atan(x) = pi/2 - atan(1/x)` (the last
    /// table interval); the polynomial only ever sees |x| below 7/16.
    pub fn atan(self) -> F32 {
        if self.is_nan() {
            return F32::NAN;
        }
        let ix = self.abs().to_raw();
        if ix >= 0x4C80_0000 {
            // |x| >= 2^26: the series has converged onto +-pi/2.
            let z = ATAN_HI[3] + ATAN_LO[3];
            return if self.sign() { -z } else { z };
        }

        let (id, x): (Option<usize>, F32) = if ix < 0x3EE0_0000 {
            // |x| < 0.4375
            if ix < 0x3980_0000 {
                // |x| < 2^-12: atan(x) is x.
                return self;
            }
            (None, self)
        } else {
            let x = self.abs();
            if ix < 0x3F98_0000 {
                if ix < 0x3F30_0000 {
                    // [0.4375, 0.6875): center on atan(1/2)
                    (Some(0), (F32::TWO * x - F32::ONE) / (F32::TWO + x))
                } else {
                    // [0.6875, 1.1875): center on atan(1)
                    (Some(1), (x - F32::ONE) / (x + F32::ONE))
                }
            } else if ix < 0x401C_0000 {
                // [1.1875, 2.4375): center on atan(3/2)
                let three_half = F32::from_raw(0x3FC0_0000);
                (Some(2), (x - three_half) / (F32::ONE + three_half * x))
            } else {
                // [2.4375, 2^26): fold through the reciprocal
                (Some(3), -F32::ONE / x)
            }
        };

        // Odd/even split of the degree-11 polynomial.
        let z = x * x;
        let w = z * z;
        let s1 = z * (AT[0] + w * (AT[2] + w * (AT[4] + w * (AT[6] + w * (AT[8] + w * AT[10])))));
        let s2 = w * (AT[1] + w * (AT[3] + w * (AT[5] + w * (AT[7] + w * AT[9]))));

        match id {
            None => x - x * (s1 + s2),
            Some(id) => {
                let z = ATAN_HI[id] - ((x * (s1 + s2) - ATAN_LO[id]) - x);
                if self.sign() {
                    -z
                } else {
                    z
                }
            }
        }
    }

    /// Four-quadrant arc tangent of `self` (y) over `x`, into (-pi, pi].
    pub fn atan2(self, x: F32) -> F32 {
        let y = self;
        if x.is_nan() || y.is_nan() {
            return F32::NAN;
        }
        if y.is_zero() && x.is_zero() {
            // Both axes collapsed: zero, keeping y's sign.
            return util::zero(y.sign());
        }
        if x.is_infinity() {
            if y.is_infinity() {
                return if x.sign() {
                    // (+-inf, -inf) -> +-3pi/4
                    let v = F32::from_raw(0x4016_CBE4);
                    if y.sign() { -v } else { v }
                } else {
                    if y.sign() { -F32::FRAC_PI_4 } else { F32::FRAC_PI_4 }
                };
            }
            return if x.sign() {
                if y.sign() { -PI_HI } else { PI_HI }
            } else {
                util::zero(y.sign())
            };
        }
        if y.is_infinity() {
            return if y.sign() { -F32::FRAC_PI_2 } else { F32::FRAC_PI_2 };
        }
        if y.is_zero() {
            // On the x axis: 0 toward positive x, +-pi toward negative.
            return if x.sign() {
                if y.sign() { -PI_HI } else { PI_HI }
            } else {
                util::zero(y.sign())
            };
        }
        if x.is_zero() {
            return if y.sign() { -F32::FRAC_PI_2 } else { F32::FRAC_PI_2 };
        }

        // The ratio saturates the atan tables when the exponents are more
        // than 26 binades apart; skip the division there.
        let exp_gap = y.eff_exp() - x.eff_exp();
        let z = if exp_gap > 26 {
            F32::FRAC_PI_2
        } else if x.sign() && exp_gap < -26 {
            F32::ZERO
        } else {
            (y / x).abs().atan()
        };

        match (y.sign(), x.sign()) {
            (false, false) => z,
            (true, false) => -z,
            (false, true) => PI_HI - (z - PI_LO),
            (true, true) => (z - PI_LO) - PI_HI,
        }
    }
}
