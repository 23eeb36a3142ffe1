use crate::util::scale;
use crate::F32;

// Reduction and kernel constants, single-precision FDLIBM set. ln2 is split
// so `k * LN2_HI` stays exact for every reachable k.
const LN2_HI: F32 = F32::from_float(6.931_457_519_5e-1);
const LN2_LO: F32 = F32::from_float(1.428_606_765_3e-6);
const INV_LN2: F32 = F32::from_float(1.442_695_021_6);
const P1: F32 = F32::from_float(1.666_662_544_0e-1);
const P2: F32 = F32::from_float(-2.766_733_290_6e-3);

// |x| beyond these raw magnitudes can only overflow (positive side) or
// underflow past the last subnormal (negative side).
const OVERFLOW_RAW: u32 = 0x42B1_7218; // just past log(MAX)
const UNDERFLOW_RAW: u32 = 0x42CF_F1B5; // ~ -103.97
const TINY_RAW: u32 = 0x3180_0000; // 2^-28
const HALF_LN2_RAW: u32 = 0x3EB1_7218;
const THREE_HALF_LN2_RAW: u32 = 0x3F85_1592;

/// Shared polynomial core: given the reduced argument as a hi/lo pair with
/// `r = hi - lo` in [-ln2/2, ln2/2], returns `2^k * exp(r)`.
fn exp_kernel(hi: F32, lo: F32, k: i32) -> F32 {
    let r = hi - lo;
    let t = r * r;
    let c = r - t * (P1 + t * P2);
    let y = F32::ONE + (r * c / (F32::TWO - c) - lo + hi);
    if k == 0 {
        y
    } else {
        scale(y, k)
    }
}

impl F32 {
    /// e raised to `self`.
    pub fn exp(self) -> F32 {
        if self.is_nan() {
            return F32::NAN;
        }
        if self.is_positive_infinity() {
            return self;
        }
        if self.is_negative_infinity() {
            return F32::ZERO;
        }
        let ax = self.abs().to_raw();
        if !self.sign() && ax >= OVERFLOW_RAW {
            return F32::INFINITY;
        }
        if self.sign() && ax >= UNDERFLOW_RAW {
            return F32::ZERO;
        }
        if ax < TINY_RAW {
            return F32::ONE + self;
        }

        if ax <= HALF_LN2_RAW {
            return exp_kernel(self, F32::ZERO, 0);
        }
        // x = k ln2 + r. For |x| under 1.5 ln2 the nearest k is simply +-1;
        // otherwise it comes from a truncating conversion of x/ln2 shifted
        // half a unit toward the sign.
        let (k, hi, lo) = if ax < THREE_HALF_LN2_RAW {
            if !self.sign() {
                (1, self - LN2_HI, LN2_LO)
            } else {
                (-1, self + LN2_HI, -LN2_LO)
            }
        } else {
            let half = if self.sign() { -F32::HALF } else { F32::HALF };
            let k = (INV_LN2 * self + half).to_i32();
            let kf = F32::from_i32(k);
            (k, self - kf * LN2_HI, kf * LN2_LO)
        };
        exp_kernel(hi, lo, k)
    }

    /// 2 raised to `self`. Exact for integral arguments in range.
    pub fn exp2(self) -> F32 {
        if self.is_nan() {
            return F32::NAN;
        }
        if self.is_positive_infinity() {
            return self;
        }
        if self.is_negative_infinity() {
            return F32::ZERO;
        }
        if self >= F32::from_raw(0x4300_0000) {
            // 2^128 and up
            return F32::INFINITY;
        }
        if self <= F32::from_raw(0xC316_0000) {
            // below 2^-150 everything truncates to zero
            return F32::ZERO;
        }

        let k = self.round();
        let r = self - k;
        // 2^r = exp(r ln2), with ln2 in two pieces to keep the kernel happy.
        exp_kernel(r * LN2_HI, -(r * LN2_LO), k.to_i32())
    }

    /// `exp(self) - 1`, accurate even where exp(x) is close to 1.
    pub fn expm1(self) -> F32 {
        const Q1: F32 = F32::from_float(-3.333_321_213_7e-2);
        const Q2: F32 = F32::from_float(1.580_717_042_1e-3);

        if self.is_nan() {
            return F32::NAN;
        }
        if self.is_positive_infinity() {
            return self;
        }
        if self.is_negative_infinity() {
            return F32::NEG_ONE;
        }
        let ax = self.abs().to_raw();
        if !self.sign() && ax >= OVERFLOW_RAW {
            return F32::INFINITY;
        }
        if self.sign() && ax >= 0x4195_B844 {
            // x < -27 ln2: exp(x) vanishes against the 1.
            return F32::NEG_ONE;
        }
        if ax < 0x3300_0000 {
            // |x| < 2^-25: the linear term is the whole story.
            return self;
        }

        // Reduction as in exp, but the rounding error of the reduced
        // argument survives as `c` and feeds the reconstruction.
        let (k, x, c) = if ax > HALF_LN2_RAW {
            let (hi, lo, k) = if ax < THREE_HALF_LN2_RAW {
                if !self.sign() {
                    (self - LN2_HI, LN2_LO, 1)
                } else {
                    (self + LN2_HI, -LN2_LO, -1)
                }
            } else {
                let half = if self.sign() { -F32::HALF } else { F32::HALF };
                let k = (INV_LN2 * self + half).to_i32();
                let t = F32::from_i32(k);
                (self - t * LN2_HI, t * LN2_LO, k)
            };
            let x = hi - lo;
            (k, x, (hi - x) - lo)
        } else {
            (0, self, F32::ZERO)
        };

        let hfx = F32::HALF * x;
        let hxs = x * hfx;
        let r1 = F32::ONE + hxs * (Q1 + hxs * Q2);
        let t = F32::from_i32(3) - r1 * hfx;
        let e = hxs * ((r1 - t) / (F32::from_i32(6) - x * t));
        if k == 0 {
            return x - (x * e - hxs);
        }

        let e = x * (e - c) - c;
        let e = e - hxs;
        if k == -1 {
            return F32::HALF * (x - e) - F32::HALF;
        }
        if k == 1 {
            return if x < F32::from_float(-0.25) {
                -F32::TWO * (e - (x + F32::HALF))
            } else {
                F32::ONE + F32::TWO * (x - e)
            };
        }
        if k <= -2 || k > 56 {
            // 2^k either swallows the trailing 1 or vanishes against it.
            let y = F32::ONE - (e - x);
            return scale(y, k) - F32::ONE;
        }
        if k < 23 {
            // 1 - 2^-k is exact here.
            let t = F32::from_raw(0x3F80_0000 - (0x0100_0000 >> k as u32));
            let y = t - (e - x);
            scale(y, k)
        } else {
            let t = F32::from_raw(((0x7F - k) as u32) << 23); // 2^-k
            let y = x - (e + t);
            let y = y + F32::ONE;
            scale(y, k)
        }
    }
}

#[cfg(test)]
mod test {
    use crate::F32;

    fn f(x: f32) -> F32 {
        F32::from_float(x)
    }

    fn close(ours: F32, expected: f32, rel: f32) {
        let o = ours.to_float();
        let tol = (expected.abs() * rel).max(rel);
        assert!((o - expected).abs() <= tol, "ours={o} expected={expected}");
    }

    #[test]
    fn exp_anchors() {
        assert_eq!(f(0.0).exp().to_float(), 1.0);
        assert_eq!(F32::NEG_ZERO.exp().to_float(), 1.0);
        close(f(1.0).exp(), core::f32::consts::E, 1e-6);
        close(f(-1.0).exp(), 1.0 / core::f32::consts::E, 1e-6);
        close(f(5.0).exp(), 148.41316, 1e-6);
        close(f(-5.0).exp(), 6.7379470e-3, 1e-6);
        close(f(20.0).exp(), 4.8516520e8, 1e-6);
        close(f(0.3).exp(), 1.3498588, 1e-6);
        close(f(-0.3).exp(), 0.74081820, 1e-6);
    }

    #[test]
    fn exp_special_values() {
        assert!(F32::NAN.exp().is_nan());
        assert_eq!(F32::INFINITY.exp().to_raw(), 0x7F80_0000);
        assert_eq!(F32::NEG_INFINITY.exp().to_raw(), 0);
        assert_eq!(f(89.0).exp().to_raw(), 0x7F80_0000);
        assert_eq!(f(-104.0).exp().to_raw(), 0);
        assert_eq!(f(1000.0).exp().to_raw(), 0x7F80_0000);
        assert_eq!(f(-1000.0).exp().to_raw(), 0);
    }

    #[test]
    fn exp_tiny_arguments_are_linear() {
        let x = F32::from_raw(0x3100_0000); // 2^-29
        assert_eq!(x.exp().to_float(), 1.0 + x.to_float());
    }

    #[test]
    fn exp2_is_exact_on_integers() {
        for k in [-149i32, -126, -10, -1, 0, 1, 10, 64, 127] {
            let ours = F32::from_i32(k).exp2().to_float();
            let host = (k as f32).exp2();
            assert_eq!(ours.to_bits(), host.to_bits(), "k={k}");
        }
        assert_eq!(f(128.0).exp2().to_raw(), 0x7F80_0000);
        assert_eq!(f(-150.0).exp2().to_raw(), 0);
    }

    #[test]
    fn exp2_between_integers() {
        close(f(0.5).exp2(), core::f32::consts::SQRT_2, 1e-6);
        close(f(10.5).exp2(), 1448.1547, 1e-6);
        close(f(-3.3).exp2(), 0.10153155, 1e-5);
    }

    #[test]
    fn expm1_anchors() {
        assert_eq!(f(0.0).expm1().to_raw(), 0);
        assert_eq!(F32::NEG_ZERO.expm1().to_raw(), 0x8000_0000);
        close(f(1.0).expm1(), core::f32::consts::E - 1.0, 1e-6);
        close(f(-1.0).expm1(), -0.63212055, 1e-6);
        close(f(5.0).expm1(), 147.41316, 1e-6);
        close(f(0.5).expm1(), 0.64872127, 1e-6);
        close(f(-0.5).expm1(), -0.39346933, 1e-6);
        close(f(30.0).expm1(), 1.0686475e13, 1e-5);
        close(f(-3.0).expm1(), -0.95021293, 1e-6);
    }

    #[test]
    fn expm1_keeps_precision_near_zero() {
        // Where exp(x)-1 would cancel catastrophically.
        let x = f(1e-4);
        close(x.expm1(), 1.00005e-4, 1e-5);
        let x = F32::from_raw(0x3400_0000); // 2^-23
        assert_eq!(x.expm1().to_raw(), 0x3400_0000);
    }

    #[test]
    fn expm1_special_values() {
        assert!(F32::NAN.expm1().is_nan());
        assert_eq!(F32::INFINITY.expm1().to_raw(), 0x7F80_0000);
        assert_eq!(F32::NEG_INFINITY.expm1().to_float(), -1.0);
        assert_eq!(f(-30.0).expm1().to_float(), -1.0);
        assert_eq!(f(100.0).expm1().to_raw(), 0x7F80_0000);
    }
}
