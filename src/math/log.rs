use crate::F32;

// ln2 split for the k * ln2 reconstruction, plus the shared log polynomial
// (used by log, log1p, log2 and log10).
pub(super) const LN2_HI: F32 = F32::from_float(6.931_381_225_6e-1);
pub(super) const LN2_LO: F32 = F32::from_float(9.058_000_614_5e-6);
pub(super) const LG1: F32 = F32::from_float(6.666_666_269_3e-1);
pub(super) const LG2: F32 = F32::from_float(4.000_097_215_2e-1);
pub(super) const LG3: F32 = F32::from_float(2.849_878_668_8e-1);
pub(super) const LG4: F32 = F32::from_float(2.427_907_884_1e-1);

/// Raw word of sqrt(2)/2; the reduction recenters mantissas around it so
/// f = x - 1 ends up in roughly [-0.29, 0.41].
pub(super) const SQRT2_OVER_2_RAW: u32 = 0x3F35_04F3;

/// Evaluates the shared rational approximation R(z) of the reduced log.
pub(super) fn log_poly(s: F32) -> F32 {
    let z = s * s;
    let w = z * z;
    let t1 = w * (LG2 + w * LG4);
    let t2 = z * (LG1 + w * LG3);
    t2 + t1
}

/// Splits a positive word into (k, f) with x = 2^k * (1 + f) and 1 + f in
/// [sqrt(2)/2, sqrt(2)). Subnormals are pre-scaled by 2^25 first.
fn reduce(x: F32) -> (i32, F32) {
    let mut k = 0i32;
    let mut ix = x.to_raw();
    if ix < 0x0080_0000 {
        // Subnormal: walk it up into the normal range and remember how far.
        k -= 25;
        ix = (x * F32::from_raw(0x4C00_0000)).to_raw(); // * 2^25
    }
    ix += 0x3F80_0000 - SQRT2_OVER_2_RAW;
    k += (ix >> 23) as i32 - 127;
    let ix = (ix & 0x007F_FFFF) + SQRT2_OVER_2_RAW;
    (k, F32::from_raw(ix) - F32::ONE)
}

impl F32 {
    /// Natural logarithm.
    pub fn log(self) -> F32 {
        if self.is_nan() {
            return F32::NAN;
        }
        if self.is_zero() {
            return F32::NEG_INFINITY;
        }
        if self.sign() {
            return F32::NAN;
        }
        if self.is_positive_infinity() {
            return self;
        }
        if self.to_raw() == F32::ONE.to_raw() {
            return F32::ZERO;
        }

        let (k, f) = reduce(self);
        let s = f / (F32::TWO + f);
        let r = log_poly(s);
        let hfsq = F32::HALF * f * f;
        let dk = F32::from_i32(k);
        s * (hfsq + r) + dk * LN2_LO - hfsq + f + dk * LN2_HI
    }

    /// `log(1 + self)`, accurate for small `self` where the explicit sum
    /// would cancel.
    pub fn log1p(self) -> F32 {
        if self.is_nan() {
            return F32::NAN;
        }
        if self.is_positive_infinity() {
            return self;
        }
        let ix = self.to_raw();
        if ix >= 0xBF80_0000 {
            // x <= -1: the pole itself maps to -inf, beyond it is undefined.
            return if ix == 0xBF80_0000 {
                F32::NEG_INFINITY
            } else {
                F32::NAN
            };
        }
        if self.abs().to_raw() < 0x3380_0000 {
            // |x| < 2^-24
            return self;
        }

        // 1 + x moved into the usual reduction, with a correction term for
        // the bits the addition dropped. No reduction is needed while 1+x
        // already sits in [sqrt(2)/2, sqrt(2)): x in (-0.2929.., 0.4142..).
        let skip_reduction = if self.sign() {
            ix <= 0xBE95_F619
        } else {
            ix < 0x3ED4_13D0
        };
        let (k, f, c) = if skip_reduction {
            (0, self, F32::ZERO)
        } else {
            let u = F32::ONE + self;
            let mut iu = u.to_raw();
            iu += 0x3F80_0000 - SQRT2_OVER_2_RAW;
            let k = (iu >> 23) as i32 - 127;
            let c = if k < 25 {
                let c = if k >= 2 {
                    F32::ONE - (u - self)
                } else {
                    self - (u - F32::ONE)
                };
                c / u
            } else {
                F32::ZERO
            };
            let iu = (iu & 0x007F_FFFF) + SQRT2_OVER_2_RAW;
            (k, F32::from_raw(iu) - F32::ONE, c)
        };

        let s = f / (F32::TWO + f);
        let r = log_poly(s);
        let hfsq = F32::HALF * f * f;
        let dk = F32::from_i32(k);
        s * (hfsq + r) + (dk * LN2_LO + c) - hfsq + f + dk * LN2_HI
    }
}
