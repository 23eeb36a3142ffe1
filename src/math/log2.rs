use super::log::{log_poly, SQRT2_OVER_2_RAW};
use crate::F32;

// 1/ln2 and 1/ln10 split into a truncated head and a tail, so the head
// times a bit-trimmed `hi` multiplies exactly.
const IVLN2_HI: F32 = F32::from_float(1.442_871_093_8);
const IVLN2_LO: F32 = F32::from_float(-1.760_528_539_3e-4);
const IVLN10_HI: F32 = F32::from_float(4.343_261_718_8e-1);
const IVLN10_LO: F32 = F32::from_float(-3.168_997_136_5e-5);
const LOG10_2_HI: F32 = F32::from_float(3.010_292_053_2e-1);
const LOG10_2_LO: F32 = F32::from_float(7.903_415_166_8e-7);

/// The shared front of log2/log10: domain edges handled by the caller's
/// closure-free match, reduction identical to `log`.
fn reduce(x: F32) -> (i32, F32) {
    let mut k = 0i32;
    let mut ix = x.to_raw();
    if ix < 0x0080_0000 {
        k -= 25;
        ix = (x * F32::from_raw(0x4C00_0000)).to_raw();
    }
    ix += 0x3F80_0000 - SQRT2_OVER_2_RAW;
    k += (ix >> 23) as i32 - 127;
    let ix = (ix & 0x007F_FFFF) + SQRT2_OVER_2_RAW;
    (k, F32::from_raw(ix) - F32::ONE)
}

/// Splits the reduced fraction into a high part with 12 trimmed bits and
/// the exact remainder, the trick that keeps the base conversion honest.
fn hi_lo(f: F32, s: F32, hfsq: F32) -> (F32, F32) {
    let r = log_poly(s);
    let hi = F32::from_raw((f - hfsq).to_raw() & 0xFFFF_F000);
    let lo = f - hi - hfsq + s * (hfsq + r);
    (hi, lo)
}

impl F32 {
    /// Base-2 logarithm, computed by its own reduction rather than as
    /// `log(x) / ln 2`; exact on powers of two.
    pub fn log2(self) -> F32 {
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

        let (k, f) = reduce(self);
        let s = f / (F32::TWO + f);
        let hfsq = F32::HALF * f * f;
        let (hi, lo) = hi_lo(f, s, hfsq);
        (lo + hi) * IVLN2_LO + lo * IVLN2_HI + hi * IVLN2_HI + F32::from_i32(k)
    }

    /// Base-10 logarithm.
    pub fn log10(self) -> F32 {
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

        let (k, f) = reduce(self);
        let s = f / (F32::TWO + f);
        let hfsq = F32::HALF * f * f;
        let (hi, lo) = hi_lo(f, s, hfsq);
        let dk = F32::from_i32(k);
        dk * LOG10_2_LO + (lo + hi) * IVLN10_LO + lo * IVLN10_HI + hi * IVLN10_HI
            + dk * LOG10_2_HI
    }
}
