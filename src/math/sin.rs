use crate::F32;

// FDLIBM single-precision sine kernel, |x| <= pi/4:
// sin(x) ~ x + x^3 (S1 + z (S2 + z (S3 + z (S4 + z (S5 + z S6))))), z = x^2
const S1: F32 = F32::from_float(-1.666_666_716_3e-1);
const S2: F32 = F32::from_float(8.333_333_768_0e-3);
const S3: F32 = F32::from_float(-1.984_127_011_4e-4);
const S4: F32 = F32::from_float(2.755_731_429_7e-6);
const S5: F32 = F32::from_float(-2.505_075_968_9e-8);
const S6: F32 = F32::from_float(1.589_691_017_7e-10);

// Matching cosine kernel: cos(x) ~ 1 - z/2 + z^2 (C1 + z (C2 + ...)).
const C1: F32 = F32::from_float(4.166_666_790_8e-2);
const C2: F32 = F32::from_float(-1.388_888_922_5e-3);
const C3: F32 = F32::from_float(2.480_158_764_2e-5);
const C4: F32 = F32::from_float(-2.755_731_429_7e-7);
const C5: F32 = F32::from_float(2.087_572_337_2e-9);
const C6: F32 = F32::from_float(-1.135_964_759_8e-11);

// 2/pi, and pi/2 split so `n * PIO2_1` is exact for moderate n.
const INV_PIO2: F32 = F32::from_float(6.366_198_062_9e-1);
const PIO2_1: F32 = F32::from_float(1.570_785_522_5);
const PIO2_1T: F32 = F32::from_float(1.080_433_412_4e-5);

/// Sine polynomial on the reduced range.
fn k_sin(x: F32) -> F32 {
    let z = x * x;
    let v = z * x;
    let r = S2 + z * (S3 + z * (S4 + z * (S5 + z * S6)));
    x + v * (S1 + z * r)
}

/// Cosine polynomial on the reduced range. The `w + ((1 - w) - hz + zr)`
/// arrangement keeps the leading 1 from swallowing the correction.
fn k_cos(x: F32) -> F32 {
    let z = x * x;
    let r = z * (C1 + z * (C2 + z * (C3 + z * (C4 + z * (C5 + z * C6)))));
    let hz = F32::HALF * z;
    let w = F32::ONE - hz;
    w + (((F32::ONE - w) - hz) + z * r)
}

/// Maps `x` into [-pi/4, pi/4] by removing `n * pi/2`, returning the
/// residue and the quadrant `n mod 4`.
///
/// Two-term Cody-Waite reduction: fine for simulation-scale arguments,
/// increasingly coarse as |x| grows past the point where a float ulp
/// approaches pi. Past i32 range the quadrant wraps with the conversion;
/// the result stays deterministic everywhere.
fn rem_pio2(x: F32) -> (F32, i32) {
    let n = (x * INV_PIO2).round();
    let r = (x - n * PIO2_1) - n * PIO2_1T;
    (r, n.to_i32() & 3)
}

impl F32 {
    /// Sine, radians.
    pub fn sin(self) -> F32 {
        if self.is_nan() || self.is_infinity() {
            return F32::NAN;
        }
        if self.abs().to_raw() < 0x3980_0000 {
            // |x| < 2^-12: sin(x) is x to the last bit, signed zeros intact.
            return self;
        }
        let (r, quadrant) = rem_pio2(self);
        match quadrant {
            0 => k_sin(r),
            1 => k_cos(r),
            2 => -k_sin(r),
            _ => -k_cos(r),
        }
    }

    /// Cosine, radians, as the sine shifted a quarter turn.
    pub fn cos(self) -> F32 {
        if self.is_nan() || self.is_infinity() {
            return F32::NAN;
        }
        (self + F32::FRAC_PI_2).sin()
    }

    /// Tangent as sin/cos, with no dedicated reduction. Near odd multiples
    /// of pi/2 the division runs on two coarse operands, so accuracy
    /// degrades there; the trade is documented and accepted.
    pub fn tan(self) -> F32 {
        self.sin() / self.cos()
    }
}

#[cfg(test)]
mod test {
    use crate::F32;

    fn f(x: f32) -> F32 {
        F32::from_float(x)
    }

    fn close(ours: F32, expected: f32, tol: f32) {
        let o = ours.to_float();
        assert!((o - expected).abs() <= tol, "ours={o} expected={expected}");
    }

    #[test]
    fn sin_anchors() {
        assert_eq!(F32::ZERO.sin().to_raw(), 0);
        assert_eq!(F32::NEG_ZERO.sin().to_raw(), 0x8000_0000);
        close(F32::FRAC_PI_2.sin(), 1.0, 1e-6);
        close(F32::PI.sin(), 0.0, 1e-6);
        close(f(1.0).sin(), 0.84147098, 1e-6);
        close(f(-1.0).sin(), -0.84147098, 1e-6);
        close(f(0.5).sin(), 0.47942554, 1e-6);
        close(f(10.0).sin(), -0.54402111, 1e-5);
        close(f(100.0).sin(), -0.50636564, 1e-4);
    }

    #[test]
    fn cos_anchors() {
        close(F32::ZERO.cos(), 1.0, 1e-7);
        close(F32::PI.cos(), -1.0, 5e-3);
        close(F32::FRAC_PI_2.cos(), 0.0, 1e-6);
        close(f(1.0).cos(), 0.54030231, 1e-6);
        close(f(-1.0).cos(), 0.54030231, 1e-6);
        close(f(10.0).cos(), -0.83907153, 1e-5);
    }

    #[test]
    fn tan_anchors() {
        assert_eq!(F32::ZERO.tan().to_raw(), 0);
        close(f(1.0).tan(), 1.5574077, 1e-5);
        close(F32::FRAC_PI_4.tan(), 1.0, 1e-5);
        close(f(-1.0).tan(), -1.5574077, 1e-5);
    }

    #[test]
    fn special_values_are_nan() {
        assert!(F32::NAN.sin().is_nan());
        assert!(F32::INFINITY.sin().is_nan());
        assert!(F32::NEG_INFINITY.sin().is_nan());
        assert!(F32::NAN.cos().is_nan());
        assert!(F32::INFINITY.cos().is_nan());
        assert!(F32::NAN.tan().is_nan());
        assert!(F32::INFINITY.tan().is_nan());
    }

    #[test]
    fn odd_and_even_symmetry() {
        for v in [0.1f32, 0.7, 1.3, 2.9, 5.5] {
            let s_pos = f(v).sin().to_float();
            let s_neg = f(-v).sin().to_float();
            assert_eq!(s_pos.to_bits(), (-s_neg).to_bits(), "sin odd at {v}");
            let c_pos = f(v).cos().to_float();
            let c_neg = f(-v).cos().to_float();
            assert!((c_pos - c_neg).abs() < 1e-6, "cos even at {v}");
        }
    }

    #[test]
    fn pythagorean_identity_on_samples() {
        for v in [0.0f32, 0.3, 1.0, 1.5707964, 2.5, 3.1415927, 4.0, 6.0] {
            let s = f(v).sin();
            let c = f(v).cos();
            let sum = (s * s + c * c).to_float();
            assert!((sum - 1.0).abs() < 5e-3, "v={v} sum={sum}");
        }
    }

    #[test]
    fn tracks_the_host_at_simulation_scale() {
        let mut v = -8.0f32;
        while v < 8.0 {
            close(f(v).sin(), v.sin(), 5e-3);
            close(f(v).cos(), v.cos(), 5e-3);
            v += 0.037;
        }
    }
}
