use crate::F32;

impl F32 {
    /// Arc cosine into [0, pi]. Arguments outside [-1, 1] are NaN.
    ///
    /// Formed on atan2, which gets the endpoint behavior right for free:
    /// the sqrt collapses to +0 at both ends, so acos(1) lands on +0 and
    /// acos(-1) on pi.
    pub fn acos(self) -> F32 {
        if self.is_nan() {
            return F32::NAN;
        }
        if self.abs() > F32::ONE {
            return F32::NAN;
        }
        let s = (F32::ONE - self * self).sqrt();
        s.atan2(self)
    }

    /// Arc sine into [-pi/2, pi/2], as the acos complement.
    pub fn asin(self) -> F32 {
        if self.is_nan() {
            return F32::NAN;
        }
        F32::FRAC_PI_2 - self.acos()
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

    const PI: f32 = core::f32::consts::PI;

    #[test]
    fn acos_anchors() {
        assert_eq!(f(1.0).acos().to_raw(), 0);
        close(f(-1.0).acos(), PI, 1e-6);
        close(f(0.0).acos(), PI / 2.0, 1e-6);
        close(F32::NEG_ZERO.acos(), PI / 2.0, 1e-6);
        close(f(0.5).acos(), 1.0471976, 1e-6);
        close(f(-0.5).acos(), 2.0943952, 1e-6);
        close(f(0.7071068).acos(), PI / 4.0, 1e-5);
    }

    #[test]
    fn asin_anchors() {
        close(f(0.0).asin(), 0.0, 1e-7);
        close(f(1.0).asin(), PI / 2.0, 1e-6);
        close(f(-1.0).asin(), -PI / 2.0, 1e-6);
        close(f(0.5).asin(), 0.52359878, 1e-6);
        close(f(-0.5).asin(), -0.52359878, 1e-6);
    }

    #[test]
    fn out_of_domain_is_nan() {
        assert!(f(1.0001).acos().is_nan());
        assert!(f(-1.0001).acos().is_nan());
        assert!(f(2.0).asin().is_nan());
        assert!(F32::INFINITY.acos().is_nan());
        assert!(F32::NEG_INFINITY.asin().is_nan());
        assert!(F32::NAN.acos().is_nan());
        assert!(F32::NAN.asin().is_nan());
    }

    #[test]
    fn acos_tracks_the_host() {
        let mut v = -1.0f32;
        while v <= 1.0 {
            close(f(v).acos(), v.acos(), 1e-5);
            close(f(v).asin(), v.asin(), 1e-5);
            v += 0.0173;
        }
    }
}
