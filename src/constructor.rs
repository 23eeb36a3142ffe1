use crate::constant::{BIAS, HIDDEN_BIT, SIG_MASK, SIG_WIDTH};
use crate::F32;

impl F32 {
    /// Reinterprets a raw IEEE-754 binary32 word. Zero cost; the canonical
    /// deserialization.
    pub const fn from_raw(v: u32) -> F32 {
        F32 { v }
    }

    /// The raw word. The canonical serialization.
    pub const fn to_raw(self) -> u32 {
        self.v
    }

    /// Reinterprets the bits of a host float. No arithmetic happens on the
    /// host value; this assumes the host `f32` is IEEE binary32.
    pub const fn from_float(f: f32) -> F32 {
        F32 { v: f.to_bits() }
    }

    /// Reinterprets into a host float, for output boundaries only.
    pub const fn to_float(self) -> f32 {
        f32::from_bits(self.v)
    }

    pub fn from_i32(n: i32) -> F32 {
        if n == 0 {
            return F32::ZERO;
        }
        if n == i32::MIN {
            // The one magnitude that has no positive counterpart: -2^31.
            return F32::from_raw(0xCF00_0000);
        }
        F32::from_magnitude(n < 0, n.unsigned_abs())
    }

    pub fn from_u32(n: u32) -> F32 {
        if n == 0 {
            return F32::ZERO;
        }
        F32::from_magnitude(false, n)
    }

    /// Normalizes a non-zero magnitude so its top bit becomes the implicit
    /// bit. Magnitudes above 2^24 lose their low bits to a truncating shift.
    fn from_magnitude(sign: bool, mag: u32) -> F32 {
        let top = 31 - mag.leading_zeros();
        let sig = if top <= SIG_WIDTH {
            mag << (SIG_WIDTH - top)
        } else {
            mag >> (top - SIG_WIDTH)
        };
        let exp = (BIAS + top as i32) as u32;
        F32::from_raw(((sign as u32) << 31) | (exp << SIG_WIDTH) | (sig & SIG_MASK))
    }

    /// Truncating conversion. Values below 1 in magnitude become 0;
    /// out-of-range values wrap per the shift, without trapping. Callers
    /// needing a checked conversion must guard beforehand.
    pub fn to_i32(self) -> i32 {
        let mag = self.int_magnitude();
        if self.sign() {
            (mag as i32).wrapping_neg()
        } else {
            mag as i32
        }
    }

    /// As [`to_i32`](F32::to_i32); negative inputs wrap.
    pub fn to_u32(self) -> u32 {
        let mag = self.int_magnitude();
        if self.sign() {
            mag.wrapping_neg()
        } else {
            mag
        }
    }

    fn int_magnitude(self) -> u32 {
        let e = self.biased_exp() as i32 - BIAS;
        if e < 0 {
            return 0;
        }
        let sig = HIDDEN_BIT | self.sig();
        if e <= SIG_WIDTH as i32 {
            sig >> (SIG_WIDTH as i32 - e) as u32
        } else {
            sig.wrapping_shl((e - SIG_WIDTH as i32) as u32)
        }
    }
}

impl From<f32> for F32 {
    fn from(f: f32) -> F32 {
        F32::from_float(f)
    }
}

impl From<i32> for F32 {
    fn from(n: i32) -> F32 {
        F32::from_i32(n)
    }
}

impl From<u32> for F32 {
    fn from(n: u32) -> F32 {
        F32::from_u32(n)
    }
}

impl From<F32> for f32 {
    fn from(f: F32) -> f32 {
        f.to_float()
    }
}

#[cfg(test)]
mod test {
    use crate::F32;

    #[test]
    fn raw_round_trip() {
        for raw in [0u32, 1, 0x3F80_0000, 0x8000_0000, 0x7F80_0000, 0xFFC0_0000, 0xDEAD_BEEF] {
            assert_eq!(F32::from_raw(raw).to_raw(), raw);
        }
    }

    #[test]
    fn host_float_reinterpret_is_lossless() {
        assert_eq!(F32::from_raw(0x3F80_0000), F32::from_float(1.0));
        for f in [0.0f32, -0.0, 1.0, -123.456, f32::MAX, f32::MIN_POSITIVE] {
            assert_eq!(F32::from_float(f).to_float().to_bits(), f.to_bits());
        }
        // Raw word of -123.456 reads back as the same host value.
        assert_eq!(F32::from_raw(0xC2F6_E979).to_float(), -123.456);
    }

    #[test]
    fn from_i32_matches_host_within_truncation() {
        assert_eq!(F32::from_i32(0).to_raw(), 0);
        assert_eq!(F32::from_i32(1).to_raw(), 0x3F80_0000);
        assert_eq!(F32::from_i32(-1).to_raw(), 0xBF80_0000);
        assert_eq!(F32::from_i32(1024).to_raw(), 0x4480_0000);
        assert_eq!(F32::from_i32(i32::MIN).to_raw(), 0xCF00_0000);
        // Exactly representable values match the host conversion.
        for n in [2, 3, 7, 100, -100, 1 << 23, -(1 << 23), 1 << 30] {
            assert_eq!(F32::from_i32(n).to_float(), n as f32);
        }
        // 2^24 + 1 is not representable; the low bit truncates away.
        assert_eq!(F32::from_i32((1 << 24) + 1).to_float(), (1 << 24) as f32);
    }

    #[test]
    fn from_u32_covers_the_high_half() {
        assert_eq!(F32::from_u32(0).to_raw(), 0);
        assert_eq!(F32::from_u32(1).to_raw(), 0x3F80_0000);
        assert_eq!(F32::from_u32(1 << 31).to_float(), 2147483648.0);
        // 3000000001 is not representable; truncation lands on the next value down.
        assert_eq!(F32::from_u32(3_000_000_001).to_float(), 3_000_000_000.0);
    }

    #[test]
    fn to_i32_truncates_toward_zero() {
        assert_eq!(F32::from_float(0.99).to_i32(), 0);
        assert_eq!(F32::from_float(-0.99).to_i32(), 0);
        assert_eq!(F32::from_float(1.99).to_i32(), 1);
        assert_eq!(F32::from_float(-1.99).to_i32(), -1);
        assert_eq!(F32::from_float(123456.7).to_i32(), 123456);
        assert_eq!(F32::from_i32(i32::MIN).to_i32(), i32::MIN);
    }

    #[test]
    fn to_u32_on_exact_integers() {
        assert_eq!(F32::from_u32(0).to_u32(), 0);
        assert_eq!(F32::from_float(4294967040.0).to_u32(), 4294967040);
        assert_eq!(F32::from_float(2147483648.0).to_u32(), 1 << 31);
    }

    #[test]
    fn integer_round_trip_through_f32() {
        // Everything below 2^24 survives the round trip exactly.
        for n in [0i32, 1, -1, 2, 1000, -123456, (1 << 24) - 1, -((1 << 24) - 1)] {
            assert_eq!(F32::from_i32(n).to_i32(), n);
        }
    }
}
