/*
 * // Copyright (c) Radzivon Bartoshyk 7/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::product::error_of_product;
use crate::sum::error_of_sum;
use std::ops::{Add, Neg};

/// Composite floating point type with up to 106 bits of precision.
///
/// The struct has 116 useful bits:
/// - 1 bit sign
/// - 11 bits exponent
/// - 2*52 bits significand
///
/// The value is the unevaluated sum `hi + lo`, where `hi` is the rounded
/// result and `lo` the rounding error left over by [add_dd] or [mul_dd].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Float116 {
    pub hi: f64,
    pub lo: f64,
}

impl Float116 {
    #[inline(always)]
    pub const fn new(hi: f64, lo: f64) -> Self {
        Self { hi, lo }
    }

    #[inline(always)]
    pub const fn from_f64(v: f64) -> Float116 {
        Float116 { hi: v, lo: 0. }
    }

    #[inline(always)]
    pub const fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    /// Folds `lo` back into `hi` so that the two parts no longer overlap.
    #[inline(always)]
    pub const fn normalize(self) -> Float116 {
        let hi = self.hi + self.lo;
        let lo = self.hi - hi + self.lo;
        Float116 { hi, lo }
    }

    /// Adds a double, keeping about 105 bits of the running sum.
    #[inline]
    pub fn add_f64(self, rhs: f64) -> Float116 {
        let mut s = add_dd(self.hi, rhs);
        s.lo += self.lo;
        s.normalize()
    }
}

impl From<f64> for Float116 {
    #[inline(always)]
    fn from(v: f64) -> Self {
        Float116::from_f64(v)
    }
}

impl Add<f64> for Float116 {
    type Output = Float116;

    #[inline(always)]
    fn add(self, rhs: f64) -> Self::Output {
        self.add_f64(rhs)
    }
}

impl Neg for Float116 {
    type Output = Float116;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

/// Exact sum of two doubles: `hi = fl(x + y)` and `lo = error_of_sum(x, y)`.
///
/// `hi + lo` equals `x + y` whenever the sum is finite and `lo == 0` exactly
/// when [is_sum_exact](crate::is_sum_exact) holds. An overflowing sum yields
/// `{ hi: ±inf, lo: ∓inf }`.
#[inline]
pub fn add_dd(x: f64, y: f64) -> Float116 {
    Float116 {
        hi: x + y,
        lo: error_of_sum(x, y),
    }
}

/// Exact product of two doubles: `hi = fl(x * y)` and
/// `lo = error_of_product(x, y)`.
///
/// Exact barring overflow, and barring underflow of `lo` near the subnormal
/// range.
#[inline]
pub fn mul_dd(x: f64, y: f64) -> Float116 {
    Float116 {
        hi: x * y,
        lo: error_of_product(x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{lsb_exp, msb_exp};
    use crate::product::is_product_exact;
    use crate::sum::is_sum_exact;
    use rand::Rng;

    const ATTEMPTS: usize = 100;
    const MAX_SAFE_INTEGER: f64 = 9007199254740991.;

    fn random_sign(rng: &mut impl Rng) -> f64 {
        if rng.random_bool(0.5) { -1. } else { 1. }
    }

    fn random_int(rng: &mut impl Rng, max: u64) -> f64 {
        rng.random_range(0..max) as f64
    }

    #[test]
    fn test_add_dd_floats() {
        let mut rng = rand::rng();
        for _ in 0..ATTEMPTS {
            let x = random_sign(&mut rng)
                * 2f64.powi(rng.random_range(-40..40))
                * rng.random::<f64>();
            let y = random_sign(&mut rng)
                * 2f64.powi(rng.random_range(-40..40))
                * rng.random::<f64>();
            let sum = add_dd(x, y);
            assert_eq!(sum.hi, x + y);
            assert_eq!(sum.hi + sum.lo, x + y);
            if is_sum_exact(x, y) {
                assert_eq!(sum.lo, 0.);
            } else {
                assert_ne!(sum.lo, 0.);
                assert_eq!(lsb_exp(sum.lo), lsb_exp(x).min(lsb_exp(y)));
            }
            if sum.hi != 0. {
                assert!(msb_exp(sum.lo) < lsb_exp(sum.hi));
            }
        }
    }

    #[test]
    fn test_add_dd_integers() {
        assert_eq!(add_dd(1., 2.), Float116::new(3., 0.));

        let big = MAX_SAFE_INTEGER * 2f64.powi(53);
        let max_q = add_dd(big, MAX_SAFE_INTEGER);
        assert_eq!(
            max_q.hi as i128 + max_q.lo as i128,
            big as i128 + MAX_SAFE_INTEGER as i128
        );

        let mut rng = rand::rng();
        for _ in 0..ATTEMPTS {
            let x = random_sign(&mut rng)
                * 2f64.powi(rng.random_range(0..70))
                * random_int(&mut rng, 1 << 53);
            let y = random_sign(&mut rng)
                * 2f64.powi(rng.random_range(0..70))
                * random_int(&mut rng, 1 << 53);
            let sum = add_dd(x, y);
            assert_eq!(sum.hi as i128 + sum.lo as i128, x as i128 + y as i128);
            if sum.hi != 0. {
                assert!(msb_exp(sum.lo) < lsb_exp(sum.hi));
            }
        }
    }

    #[test]
    fn test_add_dd_non_finite() {
        assert_eq!(
            add_dd(f64::MAX, f64::MAX),
            Float116::new(f64::INFINITY, f64::NEG_INFINITY)
        );
        assert_eq!(
            add_dd(-f64::MAX, -f64::MAX),
            Float116::new(f64::NEG_INFINITY, f64::INFINITY)
        );
        assert_eq!(add_dd(f64::INFINITY, 1.), Float116::new(f64::INFINITY, 0.));
        let nan = add_dd(f64::NAN, 1.);
        assert!(nan.hi.is_nan() && nan.lo.is_nan());
    }

    #[test]
    fn test_mul_dd_integers() {
        assert_eq!(mul_dd(3., 7.), Float116::new(21., 0.));
        let r = mul_dd(1e8 + 1., 1e8 + 1.);
        assert_eq!(r, Float116::new(10000000200000000., 1.));

        let mut rng = rand::rng();
        for _ in 0..ATTEMPTS {
            let x = random_sign(&mut rng) * random_int(&mut rng, 1 << 53);
            let y = random_sign(&mut rng) * random_int(&mut rng, 1 << 53);
            let product = mul_dd(x, y);
            assert_eq!(
                product.hi as i128 + product.lo as i128,
                x as i128 * y as i128,
                "{x} * {y}"
            );
            assert_eq!(product.lo == 0., is_product_exact(x, y), "{x} * {y}");
        }
    }

    #[test]
    fn test_mul_dd_scales_with_exponents() {
        let mut rng = rand::rng();
        for _ in 0..ATTEMPTS {
            let mx = random_int(&mut rng, 1 << 53) + 1.;
            let my = random_int(&mut rng, 1 << 53) + 1.;
            let a = rng.random_range(-400..400);
            let b = rng.random_range(-400..400);
            let unscaled = mul_dd(mx, my);
            let scaled = mul_dd(mx * 2f64.powi(a), my * 2f64.powi(b));
            assert_eq!(scaled.hi, unscaled.hi * 2f64.powi(a) * 2f64.powi(b));
            assert_eq!(scaled.lo, unscaled.lo * 2f64.powi(a) * 2f64.powi(b));
        }
    }

    #[test]
    fn test_mul_dd_non_finite() {
        assert_eq!(
            mul_dd(f64::MAX, 2.),
            Float116::new(f64::INFINITY, f64::NEG_INFINITY)
        );
        assert_eq!(mul_dd(f64::INFINITY, 2.), Float116::new(f64::INFINITY, 0.));
        let nan = mul_dd(0., f64::INFINITY);
        assert!(nan.hi.is_nan() && nan.lo.is_nan());
    }

    fn add_qd_exact(hi: f64, lo: f64, x: f64) -> bool {
        let sum = Float116::new(hi, lo) + x;
        sum.hi as i128 + sum.lo as i128 == hi as i128 + lo as i128 + x as i128
    }

    #[test]
    fn test_add_f64() {
        assert_eq!(Float116::new(3., 2.) + 1., Float116::new(6., 0.));
        // Only 105 bits precision is guaranteed.
        assert_eq!(
            Float116::new(2f64.powi(105), 2f64.powi(52) + 1.) + 2f64.powi(52),
            Float116::new(2f64.powi(105) + 2f64.powi(53), 0.)
        );
        let mut rng = rand::rng();
        for _ in 0..ATTEMPTS {
            let lo = random_int(&mut rng, (1 << 52) - 1);
            let hi = random_int(&mut rng, (1 << 53) - 1) * 2f64.powi(52);
            let x = random_int(&mut rng, (1 << 53) - 1) * 2f64.powi(rng.random_range(0..52));
            assert!(add_qd_exact(hi, lo, x), "{hi} + {lo} + {x}");
        }
    }

    #[test]
    fn test_normalize_and_neg() {
        let r = Float116::new(1., 2f64.powi(-60)).normalize();
        assert_eq!(r, Float116::new(1., 2f64.powi(-60)));
        let r = Float116::new(1., 1.).normalize();
        assert_eq!(r, Float116::new(2., 0.));
        assert_eq!(-Float116::new(1., -0.5), Float116::new(-1., 0.5));
        assert_eq!(Float116::from(4.).to_f64(), 4.);
    }
}
