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
use crate::bits::{lsb_exp, msb_exponent};
use crate::float116::Float116;
use crate::math::scalbn;
use std::cmp::Ordering;

/// Rounding error of a product, `residual * 2^exponent`.
#[derive(Copy, Clone, Debug)]
struct ScaledResidual {
    residual: f64,
    exponent: i32,
}

#[derive(Copy, Clone, Debug)]
enum ProductError {
    /// The product itself is NaN.
    Undefined,
    /// A zero or infinite operand, nothing was rounded.
    Exact,
    /// Finite operands whose product rounded to the contained infinity.
    Overflow(f64),
    Finite(ScaledResidual),
}

impl ProductError {
    fn of(x: f64, y: f64) -> ProductError {
        let product = x * y;
        if product.is_nan() {
            return ProductError::Undefined;
        }
        if x == 0. || y == 0. || !x.is_finite() || !y.is_finite() {
            return ProductError::Exact;
        }
        if product.is_infinite() {
            return ProductError::Overflow(product);
        }
        ProductError::Finite(scaled_residual(x, y, product))
    }
}

/// `x` and `y` finite and non-zero, `product == x * y` finite.
fn scaled_residual(x: f64, y: f64, product: f64) -> ScaledResidual {
    let ex = msb_exponent(x);
    let ey = msb_exponent(y);
    let exponent = ex + ey;
    // Factors in [1, 2), so partial products can neither overflow nor underflow
    let exact = Float116::from_exact_mult(scalbn(x, -ex), scalbn(y, -ey));
    // Same as exact.hi unless the product was rounded onto the subnormal grid
    let rounded = scalbn(product, -exponent);
    ScaledResidual {
        residual: (exact.hi - rounded) + exact.lo,
        exponent,
    }
}

/// Whether `x * y` can be exactly represented as an `f64`.
///
/// The lowest set bit of an exact product sits at `lsb_exp(x) + lsb_exp(y)`;
/// the rounded product keeps it only when nothing was lost.
#[inline]
pub fn is_product_exact(x: f64, y: f64) -> bool {
    lsb_exp(x) + lsb_exp(y) == lsb_exp(x * y)
}

/// Returns the rounding error of `x * y`, `(x * y) - fl(x * y)` evaluated in
/// infinite precision.
///
/// Operands are rescaled into `[1, 2)` before splitting so that neither the
/// partial products nor the error underflow, then the error is scaled back
/// with a single rounding. The result is exact unless the error lies below
/// the subnormal grid, where it degrades towards zero.
///
/// Zero and infinite operands give zero, products that overflow give the
/// negated infinity and NaN products give NaN.
pub fn error_of_product(x: f64, y: f64) -> f64 {
    match ProductError::of(x, y) {
        ProductError::Undefined => f64::NAN,
        ProductError::Exact => 0.,
        ProductError::Overflow(product) => -product,
        ProductError::Finite(r) => scalbn(r.residual, r.exponent),
    }
}

/// Sign of `(x * y) - fl(x * y)`, `None` when the product is NaN.
///
/// Taken from the unscaled residual so it stays correct when the error
/// itself is too small to be represented.
pub(crate) fn product_rounding(x: f64, y: f64) -> Option<Ordering> {
    match ProductError::of(x, y) {
        ProductError::Undefined => None,
        ProductError::Exact => Some(Ordering::Equal),
        ProductError::Overflow(product) => Some(if product > 0. {
            Ordering::Less
        } else {
            Ordering::Greater
        }),
        ProductError::Finite(r) => r.residual.partial_cmp(&0.),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const ATTEMPTS: usize = 100;
    const MAX_SAFE_INTEGER: f64 = 9007199254740991.;
    const MIN_SUBNORMAL: f64 = f64::from_bits(1);

    #[test]
    fn test_is_product_exact() {
        assert!(is_product_exact(2., 3.));
        assert!(is_product_exact(4., -5.));
        assert!(is_product_exact(4. * 2f64.powi(40), -5. * 2f64.powi(-100)));
        assert!(is_product_exact(0., 0.));
        assert!(!is_product_exact(MAX_SAFE_INTEGER, MAX_SAFE_INTEGER));
        assert!(is_product_exact(MAX_SAFE_INTEGER + 1., MAX_SAFE_INTEGER));
        assert!(is_product_exact(0., f64::MAX));
        assert!(is_product_exact(MIN_SUBNORMAL, f64::MAX));
        assert!(is_product_exact(MIN_SUBNORMAL, MAX_SAFE_INTEGER));
        // underflow
        assert!(!is_product_exact(MIN_SUBNORMAL, 0.5));
        // overflow
        assert!(!is_product_exact(2e200, 3e200));
        // infinity
        assert!(is_product_exact(10., f64::INFINITY));
        assert!(is_product_exact(f64::NEG_INFINITY, f64::INFINITY));
        assert!(!is_product_exact(0., f64::INFINITY));
        // nan
        assert!(!is_product_exact(f64::NAN, f64::NAN));
        assert!(!is_product_exact(f64::NAN, 1.));
        assert!(!is_product_exact(f64::INFINITY, f64::NAN));
    }

    #[test]
    fn test_error_of_product() {
        assert_eq!(error_of_product(2., 3.), 0.);
        assert_eq!(error_of_product(1e8 + 1., 1e8 + 1.), 1.);
        let x = 1. + f64::EPSILON;
        assert_eq!(error_of_product(x, x), f64::EPSILON * f64::EPSILON);
        assert_eq!(error_of_product(-x, x), -f64::EPSILON * f64::EPSILON);
        assert_eq!(
            error_of_product(x * 2f64.powi(600), x * 2f64.powi(-900)),
            f64::EPSILON * f64::EPSILON * 2f64.powi(-300)
        );
        // Tiny but representable error of a normal product
        let y = (1. + 2f64.powi(-30)) * 2f64.powi(-500);
        assert_eq!(error_of_product(y, y), 2f64.powi(-1060));
        // Exact products deep in the subnormal range
        assert_eq!(error_of_product(x, 2f64.powi(-1000)), 0.);
        assert_eq!(error_of_product(MIN_SUBNORMAL, MAX_SAFE_INTEGER), 0.);
    }

    #[test]
    fn test_error_of_product_special_values() {
        assert_eq!(error_of_product(f64::MAX, 2.), f64::NEG_INFINITY);
        assert_eq!(error_of_product(-f64::MAX, 2.), f64::INFINITY);
        assert_eq!(error_of_product(f64::INFINITY, 2.), 0.);
        assert_eq!(error_of_product(f64::NEG_INFINITY, f64::INFINITY), 0.);
        assert_eq!(error_of_product(0., 5.), 0.);
        assert_eq!(error_of_product(-0., f64::MAX), 0.);
        assert!(error_of_product(0., f64::INFINITY).is_nan());
        assert!(error_of_product(f64::NAN, 1.).is_nan());
    }

    #[test]
    fn test_product_rounding() {
        assert_eq!(product_rounding(2., 3.), Some(Ordering::Equal));
        assert_eq!(product_rounding(1e8 + 1., 1e8 + 1.), Some(Ordering::Greater));
        assert_eq!(product_rounding(MIN_SUBNORMAL, 0.5), Some(Ordering::Greater));
        assert_eq!(product_rounding(-MIN_SUBNORMAL, 0.5), Some(Ordering::Less));
        assert_eq!(product_rounding(MIN_SUBNORMAL, 0.75), Some(Ordering::Less));
        assert_eq!(product_rounding(MIN_SUBNORMAL, 0.25), Some(Ordering::Greater));
        assert_eq!(product_rounding(f64::MAX, 2.), Some(Ordering::Less));
        assert_eq!(product_rounding(f64::MAX, -2.), Some(Ordering::Greater));
        assert_eq!(product_rounding(f64::INFINITY, -2.), Some(Ordering::Equal));
        assert_eq!(product_rounding(0., f64::INFINITY), None);
    }

    #[test]
    fn test_error_matches_exactness() {
        let mut rng = rand::rng();
        for _ in 0..ATTEMPTS {
            let x = rng.random_range(-2f64..2f64) * 2f64.powi(rng.random_range(-300..300));
            let y = rng.random_range(-2f64..2f64) * 2f64.powi(rng.random_range(-300..300));
            if x == 0. || y == 0. {
                continue;
            }
            let error = error_of_product(x, y);
            assert_eq!(error == 0., is_product_exact(x, y), "{x} * {y}");
            assert_eq!(error, error_of_product(y, x));
            assert!(error.abs() <= (x * y).abs() * f64::EPSILON / 2.);
        }
    }

    #[test]
    fn test_short_products_are_exact() {
        let mut rng = rand::rng();
        for _ in 0..ATTEMPTS {
            // 26 bit significands never need rounding
            let x = rng.random_range(1..1u64 << 26) as f64
                * 2f64.powi(rng.random_range(-400..400));
            let y = rng.random_range(1..1u64 << 26) as f64
                * 2f64.powi(rng.random_range(-400..400));
            assert!(is_product_exact(x, y));
            assert_eq!(error_of_product(x, y), 0.);
        }
    }
}
