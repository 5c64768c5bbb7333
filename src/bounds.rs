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
use crate::neighbors::{next_double, prev_double};
use crate::product::product_rounding;
use crate::sum::error_of_sum;
use std::cmp::Ordering;

/// Greatest double not above the exact value, given `rounded` and the sign
/// of `exact - rounded`.
#[inline(always)]
fn lower_bound(rounded: f64, direction: Option<Ordering>) -> f64 {
    match direction {
        Some(Ordering::Less) => prev_double(rounded),
        Some(_) => rounded,
        None => f64::NAN,
    }
}

/// Least double not below the exact value, given `rounded` and the sign of
/// `exact - rounded`.
#[inline(always)]
fn upper_bound(rounded: f64, direction: Option<Ordering>) -> f64 {
    match direction {
        Some(Ordering::Greater) => next_double(rounded),
        Some(_) => rounded,
        None => f64::NAN,
    }
}

#[inline(always)]
fn sum_rounding(x: f64, y: f64) -> Option<Ordering> {
    error_of_sum(x, y).partial_cmp(&0.)
}

/// Greatest `f64` that is less than or equal to the exact `x + y`.
///
/// Infinite operands pass through (`inf + 1 == inf`), indeterminate sums
/// such as `inf - inf` are NaN.
#[inline]
pub fn sum_lower_bound(x: f64, y: f64) -> f64 {
    lower_bound(x + y, sum_rounding(x, y))
}

/// Least `f64` that is greater than or equal to the exact `x + y`.
///
/// Equal to [sum_lower_bound] exactly when the sum is representable.
#[inline]
pub fn sum_upper_bound(x: f64, y: f64) -> f64 {
    upper_bound(x + y, sum_rounding(x, y))
}

/// Greatest `f64` that is less than or equal to the exact `x * y`.
///
/// A product that underflows keeps the sign of its zero: a tiny positive
/// product is bounded below by `+0.0`, a tiny negative one by `-MIN_SUBNORMAL`.
#[inline]
pub fn mul_lower_bound(x: f64, y: f64) -> f64 {
    lower_bound(x * y, product_rounding(x, y))
}

/// Least `f64` that is greater than or equal to the exact `x * y`.
#[inline]
pub fn mul_upper_bound(x: f64, y: f64) -> f64 {
    upper_bound(x * y, product_rounding(x, y))
}
