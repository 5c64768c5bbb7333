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
use crate::bits::lsb_exponent;
use crate::float116::Float116;

/// Whether `x + y` can be exactly represented as an `f64`.
///
/// Agrees with `error_of_sum(x, y) == 0` for every input: sums with an
/// infinite operand are exact unless they are NaN, overflowing sums are not.
#[inline]
pub fn is_sum_exact(x: f64, y: f64) -> bool {
    let sum = x + y;
    if !x.is_finite() || !y.is_finite() {
        return !sum.is_nan();
    }
    if x == 0. || y == 0. {
        return true;
    }
    if !sum.is_finite() {
        return false;
    }
    let lsb_x = lsb_exponent(x);
    let lsb_y = lsb_exponent(y);
    // The lowest bit of the exact sum sits at min(lsb_x, lsb_y) unless the two cancel
    lsb_x == lsb_y || lsb_exponent(sum) == lsb_x.min(lsb_y)
}

/// Returns the exact rounding error of `x + y`, that is
/// `(x + y) - fl(x + y)` evaluated in infinite precision.
///
/// The error of two finite doubles is always representable. Sums that
/// overflow report the negated infinity, sums involving an infinity report
/// zero and NaN sums report NaN.
#[inline]
pub fn error_of_sum(x: f64, y: f64) -> f64 {
    let sum = x + y;
    if sum.is_finite() {
        return Float116::from_full_exact_add(x, y).lo;
    }
    if sum.is_nan() {
        f64::NAN
    } else if x.is_finite() && y.is_finite() {
        -sum
    } else {
        0.
    }
}
