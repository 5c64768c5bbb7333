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

const EXPONENT_MASK: u64 = 0x7ff0_0000_0000_0000;
const FRACTION_MASK: u64 = 0x000f_ffff_ffff_ffff;
const IMPLICIT_BIT: u64 = 1 << 52;
const EXPONENT_BIAS: i32 = 1023;
/// Exponent of the last fraction bit of a number whose raw exponent is zero
const SUBNORMAL_LSB: i32 = -1074;

/// Smallest positive subnormal, 2^-1074
pub(crate) const MIN_SUBNORMAL: f64 = f64::from_bits(1);

#[inline(always)]
const fn raw_exponent(bits: u64) -> i32 {
    ((bits & EXPONENT_MASK) >> 52) as i32
}

/// `floor(log2(|x|))`, `x` must be finite and non-zero.
#[inline]
pub(crate) const fn msb_exponent(x: f64) -> i32 {
    let bits = x.to_bits();
    let raw = raw_exponent(bits);
    if raw > 0 {
        raw - EXPONENT_BIAS
    } else {
        63 - (bits & FRACTION_MASK).leading_zeros() as i32 + SUBNORMAL_LSB
    }
}

/// Exponent of the lowest set significand bit, `x` must be finite and non-zero.
#[inline]
pub(crate) const fn lsb_exponent(x: f64) -> i32 {
    let bits = x.to_bits();
    let raw = raw_exponent(bits);
    let significand = if raw > 0 {
        (bits & FRACTION_MASK) | IMPLICIT_BIT
    } else {
        bits & FRACTION_MASK
    };
    // Subnormals share the scale of the smallest normal binade
    let scale = if raw > 0 { raw } else { 1 };
    scale - EXPONENT_BIAS - 52 + significand.trailing_zeros() as i32
}

/// Returns the magnitude of the most significant bit of `x` as an exponent
/// of 2, that is `floor(log2(|x|))`.
///
/// Zero maps to `-inf`, both infinities map to `+inf` and NaN stays NaN.
#[inline]
pub fn msb_exp(x: f64) -> f64 {
    if !x.is_finite() {
        return x.abs();
    }
    if x == 0. {
        return f64::NEG_INFINITY;
    }
    msb_exponent(x) as f64
}

/// Returns the magnitude of the least significant non-zero bit of `x` as an
/// exponent of 2.
///
/// Special values follow [msb_exp].
#[inline]
pub fn lsb_exp(x: f64) -> f64 {
    if !x.is_finite() {
        return x.abs();
    }
    if x == 0. {
        return f64::NEG_INFINITY;
    }
    lsb_exponent(x) as f64
}

/// Number of bits from the most to the least significant set bit of `x`,
/// inclusive. Zero has none, non-finite values yield NaN.
#[inline]
pub fn significant_bits(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    if x == 0. {
        return 0.;
    }
    (msb_exponent(x) - lsb_exponent(x) + 1) as f64
}

#[inline]
pub fn is_subnormal(x: f64) -> bool {
    x != 0. && x.abs() < f64::MIN_POSITIVE
}
