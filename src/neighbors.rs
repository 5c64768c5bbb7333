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
use crate::bits::MIN_SUBNORMAL;

/// Returns the lowest `f64` that is greater than `x`.
///
/// Both zeros step to the smallest positive subnormal and `-MIN_SUBNORMAL`
/// steps to `-0.0`. `+inf` has no successor and yields NaN, `-inf` yields
/// `f64::MIN`.
#[inline]
pub fn next_double(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return f64::NAN;
    }
    if x == 0. {
        return MIN_SUBNORMAL;
    }
    let bits = x.to_bits();
    // Magnitude grows with the bit pattern on both sides of zero
    if x > 0. {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Returns the greatest `f64` that is less than `x`.
///
/// Mirror of [next_double]: `prev_double(x) == -next_double(-x)`.
#[inline]
pub fn prev_double(x: f64) -> f64 {
    -next_double(-x)
}

/// Returns true iff `x < y` and there is no other `f64` between them.
///
/// The midpoint of two neighbors is never representable, so under round to
/// nearest even it collapses onto one of the endpoints.
#[inline]
pub fn are_neighbors(x: f64, y: f64) -> bool {
    if x == f64::NEG_INFINITY {
        return y == f64::MIN;
    }
    if y == f64::INFINITY {
        return x == f64::MAX;
    }
    let avg = x + (y - x) / 2.;
    x < y && (x == avg || y == avg)
}
