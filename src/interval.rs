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
//! Closed intervals of reals with outward-rounded arithmetic.
use crate::bounds::{sum_lower_bound, sum_upper_bound};
use crate::err::IntervalError;
use std::ops::Add;

/// Closed range `[lo, hi]` of real numbers.
///
/// Results of arithmetic always contain every real obtainable from the
/// operands. When no sound enclosure exists, e.g. `inf + -inf`, the result is
/// [Interval::INVALID].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    /// `[NaN, NaN]`, the interval without a real enclosure.
    pub const INVALID: Interval = Interval {
        lo: f64::NAN,
        hi: f64::NAN,
    };

    /// Creates an interval without checking its endpoints.
    #[inline]
    pub const fn new(lo: f64, hi: f64) -> Interval {
        Interval { lo, hi }
    }

    /// Interval holding the single value `x`.
    #[inline]
    pub const fn point(x: f64) -> Interval {
        Interval { lo: x, hi: x }
    }

    /// Creates an interval, rejecting NaN endpoints and `lo > hi`.
    pub fn try_new(lo: f64, hi: f64) -> Result<Interval, IntervalError> {
        if lo.is_nan() || hi.is_nan() {
            return Err(IntervalError::NotANumber);
        }
        if lo > hi {
            return Err(IntervalError::Inverted { lo, hi });
        }
        Ok(Interval { lo, hi })
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.lo <= self.hi
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }
}

impl From<f64> for Interval {
    #[inline]
    fn from(x: f64) -> Self {
        Interval::point(x)
    }
}

impl From<[f64; 2]> for Interval {
    #[inline]
    fn from(bounds: [f64; 2]) -> Self {
        Interval::new(bounds[0], bounds[1])
    }
}

impl From<(f64, f64)> for Interval {
    #[inline]
    fn from(bounds: (f64, f64)) -> Self {
        Interval::new(bounds.0, bounds.1)
    }
}

/// Outward-rounded sum of two intervals or scalars.
///
/// Returns `[sum_lower_bound(x.lo, y.lo), sum_upper_bound(x.hi, y.hi)]`, a
/// scalar standing for both of its bounds. Any NaN endpoint makes the whole
/// result [Interval::INVALID].
pub fn add(x: impl Into<Interval>, y: impl Into<Interval>) -> Interval {
    let x = x.into();
    let y = y.into();
    let lo = sum_lower_bound(x.lo, y.lo);
    let hi = sum_upper_bound(x.hi, y.hi);
    if lo.is_nan() || hi.is_nan() {
        return Interval::INVALID;
    }
    Interval { lo, hi }
}

impl Add<Interval> for Interval {
    type Output = Interval;

    #[inline]
    fn add(self, rhs: Interval) -> Self::Output {
        add(self, rhs)
    }
}

impl Add<f64> for Interval {
    type Output = Interval;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        add(self, rhs)
    }
}

impl Add<Interval> for f64 {
    type Output = Interval;

    #[inline]
    fn add(self, rhs: Interval) -> Self::Output {
        add(self, rhs)
    }
}
