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
#![no_main]

use float116::{
    add_dd, error_of_product, error_of_sum, is_product_exact, is_sum_exact, mul_dd,
    mul_lower_bound, mul_upper_bound, sum_lower_bound, sum_upper_bound,
};
use libfuzzer_sys::fuzz_target;

fn same(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

fuzz_target!(|data: u128| {
    let x = f64::from_bits(data as u64);
    let y = f64::from_bits((data >> 64) as u64);

    let sum_lower = sum_lower_bound(x, y);
    let sum_upper = sum_upper_bound(x, y);
    let mul_lower = mul_lower_bound(x, y);
    let mul_upper = mul_upper_bound(x, y);

    assert!(same(sum_lower, sum_lower_bound(y, x)));
    assert!(same(sum_upper, sum_upper_bound(y, x)));
    assert!(same(mul_lower, mul_lower_bound(y, x)));
    assert!(same(mul_upper, mul_upper_bound(y, x)));

    assert_eq!(is_sum_exact(x, y), error_of_sum(x, y) == 0.);

    if (x + y).is_nan() || (x * y).is_nan() {
        return;
    }

    assert!(sum_lower <= sum_upper);
    assert!(mul_lower <= mul_upper);
    assert_eq!(sum_lower == sum_upper, is_sum_exact(x, y));
    assert_eq!(mul_lower == mul_upper, is_product_exact(x, y));

    let sum = add_dd(x, y);
    if sum.hi.is_finite() {
        // lower <= hi + lo <= upper, checked without rounding
        assert!(sum.lo + (sum.hi - sum_lower) >= 0.);
        assert!((sum_upper - sum.hi) - sum.lo >= 0.);
    }

    let product = mul_dd(x, y);
    if product.hi.is_finite() && product.lo != 0. {
        assert!(!is_product_exact(x, y));
        assert_eq!(product.lo, error_of_product(x, y));
    }
});
