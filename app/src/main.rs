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
use float116::{
    Interval, add_dd, are_neighbors, error_of_product, error_of_sum, interval, is_subnormal,
    lsb_exp, msb_exp, mul_dd, mul_lower_bound, mul_upper_bound, next_double, prev_double,
    significant_bits, sum_lower_bound, sum_upper_bound,
};
use rand::Rng;

fn describe(x: f64) {
    println!(
        "{x:e} bits {:#018x}: msb 2^{} lsb 2^{} significant {} subnormal {}",
        x.to_bits(),
        msb_exp(x),
        lsb_exp(x),
        significant_bits(x),
        is_subnormal(x)
    );
    println!("  prev {:e} next {:e}", prev_double(x), next_double(x));
}

fn describe_pair(x: f64, y: f64) {
    let sum = add_dd(x, y);
    let product = mul_dd(x, y);
    println!(
        "{x:e} + {y:e} = {:e} + {:e} in [{:e}, {:e}]",
        sum.hi,
        sum.lo,
        sum_lower_bound(x, y),
        sum_upper_bound(x, y)
    );
    println!(
        "{x:e} * {y:e} = {:e} + {:e} in [{:e}, {:e}]",
        product.hi,
        product.lo,
        mul_lower_bound(x, y),
        mul_upper_bound(x, y)
    );
}

fn main() {
    let values: Vec<f64> = std::env::args()
        .skip(1)
        .filter_map(|arg| arg.parse().ok())
        .collect();

    let values = if values.is_empty() {
        vec![0.1, 0.2, 1e8 + 1., f64::from_bits(1)]
    } else {
        values
    };

    for &x in values.iter() {
        describe(x);
    }
    for pair in values.windows(2) {
        describe_pair(pair[0], pair[1]);
    }

    let sum = values
        .iter()
        .fold(Interval::point(0.), |acc, &x| interval::add(acc, x));
    println!("enclosure of the sum: [{:e}, {:e}]", sum.lo, sum.hi);

    // Cross check stepping against libm on random bit patterns
    let mut rng = rand::rng();
    let mut mismatches = 0usize;
    for _ in 0..1_000_000 {
        let x = f64::from_bits(rng.random::<u64>());
        if !x.is_finite() {
            continue;
        }
        let next = next_double(x);
        let reference = libm::nextafter(x, f64::INFINITY);
        if next != reference || !are_neighbors(x, next) {
            mismatches += 1;
            println!("next_double({x:e}) = {next:e}, libm {reference:e}");
        }
        let y = f64::from_bits(rng.random::<u64>());
        if y.is_finite() && (x + y).is_finite() && error_of_sum(x, y) != error_of_sum(y, x) {
            mismatches += 1;
            println!("error_of_sum is not symmetric for {x:e}, {y:e}");
        }
        if (x * y).is_finite() && error_of_product(x, y) != error_of_product(y, x) {
            mismatches += 1;
            println!("error_of_product is not symmetric for {x:e}, {y:e}");
        }
    }
    println!("mismatches {mismatches}");
}
