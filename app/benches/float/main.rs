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
use criterion::{Criterion, criterion_group, criterion_main};
use float116::{
    add_dd, error_of_product, interval, is_product_exact, lsb_exp, msb_exp, mul_dd,
    mul_lower_bound, next_double, prev_double, sum_upper_bound,
};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm: nextafter", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::nextafter(i as f64 / 7., f64::INFINITY));
            }
        })
    });

    c.bench_function("float116: next_double", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(next_double(i as f64 / 7.));
            }
        })
    });

    c.bench_function("float116: prev_double", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(prev_double(i as f64 / 7.));
            }
        })
    });

    c.bench_function("float116: msb_exp + lsb_exp", |b| {
        b.iter(|| {
            for i in 1..1000 {
                let x = i as f64 / 7.;
                black_box(msb_exp(x) - lsb_exp(x));
            }
        })
    });

    c.bench_function("float116: add_dd", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(add_dd(i as f64 / 7., 0.1));
            }
        })
    });

    c.bench_function("float116: mul_dd", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(mul_dd(i as f64 / 7., 0.1));
            }
        })
    });

    c.bench_function("float116: error_of_product", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(error_of_product(i as f64 / 7., 1e-300));
            }
        })
    });

    c.bench_function("float116: is_product_exact", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(is_product_exact(i as f64 / 7., 0.1));
            }
        })
    });

    c.bench_function("float116: bounds", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sum_upper_bound(i as f64 / 7., 0.1));
                black_box(mul_lower_bound(i as f64 / 7., 0.1));
            }
        })
    });

    c.bench_function("float116: interval add", |b| {
        b.iter(|| {
            for i in 1..1000 {
                let x = i as f64 / 7.;
                black_box(interval::add([x, x + 1.], 0.1));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
