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
#![forbid(unsafe_code)]
#![deny(unreachable_pub)]
//! Bit level inspection, error-free transformations, double-double values and
//! outward-rounded bounds for IEEE-754 binary64.
//!
//! Every function is pure and total: degenerate inputs and results are
//! reported through NaN, infinities and signed zeros rather than errors.
mod bits;
mod bounds;
mod err;
mod float116;
pub mod interval;
/// Exact scaling and multiply-add helpers shared by the kernels
mod math;
mod mlaf;
mod neighbors;
mod product;
mod sum;

pub use bits::{is_subnormal, lsb_exp, msb_exp, significant_bits};
pub use bounds::{mul_lower_bound, mul_upper_bound, sum_lower_bound, sum_upper_bound};
pub use err::IntervalError;
pub use float116::{Float116, add_dd, mul_dd};
pub use interval::Interval;
pub use neighbors::{are_neighbors, next_double, prev_double};
pub use product::{error_of_product, is_product_exact};
pub use sum::{error_of_sum, is_sum_exact};
