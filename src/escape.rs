// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time engine.
//!
//! Every pixel is a starting point on the complex plane.  We repeatedly
//! raise it to the chosen degree and add a constant, and count how
//! many steps it takes before the value runs away past the escape
//! radius.  Points that never run away within the iteration budget are
//! "bounded" and belong to the set.

use num::Complex;

/// The iteration budget per point.
pub const MAX_ITERATIONS: usize = 250;

/// Once a point's magnitude exceeds this, it is gone for good.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Which family of set to draw.  The choice is made once for the whole
/// image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Fractal {
    /// Each pixel is both the starting value and the additive constant.
    Mandelbrot,
    /// Each pixel is the starting value; the additive constant is fixed.
    Julia(Complex<f64>),
}

/// What came out of iterating a single point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EscapeResult {
    /// The point escaped.  Carries the smoothed escape value in [0, 1).
    Escaped(f64),
    /// The point was still inside the escape radius when the budget ran
    /// out.
    Bounded,
}

/// Raise `z` to the power `degree` by repeated complex multiplication.
/// A degree of zero yields one.
#[inline]
pub fn power(z: Complex<f64>, degree: u32) -> Complex<f64> {
    let mut result = Complex::new(1.0, 0.0);
    for _ in 0..degree {
        result = result * z;
    }
    result
}

/// Iterate `z -> z^degree + c` from `z0` until the point escapes or
/// `MAX_ITERATIONS` steps have been taken.
///
/// An escaped point is given a smoothed value: the step count is offset
/// by the log of the final squared magnitude, scaled by the budget and
/// wrapped into [0, 1).  This hides the banding you would get from the
/// bare step count.
pub fn escape_time(degree: u32, z0: Complex<f64>, c: Complex<f64>) -> EscapeResult {
    let limit = ESCAPE_RADIUS * ESCAPE_RADIUS;
    let mut z = z0;
    let mut count = 0;
    while count < MAX_ITERATIONS && z.norm_sqr() <= limit {
        count += 1;
        z = power(z, degree) + c;
    }

    if count >= MAX_ITERATIONS {
        return EscapeResult::Bounded;
    }

    let smoothed = ((count as f64) - z.norm_sqr().ln()) / (MAX_ITERATIONS as f64);
    EscapeResult::Escaped((smoothed % 1.0).abs())
}
