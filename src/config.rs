// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The render configuration, and the parsers that build it out of
//! command-line values.

use num::Complex;
use std::str::FromStr;

use crate::error::FractalError;
use crate::escape::Fractal;
use crate::planes::PlaneMapper;

/// Given a string and a separator, returns the two values separated by
/// the separator.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// Parses `w,h` into an image size.
pub fn parse_size(s: &str) -> Result<(u32, u32), FractalError> {
    parse_pair(s, ',').ok_or_else(|| FractalError::BadSize(s.to_string()))
}

/// Parses a degree, which must be at least 2.
pub fn parse_degree(s: &str) -> Result<u32, FractalError> {
    match u32::from_str(s) {
        Ok(d) if d >= 2 => Ok(d),
        _ => Err(FractalError::BadDegree(s.to_string())),
    }
}

/// Parses `re,im` into a complex number.
pub fn parse_complex(s: &str) -> Result<Complex<f64>, FractalError> {
    parse_pair(s, ',')
        .map(|(re, im)| Complex { re, im })
        .ok_or_else(|| FractalError::BadComplex(s.to_string()))
}

/// Parses `x,y` or `x,y,a,b` into the region's maximum and minimum
/// corners.  With only two numbers the minimum is the maximum mirrored
/// through the origin.
pub fn parse_region(s: &str) -> Result<(Complex<f64>, Complex<f64>), FractalError> {
    let bad = || FractalError::BadRegion(s.to_string());
    let values = s
        .split(',')
        .map(f64::from_str)
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| bad())?;
    match values.as_slice() {
        [x, y] => Ok((Complex::new(*x, *y), Complex::new(-x, -y))),
        [x, y, a, b] => Ok((Complex::new(*x, *y), Complex::new(*a, *b))),
        _ => Err(bad()),
    }
}

/// Default region maximum, used when no bounds are given.
pub const DEFAULT_MAX: Complex<f64> = Complex { re: 2.0, im: 2.0 };

/// Default region minimum, used when no bounds are given.
pub const DEFAULT_MIN: Complex<f64> = Complex { re: -2.0, im: -2.0 };

/// Default degree.
pub const DEFAULT_DEGREE: u32 = 2;

/// Everything a render needs.  Fixed once built.
#[derive(Debug)]
pub struct RenderConfig {
    /// Maps the image's pixels onto the region being drawn.
    pub plane: PlaneMapper,
    /// Exponent of the recurrence.
    pub degree: u32,
    /// Mandelbrot or Julia.
    pub fractal: Fractal,
}

impl RenderConfig {
    /// Validate and assemble a configuration.  Zero-sized images,
    /// degrees below two, and regions whose maximum is not above and to
    /// the right of the minimum are refused.
    pub fn new(
        width: u32,
        height: u32,
        degree: u32,
        max: Complex<f64>,
        min: Complex<f64>,
        fractal: Fractal,
    ) -> Result<RenderConfig, FractalError> {
        if degree < 2 {
            return Err(FractalError::BadDegree(degree.to_string()));
        }
        let plane = PlaneMapper::new(width, height, min, max)?;
        Ok(RenderConfig {
            plane,
            degree,
            fractal,
        })
    }

    /// Width of the image in pixels.
    pub fn width(&self) -> u32 {
        self.plane.integral_plane.0
    }

    /// Height of the image in pixels.
    pub fn height(&self) -> u32 {
        self.plane.integral_plane.1
    }
}
