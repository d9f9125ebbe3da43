// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners defining its minimum and maximum.
use num::Complex;

use crate::error::FractalError;

/// Describes the width and height of an integral plane that is assumed
/// to start at 0,0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub u32, pub u32);

/// Describes the minimum and maximum corners of the complex plane,
/// treating the real part of each value as the x-component and the
/// imaginary part as the y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// The x, y of a pixel in the image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub u32, pub u32);

/// Maps pixels of the integral plane onto the complex plane.  Pixel
/// 0,0 sits on the minimum corner, and each step along an axis moves
/// by the size of the region divided by the size of the image.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The size of the image.
    pub integral_plane: IntegralPlane,
    /// The minimum and maximum corners of the region being drawn.
    pub complex_plane: ComplexPlane,
    // Pixels per unit on the complex plane, along each axis.
    grid_factors: (f64, f64),
}

impl PlaneMapper {
    /// Build a mapper for a `width` by `height` image over the region
    /// from `min` to `max`.  Both dimensions must be non-zero and `max`
    /// must lie strictly above and to the right of `min`.
    pub fn new(
        width: u32,
        height: u32,
        min: Complex<f64>,
        max: Complex<f64>,
    ) -> Result<PlaneMapper, FractalError> {
        if width == 0 || height == 0 {
            return Err(FractalError::EmptyImage(width, height));
        }

        // Written negated so that NaN bounds are refused too.
        if !(max.re > min.re) || !(max.im > min.im) {
            return Err(FractalError::InvertedRegion(max.to_string(), min.to_string()));
        }

        let grid_factors = (
            f64::from(width) / (max.re - min.re),
            f64::from(height) / (max.im - min.im),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(min, max),
            grid_factors,
        })
    }

    /// Given a pixel on the integral cartesian plane, map it to the
    /// point it stands for on the complex plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            (f64::from(pixel.0) / self.grid_factors.0) + self.complex_plane.0.re,
            (f64::from(pixel.1) / self.grid_factors.1) + self.complex_plane.0.im,
        )
    }
}
