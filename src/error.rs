// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong before or after a render.  The
//! rendering itself cannot fail.

use failure::Fail;
use std::io;

/// Failures raised while validating a configuration or writing the
/// finished image.
#[derive(Debug, Fail)]
pub enum FractalError {
    /// The output size was not a `w,h` pair of integers.
    #[fail(display = "Could not parse output image size '{}', expected w,h", _0)]
    BadSize(String),

    /// The degree was not an integer of at least 2.
    #[fail(display = "Degree must be an integer >= 2, got '{}'", _0)]
    BadDegree(String),

    /// A complex coordinate was not a `re,im` pair of numbers.
    #[fail(display = "Could not parse complex coordinate '{}', expected re,im", _0)]
    BadComplex(String),

    /// The region bounds did not contain two or four numbers.
    #[fail(display = "Region bounds must be x,y or x,y,a,b, got '{}'", _0)]
    BadRegion(String),

    /// One of the image dimensions was zero.
    #[fail(display = "Output image must be at least 1x1, got {}x{}", _0, _1)]
    EmptyImage(u32, u32),

    /// The region maximum was not strictly greater than its minimum.
    #[fail(display = "Region maximum {} must be greater than minimum {} on both axes", _0, _1)]
    InvertedRegion(String, String),

    /// Writing the image failed.
    #[fail(display = "Could not write image: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for FractalError {
    fn from(err: io::Error) -> Self {
        FractalError::Io(err)
    }
}
