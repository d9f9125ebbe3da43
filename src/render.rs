// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drives the per-pixel pipeline and streams the result out as a
//! binary PPM.

use itertools::iproduct;
use log::{debug, info};
use num::Complex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::color::BLACK_BLUE_WHITE;
use crate::config::RenderConfig;
use crate::error::FractalError;
use crate::escape::{escape_time, EscapeResult, Fractal};
use crate::planes::{Pixel, PlaneMapper};

// Visit every pixel in row-major order, starting from the minimum
// corner, and write the color of whatever `escape` makes of its point.
fn scan<W, F>(plane: &PlaneMapper, out: &mut W, mut escape: F) -> Result<(), FractalError>
where
    W: Write,
    F: FnMut(Complex<f64>) -> EscapeResult,
{
    let (width, height) = (plane.integral_plane.0, plane.integral_plane.1);
    for (row, column) in iproduct!(0..height, 0..width) {
        let point = plane.pixel_to_point(&Pixel(column, row));
        out.write_all(&BLACK_BLUE_WHITE.color(escape(point)).0)?;
    }
    Ok(())
}

/// Render the configured fractal to `out` as a binary PPM: a
/// `P6 <width> <height> 255` header line followed by three bytes per
/// pixel in scan order.  Pixels are written as they are computed.
pub fn render<W: Write>(config: &RenderConfig, mut out: W) -> Result<(), FractalError> {
    debug!(
        "rendering {:?} of degree {} at {}x{} over {} .. {}",
        config.fractal,
        config.degree,
        config.width(),
        config.height(),
        config.plane.complex_plane.0,
        config.plane.complex_plane.1
    );
    writeln!(out, "P6 {} {} 255", config.width(), config.height())?;
    let degree = config.degree;
    match config.fractal {
        Fractal::Mandelbrot => scan(&config.plane, &mut out, |p| escape_time(degree, p, p))?,
        Fractal::Julia(c) => scan(&config.plane, &mut out, |p| escape_time(degree, p, c))?,
    }
    out.flush()?;
    Ok(())
}

/// Render the configured fractal into the file at `path`, creating or
/// truncating it.
pub fn write_image<P: AsRef<Path>>(path: P, config: &RenderConfig) -> Result<(), FractalError> {
    let output = BufWriter::new(File::create(path.as_ref())?);
    render(config, output)?;
    info!("wrote {}", path.as_ref().display());
    Ok(())
}
