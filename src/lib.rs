#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time fractal renderer
//!
//! The Mandelbrot and Julia sets are drawn by taking a point on the
//! complex plane and repeatedly raising it to some power and adding a
//! constant, measuring how quickly that number runs off to infinity.
//! That "velocity" becomes a color.  Points that never run off are the
//! black heart of the set.
//!
//! For the Mandelbrot set the point itself is the constant; for a
//! Julia set the constant is fixed for the whole picture and each
//! point only supplies the starting value.  Raising to powers other
//! than two gives the higher-order "multibrot" and "multijulia" sets.
//!
//! Velocities are smoothed and run through a black-blue-white Bézier
//! gradient, and the pixels are streamed out as a binary PPM.

pub mod color;
pub mod config;
pub mod error;
pub mod escape;
pub mod planes;
pub mod render;

pub use crate::config::RenderConfig;
pub use crate::error::FractalError;
pub use crate::escape::{EscapeResult, Fractal};
pub use crate::render::{render, write_image};
