// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns escape values into colors with a quadratic Bézier curve
//! through three color stops.

use image::Rgb;

use crate::escape::EscapeResult;

/// Three color stops.  The curve starts at `start`, ends at `end`, and
/// is pulled toward `ctl` in between.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gradient {
    /// Color at 0.
    pub start: Rgb<u8>,
    /// Control color.  The curve does not pass through it.
    pub ctl: Rgb<u8>,
    /// Color at 1.
    pub end: Rgb<u8>,
}

/// Black through blue to white.
pub const BLACK_BLUE_WHITE: Gradient = Gradient {
    start: Rgb([0, 0, 0]),
    ctl: Rgb([0, 127, 255]),
    end: Rgb([255, 255, 255]),
};

/// Interior points are always drawn in this.
const INTERIOR: Rgb<u8> = Rgb([0, 0, 0]);

impl Gradient {
    /// Blend the stops at parameter `p`, each channel independently,
    /// truncating toward zero.  Anything below zero is treated as
    /// interior and comes back black.
    pub fn at(&self, p: f64) -> Rgb<u8> {
        if p < 0.0 {
            return INTERIOR;
        }
        let q = 1.0 - p;
        let channel = |i: usize| {
            (q * q * f64::from(self.start[i])
                + 2.0 * q * p * f64::from(self.ctl[i])
                + p * p * f64::from(self.end[i])) as u8
        };
        Rgb([channel(0), channel(1), channel(2)])
    }

    /// Color for the outcome of an escape-time run.
    pub fn color(&self, result: EscapeResult) -> Rgb<u8> {
        match result {
            EscapeResult::Escaped(p) => self.at(p),
            EscapeResult::Bounded => INTERIOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_is_black() {
        assert_eq!(BLACK_BLUE_WHITE.color(EscapeResult::Bounded), Rgb([0, 0, 0]));
    }

    #[test]
    fn negative_parameters_are_black_for_any_gradient() {
        let white = Gradient {
            start: Rgb([255, 255, 255]),
            ctl: Rgb([255, 255, 255]),
            end: Rgb([255, 255, 255]),
        };
        assert_eq!(white.at(-0.25), Rgb([0, 0, 0]));
        assert_eq!(BLACK_BLUE_WHITE.at(-1.0), Rgb([0, 0, 0]));
    }

    #[test]
    fn endpoints_hit_the_outer_stops() {
        assert_eq!(BLACK_BLUE_WHITE.at(0.0), Rgb([0, 0, 0]));
        assert_eq!(BLACK_BLUE_WHITE.at(1.0), Rgb([255, 255, 255]));
        assert_eq!(BLACK_BLUE_WHITE.color(EscapeResult::Escaped(1.0)), Rgb([255, 255, 255]));
    }

    #[test]
    fn midpoint_blends_all_three() {
        // 0.25 * start + 0.5 * ctl + 0.25 * end
        assert_eq!(BLACK_BLUE_WHITE.at(0.5), Rgb([63, 127, 191]));
    }

    #[test]
    fn channels_stay_in_range_across_the_curve() {
        for step in 0..=100 {
            let p = f64::from(step) / 100.0;
            let c = BLACK_BLUE_WHITE.at(p);
            // The blend is convex, so blue leads green leads red.
            assert!(c[0] <= c[1] && c[1] <= c[2], "{:?} at {}", c, p);
        }
    }
}
