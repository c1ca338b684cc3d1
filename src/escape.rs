// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time evaluation.
//!
//! A point on the complex plane is fed into a quadratic recurrence,
//! and we count how many steps it survives before its magnitude
//! passes 2, after which it is known to head off to infinity.  That
//! count, scaled against the iteration cap, becomes a colour.
//!
//! The renderer only ever sees the [`PointEvaluator`] capability, so
//! any escape-time formula (or any closure with the right shape) can
//! be dropped in without touching the sampler or the scheduler.

use num::Complex;

use crate::complex::{add, magnitude, multiply, ComplexNumber};

/// Four colour channels, red, green, blue, and alpha, each expected
/// to lie in [0, 255].  Kept as floats so that sub-pixel samples can
/// be averaged before the final truncation to bytes.
pub type Channels = [f64; 4];

/// The escape threshold.  Any orbit whose magnitude exceeds this
/// diverges.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Anything that can turn a point of the complex plane into a colour.
/// Shared between all render workers at once, hence `Sync`.
pub trait PointEvaluator: Sync {
    /// Colour the point (`x`, `y`), iterating no more than
    /// `max_iterations` times.
    fn evaluate(&self, x: f64, y: f64, max_iterations: usize) -> Channels;
}

impl<F> PointEvaluator for F
where
    F: Fn(f64, f64, usize) -> Channels + Sync,
{
    fn evaluate(&self, x: f64, y: f64, max_iterations: usize) -> Channels {
        self(x, y, max_iterations)
    }
}

/// Maps an iteration count onto a colour.
pub trait ColorMap: Sync {
    /// `iterations` is never larger than `max_iterations`.
    fn color(&self, iterations: usize, max_iterations: usize) -> Channels;
}

/// Black for points that escape at once, white for points that never
/// escape, and evenly spaced greys in between.  Always opaque.
#[derive(Copy, Clone, Debug, Default)]
pub struct Greyscale;

impl ColorMap for Greyscale {
    fn color(&self, iterations: usize, max_iterations: usize) -> Channels {
        let max = 255.0;
        let level = (max * iterations as f64) / max_iterations as f64;
        [level, level, level, max]
    }
}

/// Iterate `z -> z² + c` from `z`, returning the number of steps
/// taken before the next step would leave the escape radius, capped
/// at `max_iterations`.
///
/// The loop only continues while the magnitude compares `<=` to the
/// radius.  A NaN magnitude compares false, so an orbit that has gone
/// NaN counts as escaped.
#[inline]
pub fn escape_time(mut z: ComplexNumber, c: ComplexNumber, max_iterations: usize) -> usize {
    let mut iterations = 0;
    while iterations < max_iterations {
        let next = add(multiply(z, z), c);
        if !(magnitude(next) <= ESCAPE_RADIUS) {
            break;
        }
        z = next;
        iterations += 1;
    }
    iterations
}

/// The filled Julia set for a fixed constant `c`: the point being
/// coloured is the starting value of the orbit.
#[derive(Copy, Clone, Debug)]
pub struct Julia<C = Greyscale> {
    constant: ComplexNumber,
    colors: C,
}

impl Julia<Greyscale> {
    /// A greyscale Julia set for `constant`.
    pub fn new(constant: ComplexNumber) -> Self {
        Julia::with_colors(constant, Greyscale)
    }
}

impl<C: ColorMap> Julia<C> {
    /// A Julia set for `constant`, coloured by `colors`.
    pub fn with_colors(constant: ComplexNumber, colors: C) -> Self {
        Julia { constant, colors }
    }

    /// How long the orbit starting at (`x`, `y`) survives.
    pub fn iterations(&self, x: f64, y: f64, max_iterations: usize) -> usize {
        escape_time(Complex::new(x, y), self.constant, max_iterations)
    }
}

impl<C: ColorMap> PointEvaluator for Julia<C> {
    fn evaluate(&self, x: f64, y: f64, max_iterations: usize) -> Channels {
        self.colors
            .color(self.iterations(x, y, max_iterations), max_iterations)
    }
}

/// The Mandelbrot set: every orbit starts at zero and the point being
/// coloured is the constant.
#[derive(Copy, Clone, Debug, Default)]
pub struct Mandelbrot<C = Greyscale> {
    colors: C,
}

impl Mandelbrot<Greyscale> {
    /// A greyscale Mandelbrot set.
    pub fn new() -> Self {
        Mandelbrot { colors: Greyscale }
    }
}

impl<C: ColorMap> Mandelbrot<C> {
    /// A Mandelbrot set coloured by `colors`.
    pub fn with_colors(colors: C) -> Self {
        Mandelbrot { colors }
    }

    /// How long the orbit of zero survives under the constant
    /// (`x`, `y`).
    pub fn iterations(&self, x: f64, y: f64, max_iterations: usize) -> usize {
        escape_time(Complex::new(0.0, 0.0), Complex::new(x, y), max_iterations)
    }
}

impl<C: ColorMap> PointEvaluator for Mandelbrot<C> {
    fn evaluate(&self, x: f64, y: f64, max_iterations: usize) -> Channels {
        self.colors
            .color(self.iterations(x, y, max_iterations), max_iterations)
    }
}
