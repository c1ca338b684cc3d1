// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Anti-aliasing by supersampling.  Each pixel is evaluated on an
//! N×N grid of evenly spaced points inside its footprint and the
//! colours are averaged.

use itertools::iproduct;

use crate::escape::{Channels, PointEvaluator};
use crate::planes::{Pixel, PlaneMapper};

/// The sub-pixel offsets along one axis, shared by every worker.
/// Offset `s` of `n` is `(1 + 2s - n) / 2n`, which spreads the
/// samples symmetrically around the pixel's own coordinate inside
/// [-0.5, 0.5).
#[derive(Clone, Debug, PartialEq)]
pub struct SampleOffsets(Vec<f64>);

impl SampleOffsets {
    /// The offsets for `samples` points per axis.
    pub fn new(samples: usize) -> Self {
        let n = samples as f64;
        SampleOffsets(
            (0..samples)
                .map(|s| (1.0 + (2 * s) as f64 - n) / (2 * samples) as f64)
                .collect(),
        )
    }

    /// The number of offsets per axis.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-sample table.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The offsets, in order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Everything needed to colour one pixel: where it is, how to
/// sample it, and what to evaluate.  Read-only, so one `Sampler` is
/// shared by all workers.
pub struct Sampler<'a, E: PointEvaluator + ?Sized> {
    plane: &'a PlaneMapper,
    offsets: &'a SampleOffsets,
    evaluator: &'a E,
    max_iterations: usize,
}

impl<'a, E: PointEvaluator + ?Sized> Sampler<'a, E> {
    /// Binds the pieces of one render together.
    pub fn new(
        plane: &'a PlaneMapper,
        offsets: &'a SampleOffsets,
        evaluator: &'a E,
        max_iterations: usize,
    ) -> Self {
        Sampler {
            plane,
            offsets,
            evaluator,
            max_iterations,
        }
    }

    /// The averaged, unrounded colour of a pixel.
    pub fn sample(&self, pixel: Pixel) -> Channels {
        let offsets = self.offsets.as_slice();
        let weight = (offsets.len() * offsets.len()) as f64;
        let mut total: Channels = [0.0; 4];
        for (dx, dy) in iproduct!(offsets.iter(), offsets.iter()) {
            let point = self
                .plane
                .pixel_to_point(pixel.0 as f64 + dx, pixel.1 as f64 + dy);
            let color = self
                .evaluator
                .evaluate(point.re, point.im, self.max_iterations);
            for (sum, channel) in total.iter_mut().zip(color.iter()) {
                *sum += channel / weight;
            }
        }
        total
    }

    /// The colour of a pixel as bytes.  Channels are truncated, not
    /// rounded; anything outside [0, 255] saturates.
    pub fn render_pixel(&self, pixel: Pixel) -> [u8; 4] {
        let [r, g, b, a] = self.sample(pixel);
        [r as u8, g as u8, b as u8, a as u8]
    }
}
