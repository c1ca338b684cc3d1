// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parameters of a single render.  They come in three groups:
//! the canvas, the processing effort, and the view onto the complex
//! plane.  `FractalConfig` checks them once, derives the scale, and
//! is never changed afterwards.

use num::Complex;

use crate::complex::ComplexNumber;
use crate::errors::RenderError;

/// The size of the output image, in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Canvas {
    /// Pixels across.
    pub width: usize,
    /// Pixels down.
    pub height: usize,
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas {
            width: 2600,
            height: 2000,
        }
    }
}

/// How much work to do, and with how many hands.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Processing {
    /// Number of concurrent render workers.
    pub workers: usize,
    /// Iteration cap for the escape-time test.
    pub max_iterations: usize,
    /// Sub-pixel samples per axis; each pixel averages `samples²`
    /// evaluations.
    pub samples: usize,
}

impl Default for Processing {
    fn default() -> Self {
        Processing {
            workers: 8,
            max_iterations: 512,
            samples: 2,
        }
    }
}

/// Which Julia set we are looking at, and where.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct View {
    /// The constant `c` in `z -> z² + c`.
    pub constant: ComplexNumber,
    /// The point of the complex plane at the middle of the canvas.
    pub center: ComplexNumber,
    /// Magnification.  At zoom 1 the shorter side of the canvas spans
    /// [-1, 1].
    pub zoom: f64,
}

impl Default for View {
    fn default() -> Self {
        View {
            constant: Complex::new(0.28, 0.008),
            center: Complex::new(0.0, 0.0),
            zoom: 1.5,
        }
    }
}

const PRESETS: [(f64, f64); 6] = [
    (-0.79, 0.15),
    (-0.162, 1.04),
    (0.3, -0.01),
    (-1.476, 0.0),
    (-0.12, -0.77),
    (0.28, 0.008),
];

/// The number of built-in Julia constants.
pub const PRESET_COUNT: usize = PRESETS.len();

/// A handful of Julia constants that make for good pictures, numbered
/// from 1.  Number 6 is the default.
pub fn preset(number: usize) -> Option<ComplexNumber> {
    match number {
        0 => None,
        n => PRESETS.get(n - 1).map(|&(re, im)| Complex::new(re, im)),
    }
}

/// The validated parameters of one render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FractalConfig {
    canvas: Canvas,
    processing: Processing,
    view: View,
    // The smaller of the two canvas dimensions, which becomes the
    // length of 2/zoom units of the complex plane along both axes.
    scale: f64,
}

impl FractalConfig {
    /// Validates the three parameter groups.  A configuration that
    /// would produce an empty or undefined render is refused here
    /// rather than discovered halfway through.
    pub fn new(canvas: Canvas, processing: Processing, view: View) -> Result<Self, RenderError> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(RenderError::EmptyCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }
        if processing.workers == 0 {
            return Err(RenderError::NoWorkers);
        }
        if processing.max_iterations == 0 {
            return Err(RenderError::NoIterations);
        }
        if processing.samples == 0 {
            return Err(RenderError::NoSamples);
        }
        if !(view.zoom.is_finite() && view.zoom > 0.0) {
            return Err(RenderError::BadZoom(view.zoom));
        }
        for &(name, value) in &[("Julia constant", view.constant), ("center", view.center)] {
            if !(value.re.is_finite() && value.im.is_finite()) {
                return Err(RenderError::NotFinite(name, value.to_string()));
            }
        }

        let scale = canvas.width.min(canvas.height) as f64;
        Ok(FractalConfig {
            canvas,
            processing,
            view,
            scale,
        })
    }

    /// Pixels across.
    pub fn width(&self) -> usize {
        self.canvas.width
    }

    /// Pixels down.
    pub fn height(&self) -> usize {
        self.canvas.height
    }

    /// The total number of pixels on the canvas.
    pub fn len(&self) -> usize {
        self.canvas.width * self.canvas.height
    }

    /// Always false; an empty canvas is refused by `new`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of concurrent render workers.
    pub fn workers(&self) -> usize {
        self.processing.workers
    }

    /// Iteration cap for the escape-time test.
    pub fn max_iterations(&self) -> usize {
        self.processing.max_iterations
    }

    /// Sub-pixel samples per axis.
    pub fn samples(&self) -> usize {
        self.processing.samples
    }

    /// The Julia constant `c`.
    pub fn constant(&self) -> ComplexNumber {
        self.view.constant
    }

    /// The point of the plane at the middle of the canvas.
    pub fn center(&self) -> ComplexNumber {
        self.view.center
    }

    /// Magnification.
    pub fn zoom(&self) -> f64 {
        self.view.zoom
    }

    /// `min(width, height)`, as a float.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for FractalConfig {
    fn default() -> Self {
        let canvas = Canvas::default();
        FractalConfig {
            canvas,
            processing: Processing::default(),
            view: View::default(),
            scale: canvas.width.min(canvas.height) as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(canvas: Canvas, processing: Processing, view: View) -> Result<FractalConfig, RenderError> {
        FractalConfig::new(canvas, processing, view)
    }

    #[test]
    fn defaults_match_the_reference_render() {
        let c = FractalConfig::default();
        assert_eq!((c.width(), c.height()), (2600, 2000));
        assert_eq!((c.workers(), c.max_iterations(), c.samples()), (8, 512, 2));
        assert_eq!(c.constant(), Complex::new(0.28, 0.008));
        assert_eq!(c.zoom(), 1.5);
        assert_eq!(c.scale(), 2000.0);
        assert_eq!(
            config(Canvas::default(), Processing::default(), View::default()).unwrap(),
            c
        );
    }

    #[test]
    fn scale_is_the_shorter_side() {
        let tall = Canvas {
            width: 300,
            height: 700,
        };
        let c = config(tall, Processing::default(), View::default()).unwrap();
        assert_eq!(c.scale(), 300.0);
        assert_eq!(c.len(), 210_000);
        assert!(!c.is_empty());
    }

    #[test]
    fn empty_canvas_is_refused() {
        let flat = Canvas {
            width: 10,
            height: 0,
        };
        match config(flat, Processing::default(), View::default()) {
            Err(RenderError::EmptyCanvas { width: 10, height: 0 }) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn zero_counts_are_refused() {
        let p = Processing::default();
        let none = |p: Processing| config(Canvas::default(), p, View::default());
        assert!(match none(Processing { workers: 0, ..p }) {
            Err(RenderError::NoWorkers) => true,
            _ => false,
        });
        assert!(match none(Processing { max_iterations: 0, ..p }) {
            Err(RenderError::NoIterations) => true,
            _ => false,
        });
        assert!(match none(Processing { samples: 0, ..p }) {
            Err(RenderError::NoSamples) => true,
            _ => false,
        });
    }

    #[test]
    fn bad_views_are_refused() {
        let v = View::default();
        let with = |v: View| config(Canvas::default(), Processing::default(), v);
        assert!(with(View { zoom: 0.0, ..v }).is_err());
        assert!(with(View { zoom: -2.0, ..v }).is_err());
        assert!(with(View { zoom: std::f64::NAN, ..v }).is_err());
        assert!(with(View { zoom: std::f64::INFINITY, ..v }).is_err());
        assert!(with(View {
            constant: Complex::new(std::f64::NAN, 0.0),
            ..v
        })
        .is_err());
        assert!(with(View {
            center: Complex::new(0.0, std::f64::NEG_INFINITY),
            ..v
        })
        .is_err());
    }

    #[test]
    fn presets_are_numbered_from_one() {
        assert_eq!(preset(0), None);
        assert_eq!(preset(1), Some(Complex::new(-0.79, 0.15)));
        assert_eq!(preset(PRESET_COUNT), Some(View::default().constant));
        assert_eq!(preset(PRESET_COUNT + 1), None);
    }
}
