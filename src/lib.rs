#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set renderer
//!
//! A Julia set is drawn by taking each point of the complex plane as
//! the starting value of the recurrence `z -> z² + c`, for some fixed
//! constant `c`, and counting how many steps it takes for the orbit
//! to leave the circle of radius 2.  Points that never leave belong
//! to the (filled) Julia set; the rest are shaded by how quickly they
//! escape.
//!
//! Rendering is embarrassingly parallel.  Pixels are dealt out to a
//! fixed number of worker threads in an interleaved pattern, each
//! pixel is supersampled on a small grid to smooth its edges, and the
//! result lands in a flat RGBA buffer that is only handed back once
//! every worker has finished.
//!
//! ```no_run
//! use juliaset::{FileSink, FractalConfig, ImageSink, Julia};
//!
//! let config = FractalConfig::default();
//! let raster = juliaset::render(&config, &Julia::new(config.constant())).unwrap();
//! FileSink::new("julia.png").persist(&raster).unwrap();
//! ```

pub mod complex;
pub mod config;
pub mod errors;
pub mod escape;
pub mod planes;
pub mod raster;
pub mod render;
pub mod sampler;
pub mod sink;

pub use crate::config::{Canvas, FractalConfig, Processing, View};
pub use crate::errors::RenderError;
pub use crate::escape::{Channels, ColorMap, Greyscale, Julia, Mandelbrot, PointEvaluator};
pub use crate::raster::Raster;
pub use crate::render::Renderer;
pub use crate::sink::{FileSink, ImageSink};

/// Renders `config` with `evaluator` and waits for the result.
pub fn render<E>(config: &FractalConfig, evaluator: &E) -> Result<Raster, RenderError>
where
    E: PointEvaluator + ?Sized,
{
    Renderer::new(config).render(evaluator)
}
