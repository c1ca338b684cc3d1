// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The multi-threaded renderer.
//!
//! Pixels are dealt out to the workers like cards: with W workers,
//! worker k gets pixels k, k+W, k+2W, and so on.  The cost of a
//! pixel varies smoothly across the image, so every worker ends up
//! with a cross-section of cheap and expensive pixels and they all
//! finish at about the same time.
//!
//! Each worker colours its own pixels, in order, into a private
//! buffer and hands it back when joined.  Only after every worker
//! has been joined are the buffers scattered into the flat raster,
//! each one along the same stride it was computed on, so no two
//! workers ever touch the same pixel and nothing is shared mutably.

use log::{debug, info};
use std::iter::StepBy;
use std::ops::Range;
use std::time::Instant;

use crate::config::FractalConfig;
use crate::errors::RenderError;
use crate::escape::PointEvaluator;
use crate::planes::PlaneMapper;
use crate::raster::Raster;
use crate::sampler::{SampleOffsets, Sampler};

/// The linear pixel offsets owned by `worker` out of `workers`, on a
/// canvas of `total` pixels: `worker`, `worker + workers`, and so on.
pub fn stride(worker: usize, workers: usize, total: usize) -> StepBy<Range<usize>> {
    (worker.min(total)..total).step_by(workers.max(1))
}

/// Renders a configured view with any point evaluator.
pub struct Renderer {
    config: FractalConfig,
    plane: PlaneMapper,
    offsets: SampleOffsets,
}

impl Renderer {
    /// Prepares the coordinate mapping and the sample table, both of
    /// which are then shared read-only by every worker.
    pub fn new(config: &FractalConfig) -> Self {
        Renderer {
            config: *config,
            plane: PlaneMapper::new(config),
            offsets: SampleOffsets::new(config.samples()),
        }
    }

    /// Renders every pixel on `config.workers()` threads and waits
    /// for all of them.  The raster is only assembled once the last
    /// worker is done; if any worker panics nothing is returned.
    pub fn render<E>(&self, evaluator: &E) -> Result<Raster, RenderError>
    where
        E: PointEvaluator + ?Sized,
    {
        let workers = self.config.workers();
        let total = self.config.len();
        let sampler = Sampler::new(
            &self.plane,
            &self.offsets,
            evaluator,
            self.config.max_iterations(),
        );

        let start = Instant::now();
        let hands = {
            let sampler = &sampler;
            let plane = &self.plane;
            crossbeam::scope(|spawner| {
                let handles: Vec<_> = (0..workers)
                    .map(|worker| {
                        spawner.spawn(move |_| {
                            debug!("worker {} starting", worker);
                            let colors: Vec<[u8; 4]> = stride(worker, workers, total)
                                .map(|offset| sampler.render_pixel(plane.offset_to_pixel(offset)))
                                .collect();
                            debug!("worker {} done with {} pixels", worker, colors.len());
                            colors
                        })
                    })
                    .collect();
                handles
                    .into_iter()
                    .map(|handle| handle.join())
                    .collect::<Result<Vec<_>, _>>()
            })
            .map_err(|_| RenderError::WorkerPanicked)?
            .map_err(|_| RenderError::WorkerPanicked)?
        };

        let mut raster = Raster::new(self.config.width(), self.config.height());
        for (worker, colors) in hands.into_iter().enumerate() {
            for (offset, rgba) in stride(worker, workers, total).zip(colors) {
                raster.put(offset, rgba);
            }
        }
        info!(
            "rendered {}x{} with {} workers in {:?}",
            raster.width(),
            raster.height(),
            workers,
            start.elapsed()
        );

        Ok(raster)
    }
}
