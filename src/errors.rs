// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The errors a render can report.  Under a valid configuration the
//! computation itself cannot fail; everything here is either a
//! rejected configuration, a worker that died, or the sink failing to
//! write the finished image.

use failure::Fail;
use std::io;

/// Everything that can go wrong between configuring a render and
/// persisting the result.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The canvas has no pixels along at least one axis.
    #[fail(display = "canvas must be at least 1x1, got {}x{}", width, height)]
    EmptyCanvas {
        /// Requested width, in pixels.
        width: usize,
        /// Requested height, in pixels.
        height: usize,
    },

    /// Zero workers were requested.
    #[fail(display = "worker count must be at least 1")]
    NoWorkers,

    /// Zero iterations were requested.
    #[fail(display = "iteration limit must be at least 1")]
    NoIterations,

    /// Zero samples per axis were requested.
    #[fail(display = "sample grid must be at least 1x1")]
    NoSamples,

    /// The zoom factor is zero, negative, or not a number.
    #[fail(display = "zoom must be a positive, finite number, got {}", _0)]
    BadZoom(f64),

    /// The Julia constant or the view center is not a finite number.
    #[fail(display = "{} must be finite, got {}", _0, _1)]
    NotFinite(&'static str, String),

    /// A worker thread panicked.  The partially written raster is
    /// discarded.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,

    /// The image sink could not write the raster.
    #[fail(display = "could not write image: {}", _0)]
    ImageWrite(#[cause] io::Error),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::ImageWrite(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use failure::Fail;

    #[test]
    fn messages_name_the_offending_value() {
        let e = RenderError::EmptyCanvas {
            width: 0,
            height: 12,
        };
        assert_eq!(e.to_string(), "canvas must be at least 1x1, got 0x12");
        assert_eq!(
            RenderError::BadZoom(-1.5).to_string(),
            "zoom must be a positive, finite number, got -1.5"
        );
    }

    #[test]
    fn io_errors_carry_their_cause() {
        let e: RenderError = io::Error::new(io::ErrorKind::Other, "disk full").into();
        assert!(e.cause().is_some());
        assert_eq!(e.to_string(), "could not write image: disk full");
    }
}
