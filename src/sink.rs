// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Where finished rasters go.  The renderer knows nothing about file
//! formats; a sink is handed the completed raster and does whatever
//! it likes with it.

use image::ColorType;
use log::info;
use std::path::{Path, PathBuf};

use crate::errors::RenderError;
use crate::raster::Raster;

/// Accepts a completed raster and persists it.
pub trait ImageSink {
    /// Persist `raster`.  Called once, after every worker has
    /// finished.
    fn persist(&self, raster: &Raster) -> Result<(), RenderError>;
}

/// Writes rasters to a file.  The format follows the file's
/// extension (`.png`, `.bmp`, `.pnm`, and so on).
#[derive(Clone, Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// A sink writing to `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileSink {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Where the image will be written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSink for FileSink {
    fn persist(&self, raster: &Raster) -> Result<(), RenderError> {
        image::save_buffer(
            &self.path,
            raster.as_bytes(),
            raster.width() as u32,
            raster.height() as u32,
            ColorType::RGBA(8),
        )?;
        info!("wrote {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn checkerboard() -> Raster {
        let mut raster = Raster::new(3, 2);
        for i in 0..raster.len() {
            let v = if i % 2 == 0 { 255 } else { 0 };
            raster.put(i, [v, v, v, 255]);
        }
        raster
    }

    #[test]
    fn png_round_trips_through_the_file_sink() {
        let dir = tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("board.png"));
        let raster = checkerboard();
        sink.persist(&raster).unwrap();

        let back = image::open(sink.path()).unwrap().to_rgba();
        assert_eq!((back.width(), back.height()), (3, 2));
        assert_eq!(back.into_raw(), raster.into_bytes());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("missing").join("board.png"));
        assert!(sink.persist(&checkerboard()).is_err());
    }
}
