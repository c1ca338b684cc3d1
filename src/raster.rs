// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The output of a render: one flat, row-major buffer of RGBA bytes.

use image::RgbaImage;

/// Bytes per pixel: red, green, blue, alpha.
pub const CHANNELS: usize = 4;

/// A width×height grid of 8-bit RGBA pixels, stored as a single
/// row-major arena so that pixel `i` always lives at bytes
/// `4i..4i+4`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// A fully transparent black raster.
    pub fn new(width: usize, height: usize) -> Self {
        Raster {
            width,
            height,
            pixels: vec![0 as u8; width * height * CHANNELS],
        }
    }

    /// Pixels across.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pixels down.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of pixels.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The pixel at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * CHANNELS;
        let mut rgba = [0 as u8; 4];
        rgba.copy_from_slice(&self.pixels[start..start + CHANNELS]);
        Some(rgba)
    }

    /// The raw bytes, row-major, four per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Writes the pixel at linear offset `offset`, counting row-major
    /// from the top left.
    pub(crate) fn put(&mut self, offset: usize, rgba: [u8; 4]) {
        let start = offset * CHANNELS;
        self.pixels[start..start + CHANNELS].copy_from_slice(&rgba);
    }

    /// Copies the raster into an `image` buffer for encoding.  None if
    /// the dimensions do not fit the `image` crate's `u32` sizes.
    pub fn to_image(&self) -> Option<RgbaImage> {
        if self.width > u32::max_value() as usize || self.height > u32::max_value() as usize {
            return None;
        }
        RgbaImage::from_raw(self.width as u32, self.height as u32, self.pixels.clone())
    }

    /// Gives up the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }
}
