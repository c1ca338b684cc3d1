//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a window onto the complex plane described by a center point
//! and a zoom factor.
use num::Complex;

use crate::complex::ComplexNumber;
use crate::config::FractalConfig;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the x, y of a pixel in the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps (possibly fractional) pixel positions onto the complex plane.
/// The middle of the canvas lands on the view's center, and the
/// shorter side of the canvas spans 2/zoom units.
#[derive(Debug, Clone)]
pub struct PlaneMapper {
    /// The right-lower hand corner of the integral cartesian plane.
    /// The left-upper is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    center: ComplexNumber,
    // Complex-plane units per pixel, the same along both axes.
    step: f64,
}

impl PlaneMapper {
    /// Takes the canvas and view out of a checked configuration.
    pub fn new(config: &FractalConfig) -> PlaneMapper {
        PlaneMapper {
            integral_plane: IntegralPlane(config.width(), config.height()),
            center: config.center(),
            step: (2.0 / config.scale()) / config.zoom(),
        }
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// The pixel at a given offset from the root of a row-major
    /// buffer.
    pub fn offset_to_pixel(&self, offset: usize) -> Pixel {
        Pixel(offset % self.integral_plane.0, offset / self.integral_plane.0)
    }

    /// Given a position on the integral plane, which may fall between
    /// pixels, return the point it covers on the complex plane.
    pub fn pixel_to_point(&self, x: f64, y: f64) -> ComplexNumber {
        Complex::new(
            ((x - (self.integral_plane.0 as f64 / 2.0)) * self.step) + self.center.re,
            ((y - (self.integral_plane.1 as f64 / 2.0)) * self.step) + self.center.im,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Canvas, Processing, View};

    fn mapper(width: usize, height: usize, center: ComplexNumber, zoom: f64) -> PlaneMapper {
        let config = FractalConfig::new(
            Canvas { width, height },
            Processing::default(),
            View {
                center,
                zoom,
                ..View::default()
            },
        )
        .unwrap();
        PlaneMapper::new(&config)
    }

    #[test]
    fn canvas_middle_is_the_center_at_any_zoom() {
        for &zoom in &[0.25, 1.0, 1.5, 1000.0] {
            let pm = mapper(640, 480, Complex::new(-0.75, 0.1), zoom);
            assert_eq!(pm.pixel_to_point(320.0, 240.0), Complex::new(-0.75, 0.1));
        }
    }

    #[test]
    fn shorter_side_spans_two_over_zoom() {
        let pm = mapper(4, 4, Complex::new(0.0, 0.0), 1.0);
        assert_eq!(pm.pixel_to_point(0.0, 0.0), Complex::new(-1.0, -1.0));
        assert_eq!(pm.pixel_to_point(4.0, 4.0), Complex::new(1.0, 1.0));

        let pm = mapper(4, 4, Complex::new(0.0, 0.0), 2.0);
        assert_eq!(pm.pixel_to_point(0.0, 4.0), Complex::new(-0.5, 0.5));
    }

    #[test]
    fn both_axes_share_one_step_on_wide_canvases() {
        let pm = mapper(8, 4, Complex::new(1.0, 1.0), 1.0);
        assert_eq!(pm.pixel_to_point(0.0, 0.0), Complex::new(-1.0, 0.0));
        assert_eq!(pm.pixel_to_point(8.0, 4.0), Complex::new(3.0, 2.0));
    }

    #[test]
    fn fractional_pixels_land_between_points() {
        let pm = mapper(4, 4, Complex::new(0.0, 0.0), 1.0);
        assert_eq!(pm.pixel_to_point(1.5, 2.5), Complex::new(-0.25, 0.25));
    }

    #[test]
    fn offsets_are_row_major() {
        let pm = mapper(5, 3, Complex::new(0.0, 0.0), 1.0);
        assert_eq!(pm.len(), 15);
        assert!(!pm.is_empty());
        assert_eq!(pm.offset_to_pixel(0), Pixel(0, 0));
        assert_eq!(pm.offset_to_pixel(4), Pixel(4, 0));
        assert_eq!(pm.offset_to_pixel(5), Pixel(0, 1));
        assert_eq!(pm.offset_to_pixel(14), Pixel(4, 2));
    }
}
