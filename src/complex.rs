// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Complex arithmetic used by the escape-time evaluators.
//!
//! The operations are written out by hand rather than through the
//! operator overloads on `num::Complex`, which pins down the exact
//! order of floating point operations.  `Complex::norm()` goes through
//! `hypot` and rounds differently from the plain square root used
//! here.

use num::Complex;

/// A point on the complex plane.  A plain value; every operation
/// below returns a fresh number and leaves its operands alone.
pub type ComplexNumber = Complex<f64>;

/// The distance of `c` from the origin.
#[inline]
pub fn magnitude(c: ComplexNumber) -> f64 {
    ((c.re * c.re) + (c.im * c.im)).sqrt()
}

/// The product of two complex numbers.
#[inline]
pub fn multiply(a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
    Complex {
        re: (a.re * b.re) - (a.im * b.im),
        im: (a.re * b.im) + (a.im * b.re),
    }
}

/// The sum of two complex numbers.
#[inline]
pub fn add(a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
    Complex {
        re: a.re + b.re,
        im: a.im + b.im,
    }
}

/// The quotient `a / b`.  Dividing by zero is not guarded: the result
/// is whatever IEEE-754 says it is (NaN or an infinity), and it will
/// be treated as escaped by the evaluators.
#[inline]
pub fn divide(a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
    let denominator = (b.re * b.re) + (b.im * b.im);
    Complex {
        re: ((a.re * b.re) + (a.im * b.im)) / denominator,
        im: ((a.im * b.re) - (a.re * b.im)) / denominator,
    }
}

/// e raised to `c`, by way of the polar form.
#[inline]
pub fn exponential(c: ComplexNumber) -> ComplexNumber {
    let radius = c.re.exp();
    Complex {
        re: radius * c.im.cos(),
        im: radius * c.im.sin(),
    }
}
