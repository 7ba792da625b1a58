//! Host-side mirror of the fragment stage.
//!
//! The GPU evaluates these per pixel; here they are plain functions so the
//! parameter mapping and escape counting can be checked on the host.

use crate::consts::{ESCAPE_RADIUS, ITERATION_CEILING, PARAMETER_ORIGIN, PARAMETER_SPAN};
use crate::palette::{self, Rgba};

/// A point of the complex plane in shader precision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f32,
    pub im: f32,
}

impl Complex {
    #[must_use]
    pub fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    #[must_use]
    pub fn norm(self) -> f32 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// One step of the quadratic map: `self² + c`.
    #[must_use]
    pub fn square_add(self, c: Complex) -> Complex {
        Complex {
            re: self.re * self.re - self.im * self.im + c.re,
            im: 2.0 * self.re * self.im + c.im,
        }
    }
}

/// Starting point `z0` for a fragment at backend coordinates `(frag_x, frag_y)`
/// (origin bottom-left): recentered on the viewport and scaled by
/// `2 / min(width, height)`.
#[must_use]
pub fn plane_point(frag_x: f32, frag_y: f32, width: f32, height: f32) -> Complex {
    let scale = 2.0 / width.min(height);
    Complex {
        re: (frag_x - 0.5 * width) * scale,
        im: (frag_y - 0.5 * height) * scale,
    }
}

/// Julia parameter `c0` for a `mousePos` uniform value (Y already flipped).
#[must_use]
pub fn parameter(mouse: [f32; 2], width: f32, height: f32) -> Complex {
    Complex {
        re: PARAMETER_ORIGIN[0] + PARAMETER_SPAN[0] * (mouse[0] / width),
        im: PARAMETER_ORIGIN[1] + PARAMETER_SPAN[1] * (mouse[1] / height),
    }
}

/// Index of the first iteration at which |z| exceeds the escape radius, or the
/// ceiling when the orbit stays bounded.
#[must_use]
pub fn escape_count(z0: Complex, c0: Complex) -> f32 {
    let mut z = z0;
    for k in 0..ITERATION_CEILING {
        if z.norm() > ESCAPE_RADIUS {
            return k as f32;
        }
        z = z.square_add(c0);
    }
    ITERATION_CEILING as f32
}

/// Full fragment evaluation: the color the shader writes at `(frag_x, frag_y)`.
#[must_use]
pub fn shade(frag_x: f32, frag_y: f32, width: f32, height: f32, mouse: [f32; 2], shift: f32) -> Rgba {
    let z0 = plane_point(frag_x, frag_y, width, height);
    let c0 = parameter(mouse, width, height);
    let k = escape_count(z0, c0);
    palette::color(k / ITERATION_CEILING as f32, shift)
}
