//! Vertical multi-stop gradient.

use image::{Rgb, RgbImage};

use crate::error::CoverError;

/// Ordered color keyframes spaced uniformly from top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientStops {
    stops: Vec<Rgb<u8>>,
}

impl GradientStops {
    /// Build a stop list.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two stops are given.
    pub fn new(stops: &[Rgb<u8>]) -> Result<Self, CoverError> {
        if stops.len() < 2 {
            return Err(CoverError::InvalidGradient(format!(
                "need at least 2 stops, got {}",
                stops.len()
            )));
        }
        Ok(Self { stops: stops.to_vec() })
    }

    /// Index of the stop at or above row `y` and the fractional distance to the next one.
    #[must_use]
    pub fn bracket(&self, y: u32, height: u32) -> (usize, usize, f64) {
        let last = self.stops.len() - 1;
        let scaled = f64::from(y) / f64::from(height) * last as f64;
        let idx = (scaled.floor() as usize).min(last);
        let next = (idx + 1).min(last);
        (idx, next, scaled - idx as f64)
    }

    /// Interpolated color for row `y` of a canvas `height` rows tall.
    #[must_use]
    pub fn color_at(&self, y: u32, height: u32) -> Rgb<u8> {
        let (idx, next, blend) = self.bracket(y, height);
        let (a, b) = (self.stops[idx], self.stops[next]);
        let mix = |i: usize| {
            let v = f64::from(a[i]) * (1.0 - blend) + f64::from(b[i]) * blend;
            v.clamp(0.0, 255.0) as u8
        };
        Rgb([mix(0), mix(1), mix(2)])
    }

    /// Fill every row of `canvas` with its interpolated color.
    pub fn paint(&self, canvas: &mut RgbImage) {
        let height = canvas.height();
        for y in 0..height {
            let color = self.color_at(y, height);
            for x in 0..canvas.width() {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}
