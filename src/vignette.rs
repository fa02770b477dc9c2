//! Radial darkening overlay and src-over compositing.

use image::{imageops, DynamicImage, Rgba, RgbImage, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;

/// Build a transparent layer with concentric black rings that grow more
/// opaque toward the center.
///
/// Rings are drawn from the outside in and replace earlier pixels, so each
/// pixel keeps the alpha of the smallest ring covering it.
#[must_use]
pub fn overlay(width: u32, height: u32, step: usize, max_alpha: f32) -> RgbaImage {
    let mut layer = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    let center = ((width / 2) as i32, (height / 2) as i32);
    let max_radius = width.min(height) / 2;

    for radius in (1..=max_radius).rev().step_by(step.max(1)) {
        let alpha = ring_alpha(radius, max_radius, max_alpha);
        draw_filled_circle_mut(&mut layer, center, radius as i32, Rgba([0, 0, 0, alpha]));
    }
    layer
}

/// Alpha of the ring at `radius`, zero at the rim.
#[must_use]
pub fn ring_alpha(radius: u32, max_radius: u32, max_alpha: f32) -> u8 {
    let fraction = 1.0 - radius as f32 / max_radius as f32;
    (fraction * max_alpha).clamp(0.0, 255.0) as u8
}

/// Blend `layer` over `canvas` and flatten the result back to opaque RGB.
#[must_use]
pub fn composite(canvas: &RgbImage, layer: &RgbaImage) -> RgbImage {
    let mut rgba = DynamicImage::ImageRgb8(canvas.clone()).into_rgba8();
    imageops::overlay(&mut rgba, layer, 0, 0);
    DynamicImage::ImageRgba8(rgba).into_rgb8()
}
