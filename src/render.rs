//! The cover pipeline: gradient, vignette, then line art.

use image::RgbImage;

use crate::error::CoverError;
use crate::gradient::GradientStops;
use crate::shapes;
use crate::theme;
use crate::vignette;

/// Render the themed cover as a `size`×`size` canvas.
///
/// # Errors
///
/// Returns an error if the themed gradient is malformed.
pub fn render_cover(size: u32, verbose: bool) -> Result<RgbImage, CoverError> {
    let mut canvas = RgbImage::new(size, size);

    if verbose {
        eprintln!("Painting gradient ({} stops)", theme::GRADIENT_STOPS.len());
    }
    GradientStops::new(theme::GRADIENT_STOPS)?.paint(&mut canvas);

    if verbose {
        eprintln!("Compositing vignette");
    }
    let layer =
        vignette::overlay(size, size, theme::VIGNETTE_STEP, theme::VIGNETTE_MAX_ALPHA);
    let mut canvas = vignette::composite(&canvas, &layer);

    let decorations = shapes::themed(size);
    if verbose {
        eprintln!("Drawing {} decorations", decorations.len());
    }
    for decoration in &decorations {
        decoration.draw(&mut canvas);
    }

    Ok(canvas)
}
