//! Decorative line art drawn over the shaded gradient.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_ellipse_mut, draw_line_segment_mut};

use crate::theme;

/// Something that paints itself onto the cover.
pub trait Decoration {
    /// Draw onto `canvas`. Pixels outside the canvas are clipped.
    fn draw(&self, canvas: &mut RgbImage);
}

/// Outline an ellipse `width` pixels thick, growing inward from the given radii.
pub fn stroke_ellipse(
    canvas: &mut RgbImage,
    center: (i32, i32),
    radii: (i32, i32),
    width: u32,
    color: Rgb<u8>,
) {
    for inset in 0..width as i32 {
        let (rx, ry) = (radii.0 - inset, radii.1 - inset);
        if rx <= 0 || ry <= 0 {
            break;
        }
        draw_hollow_ellipse_mut(canvas, center, rx, ry, color);
    }
}

/// Draw a straight line `width` pixels thick as parallel one-pixel passes.
pub fn stroke_line(
    canvas: &mut RgbImage,
    start: (i32, i32),
    end: (i32, i32),
    width: u32,
    color: Rgb<u8>,
) {
    let vertical = start.0 == end.0;
    let first = -((width as i32 - 1) / 2);
    for offset in first..first + width as i32 {
        let (dx, dy) = if vertical { (offset, 0) } else { (0, offset) };
        draw_line_segment_mut(
            canvas,
            ((start.0 + dx) as f32, (start.1 + dy) as f32),
            ((end.0 + dx) as f32, (end.1 + dy) as f32),
            color,
        );
    }
}

/// An eighth note: an oval head with a stem rising from its right edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MusicNote {
    /// Left edge of the head.
    pub x: i32,
    /// Top edge of the head.
    pub y: i32,
    /// Size multiplier applied to the base note size.
    pub scale: f32,
}

impl MusicNote {
    /// Head width in pixels.
    #[must_use]
    pub fn head_width(&self) -> i32 {
        (theme::NOTE_BASE_SIZE * self.scale) as i32
    }

    /// Head center and radii. Odd widths round the radius up so the head
    /// spans `x..=x + s` and meets the stem.
    #[must_use]
    pub fn head(&self) -> ((i32, i32), (i32, i32)) {
        let s = self.head_width();
        let h = (s as f32 * 0.6) as i32;
        ((self.x + s / 2, self.y + h / 2), ((s + 1) / 2, (h + 1) / 2))
    }

    /// Stem endpoints, bottom first.
    #[must_use]
    pub fn stem(&self) -> ((i32, i32), (i32, i32)) {
        let s = self.head_width();
        let x = self.x + s;
        (
            (x, self.y + (s as f32 * 0.3) as i32),
            (x, self.y - (s as f32 * 1.2) as i32),
        )
    }
}

impl Decoration for MusicNote {
    fn draw(&self, canvas: &mut RgbImage) {
        let (center, radii) = self.head();
        stroke_ellipse(canvas, center, radii, theme::NOTE_STROKE, theme::NOTE_COLOR);

        let (bottom, top) = self.stem();
        stroke_line(canvas, bottom, top, theme::NOTE_STROKE, theme::NOTE_COLOR);
    }
}

/// A record seen from above: rim, grooves, and spindle hole.
#[derive(Debug, Clone, PartialEq)]
pub struct VinylRecord {
    /// Center point.
    pub center: (i32, i32),
    /// Rim radius.
    pub radius: i32,
    /// Groove radii.
    pub grooves: Vec<i32>,
    /// Spindle hole radius.
    pub hole_radius: i32,
}

impl VinylRecord {
    /// The themed record centered on a square canvas of edge `size`.
    #[must_use]
    pub fn centered(size: u32) -> Self {
        let c = (size / 2) as i32;
        Self {
            center: (c, c),
            radius: theme::VINYL_RADIUS,
            grooves: theme::VINYL_GROOVES.to_vec(),
            hole_radius: theme::VINYL_HOLE_RADIUS,
        }
    }
}

impl Decoration for VinylRecord {
    fn draw(&self, canvas: &mut RgbImage) {
        let r = self.radius;
        stroke_ellipse(canvas, self.center, (r, r), theme::VINYL_EDGE_STROKE, theme::VINYL_EDGE_COLOR);

        for &g in &self.grooves {
            stroke_ellipse(canvas, self.center, (g, g), 1, theme::VINYL_GROOVE_COLOR);
        }

        let hole = self.hole_radius;
        draw_filled_circle_mut(canvas, self.center, hole, theme::VINYL_HOLE_FILL);
        stroke_ellipse(
            canvas,
            self.center,
            (hole, hole),
            theme::VINYL_HOLE_STROKE,
            theme::VINYL_EDGE_COLOR,
        );
    }
}

/// A small crosshair glint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sparkle {
    /// Center x.
    pub x: i32,
    /// Center y.
    pub y: i32,
    /// Half-length of each arm.
    pub arm: i32,
}

impl Decoration for Sparkle {
    fn draw(&self, canvas: &mut RgbImage) {
        let (x, y, a) = (self.x, self.y, self.arm);
        stroke_line(canvas, (x - a, y), (x + a, y), theme::SPARKLE_STROKE, theme::SPARKLE_COLOR);
        stroke_line(canvas, (x, y - a), (x, y + a), theme::SPARKLE_STROKE, theme::SPARKLE_COLOR);
    }
}

/// Every themed decoration for a square canvas of edge `size`, in paint order.
#[must_use]
pub fn themed(size: u32) -> Vec<Box<dyn Decoration>> {
    let mut out: Vec<Box<dyn Decoration>> = Vec::new();
    for &(x, y, scale) in theme::NOTES {
        out.push(Box::new(MusicNote { x, y, scale }));
    }
    out.push(Box::new(VinylRecord::centered(size)));
    for &(x, y) in theme::SPARKLES {
        out.push(Box::new(Sparkle { x, y, arm: theme::SPARKLE_ARM }));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb<u8> = Rgb([0, 0, 0]);

    fn blank() -> RgbImage {
        RgbImage::from_pixel(800, 800, BG)
    }

    #[test]
    fn note_geometry() {
        let note = MusicNote { x: 600, y: 250, scale: 1.0 };
        assert_eq!(note.head_width(), 30);
        assert_eq!(note.stem(), ((630, 259), (630, 214)));

        let small = MusicNote { x: 400, y: 150, scale: 0.6 };
        assert_eq!(small.head_width(), 18);
    }

    #[test]
    fn head_reaches_stem_for_every_scale() {
        for &(x, y, scale) in theme::NOTES {
            let note = MusicNote { x, y, scale };
            let ((cx, _), (rx, _)) = note.head();
            let (bottom, _) = note.stem();
            assert_eq!(cx + rx, bottom.0, "scale {scale}");
            assert!(cx - rx <= x, "scale {scale}");
        }

        let odd = MusicNote { x: 250, y: 550, scale: 0.7 };
        assert_eq!(odd.head_width(), 21);
        assert_eq!(odd.head(), ((260, 556), (11, 6)));
    }

    #[test]
    fn note_draws_head_and_stem() {
        let mut canvas = blank();
        let note = MusicNote { x: 600, y: 250, scale: 1.0 };
        note.draw(&mut canvas);

        // stem midway up
        assert_eq!(*canvas.get_pixel(630, 235), theme::NOTE_COLOR);
        // top of the head, two pixels thick
        assert_eq!(*canvas.get_pixel(615, 250), theme::NOTE_COLOR);
        assert_eq!(*canvas.get_pixel(615, 251), theme::NOTE_COLOR);
        // inside the head stays empty
        assert_eq!(*canvas.get_pixel(615, 259), BG);
    }

    #[test]
    fn vinyl_layers() {
        let mut canvas = blank();
        VinylRecord::centered(800).draw(&mut canvas);

        assert_eq!(*canvas.get_pixel(400, 400), theme::VINYL_HOLE_FILL);
        assert_eq!(*canvas.get_pixel(580, 400), theme::VINYL_EDGE_COLOR);
        assert_eq!(*canvas.get_pixel(578, 400), theme::VINYL_EDGE_COLOR);
        assert_eq!(*canvas.get_pixel(577, 400), BG);
        for &g in theme::VINYL_GROOVES {
            assert_eq!(*canvas.get_pixel(400 + g as u32, 400), theme::VINYL_GROOVE_COLOR);
        }
        assert_eq!(*canvas.get_pixel(425, 400), theme::VINYL_EDGE_COLOR);
        assert_eq!(*canvas.get_pixel(424, 400), theme::VINYL_EDGE_COLOR);
        assert_eq!(*canvas.get_pixel(423, 400), theme::VINYL_HOLE_FILL);
    }

    #[test]
    fn sparkle_crosshair() {
        let mut canvas = blank();
        Sparkle { x: 300, y: 350, arm: 8 }.draw(&mut canvas);

        assert_eq!(*canvas.get_pixel(293, 350), theme::SPARKLE_COLOR);
        assert_eq!(*canvas.get_pixel(307, 351), theme::SPARKLE_COLOR);
        assert_eq!(*canvas.get_pixel(300, 343), theme::SPARKLE_COLOR);
        assert_eq!(*canvas.get_pixel(301, 357), theme::SPARKLE_COLOR);
        assert_eq!(*canvas.get_pixel(295, 345), BG);
    }

    #[test]
    fn shapes_clip_at_canvas_edge() {
        let mut canvas = RgbImage::from_pixel(20, 20, BG);
        Sparkle { x: 2, y: 2, arm: 8 }.draw(&mut canvas);
        MusicNote { x: 10, y: 5, scale: 1.0 }.draw(&mut canvas);
        assert_eq!(*canvas.get_pixel(0, 2), theme::SPARKLE_COLOR);
    }

    #[test]
    fn themed_set() {
        let decorations = themed(800);
        assert_eq!(decorations.len(), theme::NOTES.len() + 1 + theme::SPARKLES.len());
    }
}
