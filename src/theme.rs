//! Fixed parameters of the rose-pink placeholder theme.

use image::Rgb;

/// Edge length of the square cover, in pixels.
pub const COVER_SIZE: u32 = 800;

/// Human-readable theme name for the summary.
pub const THEME_NAME: &str = "Rose pink gradient (HSL 350 hue)";

/// Decorative elements listed in the summary.
pub const ELEMENTS: &[&str] = &["Vinyl record", "musical notes", "sparkles"];

/// Gradient keyframes, top row first. HSL(350, 30%, 8%) up to HSL(350, 80%, 65%).
pub const GRADIENT_STOPS: &[Rgb<u8>] = &[
    Rgb([31, 14, 18]),
    Rgb([51, 19, 26]),
    Rgb([77, 26, 36]),
    Rgb([102, 34, 47]),
    Rgb([128, 41, 57]),
    Rgb([153, 49, 68]),
    Rgb([179, 57, 78]),
    Rgb([204, 64, 89]),
    Rgb([230, 72, 99]),
];

/// Radius decrement between vignette rings.
pub const VIGNETTE_STEP: usize = 5;

/// Alpha reached at the innermost vignette ring.
pub const VIGNETTE_MAX_ALPHA: f32 = 40.0;

/// Musical note stroke color.
pub const NOTE_COLOR: Rgb<u8> = Rgb([200, 160, 170]);

/// Note head width at scale 1.0.
pub const NOTE_BASE_SIZE: f32 = 30.0;

/// Stroke width of note heads and stems.
pub const NOTE_STROKE: u32 = 2;

/// Floating notes as `(x, y, scale)`.
pub const NOTES: &[(i32, i32, f32)] = &[
    (150, 200, 0.8),
    (600, 250, 1.0),
    (250, 550, 0.7),
    (650, 600, 0.9),
    (400, 150, 0.6),
    (500, 650, 0.8),
];

/// Outer radius of the vinyl silhouette.
pub const VINYL_RADIUS: i32 = 180;

/// Vinyl edge color.
pub const VINYL_EDGE_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Vinyl edge stroke width.
pub const VINYL_EDGE_STROKE: u32 = 3;

/// Groove radii, outermost first.
pub const VINYL_GROOVES: &[i32] = &[150, 120, 90];

/// Groove color.
pub const VINYL_GROOVE_COLOR: Rgb<u8> = Rgb([200, 180, 190]);

/// Spindle hole radius.
pub const VINYL_HOLE_RADIUS: i32 = 25;

/// Spindle hole fill.
pub const VINYL_HOLE_FILL: Rgb<u8> = Rgb([40, 20, 25]);

/// Spindle hole outline width.
pub const VINYL_HOLE_STROKE: u32 = 2;

/// Sparkle centers.
pub const SPARKLES: &[(i32, i32)] =
    &[(200, 100), (700, 180), (150, 650), (680, 700), (300, 350), (550, 450), (400, 600)];

/// Half-length of each sparkle arm.
pub const SPARKLE_ARM: i32 = 8;

/// Sparkle color.
pub const SPARKLE_COLOR: Rgb<u8> = Rgb([255, 220, 230]);

/// Sparkle stroke width.
pub const SPARKLE_STROKE: u32 = 2;
