//! Per-pixel colour transforms
//!
//! Both operate in place without changing dimensions. Weighted sums are
//! computed in `f64` and truncated toward zero.

use crate::image::Image;

const GRAY_WEIGHTS: [f64; 3] = [0.3, 0.6, 0.1];

const SEPIA_WEIGHTS: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

fn weigh(weights: [f64; 3], [r, g, b]: [u8; 3]) -> u32 {
    (weights[0] * f64::from(r) + weights[1] * f64::from(g) + weights[2] * f64::from(b)) as u32
}

/// Gray value for one pixel: `trunc(0.3R + 0.6G + 0.1B)`.
pub fn luma(rgb: [u8; 3]) -> u8 {
    weigh(GRAY_WEIGHTS, rgb).min(255) as u8
}

/// Sepia tone for one pixel. Every output channel is computed from the
/// original triple and saturates at 255.
pub fn sepia_tone(rgb: [u8; 3]) -> [u8; 3] {
    SEPIA_WEIGHTS.map(|weights| weigh(weights, rgb).min(255) as u8)
}

/// Write the luma of every pixel into the red/gray plane.
///
/// Green and blue are left as they were.
pub fn grayscale(image: &mut Image) {
    let (red, green, blue) = image.samples_mut();
    for ((r, &g), &b) in red.iter_mut().zip(green.iter()).zip(blue.iter()) {
        *r = luma([*r, g, b]);
    }
}

/// Apply the sepia tone to every pixel.
pub fn sepia(image: &mut Image) {
    let (red, green, blue) = image.samples_mut();
    for ((r, g), b) in red.iter_mut().zip(green.iter_mut()).zip(blue.iter_mut()) {
        [*r, *g, *b] = sepia_tone([*r, *g, *b]);
    }
}
