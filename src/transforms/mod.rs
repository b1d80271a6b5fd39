//! Image transforms
//!
//! # Module Structure
//!
//! - [`types`] - The [`Transform`] selection enum
//! - [`geometric`] - Flips and quarter-turn rotations (new planes)
//! - [`color`] - Grayscale and sepia (in place)

pub mod color;
pub mod geometric;
pub mod types;

pub use color::{grayscale, luma, sepia, sepia_tone};
pub use geometric::{flip_x, flip_y, rotate_ccw, rotate_cw};
pub use types::Transform;

use crate::codec::Result;
use crate::image::Image;

/// Apply a single transform to an image.
///
/// Geometric transforms fail only if their destination planes cannot be
/// allocated, in which case `image` is unchanged.
pub fn apply_transform(image: &mut Image, transform: Transform) -> Result<()> {
    match transform {
        Transform::FlipX => flip_x(image),
        Transform::FlipY => flip_y(image),
        Transform::RotateCw => rotate_cw(image),
        Transform::RotateCcw => rotate_ccw(image),
        Transform::Grayscale => {
            grayscale(image);
            Ok(())
        }
        Transform::Sepia => {
            sepia(image);
            Ok(())
        }
    }
}
