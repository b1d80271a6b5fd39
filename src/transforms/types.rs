//! Transform selection type

use std::fmt;

/// One of the six operations that can be applied to an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    // Geometric
    /// Mirror top-to-bottom (row `r` moves to `rows-1-r`)
    FlipX,
    /// Mirror left-to-right (column `c` moves to `cols-1-c`)
    FlipY,
    /// Rotate 90° clockwise; rows and columns swap
    RotateCw,
    /// Rotate 90° counter-clockwise; rows and columns swap
    RotateCcw,

    // Colour
    /// Weighted luma into the red/gray plane
    Grayscale,
    /// Antique tone, saturating at 255
    Sepia,
}

impl Transform {
    /// All transforms, in command-line order.
    pub const ALL: [Transform; 6] = [
        Transform::FlipX,
        Transform::FlipY,
        Transform::RotateCw,
        Transform::RotateCcw,
        Transform::Grayscale,
        Transform::Sepia,
    ];

    /// The command-line option that selects this transform.
    pub fn option_name(self) -> &'static str {
        match self {
            Transform::FlipX => "--flipX",
            Transform::FlipY => "--flipY",
            Transform::RotateCw => "--rotateCW",
            Transform::RotateCcw => "--rotateCCW",
            Transform::Grayscale => "--grayscale",
            Transform::Sepia => "--sepia",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.option_name().trim_start_matches('-'))
    }
}
