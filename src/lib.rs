//! pnmtool - Library for reading, transforming and writing NetPBM images
//!
//! This library provides functionality to:
//! - Decode P3 (ASCII) and P6 (binary) color images into separate sample planes
//! - Flip, rotate, grayscale or sepia-tone an image in place
//! - Encode the result as P3, P6, P2 or P5

pub mod cli;
pub mod codec;
pub mod config;
pub mod image;
pub mod output;
pub mod plane;
pub mod telemetry;
pub mod transforms;

pub use codec::{decode, encode, read_image, CodecError, Encoding};
pub use image::{Image, InputFormat};
pub use output::{write_image, OutputType};
pub use plane::Plane;
pub use transforms::{apply_transform, Transform};
