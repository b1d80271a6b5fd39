//! NetPBM codec
//!
//! # Module Structure
//!
//! - [`reader`] - P3/P6 header and body decoding
//! - [`writer`] - P3/P6/P2/P5 encoding
//! - [`error`] - Error taxonomy shared by both directions

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{CodecError, Result};
pub use reader::{decode, read_image};
pub use writer::{encode, encode_to_vec, Encoding};
