//! Compression backends pluggable behind the [`Codec`] trait.

mod dds;

pub use dds::{DdsCodec, DdsDecoder};

use texbench::{Codec, Error, Result};

/// Backend names accepted by `--codec`.
pub const BACKENDS: &[&str] = &["image-dds"];

/// Construct the codec backend selected on the command line.
pub fn make_codec(name: &str) -> Result<Box<dyn Codec>> {
    match name {
        "image-dds" => Ok(Box::new(DdsCodec::new())),
        other => Err(Error::Unsupported(format!("codec: {other}"))),
    }
}
