//! Codec and decoder traits: the boundary between the benchmark pipeline and
//! the external compression backends.
//!
//! A [`Codec`] is one pluggable compression backend; several interchangeable
//! implementations are expected to exist, each wrapping a different encoder
//! library with its own backend-specific knobs. The [`Decoder`] is a single
//! shared implementation that must handle every format any codec can produce,
//! so reconstruction error is measured through one code path regardless of
//! which backend is under test.

use crate::error::Result;
use crate::image::{CompressedFormat, CompressedImage, CompressionQuality, PixelFormat, UncompressedImage};

/// A pluggable compression backend.
///
/// Implementations hold their own configuration (quality, acceleration
/// toggles and other backend-specific flags) and expose a single encode
/// operation. `encode` takes `&self` so a backend can be shared across the
/// worker pool during the timed compress phase.
pub trait Codec: Send + Sync {
    /// Backend identifier used in logs and error messages.
    fn name(&self) -> &str;

    /// Current quality hint.
    fn quality(&self) -> CompressionQuality;

    /// Set the quality hint. Interpretation is entirely backend-specific.
    fn set_quality(&mut self, quality: CompressionQuality);

    /// Compress one image into `format`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot encode this image; the
    /// benchmark records the failure and continues with the next image.
    fn encode(&self, image: &UncompressedImage, format: CompressedFormat) -> Result<CompressedImage>;
}

/// The backend-agnostic decoder.
pub trait Decoder: Send + Sync {
    /// Decompress `image` back into the requested pixel layout.
    ///
    /// Must support every [`CompressedFormat`], independent of which codec
    /// produced the payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be decoded; the benchmark
    /// excludes the image from error accumulation and continues.
    fn decode(&self, image: &CompressedImage, layout: PixelFormat) -> Result<UncompressedImage>;
}
