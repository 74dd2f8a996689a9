//! Image model: pixel layouts, block-compression formats, and image records.
//!
//! Every uncompressed image in a benchmark run uses the same fixed pixel
//! layout ([`PixelFormat::Rgba8`], 4 interleaved 8-bit channels). Compressed
//! payloads are opaque to this crate; only the backend that produced them and
//! the generic decoder interpret the bytes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Uncompressed pixel layouts accepted by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 8-bit RGBA, 4 interleaved channels per pixel.
    Rgba8,
}

impl PixelFormat {
    /// Bytes per pixel for this layout.
    #[must_use]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba8 => 4,
        }
    }
}

/// Block-compression variants a codec backend can produce.
///
/// `Rgba8` is the uncompressed passthrough: the payload is the pixel buffer
/// itself. It doubles as a benchmarking control and as the default row of the
/// channel-relevance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressedFormat {
    /// BC1: opaque RGB, 4 bits per pixel.
    Bc1,
    /// BC3: RGB plus a separately compressed alpha block.
    Bc3,
    /// BC4: single channel (red only).
    Bc4,
    /// BC5: two channels (red and green).
    Bc5,
    /// BC6H: HDR RGB.
    Bc6h,
    /// BC7: full RGBA block format.
    Bc7,
    /// Uncompressed RGBA passthrough.
    Rgba8,
}

impl CompressedFormat {
    /// All supported formats, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Bc1,
        Self::Bc3,
        Self::Bc4,
        Self::Bc5,
        Self::Bc6h,
        Self::Bc7,
        Self::Rgba8,
    ];

    /// Number of color channels that participate in error measurement.
    ///
    /// Block formats discard channels by design, so reconstruction error is
    /// only measured over the leading channels each format actually encodes.
    /// Alpha (channel 3) is measured only for the passthrough format.
    #[must_use]
    pub fn relevant_channels(self) -> usize {
        match self {
            Self::Bc1 | Self::Bc3 | Self::Bc6h | Self::Bc7 => 3,
            Self::Bc4 => 1,
            Self::Bc5 => 2,
            Self::Rgba8 => 4,
        }
    }

    /// Short lowercase name, matching the CLI argument form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bc1 => "bc1",
            Self::Bc3 => "bc3",
            Self::Bc4 => "bc4",
            Self::Bc5 => "bc5",
            Self::Bc6h => "bc6h",
            Self::Bc7 => "bc7",
            Self::Rgba8 => "rgba8",
        }
    }
}

impl fmt::Display for CompressedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompressedFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bc1" => Ok(Self::Bc1),
            "bc3" => Ok(Self::Bc3),
            "bc4" => Ok(Self::Bc4),
            "bc5" => Ok(Self::Bc5),
            "bc6h" | "bc6" => Ok(Self::Bc6h),
            "bc7" => Ok(Self::Bc7),
            "rgba8" => Ok(Self::Rgba8),
            other => Err(Error::Unsupported(format!("format: {other}"))),
        }
    }
}

/// Compression quality hint, interpreted entirely by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionQuality {
    /// Fastest, lowest-effort encoding.
    Low,
    /// Balanced effort.
    #[default]
    Medium,
    /// Slowest, highest-effort encoding.
    High,
}

impl fmt::Display for CompressionQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

impl FromStr for CompressionQuality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(Error::Unsupported(format!("quality: {other}"))),
        }
    }
}

/// An uncompressed image in the fixed RGBA8 layout.
///
/// Invariant: `bytes.len() == width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncompressedImage {
    /// Pixel layout of `bytes`.
    pub format: PixelFormat,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Flat interleaved pixel buffer, row-major.
    pub bytes: Vec<u8>,
}

impl UncompressedImage {
    /// Create an RGBA8 image from a flat pixel buffer.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != width * height * 4`.
    #[must_use]
    pub fn new_rgba8(width: usize, height: usize, bytes: Vec<u8>) -> Self {
        assert_eq!(bytes.len(), width * height * 4, "RGBA8 buffer length");
        Self {
            format: PixelFormat::Rgba8,
            width,
            height,
            bytes,
        }
    }
}

/// A compressed image produced by a codec backend.
///
/// The payload is opaque and backend-specific. An empty payload marks an
/// image whose compression failed; the verify phase skips it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedImage {
    /// Block-compression format of the payload.
    pub format: CompressedFormat,
    /// Width in pixels of the source image.
    pub width: usize,
    /// Height in pixels of the source image.
    pub height: usize,
    /// Opaque backend-specific payload; empty iff compression failed.
    pub bytes: Vec<u8>,
}

impl CompressedImage {
    /// Placeholder for an image whose compression failed.
    #[must_use]
    pub fn failed(format: CompressedFormat, width: usize, height: usize) -> Self {
        Self {
            format,
            width,
            height,
            bytes: Vec::new(),
        }
    }

    /// Whether this entry records a compression failure.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relevant_channels_table() {
        assert_eq!(CompressedFormat::Bc1.relevant_channels(), 3);
        assert_eq!(CompressedFormat::Bc3.relevant_channels(), 3);
        assert_eq!(CompressedFormat::Bc4.relevant_channels(), 1);
        assert_eq!(CompressedFormat::Bc5.relevant_channels(), 2);
        assert_eq!(CompressedFormat::Bc6h.relevant_channels(), 3);
        assert_eq!(CompressedFormat::Bc7.relevant_channels(), 3);
        assert_eq!(CompressedFormat::Rgba8.relevant_channels(), 4);
    }

    #[test]
    fn test_relevant_channels_total() {
        // Every format maps to a count in 1..=4.
        for format in CompressedFormat::ALL {
            let channels = format.relevant_channels();
            assert!((1..=4).contains(&channels), "{format}: {channels}");
        }
    }

    #[test]
    fn test_format_parse_roundtrip() {
        for format in CompressedFormat::ALL {
            assert_eq!(format.name().parse::<CompressedFormat>().unwrap(), format);
        }
        assert!("bc2".parse::<CompressedFormat>().is_err());
        assert_eq!("bc6".parse::<CompressedFormat>().unwrap(), CompressedFormat::Bc6h);
    }

    #[test]
    fn test_quality_parse() {
        assert_eq!("low".parse::<CompressionQuality>().unwrap(), CompressionQuality::Low);
        assert_eq!("high".parse::<CompressionQuality>().unwrap(), CompressionQuality::High);
        assert!("ultra".parse::<CompressionQuality>().is_err());
        assert_eq!(CompressionQuality::default(), CompressionQuality::Medium);
    }

    #[test]
    fn test_uncompressed_image_invariant() {
        let img = UncompressedImage::new_rgba8(4, 4, vec![255; 64]);
        assert_eq!(img.bytes.len(), img.width * img.height * 4);
    }

    #[test]
    #[should_panic(expected = "RGBA8 buffer length")]
    fn test_uncompressed_image_bad_length() {
        let _ = UncompressedImage::new_rgba8(4, 4, vec![0; 63]);
    }

    #[test]
    fn test_failed_compressed_image() {
        let img = CompressedImage::failed(CompressedFormat::Bc7, 16, 16);
        assert!(img.is_failed());
        assert!(img.bytes.is_empty());
    }
}
