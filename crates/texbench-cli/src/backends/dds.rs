//! Codec backend and generic decoder built on the `image_dds` crate.
//!
//! `image_dds` wraps intel-tex for BC1-BC7 encoding and bcdec for decoding,
//! so both directions stay external to the benchmark core.

use image_dds::{ImageFormat, Mipmaps, Quality, Surface, SurfaceRgba8};

use texbench::{
    Codec, CompressedFormat, CompressedImage, CompressionQuality, Decoder, Error, PixelFormat,
    Result, UncompressedImage,
};

fn image_format(format: CompressedFormat) -> ImageFormat {
    match format {
        CompressedFormat::Bc1 => ImageFormat::BC1RgbaUnorm,
        CompressedFormat::Bc3 => ImageFormat::BC3RgbaUnorm,
        CompressedFormat::Bc4 => ImageFormat::BC4RUnorm,
        CompressedFormat::Bc5 => ImageFormat::BC5RgUnorm,
        CompressedFormat::Bc6h => ImageFormat::BC6hRgbUfloat,
        CompressedFormat::Bc7 => ImageFormat::BC7RgbaUnorm,
        CompressedFormat::Rgba8 => ImageFormat::Rgba8Unorm,
    }
}

fn encode_quality(quality: CompressionQuality) -> Quality {
    match quality {
        CompressionQuality::Low => Quality::Fast,
        CompressionQuality::Medium => Quality::Normal,
        CompressionQuality::High => Quality::Slow,
    }
}

/// BC1-BC7 encoder backed by `image_dds`.
pub struct DdsCodec {
    quality: CompressionQuality,
}

impl DdsCodec {
    /// Create a codec with the default (medium) quality.
    #[must_use]
    pub fn new() -> Self {
        Self {
            quality: CompressionQuality::default(),
        }
    }
}

impl Default for DdsCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for DdsCodec {
    fn name(&self) -> &str {
        "image-dds"
    }

    fn quality(&self) -> CompressionQuality {
        self.quality
    }

    fn set_quality(&mut self, quality: CompressionQuality) {
        self.quality = quality;
    }

    fn encode(
        &self,
        image: &UncompressedImage,
        format: CompressedFormat,
    ) -> Result<CompressedImage> {
        let surface = SurfaceRgba8 {
            width: image.width as u32,
            height: image.height as u32,
            depth: 1,
            layers: 1,
            mipmaps: 1,
            data: image.bytes.as_slice(),
        };

        let encoded = surface
            .encode(
                image_format(format),
                encode_quality(self.quality),
                Mipmaps::Disabled,
            )
            .map_err(|e| Error::Codec {
                codec: "image-dds".to_string(),
                message: e.to_string(),
            })?;

        Ok(CompressedImage {
            format,
            width: image.width,
            height: image.height,
            bytes: encoded.data,
        })
    }
}

/// Backend-agnostic decoder backed by `image_dds`.
///
/// Decodes every [`CompressedFormat`] payload back to RGBA8, independent of
/// which codec produced it.
pub struct DdsDecoder;

impl Decoder for DdsDecoder {
    fn decode(&self, image: &CompressedImage, layout: PixelFormat) -> Result<UncompressedImage> {
        let surface = Surface {
            width: image.width as u32,
            height: image.height as u32,
            depth: 1,
            layers: 1,
            mipmaps: 1,
            image_format: image_format(image.format),
            data: image.bytes.as_slice(),
        };

        let decoded = surface.decode_rgba8().map_err(|e| Error::Decode {
            format: image.format.to_string(),
            message: e.to_string(),
        })?;

        match layout {
            PixelFormat::Rgba8 => Ok(UncompressedImage::new_rgba8(
                image.width,
                image.height,
                decoded.data,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(width: usize, height: usize, pixel: [u8; 4]) -> UncompressedImage {
        let bytes = pixel
            .iter()
            .copied()
            .cycle()
            .take(width * height * 4)
            .collect();
        UncompressedImage::new_rgba8(width, height, bytes)
    }

    #[test]
    fn test_bc1_block_size() {
        let codec = DdsCodec::new();
        let image = solid_image(4, 4, [255, 0, 0, 255]);
        let compressed = codec.encode(&image, CompressedFormat::Bc1).unwrap();
        // One 4x4 BC1 block is 8 bytes.
        assert_eq!(compressed.bytes.len(), 8);
        assert!(!compressed.is_failed());
    }

    #[test]
    fn test_roundtrip_preserves_size() {
        let codec = DdsCodec::new();
        let image = solid_image(8, 8, [0, 255, 0, 255]);

        for format in [
            CompressedFormat::Bc1,
            CompressedFormat::Bc3,
            CompressedFormat::Bc7,
            CompressedFormat::Rgba8,
        ] {
            let compressed = codec.encode(&image, format).unwrap();
            let decoded = DdsDecoder.decode(&compressed, PixelFormat::Rgba8).unwrap();
            assert_eq!(decoded.bytes.len(), image.bytes.len(), "{format}");
        }
    }

    #[test]
    fn test_solid_white_roundtrips_exactly() {
        let codec = DdsCodec::new();
        let image = solid_image(4, 4, [255, 255, 255, 255]);

        let compressed = codec.encode(&image, CompressedFormat::Bc1).unwrap();
        let decoded = DdsDecoder.decode(&compressed, PixelFormat::Rgba8).unwrap();
        assert_eq!(decoded.bytes, image.bytes);
    }
}
