//! Benchmark orchestration: dataset in, result record out.
//!
//! A run has three phases. The compress phase encodes every image through the
//! codec under test and is the only timed section. The verify phase decodes
//! every successfully compressed image through the shared decoder and folds
//! each original/reconstruction pair into the error accumulator. Assembly
//! composes the final [`BenchmarkResult`].
//!
//! No phase aborts on a per-image failure: a failed encode leaves an empty
//! payload in place, a failed decode or size mismatch drops the pair from
//! accumulation, and every failure raises the single `has_errors` flag. A run
//! always completes with a result.

pub mod report;

pub use report::{BenchmarkResult, format_bytes};

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::codec::{Codec, Decoder};
use crate::dataset::load_dataset;
use crate::error::Result;
use crate::image::{CompressedFormat, CompressedImage, PixelFormat, UncompressedImage};
use crate::metrics::ErrorAccumulator;

/// Per-pair outcome of the verify phase, merged commutatively.
struct VerifyOutcome {
    accumulator: ErrorAccumulator,
    failed: bool,
}

/// Benchmark runner for one codec/decoder pairing.
pub struct Benchmark<'a> {
    codec: &'a dyn Codec,
    decoder: &'a dyn Decoder,
}

impl<'a> Benchmark<'a> {
    /// Create a runner over a configured codec and the shared decoder.
    #[must_use]
    pub fn new(codec: &'a dyn Codec, decoder: &'a dyn Decoder) -> Self {
        Self { codec, decoder }
    }

    /// Load the dataset from `dataset_dir` and benchmark it against `format`.
    ///
    /// # Errors
    ///
    /// Fails only if the dataset directory cannot be enumerated. Per-image
    /// failures are folded into the result's `has_errors` flag instead.
    pub fn run(&self, dataset_dir: &Path, format: CompressedFormat) -> Result<BenchmarkResult> {
        let images = load_dataset(dataset_dir)?;
        Ok(self.run_on_images(&images, format))
    }

    /// Benchmark an already-loaded dataset against `format`.
    pub fn run_on_images(
        &self,
        images: &[UncompressedImage],
        format: CompressedFormat,
    ) -> BenchmarkResult {
        let mut has_errors = false;

        // Compress phase. The wall clock wraps the whole parallel map, and
        // the order-preserving collect keeps compressed[i] paired with
        // images[i].
        let start = Instant::now();
        let compressed: Vec<CompressedImage> = images
            .par_iter()
            .map(|image| self.compress_one(image, format))
            .collect();
        let elapsed = start.elapsed();

        let mut processed_bytes: u64 = 0;
        for (image, result) in images.iter().zip(&compressed) {
            if result.is_failed() {
                has_errors = true;
            } else {
                processed_bytes += image.bytes.len() as u64;
            }
        }

        debug!(
            images = images.len(),
            processed_bytes,
            elapsed_ms = elapsed.as_millis() as u64,
            "compress phase finished"
        );

        // Verify phase, untimed. Each pair produces an independent
        // accumulator; the reduction is a plain commutative sum.
        let verified = images
            .par_iter()
            .zip(compressed.par_iter())
            .map(|(original, compressed)| self.verify_one(original, compressed, format))
            .reduce(
                || VerifyOutcome {
                    accumulator: ErrorAccumulator::for_format(format),
                    failed: false,
                },
                |a, b| VerifyOutcome {
                    accumulator: a.accumulator.merge(b.accumulator),
                    failed: a.failed || b.failed,
                },
            );
        has_errors |= verified.failed;

        let elapsed_seconds = elapsed.as_secs();
        let throughput_bytes_per_sec = if elapsed_seconds == 0 {
            0
        } else {
            processed_bytes / elapsed_seconds
        };

        BenchmarkResult {
            has_errors,
            processed_bytes,
            elapsed_seconds,
            throughput_bytes_per_sec,
            compression_error: verified.accumulator.calculate_error(),
        }
    }

    /// Encode one image, mapping failure to an empty-payload placeholder.
    fn compress_one(&self, image: &UncompressedImage, format: CompressedFormat) -> CompressedImage {
        match self.codec.encode(image, format) {
            Ok(compressed) => compressed,
            Err(e) => {
                warn!(codec = self.codec.name(), error = %e, "failed to compress image");
                CompressedImage::failed(format, image.width, image.height)
            }
        }
    }

    /// Round-trip one pair through the decoder and accumulate its error.
    fn verify_one(
        &self,
        original: &UncompressedImage,
        compressed: &CompressedImage,
        format: CompressedFormat,
    ) -> VerifyOutcome {
        let mut outcome = VerifyOutcome {
            accumulator: ErrorAccumulator::for_format(format),
            failed: false,
        };

        // Empty payload marks a compress-phase failure, already counted.
        if compressed.is_failed() {
            return outcome;
        }

        let reconstructed = match self.decoder.decode(compressed, PixelFormat::Rgba8) {
            Ok(image) => image,
            Err(e) => {
                warn!(error = %e, "failed to decompress image");
                outcome.failed = true;
                return outcome;
            }
        };

        if original.bytes.len() != reconstructed.bytes.len() {
            warn!(
                expected = original.bytes.len(),
                actual = reconstructed.bytes.len(),
                "image has a different size after decompression"
            );
            outcome.failed = true;
            return outcome;
        }

        outcome.accumulator.add_samples(&original.bytes, &reconstructed.bytes);
        outcome
    }
}
