//! Reconstruction-error measurement.
//!
//! The single metric in this benchmark is an RMS of normalized per-channel
//! byte differences between an original image and its round-tripped
//! reconstruction, measured only over the channels the target format actually
//! encodes (see [`CompressedFormat::relevant_channels`]).

use crate::image::CompressedFormat;

/// Running RMS-error statistic over one benchmark run.
///
/// One accumulator per run, fed one [`add_samples`](Self::add_samples) call
/// per successfully round-tripped image. Per-image accumulators can be
/// combined with [`merge`](Self::merge), which is commutative and
/// associative, so the verify phase may fold images in any order.
///
/// The sample count advances by the full byte length of each image
/// (width × height × 4) rather than by the number of channel samples actually
/// measured. Formats with fewer relevant channels therefore divide a smaller
/// error sum by the same denominator and score systematically lower.
/// Downstream cross-format comparisons depend on this normalization, so it
/// must not be changed.
#[derive(Debug, Clone)]
pub struct ErrorAccumulator {
    squared_error_sum: f64,
    sample_count: u64,
    relevant_channels: usize,
}

impl ErrorAccumulator {
    /// Create an accumulator measuring the first `relevant_channels` channels
    /// of every pixel.
    #[must_use]
    pub fn new(relevant_channels: usize) -> Self {
        Self {
            squared_error_sum: 0.0,
            sample_count: 0,
            relevant_channels,
        }
    }

    /// Create an accumulator for a run targeting `format`.
    #[must_use]
    pub fn for_format(format: CompressedFormat) -> Self {
        Self::new(format.relevant_channels())
    }

    /// Number of channels measured per pixel.
    #[must_use]
    pub fn relevant_channels(&self) -> usize {
        self.relevant_channels
    }

    /// Total samples counted so far.
    #[must_use]
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Accumulate the error between one original/reconstruction pair.
    ///
    /// Both buffers are flat RGBA8 (4 bytes per pixel) and must be the same
    /// length; the orchestrator excludes mismatched pairs before this point.
    ///
    /// # Panics
    ///
    /// Panics if the buffer lengths differ.
    pub fn add_samples(&mut self, original: &[u8], reconstructed: &[u8]) {
        assert_eq!(original.len(), reconstructed.len());

        for (orig, recon) in original.chunks_exact(4).zip(reconstructed.chunks_exact(4)) {
            for channel in 0..self.relevant_channels {
                let error = (f64::from(recon[channel]) - f64::from(orig[channel])) / 255.0;
                self.squared_error_sum += error * error;
            }
        }

        self.sample_count += original.len() as u64;
    }

    /// Combine two accumulators by plain sums.
    ///
    /// Both must measure the same channel count.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        debug_assert_eq!(self.relevant_channels, other.relevant_channels);
        self.squared_error_sum += other.squared_error_sum;
        self.sample_count += other.sample_count;
        self
    }

    /// Final RMS error: `sqrt(squared_error_sum / sample_count)`, or `0.0`
    /// if no samples were ever added.
    #[must_use]
    pub fn calculate_error(&self) -> f64 {
        if self.sample_count > 0 {
            (self.squared_error_sum / self.sample_count as f64).sqrt()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_samples_is_zero() {
        let acc = ErrorAccumulator::for_format(CompressedFormat::Bc1);
        assert_eq!(acc.calculate_error(), 0.0);
    }

    #[test]
    fn test_identical_buffers_zero_error() {
        let data = vec![200u8; 4 * 4 * 4];
        let mut acc = ErrorAccumulator::new(4);
        acc.add_samples(&data, &data);
        assert_eq!(acc.calculate_error(), 0.0);
        assert_eq!(acc.sample_count(), 64);
    }

    #[test]
    fn test_single_channel_normalization() {
        // One 4x4 image, red channel off by 255 in every pixel, BC4 measures
        // only the red channel: sum = 16, count = 64 -> sqrt(16/64) = 0.5.
        let original = vec![0u8; 64];
        let mut reconstructed = vec![0u8; 64];
        for pixel in reconstructed.chunks_exact_mut(4) {
            pixel[0] = 255;
        }

        let mut acc = ErrorAccumulator::for_format(CompressedFormat::Bc4);
        acc.add_samples(&original, &reconstructed);
        assert!((acc.calculate_error() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_alpha_ignored_for_block_formats() {
        let original = vec![0u8; 64];
        let mut reconstructed = vec![0u8; 64];
        for pixel in reconstructed.chunks_exact_mut(4) {
            pixel[3] = 255;
        }

        // BC7 measures 3 channels; an alpha-only difference is invisible.
        let mut bc7 = ErrorAccumulator::for_format(CompressedFormat::Bc7);
        bc7.add_samples(&original, &reconstructed);
        assert_eq!(bc7.calculate_error(), 0.0);

        // The passthrough format measures all 4 channels and sees it.
        let mut raw = ErrorAccumulator::for_format(CompressedFormat::Rgba8);
        raw.add_samples(&original, &reconstructed);
        assert!(raw.calculate_error() > 0.0);
    }

    #[test]
    fn test_error_never_decreases() {
        let original = vec![10u8; 64];
        let reconstructed = vec![20u8; 64];

        let mut acc = ErrorAccumulator::new(3);
        let mut previous_sum = 0.0;
        for _ in 0..5 {
            acc.add_samples(&original, &reconstructed);
            let error = acc.calculate_error();
            assert!(error >= 0.0);
            assert!(acc.squared_error_sum >= previous_sum);
            previous_sum = acc.squared_error_sum;
        }
        // Constant per-sample error: RMS is independent of repetition count.
        let expected = ((10.0 / 255.0f64).powi(2) * 3.0 / 4.0).sqrt();
        assert!((acc.calculate_error() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_merge_commutative() {
        let a_orig = vec![0u8; 64];
        let a_recon = vec![50u8; 64];
        let b_orig = vec![100u8; 32];
        let b_recon = vec![90u8; 32];

        let mut a = ErrorAccumulator::new(3);
        a.add_samples(&a_orig, &a_recon);
        let mut b = ErrorAccumulator::new(3);
        b.add_samples(&b_orig, &b_recon);

        let ab = a.clone().merge(b.clone());
        let ba = b.merge(a);
        assert_eq!(ab.calculate_error(), ba.calculate_error());
        assert_eq!(ab.sample_count(), 96);
    }

    #[test]
    #[should_panic]
    fn test_mismatched_lengths_panic() {
        let mut acc = ErrorAccumulator::new(4);
        acc.add_samples(&[0; 64], &[0; 32]);
    }
}
