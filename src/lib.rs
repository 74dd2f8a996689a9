//! # texbench
//!
//! Block-compression codec benchmarking library.
//!
//! texbench measures lossy image-block compressors (BC1-BC7 and friends)
//! without implementing any of them: external backends plug in behind the
//! [`Codec`] trait, a single shared [`Decoder`] round-trips every payload
//! back to RGBA8, and the benchmark reports compression throughput and RMS
//! reconstruction error over a directory of reference images.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use texbench::{Benchmark, CompressedFormat, CompressionQuality};
//!
//! let mut codec = my_backend::DdsCodec::new();
//! codec.set_quality(CompressionQuality::High);
//!
//! let bench = Benchmark::new(&codec, &my_backend::DdsDecoder);
//! let result = bench.run("./textures".as_ref(), CompressedFormat::Bc7)?;
//!
//! println!("{result}");
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`image`]: Image records, formats, and the channel-relevance policy
//! - [`codec`]: The codec/decoder abstraction boundary
//! - [`dataset`]: Reference image loading
//! - [`metrics`]: RMS reconstruction-error accumulation
//! - [`bench`]: Benchmark orchestration and the result record

pub mod bench;
pub mod codec;
pub mod dataset;
pub mod error;
pub mod image;
pub mod metrics;

// Re-export commonly used types
pub use bench::{Benchmark, BenchmarkResult, format_bytes};
pub use codec::{Codec, Decoder};
pub use dataset::load_dataset;
pub use error::{Error, Result};
pub use crate::image::{
    CompressedFormat, CompressedImage, CompressionQuality, PixelFormat, UncompressedImage,
};
pub use metrics::ErrorAccumulator;
