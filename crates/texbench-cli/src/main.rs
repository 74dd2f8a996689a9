//! texbench CLI - block-compression codec benchmarking.
//!
//! Loads a directory of reference textures, compresses them through the
//! selected backend, round-trips the results through the generic decoder,
//! and prints throughput and RMS reconstruction error.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use texbench::{Benchmark, CompressedFormat, CompressionQuality};

mod backends;

/// Compression implementations benchmark.
#[derive(Parser, Debug)]
#[command(name = "texbench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a directory with textures to compress
    #[arg(short, long)]
    input: PathBuf,

    /// Compression format [bc1, bc3, bc4, bc5, bc6h, bc7, rgba8]
    #[arg(short, long)]
    format: CompressedFormat,

    /// Compressor backend [image-dds]
    #[arg(short, long, default_value = "image-dds")]
    codec: String,

    /// Compression quality [low, medium, high]
    #[arg(short, long, default_value_t = CompressionQuality::Medium)]
    quality: CompressionQuality,

    /// Write the result record as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut codec = backends::make_codec(&cli.codec)
        .with_context(|| format!("available codecs: {}", backends::BACKENDS.join(", ")))?;
    codec.set_quality(cli.quality);

    let bench = Benchmark::new(codec.as_ref(), &backends::DdsDecoder);
    let result = bench
        .run(&cli.input, cli.format)
        .with_context(|| format!("benchmarking {}", cli.input.display()))?;

    if result.has_errors {
        eprintln!("Benchmark completed with errors!");
    }
    println!("{result}");

    if let Some(path) = &cli.output {
        result
            .write_json(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    Ok(())
}
