//! Benchmark result record and human-readable rendering.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Result of one benchmark run. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Whether any per-image compression or verification failure occurred.
    pub has_errors: bool,

    /// Total uncompressed bytes of the images that compressed successfully.
    pub processed_bytes: u64,

    /// Wall time of the compress phase only, truncated to whole seconds.
    pub elapsed_seconds: u64,

    /// `processed_bytes / elapsed_seconds`, integer-truncated; `0` when the
    /// truncated elapsed time is zero.
    pub throughput_bytes_per_sec: u64,

    /// Final RMS reconstruction error over all verified images.
    pub compression_error: f64,
}

impl BenchmarkResult {
    /// Serialize the result as pretty JSON to `path`.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Compressed in {} sec\t\tThroughput {}/sec\t\tError {:.5}",
            self.elapsed_seconds,
            format_bytes(self.throughput_bytes_per_sec),
            self.compression_error
        )
    }
}

const PREFIXES: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Render a byte count with binary prefixes.
///
/// One decimal place, except when the value stays in the base unit, rounds to
/// a whole number, or reaches 100 in its unit:
///
/// ```
/// use texbench::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1536), "1.5 KB");
/// assert_eq!(format_bytes(1_048_576), "1 MB");
/// ```
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    let mut n = 0;
    let mut value = bytes as f64;
    while n < PREFIXES.len() - 1 && value >= 1024.0 {
        n += 1;
        value /= 1024.0;
    }

    if n == 0 || value >= 100.0 || value - value.trunc() < 0.05 {
        format!("{} {}", value.trunc() as u64, PREFIXES[n])
    } else {
        format!("{:.1} {}", (value * 10.0).round() / 10.0, PREFIXES[n])
    }
}
