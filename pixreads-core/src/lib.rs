//! Pixreads Core Library
//!
//! Row segmentation, coordinate mapping, region fragmentation, and synthetic
//! alignment-record synthesis. The core turns a two-tone raster image (or a
//! set of random regions) into fake short-read hits whose per-coordinate
//! coverage reproduces the image when rendered.

pub mod types;
pub mod pixels;
pub mod segment;
pub mod coords;
pub mod fragment;
pub mod synth;
pub mod scan;
pub mod noise;
pub mod io;

// Re-export commonly used types and functions
pub use types::{GenerateError, GenerateResult, Genome, Interval, Pixel, Protein, ReadIdGenerator, RefPos, Region};
pub use pixels::PixelGrid;
pub use segment::RowSegments;
pub use coords::ColumnScaler;
pub use fragment::{Fragment, FragmentParams};
pub use synth::{AlignmentHit, GeneratedHit, SyntheticRead};
pub use scan::{scan_image, ScanParams};
pub use noise::random_region_hits;

/// Version information for the pixreads core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
