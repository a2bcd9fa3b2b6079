//! Record and metadata I/O for pixreads.
//!
//! Writers serialize the generated hit/read sequence into the JSON-lines and
//! FASTQ formats downstream tooling consumes; the index resolves protein and
//! genome accessions from a JSON metadata file. Paths ending in `.gz` are
//! transparently gzip-compressed.

pub mod index;
pub mod hits;
pub mod fastq;

pub use index::{IndexError, MetadataIndex};
pub use hits::{read_hits, write_hits};
pub use fastq::{read_fastq, write_fastq};

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}

/// Open a buffered output stream, gzip-compressed for `.gz` paths.
pub(crate) fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(if is_gzip(path) {
        Box::new(BufWriter::new(GzEncoder::new(file, Compression::default())))
    } else {
        Box::new(BufWriter::new(file))
    })
}

/// Open a buffered input stream, gzip-decompressed for `.gz` paths.
pub(crate) fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    Ok(if is_gzip(path) {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    })
}
