//! FASTQ output for the synthetic reads.
//!
//! One four-line record per generated read, in generation order. Read ids
//! are unique within a run, so no deduplication is needed.

use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::synth::{GeneratedHit, SyntheticRead};

/// Write the reads backing `hits` as FASTQ. A `.gz` path gzips the output.
pub fn write_fastq<P: AsRef<Path>>(path: P, hits: &[GeneratedHit]) -> Result<()> {
    let path = path.as_ref();
    let mut out = super::open_output(path)?;
    for generated in hits {
        let read = &generated.read;
        if read.sequence.len() != read.quality.len() {
            return Err(anyhow!(
                "read {} has {} bases but {} quality characters",
                read.id,
                read.sequence.len(),
                read.quality.len()
            ));
        }
        out.write_all(read.to_fastq().as_bytes())
            .with_context(|| format!("Failed to write read {}", read.id))?;
    }
    out.flush()?;
    log::info!("wrote {} reads to {}", hits.len(), path.display());
    Ok(())
}

/// Read FASTQ records back (optionally gzipped). Supports only the
/// four-line record layout this crate writes.
pub fn read_fastq<P: AsRef<Path>>(path: P) -> Result<Vec<SyntheticRead>> {
    let path = path.as_ref();
    let reader = BufReader::new(super::open_input(path)?);
    let mut lines = reader.lines();
    let mut reads = Vec::new();

    while let Some(header) = lines.next() {
        let header = header?;
        let id = header
            .strip_prefix('@')
            .ok_or_else(|| anyhow!("Malformed FASTQ header in {}: {}", path.display(), header))?
            .to_string();
        let sequence = lines
            .next()
            .ok_or_else(|| anyhow!("Truncated FASTQ record: {}", id))??;
        let separator = lines
            .next()
            .ok_or_else(|| anyhow!("Truncated FASTQ record: {}", id))??;
        if !separator.starts_with('+') {
            return Err(anyhow!("Missing FASTQ separator for read {}", id));
        }
        let quality = lines
            .next()
            .ok_or_else(|| anyhow!("Truncated FASTQ record: {}", id))??;
        reads.push(SyntheticRead {
            id,
            sequence,
            quality,
        });
    }

    Ok(reads)
}
