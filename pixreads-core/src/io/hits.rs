//! JSON-lines hit records.
//!
//! One JSON object per line with sorted keys, the tabular-conversion format
//! the downstream pipeline reads back as alignment results.

use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::synth::{AlignmentHit, GeneratedHit};

/// Write one JSON object per hit. A `.gz` path gzips the output.
pub fn write_hits<P: AsRef<Path>>(path: P, hits: &[GeneratedHit]) -> Result<()> {
    let path = path.as_ref();
    let mut out = super::open_output(path)?;
    for generated in hits {
        serde_json::to_writer(&mut out, &generated.hit)
            .with_context(|| format!("Failed to serialize hit {}", generated.hit.query))?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    log::info!("wrote {} hits to {}", hits.len(), path.display());
    Ok(())
}

/// Read hit records back from a JSON-lines file (optionally gzipped).
pub fn read_hits<P: AsRef<Path>>(path: P) -> Result<Vec<AlignmentHit>> {
    let path = path.as_ref();
    let reader = BufReader::new(super::open_input(path)?);
    let mut hits = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let hit: AlignmentHit = serde_json::from_str(&line)
            .with_context(|| format!("Invalid hit record on line {} of {}", n + 1, path.display()))?;
        hits.push(hit);
    }
    Ok(hits)
}
