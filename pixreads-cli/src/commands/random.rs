//! Random command: baseline coverage with no image.

use anyhow::{Context, Result};
use std::path::PathBuf;

use pixreads_core::io::{write_fastq, write_hits, MetadataIndex};
use pixreads_core::{random_region_hits, ReadIdGenerator};

use crate::config::Config;

pub fn execute(
    config: &Config,
    seed: Option<u64>,
    protein: String,
    index: PathBuf,
    json: PathBuf,
    fastq: PathBuf,
    read_count: usize,
) -> Result<()> {
    let index = MetadataIndex::load(&index)?;
    let (protein, genome) = index
        .find_reference(&protein)
        .with_context(|| format!("Cannot resolve protein accession {}", protein))?;

    let fragment = config.fragment_params();
    let mut ids = ReadIdGenerator::for_protein(&protein.accession);
    let mut rng = super::run_rng(seed);

    let hits = random_region_hits(read_count, protein, genome, &mut ids, &fragment, &mut rng)
        .context("Random region generation failed")?;
    log::info!(
        "generated {} hits from {} random regions of protein {}",
        hits.len(),
        read_count,
        protein.accession,
    );

    write_hits(&json, &hits)?;
    write_fastq(&fastq, &hits)?;

    Ok(())
}
