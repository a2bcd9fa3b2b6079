//! Image command: convert a raster image to synthetic hits and reads.

use anyhow::{Context, Result};
use std::path::PathBuf;

use pixreads_core::io::{write_fastq, write_hits, MetadataIndex};
use pixreads_core::{scan_image, PixelGrid, ReadIdGenerator};

use crate::config::Config;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    config: &Config,
    seed: Option<u64>,
    image_file: PathBuf,
    protein: String,
    index: PathBuf,
    json: PathBuf,
    fastq: PathBuf,
    tolerance: Option<usize>,
    modulus: Option<usize>,
) -> Result<()> {
    let index = MetadataIndex::load(&index)?;
    let (protein, genome) = index
        .find_reference(&protein)
        .with_context(|| format!("Cannot resolve protein accession {}", protein))?;

    let decoded = image::open(&image_file)
        .with_context(|| format!("Failed to decode image: {}", image_file.display()))?;
    let grid = PixelGrid::from_image(&decoded);
    log::info!(
        "decoded {} to a {}x{} binary grid",
        image_file.display(),
        grid.width(),
        grid.height(),
    );

    let scan = config.scan_params(tolerance, modulus);
    let fragment = config.fragment_params();
    let mut ids = ReadIdGenerator::for_protein(&protein.accession);
    let mut rng = super::run_rng(seed);

    let hits = scan_image(&grid, protein, genome, &mut ids, &scan, &fragment, &mut rng)
        .context("Image scan failed")?;
    log::info!(
        "generated {} hits for protein {} ({} aa)",
        hits.len(),
        protein.accession,
        protein.length,
    );

    write_hits(&json, &hits)?;
    write_fastq(&fastq, &hits)?;

    Ok(())
}
