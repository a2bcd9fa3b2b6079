//! Image scanning driver: sampled pixel rows to synthetic hits.
//!
//! Rows are sampled by a modulus and scanned top to bottom, left to right.
//! Each sampled row gets a base score that decreases linearly with its row
//! index, so rows nearer the top score higher; when the hits are later
//! rendered with higher-score coverage drawn on top, the original image is
//! reconstructed.

use rand::Rng;

use crate::coords::ColumnScaler;
use crate::fragment::FragmentParams;
use crate::pixels::PixelGrid;
use crate::segment::RowSegments;
use crate::synth::{hits_for_region, GeneratedHit};
use crate::types::{GenerateError, GenerateResult, Genome, Protein, ReadIdGenerator};

/// Row scanning parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanParams {
    /// Maximum OFF-pixel gap bridged into one run
    pub tolerance: usize,
    /// Row sampling modulus; only rows whose index is divisible by this are
    /// scanned. Higher means sparser sampling.
    pub modulus: usize,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            tolerance: 1,
            modulus: 5,
        }
    }
}

/// Scan a binarized image into synthetic hits against `protein`.
///
/// The structural decomposition (which rows, intervals, and regions) is
/// deterministic given `(grid, modulus, tolerance)`; only jitter drawn from
/// `rng` varies between runs.
pub fn scan_image<R: Rng>(
    grid: &PixelGrid,
    protein: &Protein,
    genome: &Genome,
    ids: &mut ReadIdGenerator,
    scan: &ScanParams,
    fragment: &FragmentParams,
    rng: &mut R,
) -> GenerateResult<Vec<GeneratedHit>> {
    if scan.modulus < 1 {
        return Err(GenerateError::InvalidModulus);
    }
    if grid.height() == 0 {
        return Ok(Vec::new());
    }
    let scaler = ColumnScaler::new(protein.length, grid.width())?;
    let scaled_height = grid.scaled_height(protein.length) as f64;
    let n_rows = grid.height();

    log::debug!(
        "image is {}x{}, protein {} has length {}, scaled height {}",
        grid.width(),
        grid.height(),
        protein.accession,
        protein.length,
        scaled_height,
    );

    let mut hits = Vec::new();
    for (n_row, row) in grid.rows().iter().enumerate() {
        if n_row % scan.modulus != 0 {
            continue;
        }
        let base_score = ((n_rows - n_row) as f64 / n_rows as f64) * scaled_height + 5.0;
        for interval in RowSegments::new(row, scan.tolerance) {
            let region = scaler.map_interval(interval);
            log::debug!(
                "row {}: image line {} -> {} scaled to {} -> {}",
                n_row,
                interval.start,
                interval.end,
                region.start,
                region.end,
            );
            if region.is_empty() {
                // A narrow interval can collapse under truncating downscale.
                continue;
            }
            hits.extend(hits_for_region(
                protein, genome, ids, base_score, region, fragment, rng,
            )?);
        }
    }

    Ok(hits)
}
