//! Random coverage regions: non-image baseline data.
//!
//! Produces the same fragment/synthesis pipeline output as image scanning,
//! but over uniformly placed random regions, to lay down background noise
//! coverage across the reference.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::fragment::FragmentParams;
use crate::synth::{hits_for_region, GeneratedHit};
use crate::types::{GenerateError, GenerateResult, Genome, Protein, ReadIdGenerator, Region};

/// Mean of the Gaussian base score drawn per region.
pub const NOISE_SCORE_MEAN: f64 = 120.0;

/// Standard deviation of the Gaussian base score drawn per region.
pub const NOISE_SCORE_SD: f64 = 5.0;

/// Each random region covers this fraction of the reference.
pub const REGION_DIVISOR: u64 = 8;

/// Generate hits for `read_count` random regions of `protein`.
///
/// Each region starts uniformly in `[0, length)` and spans an eighth of the
/// reference, clipped at the reference end. Regions that clip to nothing
/// (references shorter than the divisor) produce no hits.
pub fn random_region_hits<R: Rng>(
    read_count: usize,
    protein: &Protein,
    genome: &Genome,
    ids: &mut ReadIdGenerator,
    params: &FragmentParams,
    rng: &mut R,
) -> GenerateResult<Vec<GeneratedHit>> {
    if protein.length == 0 {
        return Err(GenerateError::EmptyReference);
    }
    let score_dist = Normal::new(NOISE_SCORE_MEAN, NOISE_SCORE_SD)
        .map_err(|e| GenerateError::InvalidParams(e.to_string()))?;

    let mut hits = Vec::new();
    for _ in 0..read_count {
        let base_score = score_dist.sample(rng);
        let start = rng.gen_range(0..protein.length);
        let end = (start + protein.length / REGION_DIVISOR).min(protein.length);
        if end <= start {
            continue;
        }
        hits.extend(hits_for_region(
            protein,
            genome,
            ids,
            base_score,
            Region { start, end },
            params,
            rng,
        )?);
    }

    log::info!(
        "generated {} noise hits from {} random regions",
        hits.len(),
        read_count,
    );
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RefPos;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference(length: RefPos) -> (Protein, Genome) {
        let protein = Protein {
            accession: "NP_TEST.1".to_string(),
            length,
            sequence: "M".repeat(length as usize),
            product: "test product".to_string(),
            genome_accession: "NC_TEST.1".to_string(),
        };
        let genome = Genome {
            accession: "NC_TEST.1".to_string(),
            organism: "Test virus".to_string(),
        };
        (protein, genome)
    }

    #[test]
    fn test_hits_stay_within_reference() {
        let (protein, genome) = reference(2244);
        let mut ids = ReadIdGenerator::for_protein(&protein.accession);
        let mut rng = StdRng::seed_from_u64(17);
        let hits = random_region_hits(
            50,
            &protein,
            &genome,
            &mut ids,
            &FragmentParams::default(),
            &mut rng,
        )
        .unwrap();
        assert!(!hits.is_empty());
        for generated in &hits {
            let hsp = &generated.hit.alignments[0].hsps[0];
            assert!(hsp.sbjct_start >= 1);
            assert!(hsp.sbjct_end <= 2244);
            assert!(hsp.sbjct_start <= hsp.sbjct_end);
        }
    }

    #[test]
    fn test_scores_cluster_around_noise_mean() {
        let (protein, genome) = reference(2244);
        let mut ids = ReadIdGenerator::for_protein(&protein.accession);
        let mut rng = StdRng::seed_from_u64(23);
        let hits = random_region_hits(
            200,
            &protein,
            &genome,
            &mut ids,
            &FragmentParams::default(),
            &mut rng,
        )
        .unwrap();
        let mean: f64 = hits
            .iter()
            .map(|g| g.hit.alignments[0].hsps[0].bits)
            .sum::<f64>()
            / hits.len() as f64;
        assert!((mean - NOISE_SCORE_MEAN).abs() < 2.0, "mean score was {}", mean);
    }

    #[test]
    fn test_short_reference_regions_clip_to_nothing() {
        // length / 8 == 0, so every region is degenerate and skipped.
        let (protein, genome) = reference(7);
        let mut ids = ReadIdGenerator::for_protein(&protein.accession);
        let mut rng = StdRng::seed_from_u64(2);
        let hits = random_region_hits(
            25,
            &protein,
            &genome,
            &mut ids,
            &FragmentParams::default(),
            &mut rng,
        )
        .unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_zero_length_reference_is_rejected() {
        let (protein, genome) = reference(0);
        let mut ids = ReadIdGenerator::for_protein(&protein.accession);
        let mut rng = StdRng::seed_from_u64(2);
        let err = random_region_hits(
            1,
            &protein,
            &genome,
            &mut ids,
            &FragmentParams::default(),
            &mut rng,
        );
        assert!(matches!(err, Err(GenerateError::EmptyReference)));
    }

    #[test]
    fn test_zero_count_yields_no_hits() {
        let (protein, genome) = reference(800);
        let mut ids = ReadIdGenerator::for_protein(&protein.accession);
        let mut rng = StdRng::seed_from_u64(2);
        let hits = random_region_hits(
            0,
            &protein,
            &genome,
            &mut ids,
            &FragmentParams::default(),
            &mut rng,
        )
        .unwrap();
        assert!(hits.is_empty());
    }
}
