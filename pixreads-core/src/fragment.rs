//! Region fragmentation with randomized step jitter.
//!
//! One detected region would otherwise become a single oversized synthetic
//! read; walking it in jittered steps yields several bounded-length reads and
//! avoids perfectly uniform artifacts in the rendered coverage.

use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::types::{GenerateError, GenerateResult, RefPos, Region};

/// Parameters for region fragmentation
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentParams {
    /// Nominal fragment step length in reference units
    pub step_len: RefPos,
    /// Fragments at or below this length are dropped
    pub min_len: RefPos,
    /// Half-width of the continuous uniform jitter applied to each step end
    pub end_jitter: f64,
    /// Standard deviation of the Gaussian jitter added to each fragment score
    pub score_sd: f64,
}

impl Default for FragmentParams {
    fn default() -> Self {
        Self {
            step_len: 65,
            min_len: 4,
            end_jitter: 10.0,
            score_sd: 3.0,
        }
    }
}

impl FragmentParams {
    fn validate(&self) -> GenerateResult<()> {
        if self.step_len == 0 {
            return Err(GenerateError::InvalidParams(
                "fragment step length must be positive".to_string(),
            ));
        }
        if !self.end_jitter.is_finite() || self.end_jitter < 0.0 {
            return Err(GenerateError::InvalidParams(
                "end jitter must be finite and non-negative".to_string(),
            ));
        }
        if !self.score_sd.is_finite() || self.score_sd < 0.0 {
            return Err(GenerateError::InvalidParams(
                "score standard deviation must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// One bounded-length sub-region with its jittered score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    pub region: Region,
    pub score: f64,
}

/// Split `region` into bounded-length sub-regions.
///
/// The walk advances in nominal `step_len` steps; each step's end receives
/// uniform jitter in `[-end_jitter, +end_jitter]` (truncated to an integer)
/// and is clipped to the region end. Undersized trailing steps are dropped,
/// never merged backward or retried.
pub fn fragment_region<R: Rng>(
    region: Region,
    base_score: f64,
    params: &FragmentParams,
    rng: &mut R,
) -> GenerateResult<Vec<Fragment>> {
    if region.is_empty() {
        return Err(GenerateError::EmptyRegion {
            start: region.start,
            end: region.end,
        });
    }
    params.validate()?;

    let end_jitter = Uniform::new_inclusive(-params.end_jitter, params.end_jitter);
    let score_jitter = Normal::new(0.0, params.score_sd)
        .map_err(|e| GenerateError::InvalidParams(e.to_string()))?;

    let mut fragments = Vec::new();
    let mut cursor = region.start;
    while cursor < region.end {
        let nominal = (cursor + params.step_len) as i64;
        let mut end = nominal + end_jitter.sample(rng) as i64;
        if end > region.end as i64 {
            end = region.end as i64;
        }
        if end - cursor as i64 > params.min_len as i64 {
            fragments.push(Fragment {
                region: Region {
                    start: cursor,
                    end: end as RefPos,
                },
                score: base_score + score_jitter.sample(rng),
            });
        }
        cursor += params.step_len;
    }

    Ok(fragments)
}
