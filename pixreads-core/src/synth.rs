//! Synthetic read and alignment-hit construction.
//!
//! Reads are built from fixed repeating nucleotide and quality patterns, so
//! the generated data can never be mistaken for authentic sequencing output
//! while still satisfying downstream length invariants. Hits carry fixed 100%
//! identity fields and 1-based coordinates, mirroring tabular-alignment JSON
//! conversions.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::fragment::{fragment_region, FragmentParams};
use crate::types::{
    GenerateError, GenerateResult, Genome, Protein, ReadIdGenerator, RefPos, Region,
};

/// Repeated to fill synthetic read sequences. Three bases per subject
/// residue, deliberately non-biological.
pub const READ_BASE_PATTERN: &str = "CAT";

/// Repeated to fill synthetic read quality strings, one character per base.
pub const READ_QUALITY_PATTERN: &str = "LOL";

/// A generated placeholder read backing one hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticRead {
    pub id: String,
    pub sequence: String,
    pub quality: String,
}

impl SyntheticRead {
    /// Build a read covering `residues` subject residues. Sequence and
    /// quality both have `3 * residues` characters.
    pub fn new<S: Into<String>>(id: S, residues: usize) -> Self {
        Self {
            id: id.into(),
            sequence: READ_BASE_PATTERN.repeat(residues),
            quality: READ_QUALITY_PATTERN.repeat(residues),
        }
    }

    pub fn to_fastq(&self) -> String {
        format!("@{}\n{}\n+\n{}\n", self.id, self.sequence, self.quality)
    }
}

/// One high-scoring segment pair of a hit.
///
/// Fields are declared in sorted key order so serialized records keep the
/// key ordering downstream tooling expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsp {
    pub bits: f64,
    pub btop: String,
    pub expect: f64,
    pub frame: i32,
    #[serde(rename = "identicalCount")]
    pub identical_count: u64,
    #[serde(rename = "percentIdentical")]
    pub percent_identical: f64,
    #[serde(rename = "percentPositive")]
    pub percent_positive: f64,
    #[serde(rename = "positiveCount")]
    pub positive_count: u64,
    pub query: String,
    pub query_end: u64,
    pub query_start: u64,
    pub sbjct: String,
    pub sbjct_end: RefPos,
    pub sbjct_start: RefPos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    pub hsps: Vec<Hsp>,
    pub length: RefPos,
    pub title: String,
}

/// One synthetic alignment record linking a generated read to a region of
/// the reference protein.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentHit {
    pub alignments: Vec<Alignment>,
    pub query: String,
}

impl AlignmentHit {
    /// Length of the backing read in bases, taken from the query span.
    pub fn query_length(&self) -> u64 {
        self.alignments
            .first()
            .and_then(|a| a.hsps.first())
            .map(|h| h.query_end)
            .unwrap_or(0)
    }
}

/// A hit together with the read that backs it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedHit {
    pub hit: AlignmentHit,
    pub read: SyntheticRead,
}

fn validate_reference(protein: &Protein, genome: &Genome) -> GenerateResult<()> {
    if protein.accession.is_empty() || genome.accession.is_empty() {
        return Err(GenerateError::InvalidParams(
            "protein and genome accessions must not be empty".to_string(),
        ));
    }
    if protein.sequence.len() as RefPos != protein.length {
        return Err(GenerateError::SequenceLengthMismatch {
            accession: protein.accession.clone(),
            declared: protein.length,
            actual: protein.sequence.len(),
        });
    }
    Ok(())
}

/// Build one hit and its backing read for a sub-region of the protein.
pub fn synthesize_hit(
    protein: &Protein,
    genome: &Genome,
    ids: &mut ReadIdGenerator,
    score: f64,
    region: Region,
) -> GenerateResult<GeneratedHit> {
    validate_reference(protein, genome)?;
    region.validate(protein.length)?;

    let length = (region.end - region.start) as usize;
    let read = SyntheticRead::new(ids.next_id(), length);

    let title = format!(
        "civ|GenBank|{}|GenBank|{}|{} [{}]",
        protein.accession, genome.accession, protein.product, genome.organism
    );

    let hsp = Hsp {
        bits: score,
        btop: length.to_string(),
        expect: 0.0,
        frame: 1,
        identical_count: length as u64,
        percent_identical: 100.0,
        percent_positive: 100.0,
        positive_count: length as u64,
        query: read.sequence.clone(),
        query_end: read.sequence.len() as u64,
        query_start: 1,
        sbjct: protein.sequence[region.start as usize..region.end as usize].to_string(),
        sbjct_end: region.end,
        sbjct_start: region.start + 1,
    };

    let hit = AlignmentHit {
        alignments: vec![Alignment {
            hsps: vec![hsp],
            length: protein.length,
            title,
        }],
        query: read.id.clone(),
    };

    Ok(GeneratedHit { hit, read })
}

/// Fragment a region and synthesize one hit per surviving fragment.
pub fn hits_for_region<R: Rng>(
    protein: &Protein,
    genome: &Genome,
    ids: &mut ReadIdGenerator,
    base_score: f64,
    region: Region,
    params: &FragmentParams,
    rng: &mut R,
) -> GenerateResult<Vec<GeneratedHit>> {
    let fragments = fragment_region(region, base_score, params, rng)?;
    fragments
        .into_iter()
        .map(|fragment| synthesize_hit(protein, genome, ids, fragment.score, fragment.region))
        .collect()
}
