use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Position in reference (protein) coordinate space.
pub type RefPos = u64;

/// Errors raised when generation contracts are violated
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Reference length must be positive")]
    EmptyReference,

    #[error("Image width must be positive")]
    EmptyImage,

    #[error("Row sampling modulus must be at least 1")]
    InvalidModulus,

    #[error("Region {start}..{end} is empty or reversed")]
    EmptyRegion { start: RefPos, end: RefPos },

    #[error("Region {start}..{end} exceeds reference length {length}")]
    RegionOutOfBounds {
        start: RefPos,
        end: RefPos,
        length: RefPos,
    },

    #[error("Protein {accession} declares length {declared} but its sequence has {actual} residues")]
    SequenceLengthMismatch {
        accession: String,
        declared: RefPos,
        actual: usize,
    },

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

pub type GenerateResult<T> = Result<T, GenerateError>;

/// Binary classification of one raster pixel. `On` is ink (a dark pixel in
/// the source image), `Off` is background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    On,
    Off,
}

impl Pixel {
    pub fn is_on(self) -> bool {
        matches!(self, Pixel::On)
    }
}

impl From<bool> for Pixel {
    fn from(on: bool) -> Self {
        if on {
            Pixel::On
        } else {
            Pixel::Off
        }
    }
}

impl From<char> for Pixel {
    fn from(c: char) -> Self {
        match c {
            'B' | 'b' => Pixel::On,
            _ => Pixel::Off,
        }
    }
}

/// Half-open range `[start, end)` of pixel columns within one image row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Half-open range `[start, end)` in reference coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: RefPos,
    pub end: RefPos,
}

impl Region {
    pub fn len(&self) -> RefPos {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check the `0 <= start < end <= length` contract against a reference.
    pub fn validate(&self, reference_length: RefPos) -> GenerateResult<()> {
        if self.is_empty() {
            return Err(GenerateError::EmptyRegion {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > reference_length {
            return Err(GenerateError::RegionOutOfBounds {
                start: self.start,
                end: self.end,
                length: reference_length,
            });
        }
        Ok(())
    }
}

/// Reference protein metadata, resolved externally and read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protein {
    pub accession: String,
    pub length: RefPos,
    pub sequence: String,
    pub product: String,
    pub genome_accession: String,
}

/// Genome metadata for the reference protein's parent genome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genome {
    pub accession: String,
    pub organism: String,
}

/// Run-scoped source of unique read ids.
///
/// Ids are `{prefix}{n}` with a 1-based counter, so they never repeat within
/// a run. One generator per run; it is the only state threaded across calls.
#[derive(Debug, Clone)]
pub struct ReadIdGenerator {
    prefix: String,
    count: u64,
}

impl ReadIdGenerator {
    pub fn with_prefix<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
            count: 0,
        }
    }

    /// The conventional prefix for reads faked against a protein accession.
    pub fn for_protein(accession: &str) -> Self {
        Self::with_prefix(format!("FAKE-{}-READ-", accession))
    }

    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}{}", self.prefix, self.count)
    }
}
