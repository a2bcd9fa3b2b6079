//! Protein/genome metadata index.
//!
//! A JSON metadata file holds the reference proteins and genomes; lookups
//! resolve accessions in memory. A miss is fatal and propagated, never
//! retried, since generation is one-shot.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::types::{Genome, Protein};

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Protein not found in metadata index: {0}")]
    ProteinNotFound(String),

    #[error("Genome not found in metadata index: {0}")]
    GenomeNotFound(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MetadataFile {
    proteins: Vec<Protein>,
    genomes: Vec<Genome>,
}

/// In-memory accession lookup over the metadata file contents.
#[derive(Debug, Clone)]
pub struct MetadataIndex {
    proteins: HashMap<String, Protein>,
    genomes: HashMap<String, Genome>,
}

impl MetadataIndex {
    /// Load the index from a JSON metadata file (optionally gzipped).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = super::open_input(path)?;
        let file: MetadataFile = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse metadata index: {}", path.display()))?;
        log::info!(
            "loaded metadata index with {} proteins and {} genomes from {}",
            file.proteins.len(),
            file.genomes.len(),
            path.display(),
        );
        Ok(Self::from_records(file.proteins, file.genomes))
    }

    pub fn from_records(proteins: Vec<Protein>, genomes: Vec<Genome>) -> Self {
        Self {
            proteins: proteins
                .into_iter()
                .map(|p| (p.accession.clone(), p))
                .collect(),
            genomes: genomes
                .into_iter()
                .map(|g| (g.accession.clone(), g))
                .collect(),
        }
    }

    pub fn find_protein(&self, accession: &str) -> Result<&Protein, IndexError> {
        self.proteins
            .get(accession)
            .ok_or_else(|| IndexError::ProteinNotFound(accession.to_string()))
    }

    pub fn find_genome(&self, accession: &str) -> Result<&Genome, IndexError> {
        self.genomes
            .get(accession)
            .ok_or_else(|| IndexError::GenomeNotFound(accession.to_string()))
    }

    /// Resolve a protein and its parent genome in one step.
    pub fn find_reference(&self, accession: &str) -> Result<(&Protein, &Genome), IndexError> {
        let protein = self.find_protein(accession)?;
        let genome = self.find_genome(&protein.genome_accession)?;
        Ok((protein, genome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_index() -> MetadataIndex {
        MetadataIndex::from_records(
            vec![Protein {
                accession: "NP_047110.2".to_string(),
                length: 4,
                sequence: "MADT".to_string(),
                product: "matrix protein".to_string(),
                genome_accession: "NC_001906.3".to_string(),
            }],
            vec![Genome {
                accession: "NC_001906.3".to_string(),
                organism: "Hendra henipavirus".to_string(),
            }],
        )
    }

    #[test]
    fn test_find_reference() {
        let index = sample_index();
        let (protein, genome) = index.find_reference("NP_047110.2").unwrap();
        assert_eq!(protein.product, "matrix protein");
        assert_eq!(genome.organism, "Hendra henipavirus");
    }

    #[test]
    fn test_protein_miss_is_fatal() {
        let index = sample_index();
        let err = index.find_protein("NP_MISSING.1").unwrap_err();
        assert!(matches!(err, IndexError::ProteinNotFound(_)));
        assert!(err.to_string().contains("NP_MISSING.1"));
    }

    #[test]
    fn test_genome_miss_is_fatal() {
        let index = MetadataIndex::from_records(
            vec![Protein {
                accession: "NP_1".to_string(),
                length: 1,
                sequence: "M".to_string(),
                product: "p".to_string(),
                genome_accession: "NC_GONE".to_string(),
            }],
            Vec::new(),
        );
        let err = index.find_reference("NP_1").unwrap_err();
        assert!(matches!(err, IndexError::GenomeNotFound(_)));
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
  "proteins": [
    {{
      "accession": "NP_1",
      "length": 4,
      "sequence": "MADT",
      "product": "nucleoprotein",
      "genomeAccession": "NC_1"
    }}
  ],
  "genomes": [
    {{"accession": "NC_1", "organism": "Test virus"}}
  ]
}}"#
        )
        .unwrap();

        let index = MetadataIndex::load(file.path()).unwrap();
        let (protein, genome) = index.find_reference("NP_1").unwrap();
        assert_eq!(protein.length, 4);
        assert_eq!(genome.organism, "Test virus");
    }
}
