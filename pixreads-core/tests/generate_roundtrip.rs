//! End-to-end generation and file round-trip.

use pixreads_core::io::{read_fastq, read_hits, write_fastq, write_hits, MetadataIndex};
use pixreads_core::{
    random_region_hits, scan_image, FragmentParams, Genome, PixelGrid, Protein, ReadIdGenerator,
    ScanParams,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tempfile::TempDir;

fn test_index() -> MetadataIndex {
    MetadataIndex::from_records(
        vec![Protein {
            accession: "NP_047112.2".to_string(),
            length: 604,
            sequence: "MDNV".repeat(151),
            product: "glycoprotein".to_string(),
            genome_accession: "NC_001906.3".to_string(),
        }],
        vec![Genome {
            accession: "NC_001906.3".to_string(),
            organism: "Hendra henipavirus".to_string(),
        }],
    )
}

fn checkerboard(width: usize, height: usize) -> PixelGrid {
    let art: String = (0..height)
        .map(|y| {
            let mut line: String = (0..width)
                .map(|x| if (x / 10 + y / 2) % 2 == 0 { 'B' } else { 'W' })
                .collect();
            line.push('\n');
            line
        })
        .collect();
    PixelGrid::from_ascii(&art)
}

#[test]
fn image_scan_roundtrip() {
    let index = test_index();
    let (protein, genome) = index.find_reference("NP_047112.2").unwrap();

    let grid = checkerboard(120, 30);
    let mut ids = ReadIdGenerator::for_protein(&protein.accession);
    let mut rng = StdRng::seed_from_u64(99);
    let hits = scan_image(
        &grid,
        protein,
        genome,
        &mut ids,
        &ScanParams::default(),
        &FragmentParams::default(),
        &mut rng,
    )
    .expect("scan image");
    assert!(!hits.is_empty());

    // Ids are unique across the whole run.
    let ids: HashSet<&str> = hits.iter().map(|g| g.hit.query.as_str()).collect();
    assert_eq!(ids.len(), hits.len());

    let dir = TempDir::new().unwrap();
    let json = dir.path().join("hits.json.gz");
    let fastq = dir.path().join("reads.fastq.gz");
    write_hits(&json, &hits).expect("write hits");
    write_fastq(&fastq, &hits).expect("write fastq");

    let hits_back = read_hits(&json).expect("read hits");
    assert_eq!(hits_back.len(), hits.len());

    let reads_back = read_fastq(&fastq).expect("read fastq");
    assert_eq!(reads_back.len(), hits.len());

    for (hit, read) in hits_back.iter().zip(reads_back.iter()) {
        assert_eq!(hit.query, read.id);
        // Three bases per subject residue, quality as long as the sequence.
        assert_eq!(hit.query_length() as usize, read.sequence.len());
        assert_eq!(read.sequence.len() % 3, 0);
        assert_eq!(read.sequence.len(), read.quality.len());

        let hsp = &hit.alignments[0].hsps[0];
        assert!(hsp.sbjct_start >= 1);
        assert!(hsp.sbjct_end <= 604);
        assert_eq!(
            (hsp.sbjct_end - hsp.sbjct_start + 1) * 3,
            read.sequence.len() as u64
        );
    }
}

#[test]
fn random_regions_roundtrip() {
    let index = test_index();
    let (protein, genome) = index.find_reference("NP_047112.2").unwrap();

    let mut ids = ReadIdGenerator::for_protein(&protein.accession);
    let mut rng = StdRng::seed_from_u64(7);
    let hits = random_region_hits(
        40,
        protein,
        genome,
        &mut ids,
        &FragmentParams::default(),
        &mut rng,
    )
    .expect("random regions");
    assert!(!hits.is_empty());

    let dir = TempDir::new().unwrap();
    let json = dir.path().join("noise.json");
    write_hits(&json, &hits).expect("write hits");
    let back = read_hits(&json).expect("read hits");
    assert_eq!(back.len(), hits.len());
    assert_eq!(back[0], hits[0].hit);
}

#[test]
fn scan_structure_reproducible_across_seeds() {
    let index = test_index();
    let (protein, genome) = index.find_reference("NP_047112.2").unwrap();
    let grid = checkerboard(120, 30);

    let spans = |seed: u64| -> Vec<u64> {
        let mut ids = ReadIdGenerator::for_protein(&protein.accession);
        let mut rng = StdRng::seed_from_u64(seed);
        scan_image(
            &grid,
            protein,
            genome,
            &mut ids,
            &ScanParams::default(),
            &FragmentParams::default(),
            &mut rng,
        )
        .unwrap()
        .iter()
        .map(|g| g.hit.alignments[0].hsps[0].sbjct_start)
        .collect()
    };

    // Fragment starts follow a fixed grid per region, so the structural
    // decomposition is identical no matter the jitter seed.
    assert_eq!(spans(1), spans(2));
}
