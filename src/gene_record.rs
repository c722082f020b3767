use crate::exon::ExonRegion;
use crate::motif::{Motif, MotifOccurrence};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref GENE_NAME: Regex = Regex::new("^([A-Z0-9]+)").unwrap();
    static ref CHROMOSOME: Regex = Regex::new("chr([0-9]+)").unwrap();
    static ref POSITION: Regex = Regex::new(":([0-9]+-[0-9]+)").unwrap();
}

/// One annotated sequence record: identity, the raw sequence with its
/// case preserved, and the motif/exon annotations found in it. Built in
/// a single pass and immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneRecord {
    identifier: String,
    sequence: String,
    length: usize,
    occurrences: Vec<MotifOccurrence>,
    exon_regions: Vec<ExonRegion>,
}

impl GeneRecord {
    /// Scans every compiled motif in input order, keeping each motif's
    /// occurrences contiguous (the motif-list order is the legend order),
    /// then segments exons once.
    pub fn new(identifier: &str, sequence: &str, motifs: &[Motif]) -> Self {
        let occurrences = motifs
            .iter()
            .flat_map(|motif| motif.find_occurrences(sequence))
            .collect();
        let exon_regions = ExonRegion::find_exons(sequence);
        Self {
            identifier: identifier.to_string(),
            sequence: sequence.to_string(),
            length: sequence.len(),
            occurrences,
            exon_regions,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn occurrences(&self) -> &[MotifOccurrence] {
        &self.occurrences
    }

    pub fn exon_regions(&self) -> &[ExonRegion] {
        &self.exon_regions
    }

    /// Human-readable heading for the diagram. Headers of the form
    /// `GENE chrN:START-END` become a gene/chromosome/position line;
    /// anything else falls back to the identifier as-is.
    pub fn display_title(&self) -> String {
        let gene = GENE_NAME
            .captures(&self.identifier)
            .map(|c| c[1].to_string());
        let chromosome = CHROMOSOME
            .captures(&self.identifier)
            .map(|c| c[1].to_string());
        let position = POSITION
            .captures(&self.identifier)
            .map(|c| c[1].to_string());
        match (gene, chromosome, position) {
            (Some(gene), Some(chromosome), Some(position)) => {
                format!("Gene: {gene}, Chromosome: {chromosome}, Nucleotide Position: {position}")
            }
            _ => self.identifier.clone(),
        }
    }
}
