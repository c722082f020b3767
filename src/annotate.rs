use crate::error::MotifMarkError;
use crate::gene_record::GeneRecord;
use crate::motif::{AlphabetProfile, Motif};
use crate::palette::ColorAssignment;
use bio::io::fasta;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// The finished output of one annotation run: every record annotated, plus
/// the color assignment the renderer and legend share.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationRun {
    pub records: Vec<GeneRecord>,
    pub colors: ColorAssignment,
}

/// Compiles every motif in list order, failing on the first invalid one
/// before any sequence is scanned.
pub fn compile_motifs(
    motif_texts: &[String],
    profile: AlphabetProfile,
) -> Result<Vec<Motif>, MotifMarkError> {
    motif_texts
        .iter()
        .map(|text| Motif::compile(text, profile))
        .collect()
}

/// Builds one annotated record per input record, in input order. Motif
/// compilation happens once up front; a bad motif aborts the run before
/// any record is touched. Each record scan only reads the shared compiled
/// motifs, so records are processed in parallel.
pub fn annotate_records(
    records: &[(String, String)],
    motif_texts: &[String],
    profile: AlphabetProfile,
) -> Result<Vec<GeneRecord>, MotifMarkError> {
    let motifs = compile_motifs(motif_texts, profile)?;
    Ok(records
        .par_iter()
        .map(|(identifier, sequence)| GeneRecord::new(identifier, sequence, &motifs))
        .collect())
}

/// Reads the motif list: one motif per line, file order preserved. No
/// blank-line or comment handling; every line is a motif.
pub fn read_motif_list(path: &str) -> Result<Vec<String>, MotifMarkError> {
    let file = File::open(path)?;
    let mut ret = vec![];
    for line in BufReader::new(file).lines() {
        ret.push(line?);
    }
    Ok(ret)
}

/// Reads FASTA records as (identifier, raw sequence) pairs. The identifier
/// is the full header after the `>` marker; sequence case comes through
/// verbatim since it carries the exon/intron distinction.
pub fn read_fasta_records(path: &str) -> Result<Vec<(String, String)>, MotifMarkError> {
    let file = File::open(path)?;
    let mut ret = vec![];
    for record in fasta::Reader::new(file).records() {
        let record = record.map_err(|e| MotifMarkError::MalformedRecord(e.to_string()))?;
        record
            .check()
            .map_err(|e| MotifMarkError::MalformedRecord(e.to_string()))?;
        let identifier = match record.desc() {
            Some(desc) => format!("{} {}", record.id(), desc),
            None => record.id().to_string(),
        };
        let sequence = String::from_utf8(record.seq().to_vec())
            .map_err(|e| MotifMarkError::MalformedRecord(e.to_string()))?;
        ret.push((identifier, sequence));
    }
    Ok(ret)
}

/// Whole-run entry point: motif list + FASTA in, annotated records and
/// color assignment out. Any failure aborts the run; there is no partial
/// result.
pub fn annotate_files(
    fasta_path: &str,
    motif_path: &str,
    profile: AlphabetProfile,
) -> Result<AnnotationRun, MotifMarkError> {
    let motif_texts = read_motif_list(motif_path)?;
    let colors = ColorAssignment::with_default_palette(&motif_texts)?;
    let records = read_fasta_records(fasta_path)?;
    let records = annotate_records(&records, &motif_texts, profile)?;
    Ok(AnnotationRun { records, colors })
}
