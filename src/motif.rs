use crate::error::MotifMarkError;
use crate::iupac_code::IupacCode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which ambiguity alphabet the compiler accepts. `Full` is the 16-symbol
/// IUPAC set and is authoritative; `Minimal` keeps only the pyrimidine
/// wildcard on top of the concrete bases and exists for inputs written
/// against the narrower historical alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlphabetProfile {
    #[default]
    Full,
    Minimal,
}

impl AlphabetProfile {
    fn allows(&self, letter: u8) -> bool {
        match self {
            AlphabetProfile::Full => IupacCode::is_valid_letter(letter),
            AlphabetProfile::Minimal => matches!(
                letter.to_ascii_uppercase(),
                b'A' | b'T' | b'C' | b'G' | b'U' | b'Y'
            ),
        }
    }
}

impl FromStr for AlphabetProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(AlphabetProfile::Full),
            "minimal" => Ok(AlphabetProfile::Minimal),
            other => Err(format!(
                "Unknown alphabet profile '{other}', expected 'full' or 'minimal'"
            )),
        }
    }
}

/// One located match of a motif within a sequence. Offsets are 0-based
/// against the record's raw sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifOccurrence {
    pub motif: String,
    pub start: usize,
    pub length: usize,
}

/// A degenerate motif compiled into per-position acceptance sets.
/// Immutable once compiled; position i of `codes` governs position i of
/// any candidate window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    text: String,
    codes: Vec<IupacCode>,
}

impl Motif {
    pub fn compile(text: &str, profile: AlphabetProfile) -> Result<Self, MotifMarkError> {
        let mut codes = Vec::with_capacity(text.len());
        for symbol in text.chars() {
            if !symbol.is_ascii() || !profile.allows(symbol as u8) {
                return Err(MotifMarkError::InvalidSymbol {
                    motif: text.to_string(),
                    symbol,
                });
            }
            codes.push(IupacCode::from_letter(symbol as u8));
        }
        Ok(Self {
            text: text.to_string(),
            codes,
        })
    }

    /// The motif as written in the input list, case preserved for legend
    /// and report output.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Finds every occurrence of this motif in `sequence`, in ascending
    /// offset order. The scan is overlap-preserving: a match at offset s
    /// does not consume its window, so the next candidate offset is s+1.
    /// An empty or too-short sequence yields no occurrences.
    pub fn find_occurrences(&self, sequence: &str) -> Vec<MotifOccurrence> {
        let mut ret = vec![];
        let seq = sequence.as_bytes();
        if self.codes.is_empty() || seq.len() < self.codes.len() {
            return ret;
        }
        for start in 0..=(seq.len() - self.codes.len()) {
            let window = &seq[start..start + self.codes.len()];
            let hit = self
                .codes
                .iter()
                .zip(window.iter())
                .all(|(code, &base)| code.accepts(base));
            if hit {
                ret.push(MotifOccurrence {
                    motif: self.text.clone(),
                    start,
                    length: self.codes.len(),
                });
            }
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(text: &str) -> Motif {
        Motif::compile(text, AlphabetProfile::Full).unwrap()
    }

    #[test]
    fn test_compile_preserves_length_and_text() {
        let motif = compile("gcAUg");
        assert_eq!(motif.len(), 5);
        assert_eq!(motif.text(), "gcAUg");
    }

    #[test]
    fn test_compile_rejects_unknown_symbol() {
        let err = Motif::compile("ATXG", AlphabetProfile::Full).unwrap_err();
        match err {
            crate::error::MotifMarkError::InvalidSymbol { motif, symbol } => {
                assert_eq!(motif, "ATXG");
                assert_eq!(symbol, 'X');
            }
            other => panic!("expected InvalidSymbol, got {other:?}"),
        }
    }

    #[test]
    fn test_minimal_profile_rejects_wider_iupac() {
        assert!(Motif::compile("ATCGUY", AlphabetProfile::Minimal).is_ok());
        assert!(Motif::compile("ANT", AlphabetProfile::Minimal).is_err());
        assert!(Motif::compile("RW", AlphabetProfile::Minimal).is_err());
    }

    #[test]
    fn test_overlapping_matches_are_all_reported() {
        let motif = compile("AA");
        let hits = motif.find_occurrences("AAA");
        assert_eq!(
            hits.iter().map(|o| o.start).collect::<Vec<_>>(),
            vec![0, 1]
        );
        assert!(hits.iter().all(|o| o.length == 2));
    }

    #[test]
    fn test_pyrimidine_wildcard() {
        let motif = compile("YY");
        let hits = motif.find_occurrences("CTCG");
        // CT and TC match; CG does not (G is not a pyrimidine).
        assert_eq!(
            hits.iter().map(|o| o.start).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn test_u_is_t_equivalent_both_ways() {
        let motif = compile("GCAUG");
        assert_eq!(motif.find_occurrences("GCATG").len(), 1);
        assert_eq!(motif.find_occurrences("GCAUG").len(), 1);
        let t_motif = compile("GCATG");
        assert_eq!(t_motif.find_occurrences("GCAUG").len(), 1);
    }

    #[test]
    fn test_empty_sequence_yields_no_occurrences() {
        let motif = compile("ATCG");
        assert!(motif.find_occurrences("").is_empty());
        assert!(motif.find_occurrences("AT").is_empty());
    }

    #[test]
    fn test_every_occurrence_satisfies_its_acceptance_sets() {
        let motif = compile("NYR");
        let sequence = "ACGTACGTACGT";
        for occurrence in motif.find_occurrences(sequence) {
            let window = &sequence.as_bytes()[occurrence.start..occurrence.start + 3];
            assert!(crate::iupac_code::IupacCode::from_letter(b'N').accepts(window[0]));
            assert!(crate::iupac_code::IupacCode::from_letter(b'Y').accepts(window[1]));
            assert!(crate::iupac_code::IupacCode::from_letter(b'R').accepts(window[2]));
        }
    }

    #[test]
    fn test_alphabet_profile_from_str() {
        assert_eq!(
            "full".parse::<AlphabetProfile>().unwrap(),
            AlphabetProfile::Full
        );
        assert_eq!(
            "MINIMAL".parse::<AlphabetProfile>().unwrap(),
            AlphabetProfile::Minimal
        );
        assert!("fuzzy".parse::<AlphabetProfile>().is_err());
    }
}
