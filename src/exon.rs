use serde::{Deserialize, Serialize};

/// A maximal run of uppercase letters in a raw sequence. The lowercase
/// gaps between regions are the introns; they are never materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExonRegion {
    pub start: usize,
    pub length: usize,
}

impl ExonRegion {
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Scans the raw (case-preserved) sequence left to right and returns
    /// every maximal uppercase run, in ascending start order. Runs
    /// separated by even a single non-uppercase character stay distinct.
    pub fn find_exons(sequence: &str) -> Vec<ExonRegion> {
        let mut ret = vec![];
        let mut run_start: Option<usize> = None;
        for (i, byte) in sequence.bytes().enumerate() {
            match (run_start, byte.is_ascii_uppercase()) {
                (None, true) => run_start = Some(i),
                (Some(start), false) => {
                    ret.push(ExonRegion {
                        start,
                        length: i - start,
                    });
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            ret.push(ExonRegion {
                start,
                length: sequence.len() - start,
            });
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_distinct_regions() {
        let regions = ExonRegion::find_exons("aaBBBccDDaa");
        assert_eq!(
            regions,
            vec![
                ExonRegion { start: 2, length: 3 },
                ExonRegion { start: 7, length: 2 },
            ]
        );
    }

    #[test]
    fn test_run_reaching_end_of_sequence() {
        let regions = ExonRegion::find_exons("ttAAGG");
        assert_eq!(regions, vec![ExonRegion { start: 2, length: 4 }]);
        assert_eq!(regions[0].end(), 6);
    }

    #[test]
    fn test_all_uppercase_is_one_region() {
        let regions = ExonRegion::find_exons("ACGT");
        assert_eq!(regions, vec![ExonRegion { start: 0, length: 4 }]);
    }

    #[test]
    fn test_all_lowercase_or_empty_has_no_regions() {
        assert!(ExonRegion::find_exons("acgtacgt").is_empty());
        assert!(ExonRegion::find_exons("").is_empty());
    }

    #[test]
    fn test_single_lowercase_separator_splits_runs() {
        let regions = ExonRegion::find_exons("AAaAA");
        assert_eq!(
            regions,
            vec![
                ExonRegion { start: 0, length: 2 },
                ExonRegion { start: 3, length: 2 },
            ]
        );
    }
}
